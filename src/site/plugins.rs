//! Plugins active for one environment, with their typed options.

use anyhow::Result;
use rustc_hash::FxHashSet;
use serde::Serialize;

use crate::blog::Blog;
use crate::config::{
    AssetHashConfig, I18nConfig, LiveReloadConfig, MinifyCssConfig, MinifyJavascriptConfig,
    NavTreeConfig, PluginName, SiteConfig, SyntaxConfig,
};
use crate::core::Environment;

/// An activated plugin carrying its options.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "name", content = "options")]
pub enum Plugin {
    #[serde(rename = "navtree")]
    NavTree(NavTreeConfig),
    #[serde(rename = "syntax")]
    Syntax(SyntaxConfig),
    #[serde(rename = "i18n")]
    I18n(I18nConfig),
    #[serde(rename = "blog")]
    Blog(Blog),
    #[serde(rename = "minify_css")]
    MinifyCss(MinifyCssConfig),
    #[serde(rename = "minify_javascript")]
    MinifyJavascript(MinifyJavascriptConfig),
    #[serde(rename = "asset_hash")]
    AssetHash(AssetHashConfig),
    #[serde(rename = "livereload")]
    LiveReload(LiveReloadConfig),
}

impl Plugin {
    fn from_config(name: PluginName, config: &SiteConfig) -> Result<Self> {
        let plugins = &config.plugins;
        Ok(match name {
            PluginName::NavTree => Self::NavTree(plugins.navtree.clone()),
            PluginName::Syntax => Self::Syntax(plugins.syntax.clone()),
            PluginName::I18n => Self::I18n(plugins.i18n.clone()),
            PluginName::Blog => Self::Blog(Blog::new(&plugins.blog)?),
            PluginName::MinifyCss => Self::MinifyCss(plugins.minify_css.clone()),
            PluginName::MinifyJavascript => {
                Self::MinifyJavascript(plugins.minify_javascript.clone())
            }
            PluginName::AssetHash => Self::AssetHash(plugins.asset_hash.clone()),
            PluginName::LiveReload => Self::LiveReload(plugins.livereload.clone()),
        })
    }

    pub const fn name(&self) -> PluginName {
        match self {
            Self::NavTree(_) => PluginName::NavTree,
            Self::Syntax(_) => PluginName::Syntax,
            Self::I18n(_) => PluginName::I18n,
            Self::Blog(_) => PluginName::Blog,
            Self::MinifyCss(_) => PluginName::MinifyCss,
            Self::MinifyJavascript(_) => PluginName::MinifyJavascript,
            Self::AssetHash(_) => PluginName::AssetHash,
            Self::LiveReload(_) => PluginName::LiveReload,
        }
    }
}

/// Global activations followed by the selected environment's, in order,
/// without repeats.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct ActivePlugins {
    plugins: Vec<Plugin>,
}

macro_rules! accessor {
    ($fn:ident, $variant:ident, $ty:ty) => {
        pub fn $fn(&self) -> Option<&$ty> {
            self.plugins.iter().find_map(|p| match p {
                Plugin::$variant(options) => Some(options),
                _ => None,
            })
        }
    };
}

impl ActivePlugins {
    pub fn resolve(config: &SiteConfig, env: Environment) -> Result<Self> {
        let mut seen = FxHashSet::default();
        let plugins = config
            .activate
            .iter()
            .chain(&config.environment.get(env).activate)
            .filter(|name| seen.insert(**name))
            .map(|name| Plugin::from_config(*name, config))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { plugins })
    }

    pub fn is_active(&self, name: PluginName) -> bool {
        self.plugins.iter().any(|p| p.name() == name)
    }

    pub fn names(&self) -> impl Iterator<Item = PluginName> + '_ {
        self.plugins.iter().map(Plugin::name)
    }

    accessor!(navtree, NavTree, NavTreeConfig);
    accessor!(syntax, Syntax, SyntaxConfig);
    accessor!(i18n, I18n, I18nConfig);
    accessor!(blog, Blog, Blog);
    accessor!(minify_css, MinifyCss, MinifyCssConfig);
    accessor!(minify_javascript, MinifyJavascript, MinifyJavascriptConfig);
    accessor!(asset_hash, AssetHash, AssetHashConfig);
    accessor!(livereload, LiveReload, LiveReloadConfig);
}
