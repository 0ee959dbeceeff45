//! `[plugins.*]` option sections and plugin names.
//!
//! Every plugin has one typed option struct. Options are always parsed and
//! validated; whether a plugin runs is decided by the top-level `activate`
//! list and the `[environment.*]` lists.
//!
//! | Name                | Options section                | Default scope |
//! |---------------------|--------------------------------|---------------|
//! | `navtree`           | `[plugins.navtree]`            | global        |
//! | `syntax`            | `[plugins.syntax]`             | global        |
//! | `i18n`              | `[plugins.i18n]`               | global        |
//! | `blog`              | `[plugins.blog]`               | global        |
//! | `minify_css`        | `[plugins.minify_css]`         | build         |
//! | `minify_javascript` | `[plugins.minify_javascript]`  | build         |
//! | `asset_hash`        | `[plugins.asset_hash]`         | build         |
//! | `livereload`        | `[plugins.livereload]`         | development   |

mod assets;
mod blog;
mod i18n;
mod livereload;
mod navtree;
mod syntax;

pub use assets::{AssetHashConfig, MinifyCssConfig, MinifyJavascriptConfig};
pub use blog::BlogConfig;
pub use i18n::I18nConfig;
pub use livereload::LiveReloadConfig;
pub use navtree::NavTreeConfig;
pub use syntax::SyntaxConfig;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::ConfigDiagnostics;

/// Name of an activatable plugin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PluginName {
    #[serde(rename = "navtree")]
    NavTree,
    #[serde(rename = "syntax")]
    Syntax,
    #[serde(rename = "i18n")]
    I18n,
    #[serde(rename = "blog")]
    Blog,
    #[serde(rename = "minify_css")]
    MinifyCss,
    #[serde(rename = "minify_javascript")]
    MinifyJavascript,
    #[serde(rename = "asset_hash")]
    AssetHash,
    #[serde(rename = "livereload")]
    LiveReload,
}

impl PluginName {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NavTree => "navtree",
            Self::Syntax => "syntax",
            Self::I18n => "i18n",
            Self::Blog => "blog",
            Self::MinifyCss => "minify_css",
            Self::MinifyJavascript => "minify_javascript",
            Self::AssetHash => "asset_hash",
            Self::LiveReload => "livereload",
        }
    }
}

impl fmt::Display for PluginName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options for every known plugin.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginsConfig {
    pub navtree: NavTreeConfig,
    pub syntax: SyntaxConfig,
    pub i18n: I18nConfig,
    pub blog: BlogConfig,
    pub minify_css: MinifyCssConfig,
    pub minify_javascript: MinifyJavascriptConfig,
    pub asset_hash: AssetHashConfig,
    pub livereload: LiveReloadConfig,
}

impl PluginsConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        self.navtree.validate(diag);
        self.syntax.validate(diag);
        self.i18n.validate(diag);
        self.blog.validate(diag);
        self.minify_css.validate(diag);
        self.minify_javascript.validate(diag);
        self.asset_hash.validate(diag);
        self.livereload.validate(diag);
    }
}
