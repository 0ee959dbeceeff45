//! The resolved, immutable site built from a validated config.
//!
//! [`Site`] bundles everything derived from `site.toml` for one
//! environment: theme paths, the theme ignore filter, sitemap matchers,
//! compiled layout rules and the active plugins. Build it once and pass
//! it by reference; a config change means building a new one.

mod plugins;

pub use plugins::ActivePlugins;

use anyhow::{Context, Result};
use pulldown_cmark::Options;
use std::path::{Path, PathBuf};

use crate::config::{PluginName, SiteConfig};
use crate::core::{
    Environment, LayoutChoice, LayoutFileMatcher, LayoutRules, PathMatcher, SitemapMatchers,
    ThemeIgnoreFilter, ThemePaths,
};

/// Name the layout-file matcher is registered under.
pub const LAYOUT_MATCHER: &str = "layout";

#[derive(Debug)]
pub struct Site {
    config: SiteConfig,
    env: Environment,
    theme: ThemePaths,
    ignore: ThemeIgnoreFilter,
    sitemap: SitemapMatchers,
    layouts: LayoutRules,
    plugins: ActivePlugins,
}

impl Site {
    /// Derive the site for `env`. Expects a config that passed validation.
    pub fn new(config: SiteConfig, env: Environment) -> Result<Self> {
        let theme = ThemePaths::resolve(&config.theme.root, &config.theme.name);
        let ignore = ThemeIgnoreFilter::new(&config.theme.root, &config.theme.name);

        let mut sitemap = SitemapMatchers::new();
        sitemap.register(LAYOUT_MATCHER, LayoutFileMatcher::new(&config.theme.root));

        let layouts = LayoutRules::compile(&config.page).context("failed to compile [[page]] rules")?;
        let plugins = ActivePlugins::resolve(&config, env)
            .with_context(|| format!("failed to activate plugins for {env}"))?;

        Ok(Self {
            config,
            env,
            theme,
            ignore,
            sitemap,
            layouts,
            plugins,
        })
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn env(&self) -> Environment {
        self.env
    }

    /// Absolute content source directory.
    pub fn source(&self) -> &Path {
        &self.config.source
    }

    pub fn theme(&self) -> &ThemePaths {
        &self.theme
    }

    pub fn ignore_filter(&self) -> &ThemeIgnoreFilter {
        &self.ignore
    }

    pub fn sitemap_matchers(&self) -> &SitemapMatchers {
        &self.sitemap
    }

    pub fn plugins(&self) -> &ActivePlugins {
        &self.plugins
    }

    /// Whether `rel` is excluded from the build by the theme ignore filter.
    pub fn is_ignored(&self, rel: &Path) -> bool {
        self.ignore.matches(rel)
    }

    /// Layout for a site-absolute output path such as `/index.html`.
    pub fn layout_for(&self, output: &str) -> LayoutChoice {
        self.layouts.resolve(output)
    }

    /// Parser options for markdown pages.
    pub fn markdown_options(&self) -> Options {
        self.config.markdown.parser_options()
    }

    /// Helper module files that exist, in registration order.
    pub fn helper_modules(&self) -> Vec<PathBuf> {
        let helpers = &self.config.helpers;
        helpers
            .modules
            .iter()
            .filter_map(|name| helpers.find_module(name))
            .collect()
    }

    /// Directories live reload watches, or nothing when it is inactive.
    ///
    /// Covers the source dir, the helpers dir, and the locales dir when
    /// i18n is active. Paths that do not exist are skipped.
    pub fn watch_roots(&self) -> Vec<PathBuf> {
        if !self.plugins.is_active(PluginName::LiveReload) {
            return Vec::new();
        }

        let mut roots = vec![self.config.source.clone(), self.config.helpers.dir.clone()];
        if let Some(i18n) = self.plugins.i18n() {
            roots.push(self.config.get_root().join(&i18n.locales_dir));
        }
        roots.retain(|p| p.is_dir());
        roots
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use std::fs;
    use tempfile::TempDir;

    fn site(toml: &str, env: Environment) -> Site {
        Site::new(test_parse_config(toml), env).unwrap()
    }

    #[test]
    fn test_theme_paths_follow_config() {
        let site = site("[theme]\nname = \"glide\"", Environment::Development);
        assert_eq!(site.theme().stylesheets, Path::new("themes/glide/stylesheets"));
        assert!(site.is_ignored(Path::new("themes/epsilon/layouts/layout.haml")));
        assert!(!site.is_ignored(Path::new("themes/glide/layouts/layout.haml")));
    }

    #[test]
    fn test_layout_matcher_registered() {
        let site = site("", Environment::Development);
        assert_eq!(site.sitemap_matchers().names().collect::<Vec<_>>(), [LAYOUT_MATCHER]);
        assert_eq!(
            site.sitemap_matchers().matching(Path::new("layout.html")),
            Some(LAYOUT_MATCHER)
        );
    }

    #[test]
    fn test_environment_toggles() {
        let build = site("", Environment::Build);
        for name in [PluginName::MinifyCss, PluginName::MinifyJavascript, PluginName::AssetHash] {
            assert!(build.plugins().is_active(name));
        }
        assert!(!build.plugins().is_active(PluginName::LiveReload));

        let dev = site("", Environment::Development);
        assert!(dev.plugins().is_active(PluginName::LiveReload));
        assert!(!dev.plugins().is_active(PluginName::AssetHash));
        assert_eq!(dev.env(), Environment::Development);
    }

    #[test]
    fn test_layout_for() {
        let site = site("", Environment::Build);
        assert_eq!(site.layout_for("/sitemap.xml"), LayoutChoice::None);
        assert_eq!(site.layout_for("/index.html"), LayoutChoice::Default);
    }

    #[test]
    fn test_markdown_options() {
        let site = site("[markdown]\nsmartypants = false", Environment::Build);
        assert!(!site.markdown_options().contains(Options::ENABLE_SMART_PUNCTUATION));
        assert!(site.markdown_options().contains(Options::ENABLE_TABLES));
    }

    #[test]
    fn test_invalid_blog_pattern_fails() {
        let config = test_parse_config("[plugins.blog]\npermalink = \"{slug}.html\"");
        assert!(Site::new(config, Environment::Build).is_err());
    }

    #[test]
    fn test_watch_roots_and_helpers() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().to_path_buf();
        fs::create_dir_all(root.join("source")).unwrap();
        fs::create_dir_all(root.join("lib")).unwrap();
        fs::create_dir_all(root.join("locales")).unwrap();
        fs::write(root.join("lib/custom_helpers.rhai"), "").unwrap();

        let mut config = test_parse_config("");
        config.root = root.clone();
        config.source = root.join("source");
        config.helpers.dir = root.join("lib");

        let dev = Site::new(config.clone(), Environment::Development).unwrap();
        assert_eq!(
            dev.watch_roots(),
            [root.join("source"), root.join("lib"), root.join("locales")]
        );
        assert_eq!(dev.helper_modules(), [root.join("lib/custom_helpers.rhai")]);

        let build = Site::new(config, Environment::Build).unwrap();
        assert!(build.watch_roots().is_empty());
    }
}
