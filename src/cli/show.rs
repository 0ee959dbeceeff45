//! `show`: print the resolved site as JSON on stdout.

use anyhow::Result;
use pulldown_cmark::Options;
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::config::{HelpersConfig, I18nConfig, MarkdownConfig, PageRule, SiteConfig};
use crate::core::{Environment, ThemePaths};
use crate::site::{ActivePlugins, Site};

#[derive(Debug, Serialize)]
struct IgnoreView<'a> {
    root: PathBuf,
    active: &'a str,
}

/// Parser extensions reported under `markdown_extensions`.
const MARKDOWN_EXTENSIONS: [(&str, Options); 4] = [
    ("smart_punctuation", Options::ENABLE_SMART_PUNCTUATION),
    ("tables", Options::ENABLE_TABLES),
    ("footnotes", Options::ENABLE_FOOTNOTES),
    ("strikethrough", Options::ENABLE_STRIKETHROUGH),
];

#[derive(Debug, Serialize)]
struct LocaleView<'a> {
    locale: &'a str,
    prefix: String,
}

/// Default locale first, then the other enabled ones.
fn locale_views(i18n: &I18nConfig) -> Vec<LocaleView<'_>> {
    std::iter::once(&i18n.default_locale)
        .chain(i18n.locales.iter().filter(|l| **l != i18n.default_locale))
        .map(|locale| LocaleView {
            locale,
            prefix: i18n.path_prefix(locale),
        })
        .collect()
}

#[derive(Debug, Serialize)]
struct LiveReloadView {
    endpoint: String,
    watch: Vec<PathBuf>,
}

#[derive(Debug, Serialize)]
struct SiteView<'a> {
    env: Environment,
    root: &'a Path,
    source: &'a Path,
    theme: &'a ThemePaths,
    ignore: IgnoreView<'a>,
    sitemap_matchers: Vec<&'static str>,
    page: &'a [PageRule],
    helpers: &'a HelpersConfig,
    helper_files: Vec<PathBuf>,
    markdown: &'a MarkdownConfig,
    markdown_extensions: Vec<&'static str>,
    plugins: &'a ActivePlugins,
    #[serde(skip_serializing_if = "Option::is_none")]
    locales: Option<Vec<LocaleView<'a>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    livereload: Option<LiveReloadView>,
}

impl<'a> SiteView<'a> {
    fn new(site: &'a Site) -> Self {
        let config = site.config();
        Self {
            env: site.env(),
            root: config.get_root(),
            source: site.source(),
            theme: site.theme(),
            ignore: IgnoreView {
                root: site.ignore_filter().root(),
                active: site.ignore_filter().active(),
            },
            sitemap_matchers: site.sitemap_matchers().names().collect(),
            page: &config.page,
            helpers: &config.helpers,
            helper_files: site.helper_modules(),
            markdown: &config.markdown,
            markdown_extensions: MARKDOWN_EXTENSIONS
                .iter()
                .filter(|(_, flag)| site.markdown_options().contains(*flag))
                .map(|(name, _)| *name)
                .collect(),
            plugins: site.plugins(),
            locales: site.plugins().i18n().map(locale_views),
            livereload: site.plugins().livereload().map(|lr| LiveReloadView {
                endpoint: lr.endpoint(),
                watch: site.watch_roots(),
            }),
        }
    }
}

/// Render the site for `env` as JSON.
pub fn render_site(config: &SiteConfig, env: Environment, pretty: bool) -> Result<String> {
    let site = Site::new(config.clone(), env)?;
    let view = SiteView::new(&site);
    let json = if pretty {
        serde_json::to_string_pretty(&view)?
    } else {
        serde_json::to_string(&view)?
    };
    Ok(json)
}

pub fn show_site(config: &SiteConfig, env: Environment, pretty: bool) -> Result<()> {
    println!("{}", render_site(config, env, pretty)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use serde_json::Value;

    fn render(toml: &str, env: Environment) -> Value {
        let json = render_site(&test_parse_config(toml), env, false).unwrap();
        serde_json::from_str(&json).unwrap()
    }

    #[test]
    fn test_show_build() {
        let json = render("", Environment::Build);
        assert_eq!(json["env"], "build");
        assert_eq!(json["theme"]["name"], "epsilon");
        assert_eq!(json["theme"]["layouts"], "themes/epsilon/layouts");
        assert_eq!(json["ignore"]["active"], "epsilon");
        assert_eq!(json["sitemap_matchers"][0], "layout");
        assert_eq!(json["page"][0]["glob"], "/*.xml");
        assert_eq!(json["page"][0]["layout"], false);
        assert_eq!(json["markdown"]["engine"], "pulldown-cmark");
        assert_eq!(json["markdown_extensions"], serde_json::json!(["smart_punctuation", "tables"]));
        assert_eq!(json["locales"][0]["locale"], "en");
        assert_eq!(json["locales"][0]["prefix"], "/");
        assert!(json.get("livereload").is_none());

        let names: Vec<_> = json["plugins"]
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["name"].as_str().unwrap())
            .collect();
        assert!(names.contains(&"asset_hash"));
        assert!(!names.contains(&"livereload"));
    }

    #[test]
    fn test_show_development() {
        let json = render("[plugins.livereload]\nport = 4000", Environment::Development);
        assert_eq!(
            json["livereload"]["endpoint"],
            "ws://127.0.0.1:4000/livereload"
        );
        let blog = json["plugins"]
            .as_array()
            .unwrap()
            .iter()
            .find(|p| p["name"] == "blog")
            .unwrap();
        assert_eq!(
            blog["options"]["permalink"],
            "{year}-{month}-{day}-{title}.html"
        );
    }

    #[test]
    fn test_markdown_extensions_follow_config() {
        let json = render(
            "[markdown]\nsmartypants = false\nfootnotes = true\nstrikethrough = true",
            Environment::Build,
        );
        assert_eq!(
            json["markdown_extensions"],
            serde_json::json!(["tables", "footnotes", "strikethrough"])
        );
    }

    #[test]
    fn test_locale_prefixes() {
        let json = render(
            "[plugins.i18n]\ndefault_locale = \"de\"\nlocales = [\"en\", \"de\"]\nmount_at_root = false",
            Environment::Build,
        );
        let locales: Vec<_> = json["locales"]
            .as_array()
            .unwrap()
            .iter()
            .map(|l| (l["locale"].as_str().unwrap(), l["prefix"].as_str().unwrap()))
            .collect();
        assert_eq!(locales, [("de", "/de/"), ("en", "/en/")]);

        let json = render("activate = []\n[environment.build]\nactivate = []", Environment::Build);
        assert!(json.get("locales").is_none());
    }

    #[test]
    fn test_pretty_output() {
        let config = test_parse_config("");
        let pretty = render_site(&config, Environment::Build, true).unwrap();
        assert!(pretty.contains("\n  \"env\": \"build\""));
    }
}
