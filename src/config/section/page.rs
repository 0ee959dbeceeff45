//! `[[page]]` per-page layout rules.
//!
//! Rules are matched against a page's output path (site-absolute, e.g.
//! `/sitemap.xml`). The first matching rule wins.
//!
//! # Example
//!
//! ```toml
//! [[page]]
//! glob = "/*.xml"
//! layout = false        # render without a layout wrapper
//!
//! [[page]]
//! glob = "/updates/*"
//! layout = "post"       # render with a named layout
//! ```

use globset::Glob;
use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

/// Layout setting of a page rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LayoutSetting {
    /// `false` disables the layout, `true` keeps the default one.
    Enabled(bool),
    /// Render with the named layout from the theme's layouts dir.
    Named(String),
}

/// A single `page(glob, layout: ...)` rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRule {
    pub glob: String,
    pub layout: LayoutSetting,
}

impl PageRule {
    pub fn new(glob: impl Into<String>, layout: LayoutSetting) -> Self {
        Self {
            glob: glob.into(),
            layout,
        }
    }

    /// Rules shipped by default: generated feeds and text files get no layout.
    pub fn defaults() -> Vec<Self> {
        ["/*.xml", "/*.json", "/*.txt"]
            .into_iter()
            .map(|glob| Self::new(glob, LayoutSetting::Enabled(false)))
            .collect()
    }
}

const FIELD: FieldPath = FieldPath::new("page");

/// Validate every rule's glob and layout name.
pub fn validate_rules(rules: &[PageRule], diag: &mut ConfigDiagnostics) {
    for (idx, rule) in rules.iter().enumerate() {
        if !rule.glob.starts_with('/') {
            diag.error_with_hint(
                FIELD,
                format!("[{idx}] glob '{}' must be site-absolute", rule.glob),
                format!("use '/{}'", rule.glob),
            );
        }
        if let Err(err) = Glob::new(&rule.glob) {
            diag.error(FIELD, format!("[{idx}] invalid glob '{}': {err}", rule.glob));
        }
        if let LayoutSetting::Named(name) = &rule.layout
            && name.trim().is_empty()
        {
            diag.error(FIELD, format!("[{idx}] layout name must not be empty"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_default_rules() {
        let config = test_parse_config("");
        let globs: Vec<_> = config.page.iter().map(|r| r.glob.as_str()).collect();
        assert_eq!(globs, ["/*.xml", "/*.json", "/*.txt"]);
        assert!(
            config
                .page
                .iter()
                .all(|r| r.layout == LayoutSetting::Enabled(false))
        );
    }

    #[test]
    fn test_parse_named_and_bool_layouts() {
        let config = test_parse_config(
            "[[page]]\nglob = \"/*.xml\"\nlayout = false\n\n[[page]]\nglob = \"/updates/*\"\nlayout = \"post\"",
        );
        assert_eq!(config.page.len(), 2);
        assert_eq!(config.page[0].layout, LayoutSetting::Enabled(false));
        assert_eq!(config.page[1].layout, LayoutSetting::Named("post".into()));
    }

    #[test]
    fn test_validate_rules() {
        let mut diag = ConfigDiagnostics::new();
        validate_rules(&PageRule::defaults(), &mut diag);
        assert!(!diag.has_errors());

        let rules = vec![
            PageRule::new("*.xml", LayoutSetting::Enabled(false)),
            PageRule::new("/[oops", LayoutSetting::Enabled(false)),
            PageRule::new("/a/*", LayoutSetting::Named(" ".into())),
        ];
        let mut diag = ConfigDiagnostics::new();
        validate_rules(&rules, &mut diag);
        assert_eq!(diag.len(), 3);
    }
}
