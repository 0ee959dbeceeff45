//! `[plugins.i18n]` internationalization options.
//!
//! Only the default locale is required; `locales` empty means every
//! locale file found in `locales_dir`.
//!
//! ```toml
//! [plugins.i18n]
//! default_locale = "en"
//! locales = ["en", "de"]
//! locales_dir = "locales"
//! mount_at_root = true
//! ```

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::LazyLock;

use crate::config::{ConfigDiagnostics, FieldPath};

static LOCALE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]{2,3}(-[A-Za-z0-9]{2,8})*$").unwrap());

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct I18nConfig {
    pub default_locale: String,
    /// Enabled locales. Empty means all locales found on disk.
    pub locales: Vec<String>,
    /// Locale files directory, relative to site root.
    pub locales_dir: PathBuf,
    /// Serve the default locale at `/` instead of `/<locale>/`.
    pub mount_at_root: bool,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            default_locale: "en".into(),
            locales: Vec::new(),
            locales_dir: "locales".into(),
            mount_at_root: true,
        }
    }
}

impl I18nConfig {
    /// Whether `code` is a well-formed BCP 47-style locale tag.
    pub fn is_valid_locale(code: &str) -> bool {
        LOCALE_RE.is_match(code)
    }

    /// URL path prefix for pages in `locale`.
    pub fn path_prefix(&self, locale: &str) -> String {
        if self.mount_at_root && locale == self.default_locale {
            "/".into()
        } else {
            format!("/{locale}/")
        }
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !Self::is_valid_locale(&self.default_locale) {
            diag.error(
                FieldPath::new("plugins.i18n.default_locale"),
                format!("'{}' is not a valid locale code", self.default_locale),
            );
        }
        for (idx, locale) in self.locales.iter().enumerate() {
            if !Self::is_valid_locale(locale) {
                diag.error(
                    FieldPath::new("plugins.i18n.locales"),
                    format!("[{idx}] '{locale}' is not a valid locale code"),
                );
            }
        }
        if !self.locales.is_empty() && !self.locales.contains(&self.default_locale) {
            diag.error_with_hint(
                FieldPath::new("plugins.i18n.locales"),
                format!("default locale '{}' is not enabled", self.default_locale),
                "add it to `locales` or leave `locales` empty",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_default_locale_only() {
        let config = test_parse_config("");
        assert_eq!(config.plugins.i18n.default_locale, "en");
        assert!(config.plugins.i18n.locales.is_empty());
    }

    #[test]
    fn test_locale_codes() {
        assert!(I18nConfig::is_valid_locale("en"));
        assert!(I18nConfig::is_valid_locale("pt-BR"));
        assert!(I18nConfig::is_valid_locale("zh-Hant"));
        assert!(!I18nConfig::is_valid_locale("EN"));
        assert!(!I18nConfig::is_valid_locale("english"));
        assert!(!I18nConfig::is_valid_locale(""));
    }

    #[test]
    fn test_path_prefix() {
        let i18n = I18nConfig::default();
        assert_eq!(i18n.path_prefix("en"), "/");
        assert_eq!(i18n.path_prefix("de"), "/de/");

        let i18n = I18nConfig {
            mount_at_root: false,
            ..I18nConfig::default()
        };
        assert_eq!(i18n.path_prefix("en"), "/en/");
    }

    #[test]
    fn test_default_must_be_enabled() {
        let config = test_parse_config("[plugins.i18n]\nlocales = [\"de\", \"fr\"]");
        let mut diag = ConfigDiagnostics::new();
        config.plugins.i18n.validate(&mut diag);
        assert_eq!(diag.len(), 1);
    }
}
