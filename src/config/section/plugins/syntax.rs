//! `[plugins.syntax]` syntax highlighting options.
//!
//! ```toml
//! [plugins.syntax]
//! css_class = "highlight"
//! line_numbers = false
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SyntaxConfig {
    /// Class put on the wrapping element of highlighted blocks.
    pub css_class: String,
    pub line_numbers: bool,
}

impl Default for SyntaxConfig {
    fn default() -> Self {
        Self {
            css_class: "highlight".into(),
            line_numbers: false,
        }
    }
}

impl SyntaxConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let valid = !self.css_class.is_empty()
            && self
                .css_class
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            diag.error(
                FieldPath::new("plugins.syntax.css_class"),
                format!("'{}' is not a valid CSS class name", self.css_class),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.plugins.syntax.css_class, "highlight");
        assert!(!config.plugins.syntax.line_numbers);
    }

    #[test]
    fn test_invalid_class() {
        let config = test_parse_config("[plugins.syntax]\ncss_class = \"code block\"");
        let mut diag = ConfigDiagnostics::new();
        config.plugins.syntax.validate(&mut diag);
        assert!(diag.has_errors());
    }
}
