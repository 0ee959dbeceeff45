//! `[markdown]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [markdown]
//! engine = "pulldown-cmark"
//! fenced_code_blocks = true   # Always on for pulldown-cmark
//! smartypants = true          # Smart quotes and dashes
//! tables = true
//! footnotes = false
//! ```

use pulldown_cmark::Options;
use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

/// Markdown rendering engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MarkdownEngine {
    #[default]
    PulldownCmark,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkdownConfig {
    pub engine: MarkdownEngine,
    pub fenced_code_blocks: bool,
    pub smartypants: bool,
    pub tables: bool,
    pub footnotes: bool,
    pub strikethrough: bool,
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        Self {
            engine: MarkdownEngine::PulldownCmark,
            fenced_code_blocks: true,
            smartypants: true,
            tables: true,
            footnotes: false,
            strikethrough: false,
        }
    }
}

impl MarkdownConfig {
    /// Parser options for the configured engine.
    pub fn parser_options(&self) -> Options {
        let mut options = Options::empty();
        options.set(Options::ENABLE_SMART_PUNCTUATION, self.smartypants);
        options.set(Options::ENABLE_TABLES, self.tables);
        options.set(Options::ENABLE_FOOTNOTES, self.footnotes);
        options.set(Options::ENABLE_STRIKETHROUGH, self.strikethrough);
        options
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        // pulldown-cmark parses fenced code blocks unconditionally
        if !self.fenced_code_blocks && self.engine == MarkdownEngine::PulldownCmark {
            diag.error_with_hint(
                FieldPath::new("markdown.fenced_code_blocks"),
                "fenced code blocks cannot be disabled for pulldown-cmark",
                "remove the option or set it to true",
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
        assert_eq!(config.markdown.engine, MarkdownEngine::PulldownCmark);
        assert!(config.markdown.fenced_code_blocks);
        assert!(config.markdown.smartypants);
    }

    #[test]
    fn test_parser_options() {
        let options = MarkdownConfig::default().parser_options();
        assert!(options.contains(Options::ENABLE_SMART_PUNCTUATION));
        assert!(options.contains(Options::ENABLE_TABLES));
        assert!(!options.contains(Options::ENABLE_FOOTNOTES));

        let config = test_parse_config("[markdown]\nsmartypants = false\nfootnotes = true");
        let options = config.markdown.parser_options();
        assert!(!options.contains(Options::ENABLE_SMART_PUNCTUATION));
        assert!(options.contains(Options::ENABLE_FOOTNOTES));
    }

    #[test]
    fn test_smart_punctuation_renders() {
        use pulldown_cmark::{Event, Parser};

        let options = MarkdownConfig::default().parser_options();
        let text: String = Parser::new_ext("\"quoted\" -- text", options)
            .filter_map(|event| match event {
                Event::Text(t) => Some(t.into_string()),
                _ => None,
            })
            .collect();
        assert!(text.contains('\u{201c}'));
        assert!(text.contains('\u{2013}'));
    }

    #[test]
    fn test_fenced_code_blocks_cannot_be_disabled() {
        let config = test_parse_config("[markdown]\nfenced_code_blocks = false");
        let mut diag = ConfigDiagnostics::new();
        config.markdown.validate(&mut diag);
        assert!(diag.has_errors());
    }

    #[test]
    fn test_unknown_engine_rejected() {
        let result = crate::config::SiteConfig::from_str("[markdown]\nengine = \"kramdown\"");
        assert!(result.is_err());
    }
}
