//! `[plugins.blog]` options.
//!
//! ```toml
//! [plugins.blog]
//! prefix = "updates"                               # Posts live under source/updates/
//! permalink = "{year}-{month}-{day}-{title}.html"  # Output URL, relative to prefix
//! sources = "{year}-{month}-{day}-{title}.html"    # Source file name pattern
//! publish_future_dated = true                      # Publish posts dated after today
//! layout = "post"                                  # Optional named layout
//! ```

use serde::{Deserialize, Serialize};

use crate::blog::PathPattern;
use crate::config::{ConfigDiagnostics, FieldPath};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogConfig {
    pub prefix: String,
    pub permalink: String,
    pub sources: String,
    pub publish_future_dated: bool,
    pub layout: Option<String>,
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            prefix: "updates".into(),
            permalink: "{year}-{month}-{day}-{title}.html".into(),
            sources: "{year}-{month}-{day}-{title}.html".into(),
            publish_future_dated: true,
            layout: None,
        }
    }
}

impl BlogConfig {
    const PREFIX: FieldPath = FieldPath::new("plugins.blog.prefix");
    const PERMALINK: FieldPath = FieldPath::new("plugins.blog.permalink");
    const SOURCES: FieldPath = FieldPath::new("plugins.blog.sources");

    /// Prefix with surrounding slashes removed.
    pub fn prefix(&self) -> &str {
        self.prefix.trim_matches('/')
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.prefix().split('/').any(|seg| seg == "..") {
            diag.error(Self::PREFIX, "prefix must not leave the source directory");
        }

        match PathPattern::parse(&self.permalink) {
            Ok(pattern) if !pattern.has_token("title") => diag.error_with_hint(
                Self::PERMALINK,
                "permalink must contain {title}",
                "posts on the same day would collide otherwise",
            ),
            Ok(_) => {}
            Err(err) => diag.error(Self::PERMALINK, err.to_string()),
        }

        match PathPattern::parse(&self.sources) {
            Ok(pattern) => {
                for token in ["year", "month", "day", "title"] {
                    if !pattern.has_token(token) {
                        diag.error(Self::SOURCES, format!("sources must contain {{{token}}}"));
                    }
                }
            }
            Err(err) => diag.error(Self::SOURCES, err.to_string()),
        }
    }
}
