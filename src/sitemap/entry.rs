//! Discovered source files and why a file was left out.

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

use crate::blog::BlogPost;
use crate::core::LayoutChoice;

/// Where a page sits in the navigation tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NavPlacement {
    Listed,
    Promoted,
    Hidden,
}

/// A page source rendered to one output file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page {
    /// Path relative to the source directory.
    pub source: PathBuf,
    /// Site-absolute output path, e.g. `/index.html`.
    pub url: String,
    pub layout: LayoutChoice,
    /// `None` when the navtree plugin is inactive.
    pub nav: Option<NavPlacement>,
    /// Set when the page is a blog post.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post: Option<BlogPost>,
}

impl Page {
    pub fn is_post(&self) -> bool {
        self.post.is_some()
    }
}

/// A file copied to the output, possibly renamed or minified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Asset {
    pub source: PathBuf,
    pub url: String,
    /// Output URL carrying a content hash, when asset hashing applies.
    pub hashed_url: Option<String>,
    /// Whether a build would minify this file.
    pub minify: bool,
    /// Whether the file belongs to the active theme.
    pub theme: bool,
}

impl Asset {
    /// URL the file is published under.
    pub fn output_url(&self) -> &str {
        self.hashed_url.as_deref().unwrap_or(&self.url)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "matcher", rename_all = "snake_case")]
pub enum SkipReason {
    /// Under the themes root but not in the active theme.
    InactiveTheme,
    /// Excluded by a named sitemap matcher.
    Matcher(&'static str),
    /// A page source in the active theme outside its asset directories.
    ThemeFile,
    /// A blog post dated after today while future posts are held back.
    FutureDated,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InactiveTheme => f.write_str("inactive theme"),
            Self::Matcher(name) => write!(f, "sitemap matcher '{name}'"),
            Self::ThemeFile => f.write_str("theme file"),
            Self::FutureDated => f.write_str("future-dated post"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Skipped {
    pub source: PathBuf,
    pub reason: SkipReason,
}
