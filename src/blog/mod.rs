//! Blog post recognition and permalinks.
//!
//! Posts live under `<source>/<prefix>/`. A file there is a post when its
//! name, with template extensions stripped, matches the `sources` pattern:
//!
//! ```text
//! source/updates/2024-03-05-Hello World.html.md
//!   -> date 2024-03-05, title "Hello World", slug "hello-world"
//!   -> /updates/2024-03-05-hello-world.html
//! ```

mod pattern;

pub use pattern::{PathPattern, PatternValues};

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::config::BlogConfig;
use crate::core::template::strip_template_exts;
use crate::utils::date::Date;
use crate::utils::path::to_slash;
use crate::utils::slug::slugify;

/// One recognized blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlogPost {
    /// Path relative to the source directory.
    pub source: PathBuf,
    pub date: Date,
    /// Title as written in the file name.
    pub title: String,
    pub slug: String,
    /// Output path relative to the site root, e.g. `updates/2024-03-05-hello-world.html`.
    pub permalink: String,
}

impl BlogPost {
    /// Site-absolute URL of the post.
    pub fn url(&self) -> String {
        format!("/{}", self.permalink)
    }
}

/// Compiled blog options.
#[derive(Debug, Clone, Serialize)]
pub struct Blog {
    prefix: PathBuf,
    sources: PathPattern,
    permalink: PathPattern,
    publish_future_dated: bool,
    layout: Option<String>,
}

impl Blog {
    pub fn new(config: &BlogConfig) -> Result<Self> {
        let sources = PathPattern::parse(&config.sources)
            .with_context(|| format!("invalid blog sources pattern '{}'", config.sources))?;
        let permalink = PathPattern::parse(&config.permalink)
            .with_context(|| format!("invalid blog permalink '{}'", config.permalink))?;

        Ok(Self {
            prefix: PathBuf::from(config.prefix()),
            sources,
            permalink,
            publish_future_dated: config.publish_future_dated,
            layout: config.layout.clone(),
        })
    }

    pub fn prefix(&self) -> &Path {
        &self.prefix
    }

    pub fn layout(&self) -> Option<&str> {
        self.layout.as_deref()
    }

    /// Recognize `rel` (relative to the source directory) as a post.
    pub fn parse_post(&self, rel: &Path) -> Option<BlogPost> {
        let inner = rel.strip_prefix(&self.prefix).ok()?;
        let inner = to_slash(inner);
        let captured = self.sources.captures(strip_template_exts(&inner))?;

        let date = captured.date?;
        let title = captured.title?;
        let slug = slugify(&title);
        if slug.is_empty() {
            return None;
        }

        let rendered = self.permalink.render(PatternValues { date, title: &slug });
        let permalink = match to_slash(&self.prefix) {
            prefix if prefix.is_empty() => rendered,
            prefix => format!("{prefix}/{rendered}"),
        };

        Some(BlogPost {
            source: rel.to_path_buf(),
            date,
            title,
            slug,
            permalink,
        })
    }

    /// Whether `post` is published on `today`.
    pub fn is_published(&self, post: &BlogPost, today: Date) -> bool {
        self.publish_future_dated || post.date <= today
    }
}
