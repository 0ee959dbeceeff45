//! Path predicates over source-relative paths.
//!
//! - [`ThemeIgnoreFilter`]: drops non-active themes from the build input.
//! - [`LayoutFileMatcher`]: keeps layout files out of the sitemap.
//! - [`SitemapMatchers`]: named registry of sitemap exclusion predicates.
//!
//! All predicates compare whole path segments, never substrings.

use std::fmt;
use std::path::{Component, Path, PathBuf};

/// A predicate over a path relative to the source directory.
pub trait PathMatcher: fmt::Debug + Send + Sync {
    fn matches(&self, rel: &Path) -> bool;
}

/// Normal components of a relative path as `&str`. Non-UTF-8 segments never match.
fn segments(path: &Path) -> Vec<&str> {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_str().unwrap_or("\0")),
            _ => None,
        })
        .collect()
}

// ============================================================================
// Theme ignore filter
// ============================================================================

/// Ignores everything under the themes root except the active theme.
///
/// A path is ignored when it starts with the themes root and the next
/// segment is anything but the active theme name.
#[derive(Debug, Clone)]
pub struct ThemeIgnoreFilter {
    root: Vec<String>,
    active: String,
}

impl ThemeIgnoreFilter {
    pub fn new(root: &Path, active: impl Into<String>) -> Self {
        Self {
            root: segments(root).into_iter().map(String::from).collect(),
            active: active.into(),
        }
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    /// The themes root itself, as a relative path.
    pub fn root(&self) -> PathBuf {
        self.root.iter().collect()
    }
}

impl PathMatcher for ThemeIgnoreFilter {
    fn matches(&self, rel: &Path) -> bool {
        let segs = segments(rel);
        if segs.len() <= self.root.len() || !segs.iter().zip(&self.root).all(|(a, b)| a == b) {
            return false;
        }
        segs[self.root.len()] != self.active
    }
}

// ============================================================================
// Layout file matcher
// ============================================================================

/// Matches layout files that must never be treated as content pages.
///
/// True for `layout.*` at the source root, anything under `layouts/`, and
/// anything under `<themes root>/<...>/layouts/`. Without this the sitemap
/// would recurse into every theme's layouts.
#[derive(Debug, Clone)]
pub struct LayoutFileMatcher {
    themes_root: Vec<String>,
}

impl LayoutFileMatcher {
    const LAYOUT_PREFIX: &'static str = "layout.";
    const LAYOUTS_DIR: &'static str = "layouts";

    pub fn new(themes_root: &Path) -> Self {
        Self {
            themes_root: segments(themes_root).into_iter().map(String::from).collect(),
        }
    }

    fn in_theme_layouts(&self, segs: &[&str]) -> bool {
        let k = self.themes_root.len();
        // themes root, at least one theme segment, `layouts`, then the file
        if k == 0 || segs.len() < k + 3 {
            return false;
        }
        (0..=segs.len() - (k + 3)).any(|i| {
            let under_root = segs[i..i + k]
                .iter()
                .zip(&self.themes_root)
                .all(|(a, b)| a == b);
            under_root && segs[i + k + 1..segs.len() - 1].contains(&Self::LAYOUTS_DIR)
        })
    }
}

impl PathMatcher for LayoutFileMatcher {
    fn matches(&self, rel: &Path) -> bool {
        let segs = segments(rel);
        match segs.as_slice() {
            [] => false,
            [file] => file.starts_with(Self::LAYOUT_PREFIX),
            [first, ..] if *first == Self::LAYOUTS_DIR => true,
            _ => self.in_theme_layouts(&segs),
        }
    }
}

// ============================================================================
// Sitemap matcher registry
// ============================================================================

/// Named sitemap exclusion predicates, evaluated in registration order.
#[derive(Debug, Default)]
pub struct SitemapMatchers {
    matchers: Vec<(&'static str, Box<dyn PathMatcher>)>,
}

impl SitemapMatchers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `matcher` under `name`, replacing any previous one.
    pub fn register(&mut self, name: &'static str, matcher: impl PathMatcher + 'static) {
        let matcher: Box<dyn PathMatcher> = Box::new(matcher);
        match self.matchers.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = matcher,
            None => self.matchers.push((name, matcher)),
        }
    }

    /// Name of the first matcher excluding `rel`, if any.
    pub fn matching(&self, rel: &Path) -> Option<&'static str> {
        self.matchers
            .iter()
            .find(|(_, m)| m.matches(rel))
            .map(|(name, _)| *name)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.matchers.iter().map(|(name, _)| *name)
    }
}
