//! Core types - pure abstractions shared across the codebase.

mod environment;
mod filter;
mod layout;
pub mod template;
mod theme;

pub use environment::Environment;
pub use filter::{LayoutFileMatcher, PathMatcher, SitemapMatchers, ThemeIgnoreFilter};
pub use layout::{LayoutChoice, LayoutRules};
pub use theme::ThemePaths;
