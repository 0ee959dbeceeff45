//! Build-environment asset plugins: `minify_css`, `minify_javascript`, `asset_hash`.
//!
//! ```toml
//! [plugins.minify_css]
//! inline = false              # Also minify <style> blocks in pages
//! ignore = ["**/*.min.css"]
//!
//! [plugins.minify_javascript]
//! inline = false
//! ignore = ["**/vendor/**"]
//!
//! [plugins.asset_hash]
//! exts = ["css", "js", "png"]
//! ignore = ["**/favicon.ico"]
//! ```
//!
//! Globs are matched against paths relative to the source dir.

use globset::GlobSet;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::utils::glob::{build_glob_set, validate_globs};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MinifyCssConfig {
    pub inline: bool,
    pub ignore: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MinifyJavascriptConfig {
    pub inline: bool,
    pub ignore: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetHashConfig {
    /// File extensions (without dot) that receive a content hash.
    pub exts: Vec<String>,
    pub ignore: Vec<String>,
}

impl Default for AssetHashConfig {
    fn default() -> Self {
        Self {
            exts: [
                "css", "js", "png", "jpg", "jpeg", "gif", "svg", "webp", "woff", "woff2", "ttf",
                "otf", "eot", "ico",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            ignore: Vec::new(),
        }
    }
}

impl MinifyCssConfig {
    pub fn ignore_set(&self) -> GlobSet {
        build_glob_set(&self.ignore)
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        validate_globs(FieldPath::new("plugins.minify_css.ignore"), &self.ignore, diag);
    }
}

impl MinifyJavascriptConfig {
    pub fn ignore_set(&self) -> GlobSet {
        build_glob_set(&self.ignore)
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        validate_globs(
            FieldPath::new("plugins.minify_javascript.ignore"),
            &self.ignore,
            diag,
        );
    }
}

impl AssetHashConfig {
    pub fn ignore_set(&self) -> GlobSet {
        build_glob_set(&self.ignore)
    }

    /// Whether the extension of `path` is one that gets hashed.
    pub fn hashes_ext(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| self.exts.iter().any(|x| x.eq_ignore_ascii_case(ext)))
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for (idx, ext) in self.exts.iter().enumerate() {
            if ext.is_empty() || ext.starts_with('.') {
                diag.error_with_hint(
                    FieldPath::new("plugins.asset_hash.exts"),
                    format!("[{idx}] invalid extension '{ext}'"),
                    "write extensions without the leading dot",
                );
            }
        }
        validate_globs(FieldPath::new("plugins.asset_hash.ignore"), &self.ignore, diag);
    }
}
