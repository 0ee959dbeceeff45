//! `[theme]` section configuration.
//!
//! Selects the active stylesheet theme. The layouts, stylesheets and
//! javascripts directories are all derived from `root` and `name`.
//!
//! # Example
//!
//! ```toml
//! [theme]
//! name = "epsilon"                              # Active theme
//! available = ["glide", "hamilton", "epsilon"]  # Themes shipped under `root`
//! root = "themes"                               # Relative to the source dir
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::config::{ConfigDiagnostics, FieldPath};

/// Theme selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Active theme name.
    pub name: String,

    /// Theme names that may be selected.
    pub available: Vec<String>,

    /// Themes root, relative to the source directory.
    pub root: PathBuf,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: "epsilon".into(),
            available: vec!["glide".into(), "hamilton".into(), "epsilon".into()],
            root: "themes".into(),
        }
    }
}

impl ThemeConfig {
    const NAME: FieldPath = FieldPath::new("theme.name");
    const ROOT: FieldPath = FieldPath::new("theme.root");

    /// Validate theme selection against the available list and the source tree.
    pub fn validate(&self, source: &Path, diag: &mut ConfigDiagnostics) {
        if self.name.is_empty() {
            diag.error(Self::NAME, "theme name must not be empty");
            return;
        }

        if self.name.contains(['/', '\\']) || self.name == "." || self.name == ".." {
            diag.error(
                Self::NAME,
                format!("theme name '{}' must be a single directory name", self.name),
            );
            return;
        }

        if !self.available.iter().any(|t| t == &self.name) {
            diag.error_with_hint(
                Self::NAME,
                format!("unknown theme '{}'", self.name),
                format!("choose one of: {}", self.available.join(", ")),
            );
        }

        if !crate::utils::path::is_contained(&self.root) {
            diag.error(Self::ROOT, "theme root must stay inside the source directory");
            return;
        }
        if crate::utils::path::to_slash(&self.root).is_empty() {
            diag.error_with_hint(
                Self::ROOT,
                format!("theme root '{}' names no directory", self.root.display()),
                "themes need their own directory, e.g. \"themes\"",
            );
            return;
        }

        let dir = source.join(&self.root).join(&self.name);
        if !dir.is_dir() {
            diag.warn(
                Self::NAME,
                format!("theme directory '{}' does not exist", dir.display()),
            );
        }
    }
}
