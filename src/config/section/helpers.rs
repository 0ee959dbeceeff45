//! `[helpers]` section configuration.
//!
//! Registers custom template helper modules.
//!
//! ```toml
//! [helpers]
//! dir = "lib"                    # Relative to site root
//! modules = ["custom_helpers"]   # Resolved as lib/custom_helpers.*
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::config::{ConfigDiagnostics, FieldPath};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HelpersConfig {
    /// Directory containing helper modules.
    pub dir: PathBuf,
    /// Helper module names, in registration order.
    pub modules: Vec<String>,
}

impl Default for HelpersConfig {
    fn default() -> Self {
        Self {
            dir: "lib".into(),
            modules: vec!["custom_helpers".into()],
        }
    }
}

impl HelpersConfig {
    const MODULES: FieldPath = FieldPath::new("helpers.modules");

    /// Every file in `dir` named `<name>.<any ext>`, sorted by path.
    pub fn find_modules(&self, name: &str) -> Vec<PathBuf> {
        let Ok(entries) = std::fs::read_dir(&self.dir) else {
            return Vec::new();
        };
        let mut found: Vec<_> = entries
            .flatten()
            .map(|e| e.path())
            .filter(|p| p.is_file() && p.file_stem().is_some_and(|s| s == name))
            .collect();
        found.sort();
        found
    }

    /// Locate a helper module file. With several candidates the first
    /// in path order wins.
    pub fn find_module(&self, name: &str) -> Option<PathBuf> {
        self.find_modules(name).into_iter().next()
    }

    pub fn normalize(&mut self, root: &Path) {
        self.dir = crate::utils::path::normalize_path(&root.join(&self.dir));
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for (idx, name) in self.modules.iter().enumerate() {
            if name.is_empty() || name.contains(['/', '\\']) {
                diag.error(Self::MODULES, format!("[{idx}] invalid helper module name '{name}'"));
                continue;
            }
            match self.find_modules(name).as_slice() {
                [] => diag.warn(
                    Self::MODULES,
                    format!("helper module '{name}' not found in '{}'", self.dir.display()),
                ),
                [_] => {}
                [first, rest @ ..] => diag.warn(
                    Self::MODULES,
                    format!(
                        "helper module '{name}' is ambiguous, using '{}' over {}",
                        first.display(),
                        rest.iter()
                            .map(|p| format!("'{}'", p.display()))
                            .collect::<Vec<_>>()
                            .join(", ")
                    ),
                ),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_find_module() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("lib")).unwrap();
        std::fs::write(dir.path().join("lib/custom_helpers.rhai"), "").unwrap();

        let mut helpers = HelpersConfig::default();
        helpers.normalize(dir.path());
        assert!(helpers.find_module("custom_helpers").is_some());
        assert!(helpers.find_module("other").is_none());

        let mut diag = ConfigDiagnostics::new();
        helpers.validate(&mut diag);
        assert!(diag.warnings().is_empty());
    }

    #[test]
    fn test_ambiguous_module_picks_first_and_warns() {
        let dir = TempDir::new().unwrap();
        let lib = dir.path().join("lib");
        std::fs::create_dir_all(&lib).unwrap();
        for file in ["custom_helpers.rhai", "custom_helpers.rb", "other.rb"] {
            std::fs::write(lib.join(file), "").unwrap();
        }

        let mut helpers = HelpersConfig::default();
        helpers.normalize(dir.path());
        let lib = &helpers.dir;
        assert_eq!(
            helpers.find_modules("custom_helpers"),
            [lib.join("custom_helpers.rb"), lib.join("custom_helpers.rhai")]
        );
        assert_eq!(helpers.find_module("custom_helpers"), Some(lib.join("custom_helpers.rb")));

        let mut diag = ConfigDiagnostics::new();
        helpers.validate(&mut diag);
        assert!(!diag.has_errors());
        assert_eq!(diag.warnings().len(), 1);
        assert!(diag.warnings()[0].message.contains("ambiguous"));
    }

    #[test]
    fn test_missing_module_warns() {
        let dir = TempDir::new().unwrap();
        let mut helpers = HelpersConfig::default();
        helpers.normalize(dir.path());

        let mut diag = ConfigDiagnostics::new();
        helpers.validate(&mut diag);
        assert!(!diag.has_errors());
        assert_eq!(diag.warnings().len(), 1);
    }

    #[test]
    fn test_invalid_name_is_error() {
        let helpers = HelpersConfig {
            dir: "lib".into(),
            modules: vec!["../evil".into()],
        };
        let mut diag = ConfigDiagnostics::new();
        helpers.validate(&mut diag);
        assert!(diag.has_errors());
    }
}
