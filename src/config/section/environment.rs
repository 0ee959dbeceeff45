//! `[environment.*]` sections: per-environment plugin activation.
//!
//! Exactly one environment applies per invocation. The two activation
//! lists must not overlap with each other or with the global `activate`.
//!
//! # Example
//!
//! ```toml
//! [environment.build]
//! activate = ["minify_css", "minify_javascript", "asset_hash"]
//!
//! [environment.development]
//! activate = ["livereload"]
//! ```

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::PluginName;
use crate::config::{ConfigDiagnostics, FieldPath};
use crate::core::Environment;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentConfig {
    pub activate: Vec<PluginName>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentsConfig {
    pub build: EnvironmentConfig,
    pub development: EnvironmentConfig,
}

impl Default for EnvironmentsConfig {
    fn default() -> Self {
        Self {
            build: EnvironmentConfig {
                activate: vec![
                    PluginName::MinifyCss,
                    PluginName::MinifyJavascript,
                    PluginName::AssetHash,
                ],
            },
            development: EnvironmentConfig {
                activate: vec![PluginName::LiveReload],
            },
        }
    }
}

impl EnvironmentsConfig {
    /// Activation list of the selected environment.
    pub fn get(&self, env: Environment) -> &EnvironmentConfig {
        match env {
            Environment::Build => &self.build,
            Environment::Development => &self.development,
        }
    }

    pub fn validate(&self, global: &[PluginName], diag: &mut ConfigDiagnostics) {
        const GLOBAL: FieldPath = FieldPath::new("activate");
        const BUILD: FieldPath = FieldPath::new("environment.build.activate");
        const DEVELOPMENT: FieldPath = FieldPath::new("environment.development.activate");

        report_duplicates(GLOBAL, global, diag);
        report_duplicates(BUILD, &self.build.activate, diag);
        report_duplicates(DEVELOPMENT, &self.development.activate, diag);

        let global: FxHashSet<_> = global.iter().copied().collect();
        let build: FxHashSet<_> = self.build.activate.iter().copied().collect();

        for (field, list) in [(BUILD, &self.build.activate), (DEVELOPMENT, &self.development.activate)] {
            for name in list.iter().filter(|n| global.contains(*n)) {
                diag.error_with_hint(
                    field,
                    format!("'{name}' is already activated globally"),
                    "remove it from one of the lists",
                );
            }
        }

        for name in self.development.activate.iter().filter(|n| build.contains(*n)) {
            diag.error_with_hint(
                DEVELOPMENT,
                format!("'{name}' is activated in both build and development"),
                "activate it globally instead",
            );
        }
    }
}

fn report_duplicates(field: FieldPath, list: &[PluginName], diag: &mut ConfigDiagnostics) {
    let mut seen = FxHashSet::default();
    for name in list {
        if !seen.insert(*name) {
            diag.warn(field, format!("'{name}' is listed more than once"));
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
        assert_eq!(
            config.environment.get(Environment::Build).activate,
            [
                PluginName::MinifyCss,
                PluginName::MinifyJavascript,
                PluginName::AssetHash
            ]
        );
        assert_eq!(
            config.environment.get(Environment::Development).activate,
            [PluginName::LiveReload]
        );

        let mut diag = ConfigDiagnostics::new();
        config.environment.validate(&config.activate, &mut diag);
        assert!(!diag.has_errors());
        assert!(diag.warnings().is_empty());
    }

    #[test]
    fn test_overlap_between_environments() {
        let config = test_parse_config(
            "[environment.build]\nactivate = [\"livereload\"]\n[environment.development]\nactivate = [\"livereload\"]",
        );
        let mut diag = ConfigDiagnostics::new();
        config.environment.validate(&config.activate, &mut diag);
        assert_eq!(diag.len(), 1);
    }

    #[test]
    fn test_overlap_with_global() {
        let config = test_parse_config(
            "activate = [\"blog\", \"asset_hash\"]\n[environment.development]\nactivate = []",
        );
        let mut diag = ConfigDiagnostics::new();
        config.environment.validate(&config.activate, &mut diag);
        assert_eq!(diag.len(), 1);
        assert!(diag.errors()[0].message.contains("asset_hash"));
    }

    #[test]
    fn test_duplicates_warn() {
        let config = test_parse_config("activate = [\"blog\", \"blog\"]");
        let mut diag = ConfigDiagnostics::new();
        config.environment.validate(&config.activate, &mut diag);
        assert!(!diag.has_errors());
        assert_eq!(diag.warnings().len(), 1);
    }
}
