//! Site configuration management for `site.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/        # Configuration section definitions
//! │   ├── theme       # [theme]
//! │   ├── page        # [[page]]
//! │   ├── helpers     # [helpers]
//! │   ├── markdown    # [markdown]
//! │   ├── plugins/    # [plugins.*]
//! │   └── environment # [environment.*]
//! ├── types/          # ConfigError, ConfigDiagnostics, FieldPath
//! └── mod.rs          # SiteConfig (this file)
//! ```
//!
//! The config is read once at startup. Unknown keys are fatal, and all
//! validation errors are collected and reported together.

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

pub use section::{
    AssetHashConfig, BlogConfig, EnvironmentsConfig, HelpersConfig, I18nConfig, LayoutSetting,
    LiveReloadConfig, MarkdownConfig, MinifyCssConfig, MinifyJavascriptConfig, NavTreeConfig,
    PageRule, PluginName, PluginsConfig, SyntaxConfig, ThemeConfig,
};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::debug;
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing site.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Content source directory.
    pub source: PathBuf,

    /// Plugins active in every environment.
    pub activate: Vec<PluginName>,

    /// Theme selection
    pub theme: ThemeConfig,

    /// Per-page layout rules (first match wins)
    pub page: Vec<PageRule>,

    /// Custom helper modules
    pub helpers: HelpersConfig,

    /// Markdown engine and options
    pub markdown: MarkdownConfig,

    /// Plugin options
    pub plugins: PluginsConfig,

    /// Environment-specific activation
    pub environment: EnvironmentsConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            config_path: PathBuf::new(),
            root: PathBuf::new(),
            source: "source".into(),
            activate: vec![
                PluginName::NavTree,
                PluginName::Syntax,
                PluginName::I18n,
                PluginName::Blog,
            ],
            theme: ThemeConfig::default(),
            page: PageRule::defaults(),
            helpers: HelpersConfig::default(),
            markdown: MarkdownConfig::default(),
            plugins: PluginsConfig::default(),
            environment: EnvironmentsConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration, searching upward from cwd for `config_name`.
    ///
    /// The project root is determined by the config file's parent directory.
    pub fn load(config_name: &Path) -> Result<Self> {
        let Some(config_path) = find_config_file(config_name) else {
            bail!(
                "config file '{}' not found in the current directory or any parent",
                config_name.display()
            );
        };

        let mut config = Self::from_path(&config_path)?;
        config.finalize(&config_path);
        config.validate()?;

        debug!("config"; "loaded {}", config.config_path.display());
        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let (config, ignored) = Self::parse_with_ignored(content)?;
        if !ignored.is_empty() {
            bail!(ConfigError::UnknownFields(ignored));
        }
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        Self::from_str(&content).with_context(|| format!("failed to load {}", path.display()))
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Set root from the config location and normalize relative paths.
    fn finalize(&mut self, config_path: &Path) {
        let root = config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        let root = crate::utils::path::normalize_path(&root);

        self.config_path = crate::utils::path::normalize_path(config_path);
        self.source = crate::utils::path::normalize_path(&root.join(&self.source));
        self.helpers.normalize(&root);
        self.root = root;
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Run every section validator and collect the results.
    pub fn diagnose(&self) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();

        self.theme.validate(&self.source, &mut diag);
        section::page::validate_rules(&self.page, &mut diag);
        self.helpers.validate(&mut diag);
        self.markdown.validate(&mut diag);
        self.plugins.validate(&mut diag);
        self.environment.validate(&self.activate, &mut diag);

        if !self.source.is_dir() {
            diag.warn(
                FieldPath::new("source"),
                format!("source directory '{}' does not exist", self.source.display()),
            );
        }

        diag
    }

    /// Validate configuration, printing warnings and failing on any error.
    pub fn validate(&self) -> Result<()> {
        let diag = self.diagnose();
        diag.print_warnings();
        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config from TOML, panicking on unknown fields to catch typos in tests.
#[cfg(test)]
pub fn test_parse_config(content: &str) -> SiteConfig {
    let (parsed, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
