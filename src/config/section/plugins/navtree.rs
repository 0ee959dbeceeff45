//! `[plugins.navtree]` navigation tree options.
//!
//! ```toml
//! [plugins.navtree]
//! ignore_files = ["404.html.md", "sitemap.xml.erb", "robots.txt"]
//! ignore_dirs = ["themes", "updates"]
//! promote_files = ["index.html.haml"]
//! data_file = "data/tree.yml"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};

use crate::config::{ConfigDiagnostics, FieldPath};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NavTreeConfig {
    /// Source file names left out of the tree.
    pub ignore_files: Vec<String>,

    /// Directory names whose contents are left out of the tree.
    #[serde(alias = "ignore_dir")]
    pub ignore_dirs: Vec<String>,

    /// Source file names promoted to the top level of the tree.
    pub promote_files: Vec<String>,

    /// Where the generated tree is written, relative to site root.
    pub data_file: PathBuf,
}

impl Default for NavTreeConfig {
    fn default() -> Self {
        Self {
            ignore_files: vec![
                "404.html.md".into(),
                "sitemap.xml.erb".into(),
                "robots.txt".into(),
            ],
            ignore_dirs: vec!["themes".into(), "updates".into()],
            promote_files: vec!["index.html.haml".into()],
            data_file: "data/tree.yml".into(),
        }
    }
}

impl NavTreeConfig {
    /// Whether a source path (relative to the source dir) is left out of the tree.
    pub fn is_ignored(&self, rel: &Path) -> bool {
        let in_ignored_dir = rel
            .parent()
            .into_iter()
            .flat_map(Path::components)
            .any(|c| match c {
                Component::Normal(name) => self.ignore_dirs.iter().any(|d| name == d.as_str()),
                _ => false,
            });

        in_ignored_dir || file_name_in(rel, &self.ignore_files)
    }

    /// Whether a source path is promoted to the top level.
    pub fn is_promoted(&self, rel: &Path) -> bool {
        file_name_in(rel, &self.promote_files)
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for (idx, dir) in self.ignore_dirs.iter().enumerate() {
            if dir.contains(['/', '\\']) {
                diag.error(
                    FieldPath::new("plugins.navtree.ignore_dirs"),
                    format!("[{idx}] '{dir}' must be a single directory name"),
                );
            }
        }
        for file in &self.promote_files {
            if self.ignore_files.contains(file) {
                diag.warn(
                    FieldPath::new("plugins.navtree.promote_files"),
                    format!("'{file}' is both promoted and ignored"),
                );
            }
        }
    }
}

fn file_name_in(rel: &Path, names: &[String]) -> bool {
    rel.file_name()
        .is_some_and(|name| names.iter().any(|n| name == n.as_str()))
}
