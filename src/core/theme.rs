//! Theme-derived directory paths.

use serde::Serialize;
use std::path::{Path, PathBuf};

/// Layouts, stylesheets and javascripts directories of one theme.
///
/// Paths are relative to the source directory. No existence check is done
/// here; an unknown theme simply yields paths that do not exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemePaths {
    pub name: String,
    pub layouts: PathBuf,
    pub stylesheets: PathBuf,
    pub javascripts: PathBuf,
}

impl ThemePaths {
    pub const LAYOUTS: &'static str = "layouts";
    pub const STYLESHEETS: &'static str = "stylesheets";
    pub const JAVASCRIPTS: &'static str = "javascripts";

    /// Join `<root>/<name>/{layouts,stylesheets,javascripts}`.
    pub fn resolve(root: &Path, name: &str) -> Self {
        let base = root.join(name);
        Self {
            name: name.to_string(),
            layouts: base.join(Self::LAYOUTS),
            stylesheets: base.join(Self::STYLESHEETS),
            javascripts: base.join(Self::JAVASCRIPTS),
        }
    }

    /// Asset directories walked during discovery.
    pub fn asset_dirs(&self) -> [&Path; 2] {
        [&self.stylesheets, &self.javascripts]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_every_shipped_theme() {
        for theme in ["glide", "hamilton", "epsilon"] {
            let paths = ThemePaths::resolve(Path::new("themes"), theme);
            assert_eq!(paths.layouts, PathBuf::from(format!("themes/{theme}/layouts")));
            assert_eq!(
                paths.stylesheets,
                PathBuf::from(format!("themes/{theme}/stylesheets"))
            );
            assert_eq!(
                paths.javascripts,
                PathBuf::from(format!("themes/{theme}/javascripts"))
            );
        }
    }

    #[test]
    fn test_unknown_theme_still_resolves() {
        let paths = ThemePaths::resolve(Path::new("themes"), "does-not-exist");
        assert_eq!(paths.layouts, Path::new("themes/does-not-exist/layouts"));
    }

    #[test]
    fn test_custom_root() {
        let paths = ThemePaths::resolve(Path::new("skins"), "glide");
        assert_eq!(paths.asset_dirs()[0], Path::new("skins/glide/stylesheets"));
        assert_eq!(paths.asset_dirs()[1], Path::new("skins/glide/javascripts"));
    }
}
