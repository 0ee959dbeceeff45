//! Glob list helpers for `ignore = [...]` style options.

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::config::{ConfigDiagnostics, FieldPath};

/// Compile `patterns` into one set.
///
/// Invalid patterns are skipped; they are reported by [`validate_globs`]
/// when the config is checked, so a set built afterwards never sees them.
pub fn build_glob_set(patterns: &[String]) -> GlobSet {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        if let Ok(glob) = Glob::new(pattern) {
            builder.add(glob);
        }
    }
    builder.build().unwrap_or_else(|_| GlobSet::empty())
}

/// Record one error per pattern that fails to compile.
pub fn validate_globs(field: FieldPath, patterns: &[String], diag: &mut ConfigDiagnostics) {
    for (idx, pattern) in patterns.iter().enumerate() {
        if let Err(err) = Glob::new(pattern) {
            diag.error(field, format!("[{idx}] invalid glob '{pattern}': {}", err.kind()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patterns(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_build_glob_set() {
        let set = build_glob_set(&patterns(&["**/*.min.css", "vendor/**"]));
        assert!(set.is_match("themes/epsilon/stylesheets/app.min.css"));
        assert!(set.is_match("vendor/jquery.js"));
        assert!(!set.is_match("themes/epsilon/stylesheets/app.css"));
    }

    #[test]
    fn test_build_skips_invalid() {
        let set = build_glob_set(&patterns(&["[bad", "*.map"]));
        assert_eq!(set.len(), 1);
        assert!(set.is_match("app.js.map"));
    }

    #[test]
    fn test_validate_globs() {
        let mut diag = ConfigDiagnostics::new();
        validate_globs(
            FieldPath::new("plugins.livereload.ignore"),
            &patterns(&["ok/**", "[bad", "{a"]),
            &mut diag,
        );
        assert_eq!(diag.errors().len(), 2);
        assert!(diag.errors()[0].message.contains("[1]"));
    }
}
