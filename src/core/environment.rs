//! Environment selection for build and development invocations.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which environment block applies to this invocation.
///
/// Exactly one is active: `build` for production output, `development`
/// for the local preview server.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Production build: minification and asset hashing.
    Build,
    /// Local preview: live reload.
    #[default]
    Development,
}

impl Environment {
    pub const ALL: [Self; 2] = [Self::Build, Self::Development];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Build => "build",
            Self::Development => "development",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
