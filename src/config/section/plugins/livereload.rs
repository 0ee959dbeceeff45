//! `[plugins.livereload]` options for the development environment.
//!
//! ```toml
//! [plugins.livereload]
//! host = "127.0.0.1"
//! port = 35729
//! apply_css_live = true     # Swap stylesheets without a full reload
//! ignore = ["**/*.swp"]
//! ```

use globset::GlobSet;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr};

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::utils::glob::{build_glob_set, validate_globs};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LiveReloadConfig {
    pub host: IpAddr,
    pub port: u16,
    pub apply_css_live: bool,
    pub ignore: Vec<String>,
}

impl Default for LiveReloadConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1)),
            port: 35729,
            apply_css_live: true,
            ignore: Vec::new(),
        }
    }
}

impl LiveReloadConfig {
    /// Websocket endpoint the browser script connects to.
    pub fn endpoint(&self) -> String {
        match self.host {
            IpAddr::V4(ip) => format!("ws://{ip}:{}/livereload", self.port),
            IpAddr::V6(ip) => format!("ws://[{ip}]:{}/livereload", self.port),
        }
    }

    pub fn ignore_set(&self) -> GlobSet {
        build_glob_set(&self.ignore)
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.port == 0 {
            diag.error(FieldPath::new("plugins.livereload.port"), "port must not be 0");
        }
        validate_globs(FieldPath::new("plugins.livereload.ignore"), &self.ignore, diag);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use std::net::Ipv6Addr;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        let lr = &config.plugins.livereload;
        assert_eq!(lr.port, 35729);
        assert!(lr.apply_css_live);
        assert_eq!(lr.endpoint(), "ws://127.0.0.1:35729/livereload");
    }

    #[test]
    fn test_ipv6_endpoint() {
        let lr = LiveReloadConfig {
            host: IpAddr::V6(Ipv6Addr::LOCALHOST),
            ..LiveReloadConfig::default()
        };
        assert_eq!(lr.endpoint(), "ws://[::1]:35729/livereload");
    }

    #[test]
    fn test_zero_port_rejected() {
        let config = test_parse_config("[plugins.livereload]\nport = 0");
        let mut diag = ConfigDiagnostics::new();
        config.plugins.livereload.validate(&mut diag);
        assert!(diag.has_errors());
    }
}
