//! `check`: resolve the site for every environment.
//!
//! Loading already rejects invalid configs; this additionally builds the
//! [`Site`] for each environment so plugin options are compiled once per
//! activation set.

use anyhow::{Context, Result};

use super::common::{join_or_dash, plural_count};
use crate::config::SiteConfig;
use crate::core::Environment;
use crate::{debug, log};
use crate::site::Site;

pub fn check_config(config: &SiteConfig) -> Result<()> {
    log!(
        "theme";
        "{} (from {})",
        config.theme.name,
        join_or_dash(&config.theme.available)
    );
    log!("config"; "{}", plural_count(config.page.len(), "page rule"));

    let mut helpers = 0;
    for env in Environment::ALL {
        let site = Site::new(config.clone(), env)
            .with_context(|| format!("failed to resolve site for {env}"))?;
        log!("check"; "{env}: {}", join_or_dash(site.plugins().names()));
        if let Some(syntax) = site.plugins().syntax() {
            debug!(
                "check";
                "{env}: code blocks get class '{}', line numbers {}",
                syntax.css_class,
                if syntax.line_numbers { "on" } else { "off" }
            );
        }
        helpers = site.helper_modules().len();
    }
    log!("config"; "{} found", plural_count(helpers, "helper module"));

    log!("check"; "{} is valid", config.config_path.display());
    Ok(())
}
