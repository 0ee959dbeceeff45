//! siteconf - typed configuration for a themed static site.

mod blog;
mod cli;
mod config;
mod core;
mod logger;
mod site;
mod sitemap;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = SiteConfig::load(&cli.config)?;

    match cli.command {
        Commands::Check => cli::check::check_config(&config),
        Commands::Show { env, pretty } => cli::show::show_site(&config, env.env, pretty),
        Commands::Pages { env, all, today } => {
            let today = today.unwrap_or_else(utils::date::Date::today);
            cli::pages::list_pages(&config, env.env, all, today)
        }
    }
}
