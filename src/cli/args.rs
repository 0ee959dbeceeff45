//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

use crate::core::Environment;
use crate::utils::date::Date;

/// Inspect and validate a themed static site configuration
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: site.toml, searched upward from cwd)
    #[arg(short = 'C', long, global = true, default_value = "site.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Validate the config for every environment
    #[command(visible_alias = "c")]
    Check,

    /// Print the resolved site as JSON
    #[command(visible_alias = "s")]
    Show {
        #[command(flatten)]
        env: EnvArgs,

        /// Pretty-print the JSON
        #[arg(short, long)]
        pretty: bool,
    },

    /// List the pages, posts and assets a build would produce
    #[command(visible_alias = "p")]
    Pages {
        #[command(flatten)]
        env: EnvArgs,

        /// Also list skipped files and why
        #[arg(short, long)]
        all: bool,

        /// Publish date cutoff for blog posts, as YYYY-MM-DD (default: today, UTC)
        #[arg(long, value_parser = parse_date)]
        today: Option<Date>,
    },
}

fn parse_date(s: &str) -> Result<Date, String> {
    Date::parse(s).ok_or_else(|| format!("'{s}' is not a valid YYYY-MM-DD date"))
}

/// Environment selection shared by `show` and `pages`.
#[derive(clap::Args, Debug, Clone, Copy)]
pub struct EnvArgs {
    /// Environment whose activations apply
    #[arg(short, long, value_enum, default_value_t = Environment::Development)]
    pub env: Environment,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::try_parse_from(["siteconf", "pages"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("site.toml"));
        assert!(!cli.verbose);
        match cli.command {
            Commands::Pages { env, all, today } => {
                assert_eq!(env.env, Environment::Development);
                assert!(!all);
                assert!(today.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_env_and_globals() {
        let cli =
            Cli::try_parse_from(["siteconf", "show", "--env", "build", "-p", "-C", "x.toml", "-v"])
                .unwrap();
        assert_eq!(cli.config, PathBuf::from("x.toml"));
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Commands::Show { env: EnvArgs { env: Environment::Build }, pretty: true }
        ));
    }

    #[test]
    fn test_parse_today() {
        let cli = Cli::try_parse_from(["siteconf", "pages", "--today", "2024-03-05"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Pages { today: Some(d), .. } if d == Date::new(2024, 3, 5)
        ));
        assert!(Cli::try_parse_from(["siteconf", "pages", "--today", "2024-02-30"]).is_err());
        assert!(Cli::try_parse_from(["siteconf", "pages", "--today", "yesterday"]).is_err());
    }

    #[test]
    fn test_unknown_env_rejected() {
        assert!(Cli::try_parse_from(["siteconf", "show", "--env", "staging"]).is_err());
    }
}
