//! Operator CLI for the Rejuvana Living site
//!
//! Parses arguments for the `rejuvana-site` binary. Commands exercise the same
//! synchronizer and submission flow the browser uses, against the native
//! transports.

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Rejuvana Living site tooling
#[derive(Parser, Debug)]
#[command(
    name = "rejuvana-site",
    author = "Rejuvana Living <hello@rejuvanaliving.com>",
    version,
    about = "Rejuvana Living site tooling",
    long_about = "Operator tooling for the Rejuvana Living marketing site.\n\n\
                  Runs a directory feed sync, sends test leads to the CRM, checks\n\
                  configuration and (with the `ui` feature) serves the built site.",
    after_help = "EXAMPLES:\n    \
                  rejuvana-site feed                       # Sync the directory feed once\n    \
                  rejuvana-site feed --json                # Print the synced posts as JSON\n    \
                  rejuvana-site guides --all               # List the wellness guides\n    \
                  rejuvana-site config --validate          # Check rejuvana.toml and secrets\n    \
                  rejuvana-site --config prod.toml serve   # Serve the site with a custom config"
)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "rejuvana.toml", global = true)]
    pub config: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run one directory feed sync and print the result
    ///
    /// Falls back to the built-in posts when the API is unreachable,
    /// exactly as the directory page does.
    Feed {
        /// Print posts as JSON instead of cards
        #[arg(long)]
        json: bool,
    },

    /// Send a lead to the CRM through the contact form flow
    Lead {
        /// Full name; the first word becomes the first name
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        /// Message, cut to 150 characters like the form
        #[arg(long)]
        message: String,
    },

    /// List the wellness guides shown in the gallery
    Guides {
        /// Include guides beyond the home page preview
        #[arg(short, long)]
        all: bool,
    },

    /// Show configuration information
    Config {
        /// Also check that referenced secrets are set
        #[arg(long)]
        validate: bool,
    },

    /// Serve the embedded site
    #[cfg(feature = "ui")]
    Serve {
        /// Override the configured port
        #[arg(short, long)]
        port: Option<u16>,
    },
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_feed_json() {
        let cli = Cli::try_parse_from(["rejuvana-site", "feed", "--json"]).unwrap();
        assert!(matches!(cli.command, Commands::Feed { json: true }));
        assert_eq!(cli.config, PathBuf::from("rejuvana.toml"));
    }

    #[test]
    fn test_parse_lead() {
        let cli = Cli::try_parse_from([
            "rejuvana-site",
            "--no-color",
            "lead",
            "--name",
            "Jane Doe",
            "--email",
            "jane@example.com",
            "--message",
            "Hello",
        ])
        .unwrap();
        assert!(cli.no_color);
        match cli.command {
            Commands::Lead { name, .. } => assert_eq!(name, "Jane Doe"),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_global_config_after_subcommand() {
        let cli = Cli::try_parse_from(["rejuvana-site", "config", "-c", "prod.toml"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("prod.toml"));
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["rejuvana-site"]).is_err());
    }
}
