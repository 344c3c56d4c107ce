//! Command-line interface for weekmenu.
//!
//! # Commands
//!
//! - `pick` - Pick a random selection of documents (the weekly menu)
//! - `list` - List every document with its tags and report skipped files
//! - `tags` - Show how often each tag is used
//!
//! # Global Options
//!
//! - `--verbose` - Enable debug logging
//! - `--quiet` - Only log errors
//! - `--config` - Path to a config file (see [`crate::config`])
//! - `--no-color` - Disable coloured output
//!
//! # Example
//!
//! ```bash
//! # Seven random recipes from ./example_files
//! weekmenu pick
//!
//! # Five vegetarian dinners, reproducibly
//! weekmenu pick --dir ~/recipes -n 5 --tag dinner --tag vegetarian --seed 42
//!
//! # Everything, as JSON
//! weekmenu list --format json
//! ```

mod common;
mod list;
mod pick;
mod tags;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::config::MenuConfig;

/// Runtime configuration derived from the global flags.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Log filter used when `RUST_LOG` is not set.
    pub log_level: String,

    /// Explicit config file path from `--config`.
    pub config_path: Option<PathBuf>,

    /// Disable ANSI colours.
    pub no_color: bool,
}

impl CliConfig {
    /// Install the global tracing subscriber and colour settings.
    ///
    /// `RUST_LOG` takes precedence over the level chosen from the flags.
    /// Logs go to stderr so stdout stays clean for the menu and JSON output.
    pub fn apply(&self) {
        if self.no_color {
            colored::control::set_override(false);
        }

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("weekmenu={}", self.log_level)));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_ansi(!self.no_color)
            .without_time()
            .try_init();
    }
}

#[derive(Parser)]
#[command(
    name = "weekmenu",
    about = "Pick a random weekly menu from front-matter tagged documents",
    version,
    long_about = "weekmenu scans a folder of markdown documents, reads the tags declared in their \
                  YAML (---) or TOML (+++) front matter, and picks a random selection of them."
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Path to the config file (default: $WEEKMENU_CONFIG or ~/.weekmenu/config.toml)
    #[arg(short, long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Disable coloured output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Pick a random selection of documents
    Pick(pick::PickCommand),

    /// List documents and their tags
    List(list::ListCommand),

    /// Show tag usage across the library
    Tags(tags::TagsCommand),
}

impl Cli {
    /// Run the parsed command.
    pub async fn execute(self) -> Result<()> {
        let config = self.build_config();
        self.execute_with_config(config).await
    }

    /// Derive [`CliConfig`] from the global flags.
    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "warn"
        };

        CliConfig {
            log_level: log_level.to_string(),
            config_path: self.config.clone(),
            no_color: self.no_color,
        }
    }

    /// Run with an explicit [`CliConfig`].
    pub async fn execute_with_config(self, config: CliConfig) -> Result<()> {
        config.apply();

        let settings = MenuConfig::load_with_optional(config.config_path.clone()).await?;
        settings.validate()?;

        match self.command {
            Commands::Pick(cmd) => cmd.execute(&settings).await,
            Commands::List(cmd) => cmd.execute(&settings).await,
            Commands::Tags(cmd) => cmd.execute(&settings).await,
        }
    }
}
