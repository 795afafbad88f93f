//! Command-line interface for builder-inspect.
//!
//! Built on `clap` derive. Global flags apply to every subcommand:
//!
//! - `--verbose` / `-v` - Debug logging, and stack mixins in reports
//! - `--quiet` / `-q` - Only log errors
//! - `--config` / `-c` - Config file (default `~/.builder-inspect/config.toml`,
//!   or `BUILDER_INSPECT_CONFIG`)
//!
//! # Commands
//!
//! - `inspect-builder` - Show a builder's metadata, lifecycle and detection order
//! - `suggest-builders` - List well-known builders
//! - `set-default-builder` - Store the builder `inspect-builder` uses by default
//!
//! ```bash
//! builder-inspect inspect-builder paketobuildpacks/builder:base --depth 2
//! builder-inspect --verbose inspect-builder --metadata ./builders.json
//! builder-inspect set-default-builder heroku/buildpacks:18
//! ```
//!
//! Each command module exposes an `execute_with_config` entry point taking the
//! [`CliConfig`] built from the global flags.

mod common;
pub mod inspect_builder;
pub mod set_default_builder;
pub mod suggest_builders;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::constants::CONFIG_ENV;

/// Settings derived from the global flags.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Default log filter directive; `RUST_LOG` takes precedence when set
    pub log_level: String,
    /// Whether reports include verbose-only details
    pub verbose: bool,
    /// Config file override; `None` means the default location
    pub config_path: Option<PathBuf>,
}

/// Inspect buildpack builder images.
#[derive(Parser, Debug)]
#[command(
    name = "builder-inspect",
    about = "Inspect buildpack builder images",
    version,
    long_about = "Shows a builder's lifecycle, run images, buildpacks and the fully \
                  resolved detection order, from a local JSON metadata catalog."
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress all logging except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to the config file
    #[arg(short, long, global = true, env = CONFIG_ENV)]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show information about a builder
    InspectBuilder(inspect_builder::InspectBuilderCommand),

    /// List well-known builders
    SuggestBuilders(suggest_builders::SuggestBuildersCommand),

    /// Set the default builder used by other commands
    SetDefaultBuilder(set_default_builder::SetDefaultBuilderCommand),
}

impl Cli {
    /// Execute the parsed command.
    pub async fn execute(self) -> Result<()> {
        let config = self.build_config();
        self.execute_with_config(config).await
    }

    /// Translate the global flags into a [`CliConfig`].
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
            verbose: self.verbose,
            config_path: self.config.clone(),
        }
    }

    /// Execute with an explicit configuration.
    pub async fn execute_with_config(self, config: CliConfig) -> Result<()> {
        match self.command {
            Commands::InspectBuilder(cmd) => cmd.execute_with_config(&config).await,
            Commands::SuggestBuilders(cmd) => cmd.execute_with_config(&config).await,
            Commands::SetDefaultBuilder(cmd) => cmd.execute_with_config(&config).await,
        }
    }
}
