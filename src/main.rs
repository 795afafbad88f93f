//! builder-inspect CLI entry point
//!
//! Parses arguments, installs logging on stderr and runs the selected
//! command. Failures are shown through
//! [`user_friendly_error`](builder_inspect::core::user_friendly_error) and
//! exit with status 1.

use anyhow::Result;
use builder_inspect::cli::{self, CliConfig};
use builder_inspect::core::user_friendly_error;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    let config = cli.build_config();

    init_logging(&config);

    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    match cli.execute_with_config(config).await {
        Ok(()) => Ok(()),
        Err(e) => {
            user_friendly_error(e).display();
            std::process::exit(1);
        }
    }
}

/// Log to stderr; stdout carries the report.
fn init_logging(config: &CliConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}
