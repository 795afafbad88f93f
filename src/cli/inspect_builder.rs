//! Show information about a builder.
//!
//! Both the registry (remote) and daemon (local) views are looked up
//! concurrently and printed in that order. A view that fails to load is
//! reported inline; the command only fails when neither location knows the
//! image.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use tracing::{debug, warn};

use super::CliConfig;
use super::common::load_provider;
use super::suggest_builders::describe_suggested;
use crate::config::Config;
use crate::constants::METADATA_ENV;
use crate::core::InspectError;
use crate::provider::MetadataProvider;
use crate::report::{
    Location, ReportOptions, render_suggested_builders, render_view, select_default_builder_hint,
};
use crate::resolver::MaxDepth;

/// Command to inspect a builder image.
#[derive(Args, Debug)]
pub struct InspectBuilderCommand {
    /// Builder image to inspect; defaults to the configured default builder
    image: Option<String>,

    /// Maximum depth of the detection order tree (0 or 1 shows only the root groups)
    #[arg(short, long, allow_negative_numbers = true)]
    depth: Option<i64>,

    /// JSON metadata catalog (default `~/.builder-inspect/builders.json`)
    #[arg(long, env = METADATA_ENV)]
    metadata: Option<PathBuf>,
}

/// The image being inspected and how it was chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Target {
    pub image: String,
    pub is_default: bool,
}

impl Target {
    /// Pick the explicit image, falling back to the configured default.
    pub fn resolve(image: Option<String>, config: &Config) -> Option<Self> {
        match image {
            Some(image) => Some(Self {
                image,
                is_default: false,
            }),
            None => config.default_builder.clone().map(|image| Self {
                image,
                is_default: true,
            }),
        }
    }

    fn header(&self) -> String {
        if self.is_default {
            format!("Inspecting default builder: '{}'\n", self.image)
        } else {
            format!("Inspecting builder: '{}'\n", self.image)
        }
    }
}

impl InspectBuilderCommand {
    pub async fn execute_with_config(self, cli: &CliConfig) -> Result<()> {
        let max_depth = MaxDepth::from_requested(self.depth)?;
        let config = Config::load_with_optional(cli.config_path.clone()).await?;
        let options = ReportOptions {
            verbose: cli.verbose,
            max_depth,
        };

        let Some(target) = Target::resolve(self.image, &config) else {
            let provider = load_provider(self.metadata)
                .await
                .inspect_err(|e| debug!("No catalog for suggestions: {e:#}"))
                .ok();
            print!("{}", select_default_builder_hint());
            println!();
            print!("{}", render_suggested_builders(&describe_suggested(provider.as_ref()).await));
            return Err(InspectError::NoDefaultBuilder.into());
        };

        let provider = load_provider(self.metadata).await?;
        let report = inspect(&provider, &target, &config, options).await?;
        print!("{report}");
        Ok(())
    }
}

/// Look up both views of `target` and render the full report.
pub(crate) async fn inspect<P: MetadataProvider>(
    provider: &P,
    target: &Target,
    config: &Config,
    options: ReportOptions,
) -> Result<String> {
    debug!(builder = %target.image, ?options, "Inspecting builder");
    let (remote, local) = tokio::join!(
        provider.inspect_builder(&target.image, Location::Remote.is_daemon()),
        provider.inspect_builder(&target.image, Location::Local.is_daemon()),
    );

    if matches!((&remote, &local), (Ok(None), Ok(None))) {
        return Err(InspectError::BuilderNotFound {
            name: target.image.clone(),
        }
        .into());
    }

    let mut out = target.header();
    for (location, outcome) in [(Location::Remote, &remote), (Location::Local, &local)] {
        if let Err(e) = outcome {
            warn!(builder = %target.image, %location, "Inspection failed: {e:#}");
        }
        out.push_str(&render_view(location, &target.image, outcome, config, options));
    }
    Ok(out)
}
