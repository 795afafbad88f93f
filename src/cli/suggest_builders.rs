//! List well-known builders.

use anyhow::Result;
use clap::Args;
use futures::future::join_all;
use std::path::PathBuf;
use tracing::{debug, warn};

use super::CliConfig;
use super::common::load_provider;
use crate::constants::METADATA_ENV;
use crate::provider::MetadataProvider;
use crate::report::{SUGGESTED_BUILDERS, SuggestedBuilder, render_suggested_builders};

/// Command to list suggested builders with their descriptions.
#[derive(Args, Debug)]
pub struct SuggestBuildersCommand {
    /// JSON metadata catalog used to look up builder descriptions
    #[arg(long, env = METADATA_ENV)]
    metadata: Option<PathBuf>,
}

impl SuggestBuildersCommand {
    pub async fn execute_with_config(self, _config: &CliConfig) -> Result<()> {
        let provider = load_provider(self.metadata)
            .await
            .inspect_err(|e| warn!("Using built-in builder descriptions: {e:#}"))
            .ok();
        let described = describe_suggested(provider.as_ref()).await;
        print!("{}", render_suggested_builders(&described));
        Ok(())
    }
}

/// Pair every suggested builder with the description to show.
///
/// Registry descriptions win; lookups run concurrently and any builder that
/// cannot be described falls back to its built-in text.
pub(crate) async fn describe_suggested<P: MetadataProvider>(
    provider: Option<&P>,
) -> Vec<(SuggestedBuilder, String)> {
    let Some(provider) = provider else {
        return SUGGESTED_BUILDERS
            .iter()
            .map(|builder| (*builder, builder.default_description.to_string()))
            .collect();
    };

    let lookups = SUGGESTED_BUILDERS.iter().map(|builder| async move {
        let description = match provider.inspect_builder(builder.image, false).await {
            Ok(Some(info)) if !info.description.is_empty() => info.description,
            Ok(_) => builder.default_description.to_string(),
            Err(e) => {
                debug!(builder = builder.image, "Description lookup failed: {e:#}");
                builder.default_description.to_string()
            }
        };
        (*builder, description)
    });
    join_all(lookups).await
}
