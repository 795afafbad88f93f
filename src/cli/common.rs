//! Helpers shared by the command implementations.

use anyhow::Result;
use std::path::PathBuf;
use tracing::debug;

use crate::config::Config;
use crate::provider::FileMetadataProvider;

/// Load the metadata catalog from `metadata`, or from the default location.
pub(crate) async fn load_provider(metadata: Option<PathBuf>) -> Result<FileMetadataProvider> {
    let path = match metadata {
        Some(path) => path,
        None => Config::default_catalog_path()?,
    };
    debug!(path = %path.display(), "Loading metadata catalog");
    FileMetadataProvider::load(&path).await
}
