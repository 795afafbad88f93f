//! Builder metadata sources.
//!
//! A [`MetadataProvider`] answers one question: what does builder `name` look
//! like, either as stored locally (`daemon = true`) or in its registry
//! (`daemon = false`)? `Ok(None)` means the image does not exist in that
//! location; `Err` means the lookup itself failed.
//!
//! The only concrete provider is [`FileMetadataProvider`], backed by a JSON
//! catalog on disk:
//!
//! ```json
//! {
//!   "builders": {
//!     "some/image": {
//!       "remote": { "stack": "test.stack.id", "run-image": "some/run-image" },
//!       "local": null
//!     }
//!   }
//! }
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::future::Future;
use std::path::Path;
use tracing::debug;

use crate::builder::BuilderInfo;
use crate::core::InspectError;

/// Source of builder metadata.
pub trait MetadataProvider: Sync {
    /// Look up `name` in the daemon (`daemon = true`) or the registry.
    fn inspect_builder(
        &self,
        name: &str,
        daemon: bool,
    ) -> impl Future<Output = Result<Option<BuilderInfo>>> + Send;
}

/// Both views of one builder image.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local: Option<BuilderInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote: Option<BuilderInfo>,
}

/// On-disk catalog of builder metadata keyed by image name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub builders: BTreeMap<String, CatalogEntry>,
}

impl Catalog {
    /// Add or replace both views of `name`.
    #[must_use]
    pub fn with_builder(
        mut self,
        name: impl Into<String>,
        local: Option<BuilderInfo>,
        remote: Option<BuilderInfo>,
    ) -> Self {
        self.builders.insert(
            name.into(),
            CatalogEntry {
                local,
                remote,
            },
        );
        self
    }

    fn lookup(&self, name: &str, daemon: bool) -> Option<&BuilderInfo> {
        let entry = self.builders.get(name)?;
        if daemon { entry.local.as_ref() } else { entry.remote.as_ref() }
    }
}

/// A [`MetadataProvider`] reading a JSON [`Catalog`] file.
#[derive(Debug, Clone)]
pub struct FileMetadataProvider {
    catalog: Catalog,
}

impl FileMetadataProvider {
    /// Read and parse the catalog at `path`.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let exists = tokio::fs::try_exists(path)
            .await
            .with_context(|| format!("Failed to check metadata catalog: {}", path.display()))?;
        if !exists {
            return Err(InspectError::MetadataNotFound {
                path: path.display().to_string(),
            }
            .into());
        }

        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read metadata catalog: {}", path.display()))?;
        let catalog: Catalog =
            serde_json::from_str(&content).map_err(|e| InspectError::MetadataParseError {
                file: path.display().to_string(),
                reason: e.to_string(),
            })?;

        debug!(path = %path.display(), builders = catalog.builders.len(), "Loaded metadata catalog");
        Ok(Self {
            catalog,
        })
    }
}

impl MetadataProvider for FileMetadataProvider {
    fn inspect_builder(
        &self,
        name: &str,
        daemon: bool,
    ) -> impl Future<Output = Result<Option<BuilderInfo>>> + Send {
        let found = self.catalog.lookup(name, daemon).cloned();
        debug!(
            builder = name,
            location = if daemon { "local" } else { "remote" },
            found = found.is_some(),
            "Builder lookup"
        );
        async move { Ok(found) }
    }
}
