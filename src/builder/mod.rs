//! Builder image metadata.
//!
//! [`BuilderInfo`] is the fully materialized view of one builder image (local
//! or remote) as handed over by a [`MetadataProvider`](crate::provider::MetadataProvider).
//! It is immutable for the duration of an inspection; the resolver and the
//! renderers only ever borrow it.

pub mod lifecycle;

pub use lifecycle::{ApiVersions, LifecycleApis, LifecycleDescriptor, LifecycleFeature};

use serde::{Deserialize, Serialize};

use crate::dist::{BuildpackInfo, BuildpackLayers, Order};

/// Tool that created the builder image.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatorMetadata {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub version: String,
}

impl CreatorMetadata {
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.version.is_empty()
    }
}

/// Everything known about a builder image.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct BuilderInfo {
    #[serde(default)]
    pub description: String,
    /// Stack id the builder targets
    #[serde(default)]
    pub stack: String,
    #[serde(default)]
    pub mixins: Vec<String>,
    #[serde(default)]
    pub run_image: String,
    #[serde(default)]
    pub run_image_mirrors: Vec<String>,
    /// Flat list of buildpacks shipped in the builder
    #[serde(default)]
    pub buildpacks: Vec<BuildpackInfo>,
    /// Root detection order
    #[serde(default)]
    pub order: Order,
    #[serde(default)]
    pub buildpack_layers: BuildpackLayers,
    #[serde(default)]
    pub lifecycle: LifecycleDescriptor,
    #[serde(default)]
    pub created_by: CreatorMetadata,
}
