//! Per-buildpack layer metadata.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{BuildpackIdentity, Order};
use crate::version::ApiVersion;

/// A stack a buildpack declares compatibility with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stack {
    pub id: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mixins: Vec<String>,
}

/// Metadata recorded for one buildpack layer in a builder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildpackLayerInfo {
    /// Buildpack API the buildpack was written against
    pub api: ApiVersion,
    /// Nested detection order; empty for component buildpacks
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub order: Order,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stacks: Vec<Stack>,
    #[serde(rename = "layerDiffID", default)]
    pub layer_diff_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
}

impl BuildpackLayerInfo {
    /// Whether this buildpack carries a nested order of its own.
    pub fn has_order(&self) -> bool {
        !self.order.is_empty()
    }
}

/// Layer metadata keyed by buildpack id, then by version.
///
/// Serialized as the nested object builders store in their layers label:
/// `{"<id>": {"<version>": {...}}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BuildpackLayers(BTreeMap<String, BTreeMap<String, BuildpackLayerInfo>>);

impl BuildpackLayers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up layer metadata by exact id and version.
    ///
    /// Identities without a version never match.
    pub fn get(&self, identity: &BuildpackIdentity) -> Option<&BuildpackLayerInfo> {
        if !identity.has_version() {
            return None;
        }
        self.0.get(&identity.id)?.get(&identity.version)
    }

    pub fn insert(&mut self, identity: BuildpackIdentity, info: BuildpackLayerInfo) {
        self.0.entry(identity.id).or_default().insert(identity.version, info);
    }

    #[must_use]
    pub fn with(mut self, identity: BuildpackIdentity, info: BuildpackLayerInfo) -> Self {
        self.insert(identity, info);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of (id, version) entries.
    pub fn len(&self) -> usize {
        self.0.values().map(BTreeMap::len).sum()
    }
}
