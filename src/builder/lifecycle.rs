//! Lifecycle descriptor and feature gates.
//!
//! A builder embeds one lifecycle release. The descriptor records the
//! lifecycle's own semantic version and the buildpack/platform API versions
//! it deprecates and supports.

use semver::{Version, VersionReq};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::LazyLock;

use crate::version::{ApiSet, ApiVersion};

/// Deprecated and supported versions of one lifecycle API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiVersions {
    #[serde(default)]
    pub deprecated: ApiSet,
    #[serde(default)]
    pub supported: ApiSet,
}

/// Both lifecycle API families.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifecycleApis {
    #[serde(default)]
    pub buildpack: ApiVersions,
    #[serde(default)]
    pub platform: ApiVersions,
}

/// The lifecycle a builder ships with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifecycleDescriptor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<Version>,
    #[serde(default)]
    pub apis: LifecycleApis,
}

/// Lifecycle capabilities that depend on the lifecycle version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifecycleFeature {
    /// The single-binary `creator` phase
    CreatorInLifecycle,
}

impl LifecycleFeature {
    pub fn all() -> &'static [Self] {
        &[Self::CreatorInLifecycle]
    }
}

static FEATURE_REQUIREMENTS: LazyLock<HashMap<LifecycleFeature, VersionReq>> =
    LazyLock::new(|| {
        HashMap::from([(
            LifecycleFeature::CreatorInLifecycle,
            VersionReq {
                comparators: vec![semver::Comparator {
                    op: semver::Op::GreaterEq,
                    major: 0,
                    minor: Some(7),
                    patch: Some(4),
                    pre: semver::Prerelease::EMPTY,
                }],
            },
        )])
    });

impl LifecycleDescriptor {
    /// Whether this lifecycle provides `feature`.
    ///
    /// An unknown lifecycle version supports nothing.
    pub fn supports_feature(&self, feature: LifecycleFeature) -> bool {
        let Some(version) = &self.version else {
            return false;
        };
        FEATURE_REQUIREMENTS.get(&feature).is_some_and(|req| req.matches(version))
    }

    /// Lowest supported buildpack API, if any are declared.
    pub fn earliest_buildpack_api(&self) -> Option<&ApiVersion> {
        self.apis.buildpack.supported.earliest()
    }

    /// Lowest supported platform API, if any are declared.
    pub fn earliest_platform_api(&self) -> Option<&ApiVersion> {
        self.apis.platform.supported.earliest()
    }
}
