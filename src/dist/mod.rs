//! Buildpack identity and detection order model.
//!
//! These are the value types a builder image carries in its metadata labels:
//! buildpack identities, the references that make up detection groups, and the
//! per-buildpack layer metadata that may attach a nested order to a buildpack.
//!
//! Nothing in here has behavior beyond lookups and display; resolution of the
//! nested orders lives in [`crate::resolver`].
//!
//! # JSON Shape
//!
//! ```json
//! {
//!   "order": [
//!     { "group": [ { "id": "paketo/java", "version": "1.0.0", "optional": true } ] }
//!   ]
//! }
//! ```

mod layers;

pub use layers::{BuildpackLayerInfo, BuildpackLayers, Stack};

use serde::{Deserialize, Serialize};
use std::fmt;

/// The `(id, version)` pair naming one buildpack release.
///
/// An empty version means the version was left unspecified; such an identity
/// displays as the bare id and never resolves to layer metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BuildpackIdentity {
    /// Buildpack id, e.g. `paketo-buildpacks/node-engine`
    pub id: String,
    /// Buildpack version; empty when unspecified
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub version: String,
}

impl BuildpackIdentity {
    /// Create an identity with an explicit version.
    pub fn new(id: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            version: version.into(),
        }
    }

    /// Create an identity with no version.
    pub fn unversioned(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            version: String::new(),
        }
    }

    /// Whether a version was specified.
    pub fn has_version(&self) -> bool {
        !self.version.is_empty()
    }
}

impl fmt::Display for BuildpackIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_version() {
            write!(f, "{}@{}", self.id, self.version)
        } else {
            write!(f, "{}", self.id)
        }
    }
}

/// One row of the builder's flat buildpack list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildpackInfo {
    #[serde(flatten)]
    pub identity: BuildpackIdentity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
}

impl BuildpackInfo {
    pub fn new(id: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            identity: BuildpackIdentity::new(id, version),
            homepage: None,
        }
    }

    #[must_use]
    pub fn with_homepage(mut self, homepage: impl Into<String>) -> Self {
        self.homepage = Some(homepage.into());
        self
    }
}

/// A single entry in a detection [`Group`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildpackRef {
    #[serde(flatten)]
    pub identity: BuildpackIdentity,
    /// Whether detection may pass without this buildpack
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub optional: bool,
}

impl BuildpackRef {
    /// A required reference.
    pub fn required(identity: BuildpackIdentity) -> Self {
        Self {
            identity,
            optional: false,
        }
    }

    /// An optional reference.
    pub fn optional(identity: BuildpackIdentity) -> Self {
        Self {
            identity,
            optional: true,
        }
    }
}

/// An ordered set of buildpacks attempted together during detection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    #[serde(rename = "group", default)]
    pub buildpacks: Vec<BuildpackRef>,
}

impl Group {
    pub fn new(buildpacks: Vec<BuildpackRef>) -> Self {
        Self {
            buildpacks,
        }
    }
}

/// Alternative groups evaluated in order. Empty means no order was declared.
pub type Order = Vec<Group>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_display() {
        assert_eq!(BuildpackIdentity::new("bp.one", "1.0.0").to_string(), "bp.one@1.0.0");
        assert_eq!(BuildpackIdentity::unversioned("bp.two").to_string(), "bp.two");
    }

    #[test]
    fn test_identity_equality_requires_both_fields() {
        let a = BuildpackIdentity::new("bp", "1");
        assert_eq!(a, BuildpackIdentity::new("bp", "1"));
        assert_ne!(a, BuildpackIdentity::new("bp", "2"));
        assert_ne!(a, BuildpackIdentity::unversioned("bp"));
    }

    #[test]
    fn test_order_deserializes_from_label_json() {
        let json = r#"[
            { "group": [
                { "id": "top.nested", "version": "v1" },
                { "id": "bp.two", "optional": true }
            ] }
        ]"#;

        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.len(), 1);
        assert_eq!(
            order[0].buildpacks[0],
            BuildpackRef::required(BuildpackIdentity::new("top.nested", "v1"))
        );
        assert_eq!(
            order[0].buildpacks[1],
            BuildpackRef::optional(BuildpackIdentity::unversioned("bp.two"))
        );
    }

    #[test]
    fn test_buildpack_info_homepage_is_optional() {
        let info: BuildpackInfo =
            serde_json::from_str(r#"{ "id": "bp", "version": "1" }"#).unwrap();
        assert_eq!(info, BuildpackInfo::new("bp", "1"));

        let info: BuildpackInfo = serde_json::from_str(
            r#"{ "id": "bp", "version": "1", "homepage": "https://example.com" }"#,
        )
        .unwrap();
        assert_eq!(info.homepage.as_deref(), Some("https://example.com"));
    }
}
