//! API version parsing and comparison for the buildpack lifecycle.
//!
//! The lifecycle speaks two versioned APIs, one to buildpacks and one to
//! platforms. Both use a two-component `major.minor` scheme, distinct from the
//! full semantic version of the lifecycle binary itself (which is handled with
//! the [`semver`] crate).
//!
//! # Module Organization
//!
//! - [`ApiVersion`] - A parsed `major.minor` API version
//! - [`ApiSet`] - An ordered list of API versions as declared by a lifecycle
//! - [`comparison`] - Version selection helpers such as [`earliest_version`]
//!
//! # Examples
//!
//! ```rust
//! use builder_inspect::version::{ApiVersion, earliest_version};
//!
//! let versions: Vec<ApiVersion> = vec!["2.3".parse().unwrap(), "1.2".parse().unwrap()];
//! let earliest = earliest_version(versions.iter().map(Some));
//! assert_eq!(earliest.map(ToString::to_string), Some("1.2".to_string()));
//! ```

pub mod comparison;

pub use comparison::earliest_version;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::core::InspectError;

/// A lifecycle API version such as `0.2` or `1.10`.
///
/// Ordering is numeric on major, then minor, so `0.10 > 0.9`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ApiVersion {
    pub major: u64,
    pub minor: u64,
}

impl ApiVersion {
    pub const fn new(major: u64, minor: u64) -> Self {
        Self {
            major,
            minor,
        }
    }
}

impl FromStr for ApiVersion {
    type Err = InspectError;

    /// Parse `major.minor`, accepting a bare `major` as `major.0` and an
    /// optional leading `v`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InspectError::InvalidApiVersion {
            version: s.to_string(),
        };

        let trimmed = s.trim();
        let trimmed = trimmed.strip_prefix('v').unwrap_or(trimmed);
        let (major, minor) = match trimmed.split_once('.') {
            Some((major, minor)) => (major, minor),
            None => (trimmed, "0"),
        };

        let major = major.parse::<u64>().map_err(|_| invalid())?;
        let minor = minor.parse::<u64>().map_err(|_| invalid())?;
        Ok(Self::new(major, minor))
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

impl Serialize for ApiVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ApiVersion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// API versions in the order the lifecycle declared them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApiSet(pub Vec<ApiVersion>);

impl ApiSet {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ApiVersion> {
        self.0.iter()
    }

    /// Version strings in declaration order.
    pub fn as_strings(&self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }

    /// The lowest version in the set, if any.
    pub fn earliest(&self) -> Option<&ApiVersion> {
        earliest_version(self.0.iter().map(Some))
    }
}

impl FromIterator<ApiVersion> for ApiSet {
    fn from_iter<I: IntoIterator<Item = ApiVersion>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
