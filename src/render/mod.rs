//! Text rendering of inspection sections.
//!
//! Each renderer turns one part of a builder's metadata into a [`Section`]:
//! the rendered text plus the warnings the caller should surface alongside it.
//! Sections are independent of each other and of where they end up, so the
//! report layer can embed them in any order.
//!
//! - [`tree`] - the resolved detection order as box-drawing tree art
//! - [`summary`] - the buildpack table and the lifecycle API summary
//! - [`columns`] - elastic column alignment shared by both

pub mod columns;
pub mod summary;
pub mod tree;

pub use columns::ColumnWriter;
pub use summary::{render_api_summary, render_buildpack_table};
pub use tree::render_detection_order;

use std::fmt;

/// Placeholder for an empty list or set.
pub const NONE: &str = "(none)";

/// Rendered text of one report section.
///
/// Every line of `text`, including the last, ends with `\n`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    pub text: String,
    pub warnings: Vec<InspectWarning>,
}

impl Section {
    pub fn new(text: String) -> Self {
        Self {
            text,
            warnings: Vec::new(),
        }
    }

    pub fn with_warning(mut self, warning: InspectWarning) -> Self {
        self.warnings.push(warning);
        self
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// A gap in builder metadata that users should be told about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InspectWarning {
    NoBuildpacks,
    NoDetectionOrder,
    NoRunImage,
    NoLifecycleVersion,
    NoBuildpackApis,
    NoPlatformApis,
}

impl InspectWarning {
    fn problem(self) -> &'static str {
        match self {
            Self::NoBuildpacks => "has no buildpacks",
            Self::NoDetectionOrder => "does not specify detection order",
            Self::NoRunImage => "does not specify a run image",
            Self::NoLifecycleVersion => "does not specify a Lifecycle version",
            Self::NoBuildpackApis => "does not specify supported Lifecycle Buildpack APIs",
            Self::NoPlatformApis => "does not specify supported Lifecycle Platform APIs",
        }
    }

    fn guidance(self) -> Option<&'static str> {
        match self {
            Self::NoBuildpacks => Some("Users must supply buildpacks from the host machine"),
            Self::NoDetectionOrder => Some("Users must build with explicitly specified buildpacks"),
            Self::NoRunImage => Some("Users must build with an explicitly specified run image"),
            Self::NoLifecycleVersion | Self::NoBuildpackApis | Self::NoPlatformApis => None,
        }
    }

    /// Full warning text for `image`, without a trailing newline.
    pub fn message(self, image: &str) -> String {
        let mut message = format!("Warning: '{image}' {}", self.problem());
        if let Some(guidance) = self.guidance() {
            message.push_str("\n  ");
            message.push_str(guidance);
        }
        message
    }
}
