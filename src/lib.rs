//! builder-inspect - inspect buildpack builder images
//!
//! A builder image bundles a set of buildpacks, a lifecycle and a detection
//! order. The detection order is stored flat: the root order references
//! buildpacks by `(id, version)` and each meta-buildpack carries a nested order
//! of its own in the builder's layer metadata. This crate expands those
//! references into the tree a build actually evaluates, and renders it next
//! to the rest of the builder's metadata.
//!
//! # Core Modules
//!
//! - [`dist`] - Buildpack identities, references, groups and layer metadata
//! - [`resolver`] - Detection order expansion with cycle and depth handling
//! - [`render`] - Column-aligned text rendering of trees, tables and summaries
//! - [`version`] - Buildpack/Platform API versions
//! - [`builder`] - Builder metadata and lifecycle descriptor
//!
//! # Application Modules
//!
//! - [`provider`] - Sources of builder metadata (JSON catalog on disk)
//! - [`report`] - The full per-location inspection report and suggested builders
//! - [`config`] - User configuration (`~/.builder-inspect/config.toml`)
//! - [`cli`] - Command-line interface
//! - [`core`] - Error types and user-facing error display
//!
//! # Example
//!
//! ```rust
//! use builder_inspect::dist::{BuildpackIdentity, BuildpackLayers, BuildpackRef, Group};
//! use builder_inspect::render::render_detection_order;
//! use builder_inspect::resolver::{MaxDepth, resolve_order};
//!
//! let order = vec![Group::new(vec![
//!     BuildpackRef::required(BuildpackIdentity::new("paketo/node", "1.0.0")),
//!     BuildpackRef::optional(BuildpackIdentity::new("paketo/procfile", "2.0.0")),
//! ])];
//!
//! let tree = resolve_order(&order, &BuildpackLayers::new(), MaxDepth::Unlimited);
//! let section = render_detection_order(&tree.groups, "Detection Order:");
//! assert!(section.text.contains("paketo/procfile@2.0.0"));
//! ```

pub mod builder;
pub mod cli;
pub mod config;
pub mod constants;
pub mod core;
pub mod dist;
pub mod provider;
pub mod render;
pub mod report;
pub mod resolver;
pub mod version;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
