//! Detection order resolution.
//!
//! A builder stores its detection order flat: the root order references
//! buildpacks by `(id, version)`, and each buildpack's layer metadata may carry
//! a nested order of its own. This module walks those references and produces
//! the tree a build would actually evaluate.
//!
//! # Algorithm
//!
//! Resolution is a depth-first walk over the root order. Expansion levels are
//! counted from 1 for the root order. For each reference:
//!
//! 1. **Depth bound**: if the node's children would live past [`MaxDepth`],
//!    the node becomes a truncated leaf.
//! 2. **Cycle check**: if the identity is already on the path from the root to
//!    this node's parent, the node is marked cyclic and not expanded.
//! 3. **Expansion**: otherwise the identity is looked up in the layer metadata;
//!    a nested order is resolved one level deeper, anything else is a leaf.
//!
//! The path is a stack that is unwound on backtrack, so the same buildpack may
//! appear on sibling branches or in several root groups without being flagged.
//!
//! # Example
//!
//! ```rust
//! use builder_inspect::dist::{BuildpackIdentity, BuildpackLayers, BuildpackRef, Group};
//! use builder_inspect::resolver::{MaxDepth, resolve_order};
//!
//! let root = vec![Group::new(vec![BuildpackRef::required(BuildpackIdentity::new("bp", "1.0"))])];
//! let tree = resolve_order(&root, &BuildpackLayers::new(), MaxDepth::Unlimited);
//! assert_eq!(tree.groups[0].nodes.len(), 1);
//! ```

mod order;

pub use order::{DetectionOrder, Expansion, ResolvedGroup, ResolvedNode, resolve_order};

use crate::core::InspectError;

/// Maximum number of order expansion levels to resolve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MaxDepth {
    #[default]
    Unlimited,
    /// Expand through this level. `Limited(0)` and `Limited(1)` both leave
    /// every root node unexpanded.
    Limited(usize),
}

impl MaxDepth {
    /// Build a bound from an optional user-supplied value.
    ///
    /// `None` is unlimited. Negative values are rejected.
    pub fn from_requested(depth: Option<i64>) -> Result<Self, InspectError> {
        match depth {
            None => Ok(Self::Unlimited),
            Some(depth) if depth >= 0 => usize::try_from(depth)
                .map(Self::Limited)
                .map_err(|_| InspectError::InvalidDepth {
                    depth,
                }),
            Some(depth) => Err(InspectError::InvalidDepth {
                depth,
            }),
        }
    }

    /// Whether nodes at expansion `level` may be produced.
    pub fn allows(self, level: usize) -> bool {
        match self {
            Self::Unlimited => true,
            Self::Limited(max) => level <= max,
        }
    }
}
