//! Recursive expansion of a detection order into a resolved tree.

use tracing::{debug, trace};

use super::MaxDepth;
use crate::dist::{BuildpackIdentity, BuildpackLayers, BuildpackRef, Group, Order};

/// How far a node was expanded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expansion {
    /// No nested order: unknown layer, unversioned ref, or a component buildpack.
    Leaf,
    /// Identity already on the path from the root; not expanded again.
    Cyclic,
    /// Children would exceed the depth bound.
    Truncated,
    /// Nested order resolved one level deeper.
    Expanded(Vec<ResolvedGroup>),
}

/// One buildpack reference after resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedNode {
    pub reference: BuildpackRef,
    pub expansion: Expansion,
}

impl ResolvedNode {
    pub fn is_cyclic(&self) -> bool {
        matches!(self.expansion, Expansion::Cyclic)
    }

    pub fn is_truncated(&self) -> bool {
        matches!(self.expansion, Expansion::Truncated)
    }

    /// Nested groups; empty unless the node was expanded.
    pub fn children(&self) -> &[ResolvedGroup] {
        match &self.expansion {
            Expansion::Expanded(groups) => groups,
            _ => &[],
        }
    }
}

/// A detection group with every reference resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedGroup {
    pub nodes: Vec<ResolvedNode>,
}

/// The resolved root order of a builder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetectionOrder {
    pub groups: Vec<ResolvedGroup>,
}

impl DetectionOrder {
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Expand `root` into a full tree using the nested orders found in `layers`.
///
/// Output order mirrors input order. The same inputs always produce the same
/// tree, and `layers` is only read.
pub fn resolve_order(root: &Order, layers: &BuildpackLayers, max_depth: MaxDepth) -> DetectionOrder {
    let mut resolver = OrderResolver {
        layers,
        max_depth,
        path: Vec::new(),
    };
    let groups = resolver.resolve_groups(root, 1);
    debug_assert!(resolver.path.is_empty(), "resolution path not unwound");

    DetectionOrder {
        groups,
    }
}

struct OrderResolver<'a> {
    layers: &'a BuildpackLayers,
    max_depth: MaxDepth,
    /// Identities currently being expanded, root first.
    path: Vec<BuildpackIdentity>,
}

impl OrderResolver<'_> {
    fn resolve_groups(&mut self, order: &Order, level: usize) -> Vec<ResolvedGroup> {
        order.iter().map(|group| self.resolve_group(group, level)).collect()
    }

    fn resolve_group(&mut self, group: &Group, level: usize) -> ResolvedGroup {
        ResolvedGroup {
            nodes: group.buildpacks.iter().map(|bp| self.resolve_ref(bp, level)).collect(),
        }
    }

    fn resolve_ref(&mut self, reference: &BuildpackRef, level: usize) -> ResolvedNode {
        let identity = &reference.identity;
        trace!("Resolving {} at level {}", identity, level);

        let expansion = if !self.max_depth.allows(level + 1) {
            debug!("Depth bound reached at {}", identity);
            Expansion::Truncated
        } else if self.on_path(identity) {
            debug!("Cycle detected at {} via {}", identity, self.describe_path());
            Expansion::Cyclic
        } else {
            match self.layers.get(identity) {
                Some(info) if info.has_order() => {
                    self.path.push(identity.clone());
                    let children = self.resolve_groups(&info.order, level + 1);
                    let popped = self.path.pop();
                    assert_eq!(popped.as_ref(), Some(identity), "resolution path corrupted");
                    Expansion::Expanded(children)
                }
                _ => Expansion::Leaf,
            }
        };

        ResolvedNode {
            reference: reference.clone(),
            expansion,
        }
    }

    fn on_path(&self, identity: &BuildpackIdentity) -> bool {
        identity.has_version() && self.path.contains(identity)
    }

    fn describe_path(&self) -> String {
        self.path.iter().map(ToString::to_string).collect::<Vec<_>>().join(" → ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dist::BuildpackLayerInfo;

    fn id(name: &str, version: &str) -> BuildpackIdentity {
        BuildpackIdentity::new(name, version)
    }

    fn nested(order: Order) -> BuildpackLayerInfo {
        BuildpackLayerInfo {
            order,
            ..Default::default()
        }
    }

    fn group(refs: Vec<BuildpackRef>) -> Group {
        Group::new(refs)
    }

    /// Scenario: top.nested@v1 -> {nested@v2, bp.three@v3?}, nested@v2 -> {bp.one@v4?}
    fn three_level() -> (Order, BuildpackLayers) {
        let root = vec![group(vec![
            BuildpackRef::required(id("top.nested", "v1")),
            BuildpackRef::optional(BuildpackIdentity::unversioned("bp.two")),
        ])];
        let layers = BuildpackLayers::new()
            .with(
                id("top.nested", "v1"),
                nested(vec![group(vec![
                    BuildpackRef::required(id("nested", "v2")),
                    BuildpackRef::optional(id("bp.three", "v3")),
                ])]),
            )
            .with(
                id("nested", "v2"),
                nested(vec![group(vec![BuildpackRef::optional(id("bp.one", "v4"))])]),
            )
            .with(id("bp.one", "v4"), BuildpackLayerInfo::default())
            .with(id("bp.three", "v3"), BuildpackLayerInfo::default());
        (root, layers)
    }

    /// Scenario: top.nested@v1 <-> nested@v2, reachable from two root groups.
    fn cyclic() -> (Order, BuildpackLayers) {
        let root = vec![
            group(vec![
                BuildpackRef::required(id("top.nested", "v1")),
                BuildpackRef::optional(BuildpackIdentity::unversioned("bp.two")),
            ]),
            group(vec![BuildpackRef::required(id("nested", "v2"))]),
        ];
        let layers = BuildpackLayers::new()
            .with(
                id("top.nested", "v1"),
                nested(vec![group(vec![BuildpackRef::required(id("nested", "v2"))])]),
            )
            .with(
                id("nested", "v2"),
                nested(vec![group(vec![BuildpackRef::required(id("top.nested", "v1"))])]),
            );
        (root, layers)
    }

    #[test]
    fn test_resolves_three_levels() {
        let (root, layers) = three_level();
        let tree = resolve_order(&root, &layers, MaxDepth::Unlimited);

        assert_eq!(tree.groups.len(), 1);
        let top = &tree.groups[0].nodes[0];
        assert_eq!(top.reference.identity, id("top.nested", "v1"));
        assert_eq!(top.children().len(), 1);

        let nested_node = &top.children()[0].nodes[0];
        let bp_three = &top.children()[0].nodes[1];
        assert_eq!(nested_node.reference.identity, id("nested", "v2"));
        assert_eq!(bp_three.expansion, Expansion::Leaf);

        let bp_one = &nested_node.children()[0].nodes[0];
        assert_eq!(bp_one.reference.identity, id("bp.one", "v4"));
        assert!(bp_one.reference.optional);
        assert_eq!(bp_one.expansion, Expansion::Leaf);

        let bp_two = &tree.groups[0].nodes[1];
        assert!(!bp_two.reference.identity.has_version());
        assert_eq!(bp_two.expansion, Expansion::Leaf);
    }

    #[test]
    fn test_depth_two_truncates_second_level() {
        let (root, layers) = three_level();
        let tree = resolve_order(&root, &layers, MaxDepth::Limited(2));

        let top = &tree.groups[0].nodes[0];
        let second = &top.children()[0];
        assert!(second.nodes[0].is_truncated());
        assert!(second.nodes[0].children().is_empty());
        assert!(second.nodes[1].is_truncated());
        assert!(!second.nodes[0].is_cyclic());
    }

    #[test]
    fn test_depth_one_leaves_root_nodes_unexpanded() {
        let (root, layers) = three_level();
        let tree = resolve_order(&root, &layers, MaxDepth::Limited(1));

        assert_eq!(tree.groups[0].nodes.len(), 2);
        assert!(tree.groups[0].nodes.iter().all(ResolvedNode::is_truncated));
    }

    #[test]
    fn test_depth_zero_matches_depth_one() {
        let (root, layers) = three_level();
        let zero = resolve_order(&root, &layers, MaxDepth::Limited(0));

        assert_eq!(zero.groups.len(), 1);
        assert!(zero.groups[0].nodes.iter().all(ResolvedNode::is_truncated));
        assert_eq!(zero, resolve_order(&root, &layers, MaxDepth::Limited(1)));
    }

    #[test]
    fn test_cycles_are_marked_per_path() {
        let (root, layers) = cyclic();
        let tree = resolve_order(&root, &layers, MaxDepth::Unlimited);

        // Group #1: top.nested -> nested -> top.nested [cyclic]
        let top = &tree.groups[0].nodes[0];
        assert!(!top.is_cyclic());
        let inner = &top.children()[0].nodes[0];
        assert_eq!(inner.reference.identity, id("nested", "v2"));
        assert!(!inner.is_cyclic());
        let revisit = &inner.children()[0].nodes[0];
        assert_eq!(revisit.reference.identity, id("top.nested", "v1"));
        assert!(revisit.is_cyclic());
        assert!(revisit.children().is_empty());

        // Group #2 starts from nested and is unaffected by group #1's path.
        let second_root = &tree.groups[1].nodes[0];
        assert!(!second_root.is_cyclic());
        let second_inner = &second_root.children()[0].nodes[0];
        assert_eq!(second_inner.reference.identity, id("top.nested", "v1"));
        assert!(!second_inner.is_cyclic());
        let second_revisit = &second_inner.children()[0].nodes[0];
        assert_eq!(second_revisit.reference.identity, id("nested", "v2"));
        assert!(second_revisit.is_cyclic());
    }

    #[test]
    fn test_same_identity_on_sibling_branches_is_not_cyclic() {
        let shared = id("shared", "1");
        let root = vec![group(vec![
            BuildpackRef::required(id("a", "1")),
            BuildpackRef::required(id("b", "1")),
        ])];
        let layers = BuildpackLayers::new()
            .with(id("a", "1"), nested(vec![group(vec![BuildpackRef::required(shared.clone())])]))
            .with(id("b", "1"), nested(vec![group(vec![BuildpackRef::required(shared.clone())])]))
            .with(shared.clone(), nested(vec![group(vec![BuildpackRef::required(id("leaf", "1"))])]));

        let tree = resolve_order(&root, &layers, MaxDepth::Unlimited);
        for node in &tree.groups[0].nodes {
            let shared_node = &node.children()[0].nodes[0];
            assert_eq!(shared_node.reference.identity, shared);
            assert!(!shared_node.is_cyclic());
            assert_eq!(shared_node.children().len(), 1);
        }
    }

    #[test]
    fn test_self_reference_is_cyclic() {
        let root = vec![group(vec![BuildpackRef::required(id("self", "1"))])];
        let layers = BuildpackLayers::new()
            .with(id("self", "1"), nested(vec![group(vec![BuildpackRef::required(id("self", "1"))])]));

        let tree = resolve_order(&root, &layers, MaxDepth::Unlimited);
        let node = &tree.groups[0].nodes[0];
        assert!(!node.is_cyclic());
        assert!(node.children()[0].nodes[0].is_cyclic());
    }

    #[test]
    fn test_unversioned_refs_are_never_cyclic() {
        // An unversioned ref cannot be looked up, so it never expands either.
        let root = vec![group(vec![BuildpackRef::required(id("a", "1"))])];
        let layers = BuildpackLayers::new().with(
            id("a", "1"),
            nested(vec![group(vec![BuildpackRef::required(BuildpackIdentity::unversioned("a"))])]),
        );

        let tree = resolve_order(&root, &layers, MaxDepth::Unlimited);
        let child = &tree.groups[0].nodes[0].children()[0].nodes[0];
        assert_eq!(child.expansion, Expansion::Leaf);
    }

    #[test]
    fn test_missing_layer_is_a_leaf() {
        let root = vec![group(vec![BuildpackRef::required(id("unknown", "1"))])];
        let tree = resolve_order(&root, &BuildpackLayers::new(), MaxDepth::Unlimited);
        assert_eq!(tree.groups[0].nodes[0].expansion, Expansion::Leaf);
    }

    #[test]
    fn test_empty_order_resolves_to_empty_tree() {
        let tree = resolve_order(&Vec::new(), &BuildpackLayers::new(), MaxDepth::Unlimited);
        assert!(tree.is_empty());
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let (root, layers) = cyclic();
        let first = resolve_order(&root, &layers, MaxDepth::Unlimited);
        let second = resolve_order(&root, &layers, MaxDepth::Unlimited);
        assert_eq!(first, second);
    }

    /// Flatten the part of a tree visible through expansion level `bound`.
    fn visible(groups: &[ResolvedGroup], level: usize, bound: usize, out: &mut Vec<String>) {
        for (index, group) in groups.iter().enumerate() {
            out.push(format!("{level}: group #{}", index + 1));
            for node in &group.nodes {
                out.push(format!("{level}: {}", node.reference.identity));
                if level < bound {
                    visible(node.children(), level + 1, bound, out);
                }
            }
        }
    }

    fn visible_shape(tree: &DetectionOrder, bound: usize) -> Vec<String> {
        let mut out = Vec::new();
        visible(&tree.groups, 1, bound, &mut out);
        out
    }

    #[test]
    fn test_depth_bound_is_monotonic() {
        let (root, layers) = three_level();
        for bound in 1..4 {
            let shallow = resolve_order(&root, &layers, MaxDepth::Limited(bound));
            let deeper = resolve_order(&root, &layers, MaxDepth::Limited(bound + 1));
            let unlimited = resolve_order(&root, &layers, MaxDepth::Unlimited);
            assert_eq!(visible_shape(&shallow, bound), visible_shape(&deeper, bound));
            assert_eq!(visible_shape(&shallow, bound), visible_shape(&unlimited, bound));
        }
    }

    #[test]
    fn test_resolution_does_not_mutate_layers() {
        let (root, layers) = cyclic();
        let before = layers.clone();
        let _ = resolve_order(&root, &layers, MaxDepth::Limited(3));
        assert_eq!(before, layers);
    }
}
