//! Detection order tree art.
//!
//! ```text
//! Detection Order:
//!  └ Group #1:
//!     ├ test.top.nested@test.top.nested.version
//!     │  └ Group #1:
//!     │     └ test.bp.three@test.bp.three.version    (optional)
//!     └ test.bp.two                                  (optional)
//! ```
//!
//! Node lines carry two cells, the tree-art label and a marker, aligned per
//! column block (see [`ColumnWriter`]). Group headers are single cells and
//! therefore split blocks.

use super::{ColumnWriter, InspectWarning, NONE, Section};
use crate::resolver::{ResolvedGroup, ResolvedNode};

const PADDING: usize = 4;
const TOP_INDENT: &str = " ";
const LAST_BRANCH: &str = "└";
const BRANCH: &str = "├";
const CONTINUATION: &str = "│  ";
const BLANK: &str = "   ";
const CYCLIC_MARKER: &str = "[cyclic]";
const OPTIONAL_MARKER: &str = "(optional)";

/// Render a resolved detection order under `title`.
///
/// An empty order renders `  (none)` and raises
/// [`InspectWarning::NoDetectionOrder`]. Depth is never consulted here; a
/// truncated node is drawn as a plain leaf.
pub fn render_detection_order(groups: &[ResolvedGroup], title: &str) -> Section {
    let mut writer = ColumnWriter::new(PADDING);
    writer.push_line(title);

    if groups.is_empty() {
        writer.push_line(format!("  {NONE}"));
        return Section::new(writer.finish()).with_warning(InspectWarning::NoDetectionOrder);
    }

    write_groups(&mut writer, groups, TOP_INDENT);
    Section::new(writer.finish())
}

fn write_groups(writer: &mut ColumnWriter, groups: &[ResolvedGroup], indent: &str) {
    for (i, group) in groups.iter().enumerate() {
        let is_last = i + 1 == groups.len();
        writer.push_line(format!("{indent}{} Group #{}:", branch(is_last), i + 1));

        let child_indent = format!("{indent}{}", continuation(is_last));
        write_nodes(writer, &group.nodes, &child_indent);
    }
}

fn write_nodes(writer: &mut ColumnWriter, nodes: &[ResolvedNode], indent: &str) {
    for (i, node) in nodes.iter().enumerate() {
        let is_last = i + 1 == nodes.len();
        writer.push_row([
            format!("{indent}{} {}", branch(is_last), node.reference.identity),
            marker(node).to_string(),
        ]);

        let children = node.children();
        if !children.is_empty() {
            let child_indent = format!("{indent}{}", continuation(is_last));
            write_groups(writer, children, &child_indent);
        }
    }
}

fn branch(is_last: bool) -> &'static str {
    if is_last { LAST_BRANCH } else { BRANCH }
}

fn continuation(is_last: bool) -> &'static str {
    if is_last { BLANK } else { CONTINUATION }
}

fn marker(node: &ResolvedNode) -> &'static str {
    if node.is_cyclic() {
        CYCLIC_MARKER
    } else if node.reference.optional {
        OPTIONAL_MARKER
    } else {
        ""
    }
}
