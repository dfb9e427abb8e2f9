//! Indented-text rendering of a schema tree.

use crate::tree::{NodeId, SchemaTree};

/// Render `tree` as indented text, one line per node in pre-order.
///
/// Each line is the node's kind label, then the name when non-empty,
/// indented two spaces per level. The synthetic root is not printed.
pub fn render(tree: &SchemaTree) -> String {
    let mut out = String::new();
    for &child in &tree.node(SchemaTree::ROOT).children {
        render_node(tree, child, 0, &mut out);
    }
    out
}

fn render_node(tree: &SchemaTree, id: NodeId, depth: usize, out: &mut String) {
    let node = tree.node(id);
    for _ in 0..depth {
        out.push_str("  ");
    }
    out.push_str(node.kind.label());
    if !node.name.is_empty() {
        out.push(' ');
        out.push_str(&node.name);
    }
    out.push('\n');
    for &child in &node.children {
        render_node(tree, child, depth + 1, out);
    }
}
