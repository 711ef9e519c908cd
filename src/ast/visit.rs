//! Depth-first traversal of document trees.
//!
//! Nodes are visited in document order: a parent before its children, and
//! children left to right. Mutations made by a callback are visible to the
//! rest of the walk, so a callback that rewrites a node's children affects
//! which of them get visited.

use super::{Heading, Node};

/// Visit every node in document order.
pub fn visit(node: &Node, f: &mut impl FnMut(&Node)) {
    f(node);
    if let Some(children) = node.children() {
        for child in children {
            visit(child, f);
        }
    }
}

/// Visit every node in document order, with mutable access.
pub fn visit_mut(node: &mut Node, f: &mut impl FnMut(&mut Node)) {
    f(node);
    if let Some(children) = node.children_mut() {
        for child in children {
            visit_mut(child, f);
        }
    }
}

/// Visit every heading in document order, with mutable access.
pub fn for_each_heading_mut(node: &mut Node, f: &mut impl FnMut(&mut Heading)) {
    visit_mut(node, &mut |node| {
        if let Node::Heading(heading) = node {
            f(heading);
        }
    });
}
