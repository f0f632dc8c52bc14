#![forbid(unsafe_code)]

//! Pure mutation engine for the component tree.
//!
//! Every operation takes the tree by value and returns the next tree; the
//! caller replaces its copy wholesale. Old snapshots stay valid values,
//! which keeps the door open for history support without any change here.
//!
//! The root is itself an ordered `Vec<Node>`; there is no synthetic
//! super-root node.
//!
//! # Invariants
//!
//! 1. Only container nodes ever own a child list. [`insert`] refuses to
//!    attach to a leaf, even when handed a leaf id as the parent.
//! 2. Operations aimed at an id absent from the tree return the tree
//!    unchanged. Absent targets are expected (a container can be removed
//!    between a hover resolution and the drop commit) and are not errors.
//! 3. Removal discards the whole subtree; children are never promoted to
//!    the removed node's parent.
//! 4. Traversal is pre-order: a node before its children, children before
//!    following siblings.
//!
//! # Example
//!
//! ```
//! use pw_core::{ElementKind, NodeIdGen, TemplateSet};
//!
//! let templates = TemplateSet::default();
//! let mut ids = NodeIdGen::new();
//!
//! let section = templates.instantiate(ElementKind::Container, &mut ids);
//! let section_id = section.id();
//! let heading = templates.instantiate(ElementKind::Heading, &mut ids);
//! let heading_id = heading.id();
//!
//! let tree = pw_tree::insert(Vec::new(), section, None);
//! let tree = pw_tree::insert(tree, heading, Some(section_id));
//!
//! assert!(pw_tree::find(&tree, heading_id).is_some());
//! assert_eq!(pw_tree::depth(&tree, heading_id), Some(1));
//! ```

use pw_core::{Node, NodeId, NodePatch};

/// Append `node` under `parent`, or at root level when `parent` is `None`.
///
/// Prior sibling order is preserved; the new node becomes the last child.
/// When `parent` names a non-container or is absent from the tree, the
/// tree is returned unchanged and the node is dropped.
#[must_use]
pub fn insert(mut tree: Vec<Node>, node: Node, parent: Option<NodeId>) -> Vec<Node> {
    match parent {
        None => tree.push(node),
        Some(parent) => {
            insert_in(&mut tree, parent, node);
        }
    }
    tree
}

/// Walk `nodes` looking for `parent`; gives the node back when nothing
/// accepted it.
fn insert_in(nodes: &mut [Node], parent: NodeId, mut node: Node) -> Option<Node> {
    for candidate in nodes.iter_mut() {
        if candidate.id() == parent {
            // Found the target. Appending to a leaf would hand children to a
            // non-container, so the insert degrades to a no-op instead.
            return match candidate.children_mut() {
                Some(children) => {
                    children.push(node);
                    None
                }
                None => Some(node),
            };
        }
        if let Some(children) = candidate.children_mut() {
            node = insert_in(children, parent, node)?;
        }
    }
    Some(node)
}

/// Insert `node` as the next sibling of `anchor`, at whatever depth the
/// anchor sits. No-op when `anchor` is absent.
#[must_use]
pub fn insert_after(mut tree: Vec<Node>, node: Node, anchor: NodeId) -> Vec<Node> {
    insert_after_in(&mut tree, anchor, node);
    tree
}

fn insert_after_in(nodes: &mut Vec<Node>, anchor: NodeId, mut node: Node) -> Option<Node> {
    if let Some(pos) = nodes.iter().position(|n| n.id() == anchor) {
        nodes.insert(pos + 1, node);
        return None;
    }
    for candidate in nodes.iter_mut() {
        if let Some(children) = candidate.children_mut() {
            node = insert_after_in(children, anchor, node)?;
        }
    }
    Some(node)
}

/// Merge `patch` into the node with `id`. No-op when `id` is absent.
#[must_use]
pub fn update(mut tree: Vec<Node>, id: NodeId, patch: NodePatch) -> Vec<Node> {
    update_in(&mut tree, id, patch);
    tree
}

fn update_in(nodes: &mut [Node], id: NodeId, mut patch: NodePatch) -> Option<NodePatch> {
    for node in nodes.iter_mut() {
        if node.id() == id {
            node.apply(patch);
            return None;
        }
        if let Some(children) = node.children_mut() {
            patch = update_in(children, id, patch)?;
        }
    }
    Some(patch)
}

/// Remove the node with `id` and its entire subtree. No-op when absent.
#[must_use]
pub fn remove(mut tree: Vec<Node>, id: NodeId) -> Vec<Node> {
    remove_in(&mut tree, id);
    tree
}

fn remove_in(nodes: &mut Vec<Node>, id: NodeId) {
    nodes.retain(|node| node.id() != id);
    for node in nodes {
        if let Some(children) = node.children_mut() {
            remove_in(children, id);
        }
    }
}

/// Locate the node with `id`, pre-order.
#[must_use]
pub fn find(tree: &[Node], id: NodeId) -> Option<&Node> {
    for node in tree {
        if node.id() == id {
            return Some(node);
        }
        if let Some(found) = find(node.children(), id) {
            return Some(found);
        }
    }
    None
}

/// Nesting depth of the node with `id`. Root level is 0.
#[must_use]
pub fn depth(tree: &[Node], id: NodeId) -> Option<usize> {
    depth_in(tree, id, 0)
}

fn depth_in(nodes: &[Node], id: NodeId, level: usize) -> Option<usize> {
    for node in nodes {
        if node.id() == id {
            return Some(level);
        }
        if let Some(found) = depth_in(node.children(), id, level + 1) {
            return Some(found);
        }
    }
    None
}

/// Whether `id` occurs anywhere in `node`'s subtree, the node itself
/// included.
#[must_use]
pub fn contains(node: &Node, id: NodeId) -> bool {
    node.id() == id || node.children().iter().any(|child| contains(child, id))
}

/// Reorder the sibling list owned by `parent` (the root sequence for
/// `None`) to match `order`.
///
/// Ids in `order` that are not in the sibling list are ignored; siblings
/// missing from `order` keep their relative order after the ordered ones.
/// Nothing is created, dropped, or reparented. No-op when `parent` is
/// absent or names a non-container.
#[must_use]
pub fn reorder(mut tree: Vec<Node>, parent: Option<NodeId>, order: &[NodeId]) -> Vec<Node> {
    match parent {
        None => apply_order(&mut tree, order),
        Some(parent) => {
            reorder_in(&mut tree, parent, order);
        }
    }
    tree
}

fn reorder_in(nodes: &mut [Node], parent: NodeId, order: &[NodeId]) -> bool {
    for node in nodes.iter_mut() {
        if node.id() == parent {
            if let Some(children) = node.children_mut() {
                apply_order(children, order);
            }
            return true;
        }
        if let Some(children) = node.children_mut()
            && reorder_in(children, parent, order)
        {
            return true;
        }
    }
    false
}

fn apply_order(siblings: &mut Vec<Node>, order: &[NodeId]) {
    let mut rest = std::mem::take(siblings);
    let mut ordered = Vec::with_capacity(rest.len());
    for &id in order {
        if let Some(pos) = rest.iter().position(|n| n.id() == id) {
            ordered.push(rest.remove(pos));
        }
    }
    ordered.append(&mut rest);
    *siblings = ordered;
}

/// Total number of nodes in the tree, all levels.
#[must_use]
pub fn node_count(tree: &[Node]) -> usize {
    tree.iter().map(|node| 1 + node_count(node.children())).sum()
}
