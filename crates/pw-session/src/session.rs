#![forbid(unsafe_code)]

//! The editing session: tree ownership, selection, and mutation surface.
//!
//! Events from the embedding UI (palette clicks, drop commits, property
//! edits) arrive one at a time and run synchronously to completion, so a
//! session needs no locking: each mutation swaps the previous tree value
//! for the next one before the method returns.
//!
//! # Invariants
//!
//! 1. At most one node is selected, and the selected id always resolves in
//!    the live tree. Removing a subtree that contains the selected node
//!    clears the selection in the same step.
//! 2. Ids are minted by the session's generator and never reused, so no two
//!    nodes in the tree ever share an id.
//! 3. A mutation aimed at an id that has already left the tree is a silent
//!    no-op; the UI and the tree may briefly disagree mid-gesture and that
//!    race is benign.

use std::mem;

use tracing::{debug, trace};

use pw_core::{ElementKind, Node, NodeId, NodeIdGen, NodePatch, TemplateSet, styles};
use pw_tree as ops;

/// Editing session configuration.
///
/// # Example
///
/// ```
/// use pw_session::{Session, SessionOptions};
///
/// // Start from the seeded welcome page.
/// let session = Session::with_options(SessionOptions {
///     starter_page: true,
///     ..Default::default()
/// });
/// assert_eq!(session.nodes().len(), 1);
///
/// // Or from an empty canvas.
/// let empty = Session::new();
/// assert!(empty.nodes().is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    /// Seed the canvas with the starter welcome page instead of starting
    /// empty.
    pub starter_page: bool,

    /// Template registry used to materialize new nodes. Replace individual
    /// templates to rebrand the palette defaults.
    pub templates: TemplateSet,
}

/// A single-user editing session over one component tree.
///
/// # Example
///
/// ```
/// use pw_core::{ElementKind, NodePatch};
/// use pw_session::Session;
///
/// let mut session = Session::new();
/// let section = session.add(ElementKind::Container, None).unwrap();
/// let heading = session.add(ElementKind::Heading, Some(section)).unwrap();
/// assert_eq!(session.selected_id(), Some(heading));
///
/// session.update(heading, NodePatch::new().with_content("Welcome"));
/// assert_eq!(session.selected_node().unwrap().content(), "Welcome");
/// ```
#[derive(Debug)]
pub struct Session {
    tree: Vec<Node>,
    selected: Option<NodeId>,
    ids: NodeIdGen,
    templates: TemplateSet,
}

impl Session {
    /// An empty session with default templates.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(SessionOptions::default())
    }

    /// A session configured by `options`.
    #[must_use]
    pub fn with_options(options: SessionOptions) -> Self {
        let mut ids = NodeIdGen::new();
        let tree = if options.starter_page {
            starter_page(&mut ids)
        } else {
            Vec::new()
        };
        Self {
            tree,
            selected: None,
            ids,
            templates: options.templates,
        }
    }

    /// The root sequence of the live tree, in render order.
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.tree
    }

    /// The currently selected id, if any.
    #[must_use]
    pub const fn selected_id(&self) -> Option<NodeId> {
        self.selected
    }

    /// The selected node resolved against the live tree.
    ///
    /// Derived on demand, never stored, so it can not diverge from the
    /// tree.
    #[must_use]
    pub fn selected_node(&self) -> Option<&Node> {
        self.selected.and_then(|id| ops::find(&self.tree, id))
    }

    /// Materialize a fresh node of `kind`, attach it under `parent` (root
    /// when `None`), and select it.
    ///
    /// Returns `None` without mutating anything when `parent` has left the
    /// tree or names a non-container; a stale drop target is a benign race,
    /// not an error.
    pub fn add(&mut self, kind: ElementKind, parent: Option<NodeId>) -> Option<NodeId> {
        let node = self.templates.instantiate(kind, &mut self.ids);
        let id = node.id();
        self.tree = ops::insert(mem::take(&mut self.tree), node, parent);
        if ops::find(&self.tree, id).is_none() {
            debug!(%id, kind = %kind, ?parent, "add dropped, target missing");
            return None;
        }
        self.selected = Some(id);
        debug!(%id, kind = %kind, ?parent, "node added");
        Some(id)
    }

    /// Merge `patch` into node `id`. Absent ids are a no-op.
    pub fn update(&mut self, id: NodeId, patch: NodePatch) {
        self.tree = ops::update(mem::take(&mut self.tree), id, patch);
        trace!(%id, "node updated");
    }

    /// Remove node `id` and its entire subtree.
    ///
    /// Clears the selection when the removed subtree contained the selected
    /// node, in the same step, so the selection never dangles.
    pub fn remove(&mut self, id: NodeId) {
        let clears_selection = self.selected.is_some_and(|selected| {
            ops::find(&self.tree, id).is_some_and(|node| ops::contains(node, selected))
        });
        self.tree = ops::remove(mem::take(&mut self.tree), id);
        if clears_selection {
            self.selected = None;
        }
        debug!(%id, cleared_selection = clears_selection, "node removed");
    }

    /// Replace the selection. `None` deselects.
    pub fn select(&mut self, id: Option<NodeId>) {
        self.selected = id;
        trace!(selected = ?id, "selection changed");
    }

    /// Reorder the sibling list under `parent` (the root sequence for
    /// `None`) to match `order`; see [`pw_tree::reorder`].
    pub fn reorder(&mut self, parent: Option<NodeId>, order: &[NodeId]) {
        self.tree = ops::reorder(mem::take(&mut self.tree), parent, order);
        trace!(?parent, "siblings reordered");
    }

    /// Deep-clone the subtree rooted at `id` with fresh ids for every node,
    /// insert the clone as the next sibling of the source, and select it.
    ///
    /// Returns `None` and leaves the tree untouched when `id` is absent.
    pub fn duplicate(&mut self, id: NodeId) -> Option<NodeId> {
        let source = ops::find(&self.tree, id)?;
        let clone = clone_subtree(source, &mut self.ids);
        let clone_id = clone.id();
        self.tree = ops::insert_after(mem::take(&mut self.tree), clone, id);
        self.selected = Some(clone_id);
        debug!(source = %id, clone = %clone_id, "subtree duplicated");
        Some(clone_id)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Copy a subtree node-for-node, minting a fresh id at every level.
fn clone_subtree(source: &Node, ids: &mut NodeIdGen) -> Node {
    let mut clone = Node::new(ids.next_id(), source.kind())
        .with_content(source.content())
        .with_style(source.style().clone())
        .with_extra(source.extra().clone());
    if let Some(children) = clone.children_mut() {
        for child in source.children() {
            children.push(clone_subtree(child, ids));
        }
    }
    clone
}

/// The seeded welcome page: one white flex-column section holding a
/// heading, a sample paragraph, and a call-to-action button.
fn starter_page(ids: &mut NodeIdGen) -> Vec<Node> {
    let heading = Node::new(ids.next_id(), ElementKind::Heading)
        .with_content("Welcome to Your Website")
        .with_style(styles([
            ("fontSize", "2.25rem"),
            ("fontWeight", "bold"),
            ("marginBottom", "1rem"),
            ("color", "#333333"),
        ]));
    let paragraph = Node::new(ids.next_id(), ElementKind::Paragraph)
        .with_content(
            "This is a sample paragraph. Start building your website by dragging \
             elements from the sidebar.",
        )
        .with_style(styles([
            ("fontSize", "1rem"),
            ("marginBottom", "1.5rem"),
            ("color", "#555555"),
        ]));
    let button = Node::new(ids.next_id(), ElementKind::Button)
        .with_content("Get Started")
        .with_style(styles([
            ("backgroundColor", "#0099ff"),
            ("color", "white"),
            ("padding", "0.5rem 1.5rem"),
            ("borderRadius", "0.375rem"),
            ("fontWeight", "500"),
            ("cursor", "pointer"),
            ("border", "none"),
            ("display", "inline-block"),
        ]));

    let mut section = Node::new(ids.next_id(), ElementKind::Container).with_style(styles([
        ("display", "flex"),
        ("flexDirection", "column"),
        ("minHeight", "300px"),
        ("padding", "20px"),
        ("backgroundColor", "#ffffff"),
    ]));
    if let Some(children) = section.children_mut() {
        children.extend([heading, paragraph, button]);
    }
    vec![section]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_at_root_selects_the_new_node() {
        let mut session = Session::new();
        let id = session.add(ElementKind::Heading, None).unwrap();
        assert_eq!(session.nodes().len(), 1);
        assert_eq!(session.selected_id(), Some(id));
        assert_eq!(session.selected_node().unwrap().content(), "New Heading");
    }

    #[test]
    fn add_into_container_nests_the_node() {
        let mut session = Session::new();
        let section = session.add(ElementKind::Container, None).unwrap();
        let heading = session.add(ElementKind::Heading, Some(section)).unwrap();

        let root = &session.nodes()[0];
        assert_eq!(root.children().len(), 1);
        assert_eq!(root.children()[0].id(), heading);
        assert_eq!(session.selected_id(), Some(heading));
    }

    #[test]
    fn add_under_a_missing_parent_mutates_nothing() {
        let mut session = Session::new();
        let section = session.add(ElementKind::Container, None).unwrap();
        session.remove(section);

        let result = session.add(ElementKind::Heading, Some(section));
        assert_eq!(result, None);
        assert!(session.nodes().is_empty());
        assert_eq!(session.selected_id(), None);
    }

    #[test]
    fn add_under_a_leaf_mutates_nothing() {
        let mut session = Session::new();
        let button = session.add(ElementKind::Button, None).unwrap();

        let result = session.add(ElementKind::Heading, Some(button));
        assert_eq!(result, None);
        assert_eq!(session.nodes().len(), 1);
        // Selection stays on the last successful add.
        assert_eq!(session.selected_id(), Some(button));
    }

    #[test]
    fn update_merges_without_dropping_template_keys() {
        let mut session = Session::new();
        let button = session.add(ElementKind::Button, None).unwrap();
        session.update(button, NodePatch::new().with_style("color", "#ff0000"));

        let node = session.selected_node().unwrap();
        assert_eq!(node.style()["color"].as_str(), Some("#ff0000"));
        assert_eq!(node.style()["backgroundColor"].as_str(), Some("#0099ff"));
    }

    #[test]
    fn removing_the_selected_node_clears_selection() {
        let mut session = Session::new();
        let id = session.add(ElementKind::Paragraph, None).unwrap();
        session.remove(id);
        assert_eq!(session.selected_id(), None);
        assert!(session.nodes().is_empty());
    }

    #[test]
    fn removing_an_ancestor_of_the_selection_clears_it_too() {
        let mut session = Session::new();
        let outer = session.add(ElementKind::Container, None).unwrap();
        let inner = session.add(ElementKind::Container, Some(outer)).unwrap();
        let heading = session.add(ElementKind::Heading, Some(inner)).unwrap();
        assert_eq!(session.selected_id(), Some(heading));

        session.remove(outer);
        assert_eq!(session.selected_id(), None);
        assert!(session.nodes().is_empty());
    }

    #[test]
    fn removing_an_unrelated_node_keeps_the_selection() {
        let mut session = Session::new();
        let first = session.add(ElementKind::Heading, None).unwrap();
        let second = session.add(ElementKind::Button, None).unwrap();
        session.select(Some(first));

        session.remove(second);
        assert_eq!(session.selected_id(), Some(first));
    }

    #[test]
    fn select_replaces_unconditionally() {
        let mut session = Session::new();
        let id = session.add(ElementKind::Heading, None).unwrap();
        session.select(None);
        assert_eq!(session.selected_id(), None);
        assert!(session.selected_node().is_none());
        session.select(Some(id));
        assert_eq!(session.selected_id(), Some(id));
    }

    #[test]
    fn duplicate_clones_the_subtree_with_fresh_ids() {
        let mut session = Session::new();
        let section = session.add(ElementKind::Container, None).unwrap();
        let heading = session.add(ElementKind::Heading, Some(section)).unwrap();
        session.update(heading, NodePatch::new().with_content("Original"));

        let clone = session.duplicate(section).unwrap();
        assert_eq!(session.selected_id(), Some(clone));
        assert_eq!(session.nodes().len(), 2);
        assert_eq!(session.nodes()[0].id(), section);
        assert_eq!(session.nodes()[1].id(), clone);

        let cloned = &session.nodes()[1];
        assert_ne!(cloned.id(), section);
        assert_eq!(cloned.children().len(), 1);
        assert_ne!(cloned.children()[0].id(), heading);
        assert_eq!(cloned.children()[0].content(), "Original");
    }

    #[test]
    fn duplicate_of_a_missing_id_is_a_no_op() {
        let mut session = Session::new();
        let id = session.add(ElementKind::Heading, None).unwrap();
        session.remove(id);
        assert_eq!(session.duplicate(id), None);
        assert!(session.nodes().is_empty());
    }

    #[test]
    fn reorder_moves_root_siblings() {
        let mut session = Session::new();
        let a = session.add(ElementKind::Heading, None).unwrap();
        let b = session.add(ElementKind::Paragraph, None).unwrap();
        let c = session.add(ElementKind::Button, None).unwrap();

        session.reorder(None, &[c, a]);
        let ids: Vec<NodeId> = session.nodes().iter().map(Node::id).collect();
        assert_eq!(ids, [c, a, b]);
    }

    #[test]
    fn starter_page_matches_the_seeded_shape() {
        let session = Session::with_options(SessionOptions {
            starter_page: true,
            ..Default::default()
        });

        let roots = session.nodes();
        assert_eq!(roots.len(), 1);
        let section = &roots[0];
        assert_eq!(section.kind(), ElementKind::Container);
        assert_eq!(section.style()["backgroundColor"].as_str(), Some("#ffffff"));

        let kinds: Vec<ElementKind> = section.children().iter().map(Node::kind).collect();
        assert_eq!(
            kinds,
            [ElementKind::Heading, ElementKind::Paragraph, ElementKind::Button]
        );
        assert_eq!(section.children()[0].content(), "Welcome to Your Website");
        assert_eq!(section.children()[2].content(), "Get Started");
        assert_eq!(session.selected_id(), None);
    }

    #[test]
    fn adds_after_the_starter_page_do_not_collide_with_seeded_ids() {
        let mut session = Session::with_options(SessionOptions {
            starter_page: true,
            ..Default::default()
        });
        let section = session.nodes()[0].id();
        let new_id = session.add(ElementKind::Image, Some(section)).unwrap();

        let mut all = Vec::new();
        fn walk(nodes: &[Node], out: &mut Vec<NodeId>) {
            for node in nodes {
                out.push(node.id());
                walk(node.children(), out);
            }
        }
        walk(session.nodes(), &mut all);
        assert!(all.contains(&new_id));
        let mut deduped = all.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), all.len());
    }
}
