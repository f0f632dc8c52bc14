#![forbid(unsafe_code)]

//! Drag gesture state machine.
//!
//! One [`DragSession`] tracks one palette drag from pickup to drop or
//! cancel:
//!
//! ```text
//! Idle -> Dragging(kind) -> commit (target | root) -> Idle
//!                        -> cancel                  -> Idle
//! ```
//!
//! # Invariants
//!
//! 1. Only a commit mutates the tree; hover and cancel never do.
//! 2. A drop is attributed to at most one container, the innermost
//!    candidate under the pointer, or to the canvas root.
//! 3. After commit or cancel the session is Idle again and reusable for the
//!    next gesture.
//!
//! Self-nesting can not arise here: candidates come from pointer
//! containment over the existing tree and the dragged payload is a kind,
//! not a node, so a container can never be resolved as its own target.
//!
//! # Example
//!
//! ```
//! use pw_core::ElementKind;
//! use pw_dnd::DragSession;
//! use pw_session::Session;
//!
//! let mut session = Session::new();
//! let section = session.add(ElementKind::Container, None).unwrap();
//!
//! let mut drag = DragSession::new();
//! drag.begin(ElementKind::Heading);
//! drag.hover(session.nodes(), &[section]);
//! let new_id = drag.commit(&mut session).unwrap();
//!
//! assert_eq!(session.selected_id(), Some(new_id));
//! assert!(!drag.is_dragging());
//! ```

use pw_core::{ElementKind, Node, NodeId};
use pw_session::Session;
use tracing::debug;

use crate::resolver::resolve_target;

/// Current phase of the drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    /// No gesture in progress.
    #[default]
    Idle,
    /// A palette item of this kind is in flight.
    Dragging(ElementKind),
}

/// Stateful tracker for a single drag-and-drop gesture.
///
/// The transport layer drives it: [`begin`](DragSession::begin) on pickup,
/// [`hover`](DragSession::hover) as the pointer moves, then either
/// [`commit`](DragSession::commit) or [`cancel`](DragSession::cancel).
#[derive(Debug, Default)]
pub struct DragSession {
    state: DragState,
    target: Option<NodeId>,
}

impl DragSession {
    /// An idle drag session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current gesture phase.
    #[must_use]
    pub const fn state(&self) -> DragState {
        self.state
    }

    /// Whether a gesture is in progress.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    /// The container the drop would land in right now. `None` is the
    /// canvas root. Exposed so the renderer can highlight the target.
    #[must_use]
    pub const fn target(&self) -> Option<NodeId> {
        self.target
    }

    /// Start dragging a palette item. Replaces any stale gesture.
    pub fn begin(&mut self, kind: ElementKind) {
        if self.is_dragging() {
            debug!(kind = %kind, "drag re-begun, replacing stale gesture");
        } else {
            debug!(kind = %kind, "drag started");
        }
        self.state = DragState::Dragging(kind);
        self.target = None;
    }

    /// Report the containers currently under the pointer and remember the
    /// resolved target.
    ///
    /// Returns the target for hover highlighting. Does nothing while idle.
    pub fn hover(&mut self, tree: &[Node], candidates: &[NodeId]) -> Option<NodeId> {
        if !self.is_dragging() {
            return None;
        }
        self.target = resolve_target(tree, candidates);
        self.target
    }

    /// Commit the drop: materialize the dragged kind under the remembered
    /// target (canvas root when none) and select the new node.
    ///
    /// Returns the new node's id. Returns `None` when idle, or when the
    /// target container disappeared between hover and commit, in which case
    /// nothing is mutated. Either way the gesture ends in Idle.
    pub fn commit(&mut self, session: &mut Session) -> Option<NodeId> {
        let DragState::Dragging(kind) = self.state else {
            return None;
        };
        let target = self.target.take();
        self.state = DragState::Idle;
        let new_id = session.add(kind, target);
        debug!(kind = %kind, ?target, ?new_id, "drop committed");
        new_id
    }

    /// Abort the gesture. No tree mutation.
    pub fn cancel(&mut self) {
        if self.is_dragging() {
            debug!("drag cancelled");
        }
        self.state = DragState::Idle;
        self.target = None;
    }
}
