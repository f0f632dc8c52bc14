#![forbid(unsafe_code)]

//! Pagewright public facade crate.
//!
//! This crate provides the stable surface area for embedding applications.
//! It re-exports the node vocabulary from `pw-core`, the editing session
//! from `pw-session`, and drag-and-drop from `pw-dnd`; the pure tree
//! operations stay namespaced under [`tree`].
//!
//! # Example
//!
//! ```
//! use pagewright::{DragSession, ElementKind, Session};
//!
//! let mut session = Session::new();
//! let section = session.add(ElementKind::Container, None).unwrap();
//!
//! let mut drag = DragSession::new();
//! drag.begin(ElementKind::Heading);
//! drag.hover(session.nodes(), &[section]);
//! let heading = drag.commit(&mut session).unwrap();
//!
//! assert_eq!(session.selected_id(), Some(heading));
//! ```

// --- Core re-exports -------------------------------------------------------

pub use pw_core::{
    ElementKind, Node, NodeId, NodeIdGen, NodePatch, StyleMap, StyleValue, Template, TemplateSet,
    styles,
};

// --- Session re-exports ----------------------------------------------------

pub use pw_session::{Session, SessionOptions};

// --- Drag-and-drop re-exports ----------------------------------------------

pub use pw_dnd::{DragSession, DragState, resolve_target};

// --- Tree operations -------------------------------------------------------

pub use pw_tree as tree;
