#![forbid(unsafe_code)]

//! Core vocabulary for the Pagewright component tree.
//!
//! Defines the node model ([`Node`]), the closed set of element kinds, the
//! open style maps, and the template registry ([`TemplateSet`]) that
//! materializes new nodes. The pure mutation engine lives in `pw-tree`, the
//! stateful editing session in `pw-session`.

pub mod id;
pub mod kind;
pub mod node;
pub mod style;
pub mod template;

pub use id::{NodeId, NodeIdGen};
pub use kind::ElementKind;
pub use node::{Node, NodePatch};
pub use style::{StyleMap, StyleValue, styles};
pub use template::{Template, TemplateSet};
