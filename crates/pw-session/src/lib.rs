#![forbid(unsafe_code)]

//! Stateful editing session over one component tree.
//!
//! [`Session`] owns the tree, the single-selection tracker, the id
//! generator, and the template registry, and applies every mutation as one
//! synchronous whole-tree replacement.

pub mod session;

pub use session::{Session, SessionOptions};
