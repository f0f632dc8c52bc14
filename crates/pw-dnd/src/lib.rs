#![forbid(unsafe_code)]

//! Drag-and-drop for the Pagewright canvas.
//!
//! Two pieces: [`resolve_target`], the innermost-wins resolution over the
//! containers under the pointer, and [`DragSession`], the per-gesture state
//! machine that consumes the transport's hover/commit/cancel events.

pub mod gesture;
pub mod resolver;

pub use gesture::{DragSession, DragState};
pub use resolver::resolve_target;
