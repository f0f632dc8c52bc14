#![forbid(unsafe_code)]

//! Drop-target resolution.
//!
//! During a drag the transport reports every container whose region
//! contains the pointer, and nesting makes those reports overlap: an inner
//! container's region sits inside all of its ancestors' regions, so one
//! pointer position produces a whole chain of candidates. Exactly one of
//! them may claim the drop.
//!
//! The rule is innermost-wins: the most deeply nested candidate that still
//! resolves to a container in the live tree takes the drop. No surviving
//! candidate means the drop falls through to the canvas root.

use pw_core::{Node, NodeId};
use tracing::trace;

/// Pick the drop target from the containers under the pointer.
///
/// Depth is recomputed against `tree` rather than trusting the transport's
/// reported nesting order, so the contract holds for any candidate
/// ordering: an ancestor never shadows a qualifying descendant, and
/// candidates that have left the tree mid-drag simply drop out. Candidates
/// that name a non-container are ignored.
///
/// Returns `None` for a root-level drop.
#[must_use]
pub fn resolve_target(tree: &[Node], candidates: &[NodeId]) -> Option<NodeId> {
    let mut innermost: Option<(usize, NodeId)> = None;
    for &id in candidates {
        let Some(node) = pw_tree::find(tree, id) else {
            continue;
        };
        if !node.kind().is_container() {
            continue;
        }
        let Some(level) = pw_tree::depth(tree, id) else {
            continue;
        };
        if innermost.is_none_or(|(best, _)| level > best) {
            innermost = Some((level, id));
        }
    }
    let target = innermost.map(|(_, id)| id);
    trace!(?candidates, ?target, "drop target resolved");
    target
}
