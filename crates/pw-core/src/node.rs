#![forbid(unsafe_code)]

//! The recursive node model.
//!
//! A [`Node`] is one placed element. Identity and kind are fixed at
//! creation; content, style, and extra attributes change through
//! [`Node::apply`]. Only containers carry a child list, enforced by the type
//! itself: [`Node::children_mut`] is `None` for every other kind, so a leaf
//! can never acquire children.

use crate::id::NodeId;
use crate::kind::ElementKind;
use crate::style::{StyleMap, StyleValue};

/// One placed element in the page tree.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    id: NodeId,
    kind: ElementKind,
    content: String,
    style: StyleMap,
    extra: StyleMap,
    children: Option<Vec<Node>>,
}

impl Node {
    /// Create a bare node of the given kind.
    ///
    /// Containers start with an empty child list; every other kind has none.
    #[must_use]
    pub fn new(id: NodeId, kind: ElementKind) -> Self {
        Self {
            id,
            kind,
            content: String::new(),
            style: StyleMap::new(),
            extra: StyleMap::new(),
            children: kind.is_container().then(Vec::new),
        }
    }

    /// Set the text content.
    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Set the style map.
    #[must_use]
    pub fn with_style(mut self, style: StyleMap) -> Self {
        self.style = style;
        self
    }

    /// Set the extra attribute map.
    #[must_use]
    pub fn with_extra(mut self, extra: StyleMap) -> Self {
        self.extra = extra;
        self
    }

    /// The node's id.
    #[inline]
    #[must_use]
    pub const fn id(&self) -> NodeId {
        self.id
    }

    /// The node's kind.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> ElementKind {
        self.kind
    }

    /// Text content. Empty for images and containers.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Style properties, in insertion order.
    #[must_use]
    pub const fn style(&self) -> &StyleMap {
        &self.style
    }

    /// Kind-specific attributes (e.g. image `src`/`alt`).
    #[must_use]
    pub const fn extra(&self) -> &StyleMap {
        &self.extra
    }

    /// Child nodes in render order. Empty for non-containers.
    #[must_use]
    pub fn children(&self) -> &[Node] {
        self.children.as_deref().unwrap_or(&[])
    }

    /// Mutable child list. `Some` exactly when the node is a container.
    pub fn children_mut(&mut self) -> Option<&mut Vec<Node>> {
        self.children.as_mut()
    }

    /// Merge a patch into this node.
    ///
    /// Content replaces wholesale when present; style and extra merge
    /// key-by-key, keeping untouched entries and their order.
    pub fn apply(&mut self, patch: NodePatch) {
        if let Some(content) = patch.content {
            self.content = content;
        }
        self.style.extend(patch.style);
        self.extra.extend(patch.extra);
    }
}

/// A partial update to a node, as produced by the property-editing surface.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodePatch {
    /// Replacement text content, when the edit touched it.
    pub content: Option<String>,
    /// Style entries to merge in.
    pub style: StyleMap,
    /// Extra attribute entries to merge in.
    pub extra: StyleMap,
}

impl NodePatch {
    /// An empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the node's text content.
    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Merge one style entry.
    #[must_use]
    pub fn with_style(mut self, key: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.style.insert(key.into(), value.into());
        self
    }

    /// Merge one extra attribute.
    #[must_use]
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}
