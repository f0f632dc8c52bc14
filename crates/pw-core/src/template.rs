#![forbid(unsafe_code)]

//! Template registry: the default shape of each element kind.
//!
//! Templates are read-only during editing. [`TemplateSet::instantiate`]
//! deep-copies the registered defaults into a fresh node, so no amount of
//! editing one instance can leak into the template or into other instances.
//!
//! # Example
//!
//! ```
//! use pw_core::{ElementKind, NodeIdGen, TemplateSet};
//!
//! let templates = TemplateSet::default();
//! let mut ids = NodeIdGen::new();
//!
//! let heading = templates.instantiate(ElementKind::Heading, &mut ids);
//! assert_eq!(heading.content(), "New Heading");
//!
//! let section = templates.instantiate(ElementKind::Container, &mut ids);
//! assert!(section.children().is_empty());
//! assert_ne!(heading.id(), section.id());
//! ```

use crate::id::NodeIdGen;
use crate::kind::ElementKind;
use crate::node::Node;
use crate::style::{StyleMap, styles};

/// Registered default shape for one element kind.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    /// Default text content.
    pub content: String,
    /// Default style properties.
    pub style: StyleMap,
    /// Default kind-specific attributes.
    pub extra: StyleMap,
}

impl Template {
    /// Create a template with the given content and empty maps.
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            style: StyleMap::new(),
            extra: StyleMap::new(),
        }
    }

    /// Set the default style map.
    #[must_use]
    pub fn with_style(mut self, style: StyleMap) -> Self {
        self.style = style;
        self
    }

    /// Set the default extra attribute map.
    #[must_use]
    pub fn with_extra(mut self, extra: StyleMap) -> Self {
        self.extra = extra;
        self
    }
}

/// Registry of one template per element kind.
///
/// The kind set is a closed enum, so lookup is total; there is no
/// "unregistered kind" case to handle. An embedding application may rebrand
/// the defaults per kind with [`TemplateSet::set`] before the session
/// starts.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateSet {
    heading: Template,
    paragraph: Template,
    image: Template,
    button: Template,
    container: Template,
}

impl TemplateSet {
    /// The registered template for `kind`.
    #[must_use]
    pub const fn get(&self, kind: ElementKind) -> &Template {
        match kind {
            ElementKind::Heading => &self.heading,
            ElementKind::Paragraph => &self.paragraph,
            ElementKind::Image => &self.image,
            ElementKind::Button => &self.button,
            ElementKind::Container => &self.container,
        }
    }

    /// Replace the registered template for `kind`.
    pub fn set(&mut self, kind: ElementKind, template: Template) {
        match kind {
            ElementKind::Heading => self.heading = template,
            ElementKind::Paragraph => self.paragraph = template,
            ElementKind::Image => self.image = template,
            ElementKind::Button => self.button = template,
            ElementKind::Container => self.container = template,
        }
    }

    /// Materialize a fresh node of `kind`.
    ///
    /// Mints a new id and deep-copies the registered defaults. Containers
    /// come with an empty child list.
    #[must_use]
    pub fn instantiate(&self, kind: ElementKind, ids: &mut NodeIdGen) -> Node {
        let template = self.get(kind);
        Node::new(ids.next_id(), kind)
            .with_content(template.content.clone())
            .with_style(template.style.clone())
            .with_extra(template.extra.clone())
    }
}

impl Default for TemplateSet {
    fn default() -> Self {
        Self {
            heading: Template::new("New Heading").with_style(styles([
                ("fontSize", "2rem"),
                ("fontWeight", "bold"),
                ("marginBottom", "1rem"),
                ("color", "#333333"),
            ])),
            paragraph: Template::new("Add your text here").with_style(styles([
                ("fontSize", "1rem"),
                ("marginBottom", "1rem"),
                ("color", "#555555"),
            ])),
            image: Template::new("")
                .with_style(styles([
                    ("width", "100%"),
                    ("maxWidth", "500px"),
                    ("marginBottom", "1rem"),
                ]))
                .with_extra(styles([
                    ("src", "/placeholder.svg"),
                    ("alt", "Image description"),
                ])),
            button: Template::new("Click Me").with_style(styles([
                ("backgroundColor", "#0099ff"),
                ("color", "white"),
                ("padding", "0.5rem 1.5rem"),
                ("borderRadius", "0.375rem"),
                ("fontWeight", "500"),
                ("cursor", "pointer"),
                ("border", "none"),
                ("display", "inline-block"),
            ])),
            container: Template::new("").with_style(styles([
                ("display", "flex"),
                ("flexDirection", "column"),
                ("padding", "20px"),
                ("backgroundColor", "#f5f5f7"),
                ("borderRadius", "8px"),
                ("marginBottom", "20px"),
            ])),
        }
    }
}
