#![forbid(unsafe_code)]

//! The closed set of element kinds.

/// Kind of a placed element.
///
/// The set is closed: the template registry covers every variant, so there
/// is no "unregistered kind" failure mode at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ElementKind {
    /// Section heading.
    Heading,
    /// Body text block.
    Paragraph,
    /// Image with `src`/`alt` extra attributes.
    Image,
    /// Clickable button.
    Button,
    /// The only kind that may own children.
    Container,
}

impl ElementKind {
    /// All kinds, in palette order.
    pub const ALL: [ElementKind; 5] = [
        Self::Heading,
        Self::Paragraph,
        Self::Image,
        Self::Button,
        Self::Container,
    ];

    /// Whether nodes of this kind may own children.
    #[inline]
    #[must_use]
    pub const fn is_container(self) -> bool {
        matches!(self, Self::Container)
    }

    /// Lowercase name, as the palette and renderer label it.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Heading => "heading",
            Self::Paragraph => "paragraph",
            Self::Image => "image",
            Self::Button => "button",
            Self::Container => "container",
        }
    }
}

impl std::fmt::Display for ElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
