#![forbid(unsafe_code)]

//! Open style and attribute maps.
//!
//! Style properties are an open key set (`fontSize`, `backgroundColor`, any
//! key the embedding renderer understands), not a fixed schema. Values are a
//! small variant type, string or number, and the engine passes them through
//! without validation. Maps keep insertion order so re-renders are
//! deterministic.

use indexmap::IndexMap;

/// A single style or attribute value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum StyleValue {
    /// Textual value (`"2rem"`, `"#333333"`, `"bold"`).
    Str(String),
    /// Unitless numeric value (line-height, z-index, opacity).
    Num(f64),
}

impl StyleValue {
    /// The textual value, if this is a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            Self::Num(_) => None,
        }
    }

    /// The numeric value, if this is a number.
    #[must_use]
    pub const fn as_num(&self) -> Option<f64> {
        match self {
            Self::Str(_) => None,
            Self::Num(n) => Some(*n),
        }
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        Self::Num(value)
    }
}

impl From<i32> for StyleValue {
    fn from(value: i32) -> Self {
        Self::Num(f64::from(value))
    }
}

impl std::fmt::Display for StyleValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Num(n) => write!(f, "{n}"),
        }
    }
}

/// Insertion-ordered map from style-property name to value.
///
/// Updates merge key-by-key: an existing key keeps its position and takes
/// the new value, a new key is appended.
pub type StyleMap = IndexMap<String, StyleValue>;

/// Build a [`StyleMap`] from an entry list.
///
/// ```
/// use pw_core::styles;
///
/// let style = styles([("fontSize", "2rem"), ("color", "#333333")]);
/// assert_eq!(style["fontSize"].as_str(), Some("2rem"));
/// ```
#[must_use]
pub fn styles<K, V, const N: usize>(entries: [(K, V); N]) -> StyleMap
where
    K: Into<String>,
    V: Into<StyleValue>,
{
    entries
        .into_iter()
        .map(|(key, value)| (key.into(), value.into()))
        .collect()
}
