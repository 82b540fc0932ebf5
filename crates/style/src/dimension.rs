//! Defines the polymorphic size value used by every sizing property.
use crate::parsers::parse_size_literal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// A size as it appears in a style record.
#[derive(Serialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub enum Dimension {
    /// An absolute length in pixels.
    Fixed(f32),
    /// A percentage (`50.0` means 50%) of a context-dependent base.
    Percent(f32),
    #[default]
    Auto,
    /// A string literal that did not match the percentage grammar.
    ///
    /// Style parsing is total, so the literal is kept verbatim and reported
    /// as an invalid percentage when a layout pass tries to resolve it.
    Malformed(Arc<str>),
}

impl Dimension {
    /// Normalizes a raw style value. Never fails.
    pub fn from_raw(raw: &RawSize) -> Self {
        match raw {
            RawSize::Number(v) => Dimension::Fixed(*v),
            RawSize::Text(text) => match parse_size_literal(text) {
                Ok(dim) => dim,
                Err(_) => Dimension::Malformed(Arc::from(text.trim())),
            },
        }
    }

    /// The absolute value, if this dimension does not depend on any base.
    pub fn fixed(&self) -> Option<f32> {
        match self {
            Dimension::Fixed(v) => Some(*v),
            _ => None,
        }
    }

    pub fn is_auto(&self) -> bool {
        matches!(self, Dimension::Auto)
    }

    pub fn malformed(&self) -> Option<&str> {
        match self {
            Dimension::Malformed(text) => Some(text),
            _ => None,
        }
    }
}

impl From<f32> for Dimension {
    fn from(value: f32) -> Self {
        Dimension::Fixed(value)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Fixed(v) => write!(f, "{}", v),
            Dimension::Percent(p) => write!(f, "{}%", p),
            Dimension::Auto => f.write_str("auto"),
            Dimension::Malformed(text) => f.write_str(text),
        }
    }
}

/// A size exactly as supplied in the raw style input: a number or a string
/// such as `"50%"` or `"auto"`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum RawSize {
    Number(f32),
    Text(String),
}

impl From<f32> for RawSize {
    fn from(value: f32) -> Self {
        RawSize::Number(value)
    }
}

impl From<&str> for RawSize {
    fn from(value: &str) -> Self {
        RawSize::Text(value.to_string())
    }
}
