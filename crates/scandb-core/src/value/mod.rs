//! Dynamic scalar values and their comparison semantics.
//!
//! `Value` is the common currency between typed records and dynamic query
//! input. Comparison helpers live in `compare`; anything a comparison
//! cannot define returns `None` and evaluates as a non-match upstream.

mod compare;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::fmt;

pub(crate) use compare::{canonical_cmp, compare_eq, compare_order};

///
/// TextMode
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum TextMode {
    /// Case-sensitive, raw text.
    #[default]
    Cs,
    /// Case-insensitive: both sides are normalized before comparison.
    Ci,
}

///
/// Value
///
/// Dynamic scalar for field access and query input. The variant set is the
/// subset a catalog record can carry: booleans, integers, floats, text,
/// plus `Null` for absent grouping keys.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl Value {
    /// True if this value is numeric (`Int` or `Float`).
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Int(_) | Self::Float(_))
    }

    /// Widen a numeric value to `f64`. Non-numeric values return `None`.
    #[must_use]
    #[expect(clippy::cast_precision_loss)]
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(n) => Some(*n as f64),
            Self::Float(n) => Some(*n),
            Self::Null | Self::Bool(_) | Self::Text(_) => None,
        }
    }

    /// Borrow the text payload, if any.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Text containment test under the given mode.
    ///
    /// Returns `None` when either side is not text.
    #[must_use]
    pub fn text_contains(&self, needle: &Self, mode: TextMode) -> Option<bool> {
        let (Self::Text(haystack), Self::Text(needle)) = (self, needle) else {
            return None;
        };

        Some(match mode {
            TextMode::Cs => haystack.contains(needle.as_str()),
            TextMode::Ci => normalize(haystack).contains(&normalize(needle)),
        })
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Float(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// Normalize text for case-insensitive comparison: trim surrounding
/// whitespace, then lowercase.
#[must_use]
pub fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}
