use crate::value::{TextMode, Value};
use std::ops::{BitAnd, BitOr};

///
/// Predicate AST
///
/// Pure, schema-agnostic representation of filter conditions. This layer
/// contains no field validation and no execution semantics; interpretation
/// happens in `eval` and, for dynamic input, at the criteria boundary.
///

///
/// CompareOp
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CompareOp {
    Eq,
    Ne,
    Lt,
    Lte,
    Gt,
    Gte,
}

///
/// ComparePredicate
///

#[derive(Clone, Debug, PartialEq)]
pub struct ComparePredicate {
    pub field: String,
    pub op: CompareOp,
    pub value: Value,
    pub mode: TextMode,
}

impl ComparePredicate {
    fn new(field: impl Into<String>, op: CompareOp, value: Value) -> Self {
        Self {
            field: field.into(),
            op,
            value,
            mode: TextMode::Cs,
        }
    }

    /// Construct a comparison with an explicit text mode.
    #[must_use]
    pub fn with_mode(field: impl Into<String>, op: CompareOp, value: Value, mode: TextMode) -> Self {
        Self {
            field: field.into(),
            op,
            value,
            mode,
        }
    }

    #[must_use]
    pub fn eq(field: impl Into<String>, value: Value) -> Self {
        Self::new(field, CompareOp::Eq, value)
    }

    #[must_use]
    pub fn ne(field: impl Into<String>, value: Value) -> Self {
        Self::new(field, CompareOp::Ne, value)
    }

    #[must_use]
    pub fn lt(field: impl Into<String>, value: Value) -> Self {
        Self::new(field, CompareOp::Lt, value)
    }

    #[must_use]
    pub fn lte(field: impl Into<String>, value: Value) -> Self {
        Self::new(field, CompareOp::Lte, value)
    }

    #[must_use]
    pub fn gt(field: impl Into<String>, value: Value) -> Self {
        Self::new(field, CompareOp::Gt, value)
    }

    #[must_use]
    pub fn gte(field: impl Into<String>, value: Value) -> Self {
        Self::new(field, CompareOp::Gte, value)
    }
}

///
/// Predicate
///

#[derive(Clone, Debug, PartialEq)]
pub enum Predicate {
    True,
    False,
    And(Vec<Self>),
    Or(Vec<Self>),
    Not(Box<Self>),
    Compare(ComparePredicate),
    TextContains { field: String, value: Value },
    TextContainsCi { field: String, value: Value },
}

impl Predicate {
    #[must_use]
    pub const fn and(preds: Vec<Self>) -> Self {
        Self::And(preds)
    }

    #[must_use]
    pub const fn or(preds: Vec<Self>) -> Self {
        Self::Or(preds)
    }

    #[expect(clippy::should_implement_trait)]
    #[must_use]
    pub fn not(pred: Self) -> Self {
        Self::Not(Box::new(pred))
    }

    #[must_use]
    pub fn eq(field: impl Into<String>, value: Value) -> Self {
        Self::Compare(ComparePredicate::eq(field, value))
    }

    /// Case-insensitive equality; only affects text pairs.
    #[must_use]
    pub fn eq_ci(field: impl Into<String>, value: Value) -> Self {
        Self::Compare(ComparePredicate::with_mode(
            field,
            CompareOp::Eq,
            value,
            TextMode::Ci,
        ))
    }

    #[must_use]
    pub fn ne(field: impl Into<String>, value: Value) -> Self {
        Self::Compare(ComparePredicate::ne(field, value))
    }

    #[must_use]
    pub fn lt(field: impl Into<String>, value: Value) -> Self {
        Self::Compare(ComparePredicate::lt(field, value))
    }

    #[must_use]
    pub fn lte(field: impl Into<String>, value: Value) -> Self {
        Self::Compare(ComparePredicate::lte(field, value))
    }

    #[must_use]
    pub fn gt(field: impl Into<String>, value: Value) -> Self {
        Self::Compare(ComparePredicate::gt(field, value))
    }

    #[must_use]
    pub fn gte(field: impl Into<String>, value: Value) -> Self {
        Self::Compare(ComparePredicate::gte(field, value))
    }

    /// Case-insensitive substring containment on a text field.
    #[must_use]
    pub fn contains_ci(field: impl Into<String>, value: Value) -> Self {
        Self::TextContainsCi {
            field: field.into(),
            value,
        }
    }
}

impl BitAnd for Predicate {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self::And(vec![self, rhs])
    }
}

impl BitOr for Predicate {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self::Or(vec![self, rhs])
    }
}
