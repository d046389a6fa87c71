use crate::{
    predicate::{CompareOp, ComparePredicate, Predicate},
    record::Record,
    value::{TextMode, compare_eq, compare_order},
};
use std::cmp::Ordering;

///
/// Evaluate a predicate against a single record.
///
/// This is **pure runtime evaluation**:
/// - no schema access
/// - no validation
///
/// A missing field or an undefined comparison evaluates to `false`.
///
#[must_use]
pub fn eval<R: Record>(record: &R, predicate: &Predicate) -> bool {
    match predicate {
        Predicate::True => true,
        Predicate::False => false,

        Predicate::And(children) => children.iter().all(|child| eval(record, child)),
        Predicate::Or(children) => children.iter().any(|child| eval(record, child)),
        Predicate::Not(inner) => !eval(record, inner),

        Predicate::Compare(cmp) => eval_compare(record, cmp),

        Predicate::TextContains { field, value } => record
            .field(field)
            .and_then(|actual| actual.text_contains(value, TextMode::Cs))
            .unwrap_or(false),
        Predicate::TextContainsCi { field, value } => record
            .field(field)
            .and_then(|actual| actual.text_contains(value, TextMode::Ci))
            .unwrap_or(false),
    }
}

/// Evaluate a single comparison; `false` when the field is missing or the
/// comparison is undefined for the value pair.
fn eval_compare<R: Record>(record: &R, cmp: &ComparePredicate) -> bool {
    let ComparePredicate {
        field,
        op,
        value,
        mode,
    } = cmp;

    let Some(actual) = record.field(field) else {
        return false;
    };

    match op {
        CompareOp::Eq => compare_eq(&actual, value, *mode).unwrap_or(false),
        CompareOp::Ne => compare_eq(&actual, value, *mode).is_some_and(|matched| !matched),

        CompareOp::Lt => compare_order(&actual, value, *mode).is_some_and(Ordering::is_lt),
        CompareOp::Lte => compare_order(&actual, value, *mode).is_some_and(Ordering::is_le),
        CompareOp::Gt => compare_order(&actual, value, *mode).is_some_and(Ordering::is_gt),
        CompareOp::Gte => compare_order(&actual, value, *mode).is_some_and(Ordering::is_ge),
    }
}
