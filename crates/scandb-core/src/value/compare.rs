use crate::value::{TextMode, Value, normalize};
use std::cmp::Ordering;

///
/// Comparison semantics
///
/// Two layers, mirroring how predicates and ordering consume values:
///
/// - `compare_eq` / `compare_order`: partial, coercion-aware comparisons
///   for predicate evaluation. Undefined comparisons return `None`.
/// - `canonical_cmp`: total order for sorting and grouping. Mixed variants
///   order by canonical rank; numeric variants share one rank so integers
///   and floats interleave correctly.
///

/// Canonical variant rank. Numerics share a rank on purpose.
const fn canonical_rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Int(_) | Value::Float(_) => 2,
        Value::Text(_) => 3,
    }
}

/// Total canonical comparator used by ordering and top-N surfaces.
///
/// Ordering rules:
/// 1. Canonical variant rank
/// 2. Variant-specific comparison for same-ranked values
#[must_use]
pub(crate) fn canonical_cmp(left: &Value, right: &Value) -> Ordering {
    let rank = canonical_rank(left).cmp(&canonical_rank(right));
    if rank != Ordering::Equal {
        return rank;
    }

    match (left, right) {
        (Value::Null, Value::Null) => Ordering::Equal,
        (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
        (Value::Int(a), Value::Int(b)) => a.cmp(b),
        (Value::Text(a), Value::Text(b)) => a.cmp(b),
        (a, b) => match (a.as_f64(), b.as_f64()) {
            (Some(a), Some(b)) => a.total_cmp(&b),
            _ => Ordering::Equal,
        },
    }
}

/// Coercion-aware equality for predicate evaluation.
///
/// - numeric pairs widen to `f64`
/// - text pairs honor the comparison's `TextMode`
/// - mismatched variants are undefined (`None`)
#[must_use]
pub(crate) fn compare_eq(left: &Value, right: &Value, mode: TextMode) -> Option<bool> {
    match (left, right) {
        (Value::Null, Value::Null) => Some(true),
        (Value::Bool(a), Value::Bool(b)) => Some(a == b),
        (Value::Int(a), Value::Int(b)) => Some(a == b),
        (Value::Text(a), Value::Text(b)) => Some(match mode {
            TextMode::Cs => a == b,
            TextMode::Ci => normalize(a) == normalize(b),
        }),
        (a, b) if a.is_numeric() && b.is_numeric() => {
            // NOTE: widening is exact for every value this domain stores.
            Some(a.as_f64() == b.as_f64())
        }
        _ => None,
    }
}

/// Coercion-aware ordering for predicate evaluation.
///
/// Defined for numeric pairs (widened) and text pairs; everything else is
/// undefined and evaluates as a non-match upstream.
#[must_use]
pub(crate) fn compare_order(left: &Value, right: &Value, mode: TextMode) -> Option<Ordering> {
    match (left, right) {
        (Value::Text(a), Value::Text(b)) => Some(match mode {
            TextMode::Cs => a.cmp(b),
            TextMode::Ci => normalize(a).cmp(&normalize(b)),
        }),
        (a, b) if a.is_numeric() && b.is_numeric() => {
            Some(a.as_f64()?.total_cmp(&b.as_f64()?))
        }
        _ => None,
    }
}
