use crate::value::{TextMode, Value, canonical_cmp, compare_eq, compare_order, normalize};
use std::cmp::Ordering;

#[test]
fn normalize_trims_and_lowercases() {
    assert_eq!(normalize("  Audífonos  "), "audífonos");
    assert_eq!(normalize("LAPTOP"), "laptop");
    assert_eq!(normalize(""), "");
}

#[test]
fn text_equality_honors_mode() {
    let left = Value::from(" Apple ");
    let right = Value::from("apple");

    assert_eq!(compare_eq(&left, &right, TextMode::Ci), Some(true));
    assert_eq!(compare_eq(&left, &right, TextMode::Cs), Some(false));
}

#[test]
fn numeric_pairs_widen_for_equality_and_order() {
    let int = Value::Int(10);
    let float = Value::Float(10.0);

    assert_eq!(compare_eq(&int, &float, TextMode::Cs), Some(true));
    assert_eq!(
        compare_order(&Value::Int(3), &Value::Float(2.5), TextMode::Cs),
        Some(Ordering::Greater)
    );
}

#[test]
fn mismatched_variants_are_undefined() {
    assert_eq!(
        compare_eq(&Value::from("10"), &Value::Int(10), TextMode::Cs),
        None
    );
    assert_eq!(
        compare_order(&Value::Bool(true), &Value::Int(1), TextMode::Cs),
        None
    );
}

#[test]
fn canonical_cmp_is_rank_first() {
    assert_eq!(
        canonical_cmp(&Value::Null, &Value::Bool(false)),
        Ordering::Less
    );
    assert_eq!(
        canonical_cmp(&Value::Int(999), &Value::from("a")),
        Ordering::Less
    );
    // Numerics share a rank, so ints and floats interleave.
    assert_eq!(
        canonical_cmp(&Value::Int(2), &Value::Float(1.5)),
        Ordering::Greater
    );
}

#[test]
fn text_contains_is_undefined_for_non_text() {
    assert_eq!(
        Value::Int(5).text_contains(&Value::from("5"), TextMode::Ci),
        None
    );
    assert_eq!(
        Value::from("Samsung Galaxy Tab").text_contains(&Value::from("galaxy"), TextMode::Ci),
        Some(true)
    );
    assert_eq!(
        Value::from("Samsung Galaxy Tab").text_contains(&Value::from("galaxy"), TextMode::Cs),
        Some(false)
    );
}
