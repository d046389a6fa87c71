//! Named search operations over a collection.
//!
//! These are the stable lookup surface: thin, predicate-backed linear
//! scans that preserve collection order. Lookups return `None` when
//! nothing matches; filters return an empty vec.

use crate::{
    predicate::Predicate,
    record::{Collection, Record},
    value::{Value, normalize},
};

/// Find the record with the given unique id.
#[must_use]
pub fn find_by_id<R: Record>(collection: &Collection<R>, id: u32) -> Option<&R> {
    collection
        .query()
        .filter(Predicate::eq("id", Value::from(id)))
        .first()
}

/// Find the first record whose field equals `value`, case-insensitively
/// for text (both sides trimmed and lowercased; other variants compare
/// exactly).
#[must_use]
pub fn find_by_field_ci<'a, R: Record>(
    collection: &'a Collection<R>,
    field: &str,
    value: Value,
) -> Option<&'a R> {
    collection
        .query()
        .filter(Predicate::eq_ci(field, value))
        .first()
}

/// All records whose field equals `value` under the same normalization,
/// in original order.
#[must_use]
pub fn filter_by_field_ci<'a, R: Record>(
    collection: &'a Collection<R>,
    field: &str,
    value: Value,
) -> Vec<&'a R> {
    collection
        .query()
        .filter(Predicate::eq_ci(field, value))
        .all()
}

/// Records where `min <= field <= max`, inclusive both ends.
///
/// A reversed range (`min > max`) legitimately matches nothing.
#[must_use]
pub fn filter_by_range<'a, R: Record>(
    collection: &'a Collection<R>,
    field: &str,
    min: f64,
    max: f64,
) -> Vec<&'a R> {
    collection
        .query()
        .filter(Predicate::gte(field, Value::Float(min)) & Predicate::lte(field, Value::Float(max)))
        .all()
}

/// Records whose text field contains `text`, case-insensitively.
#[must_use]
pub fn filter_by_substring<'a, R: Record>(
    collection: &'a Collection<R>,
    field: &str,
    text: &str,
) -> Vec<&'a R> {
    collection
        .query()
        .filter(Predicate::contains_ci(field, Value::from(text)))
        .all()
}

/// Products that are listed and actually in stock:
/// `available == true && stock > 0`.
#[must_use]
pub fn filter_available<R: Record>(collection: &Collection<R>) -> Vec<&R> {
    collection
        .query()
        .filter(Predicate::eq("available", Value::Bool(true)) & Predicate::gt("stock", Value::Int(0)))
        .all()
}

/// Products running low: `0 < stock <= threshold`.
#[must_use]
pub fn filter_low_stock<R: Record>(collection: &Collection<R>, threshold: u32) -> Vec<&R> {
    collection
        .query()
        .filter(Predicate::gt("stock", Value::Int(0)) & Predicate::lte("stock", Value::from(threshold)))
        .all()
}

/// Products with no stock at all.
#[must_use]
pub fn filter_out_of_stock<R: Record>(collection: &Collection<R>) -> Vec<&R> {
    collection
        .query()
        .filter(Predicate::eq("stock", Value::Int(0)))
        .all()
}

/// Products with at least `minimum` units in stock.
#[must_use]
pub fn filter_min_stock<R: Record>(collection: &Collection<R>, minimum: u32) -> Vec<&R> {
    collection
        .query()
        .filter(Predicate::gte("stock", Value::from(minimum)))
        .all()
}

/// Two-stage full-name lookup against `first_name` / `last_name`.
///
/// Stage (a): the normalized query equals `first_name + " " + last_name`.
/// Stage (b): if the query splits into two or more whitespace tokens,
/// token 0 matches `first_name` and token 1 matches `last_name`,
/// case-insensitively.
///
/// Stage (a) takes precedence; the first satisfying record in collection
/// order wins.
#[must_use]
pub fn find_by_full_name<'a, R: Record>(collection: &'a Collection<R>, query: &str) -> Option<&'a R> {
    let wanted = normalize(query);
    if wanted.is_empty() {
        return None;
    }

    let tokens: Vec<&str> = wanted.split_whitespace().collect();

    crate::obs::record_scan(collection.len() as u64);
    collection.as_slice().iter().find(|record| {
        let (Some(first), Some(last)) = (record.field("first_name"), record.field("last_name"))
        else {
            return false;
        };
        let (Some(first), Some(last)) = (first.as_text(), last.as_text()) else {
            return false;
        };

        let full = normalize(&format!("{first} {last}"));
        if full == wanted {
            return true;
        }

        tokens.len() >= 2 && normalize(first) == tokens[0] && normalize(last) == tokens[1]
    })
}
