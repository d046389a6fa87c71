//! The fluent scan builder and the named search operations.
//!
//! Every query is a single linear pass (plus one stable sort when ordered)
//! over a borrowed collection. Results borrow from the collection and
//! preserve original relative order unless an ordering is requested.

mod ops;

#[cfg(test)]
mod tests;

use crate::{
    obs,
    predicate::{Predicate, eval},
    record::Record,
    value::{Value, canonical_cmp},
};
use serde::{Deserialize, Serialize};

pub use ops::{
    filter_available, filter_by_field_ci, filter_by_range, filter_by_substring, filter_low_stock,
    filter_min_stock, filter_out_of_stock, find_by_field_ci, find_by_full_name, find_by_id,
};

///
/// Direction
///
/// Canonical traversal direction shared by ordering and top-N surfaces.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

///
/// OrderSpec
///

#[derive(Clone, Debug)]
struct OrderSpec {
    field: String,
    direction: Direction,
}

///
/// Query
///
/// Borrowed fluent scan: accumulate a predicate, an optional order, and an
/// optional limit, then execute with `all`, `first`, or `count`.
///

pub struct Query<'a, R: Record> {
    rows: &'a [R],
    predicate: Predicate,
    order: Option<OrderSpec>,
    limit: Option<usize>,
}

impl<'a, R: Record> Query<'a, R> {
    #[must_use]
    pub(crate) const fn new(rows: &'a [R]) -> Self {
        Self {
            rows,
            predicate: Predicate::True,
            order: None,
            limit: None,
        }
    }

    /// Conjoin a predicate onto the current filter.
    #[must_use]
    pub fn filter(mut self, predicate: Predicate) -> Self {
        self.predicate = match self.predicate {
            Predicate::True => predicate,
            current => current & predicate,
        };
        self
    }

    /// Stable ascending order by one field.
    #[must_use]
    pub fn order_by(self, field: impl Into<String>) -> Self {
        self.order(field, Direction::Asc)
    }

    /// Stable descending order by one field.
    #[must_use]
    pub fn order_by_desc(self, field: impl Into<String>) -> Self {
        self.order(field, Direction::Desc)
    }

    /// Stable order by one field in the given direction.
    #[must_use]
    pub fn order(mut self, field: impl Into<String>, direction: Direction) -> Self {
        self.order = Some(OrderSpec {
            field: field.into(),
            direction,
        });
        self
    }

    /// Truncate results to the first `n` after filtering and ordering.
    #[must_use]
    pub const fn limit(mut self, n: usize) -> Self {
        self.limit = Some(n);
        self
    }

    /// Execute and return all matches.
    #[must_use]
    pub fn all(self) -> Vec<&'a R> {
        obs::record_scan(self.rows.len() as u64);

        let mut matches: Vec<&R> = self
            .rows
            .iter()
            .filter(|row| eval(*row, &self.predicate))
            .collect();

        if let Some(spec) = &self.order {
            sort_stable(&mut matches, spec);
        }

        if let Some(limit) = self.limit {
            matches.truncate(limit);
        }

        matches
    }

    /// Execute and return the first match, if any.
    #[must_use]
    pub fn first(self) -> Option<&'a R> {
        if self.order.is_none() {
            // Unordered: stop at the first hit instead of materializing.
            obs::record_scan(self.rows.len() as u64);
            return self.rows.iter().find(|row| eval(*row, &self.predicate));
        }

        self.limit(1).all().into_iter().next()
    }

    /// Execute and return the number of matches.
    #[must_use]
    pub fn count(self) -> usize {
        self.all().len()
    }
}

/// Stable sort by one field under canonical value order. Records missing
/// the field sort as `Null` (lowest rank); ties keep original order.
///
/// Descending order reverses the comparator, not the slice: equal keys
/// still compare `Equal`, so `sort_by` keeps their input order.
fn sort_stable<R: Record>(matches: &mut [&R], spec: &OrderSpec) {
    let key = |row: &R| row.field(&spec.field).unwrap_or(Value::Null);

    matches.sort_by(|a, b| {
        let ordering = canonical_cmp(&key(*a), &key(*b));
        match spec.direction {
            Direction::Asc => ordering,
            Direction::Desc => ordering.reverse(),
        }
    });
}
