//! The field-access seam and the immutable collection wrapper.

use crate::value::Value;
use derive_more::{Deref, IntoIterator};
use thiserror::Error as ThisError;

///
/// Record
///
/// Abstraction over a row-like value that exposes fields by name. This
/// decouples predicate evaluation and aggregation from concrete record
/// types; every declared field is always present on these shapes, so
/// `field` returns `None` only for names the shape does not declare.
///

pub trait Record: Clone {
    /// Declared field names, in declaration order.
    fn fields() -> &'static [&'static str];

    /// Unique identifier within a collection.
    fn id(&self) -> u32;

    /// Look up one field by name. `None` means the shape has no such field.
    fn field(&self, name: &str) -> Option<Value>;
}

///
/// CollectionError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum CollectionError {
    #[error("duplicate record id {id}; ids must be unique within a collection")]
    DuplicateId { id: u32 },
}

///
/// Collection
///
/// Ordered sequence of records of one shape, immutable after construction.
/// Construction enforces the unique-id invariant that single-result
/// lookups rely on.
///

#[derive(Clone, Debug, Deref, IntoIterator)]
pub struct Collection<R: Record> {
    #[deref]
    #[into_iterator(owned, ref)]
    rows: Vec<R>,
}

impl<R: Record> Collection<R> {
    /// Build a collection, rejecting duplicate ids.
    pub fn new(rows: Vec<R>) -> Result<Self, CollectionError> {
        for (index, row) in rows.iter().enumerate() {
            let id = row.id();
            if rows[..index].iter().any(|earlier| earlier.id() == id) {
                return Err(CollectionError::DuplicateId { id });
            }
        }

        Ok(Self { rows })
    }

    /// Borrow the rows as a slice, in original order.
    #[must_use]
    pub fn as_slice(&self) -> &[R] {
        &self.rows
    }

    /// Start a fluent scan over this collection.
    #[must_use]
    pub fn query(&self) -> crate::query::Query<'_, R> {
        crate::query::Query::new(&self.rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Product;

    #[test]
    fn construction_rejects_duplicate_ids() {
        let mut rows = Product::catalog();
        rows.push(rows[0].clone());

        let err = Collection::new(rows).expect_err("duplicate id must be rejected");
        assert_eq!(err, CollectionError::DuplicateId { id: 1 });
    }

    #[test]
    fn construction_accepts_the_sample_catalog() {
        let collection = Collection::new(Product::catalog()).expect("catalog ids are unique");
        assert_eq!(collection.len(), 10);
    }

    #[test]
    fn unknown_field_name_reads_as_none() {
        let rows = Product::catalog();
        assert_eq!(rows[0].field("warranty"), None);
        assert!(rows[0].field("price").is_some());
    }
}
