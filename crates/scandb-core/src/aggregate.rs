//! Aggregations over a collection: group counts, top-N, sum-of-products,
//! and averages. All single-pass except `top_n_by`, which pays one stable
//! sort.

use crate::{
    query::Direction,
    record::{Collection, Record},
    value::Value,
};

/// Sentinel grouping key for records missing the grouped field.
pub const UNCATEGORIZED: &str = "uncategorized";

/// Count records grouped by the exact (non-normalized) field value,
/// preserving first-seen key order.
///
/// Records missing the field count under the [`UNCATEGORIZED`] sentinel.
#[must_use]
pub fn group_count<R: Record>(collection: &Collection<R>, field: &str) -> Vec<(Value, usize)> {
    let mut counts: Vec<(Value, usize)> = Vec::new();

    for record in collection.as_slice() {
        let key = record
            .field(field)
            .unwrap_or_else(|| Value::from(UNCATEGORIZED));

        match counts.iter_mut().find(|(seen, _)| *seen == key) {
            Some((_, count)) => *count += 1,
            None => counts.push((key, 1)),
        }
    }

    counts
}

/// The first `n` records under a stable sort by `field`.
///
/// Ties keep their original relative order; `n` past the collection size
/// returns the whole sorted collection.
#[must_use]
pub fn top_n_by<'a, R: Record>(
    collection: &'a Collection<R>,
    field: &str,
    n: usize,
    direction: Direction,
) -> Vec<&'a R> {
    collection.query().order(field, direction).limit(n).all()
}

/// Σ over all records of `field_a * field_b` (e.g. price × stock for
/// inventory value). Missing or non-numeric fields contribute 0.
#[must_use]
pub fn sum_product<R: Record>(collection: &Collection<R>, field_a: &str, field_b: &str) -> f64 {
    collection
        .as_slice()
        .iter()
        .map(|record| {
            let a = numeric_or_zero(record, field_a);
            let b = numeric_or_zero(record, field_b);
            a * b
        })
        .sum()
}

/// Arithmetic mean of `field` over all records; `0.0` for an empty
/// collection.
#[must_use]
#[expect(clippy::cast_precision_loss)]
pub fn average<R: Record>(collection: &Collection<R>, field: &str) -> f64 {
    if collection.is_empty() {
        return 0.0;
    }

    let total: f64 = collection
        .as_slice()
        .iter()
        .map(|record| numeric_or_zero(record, field))
        .sum();

    total / collection.len() as f64
}

fn numeric_or_zero<R: Record>(record: &R, field: &str) -> f64 {
    record
        .field(field)
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Employee, Product};

    fn products() -> Collection<Product> {
        Collection::new(Product::catalog()).expect("catalog ids are unique")
    }

    fn employees() -> Collection<Employee> {
        Collection::new(Employee::roster()).expect("roster ids are unique")
    }

    #[test]
    fn category_counts_preserve_first_seen_order() {
        let counts = group_count(&products(), "category");

        let expected = [
            ("Smartphone", 2),
            ("Laptop", 3),
            ("Audífonos", 2),
            ("Tablet", 2),
            ("Accesorios", 1),
        ];
        assert_eq!(counts.len(), expected.len());
        for ((key, count), (name, n)) in counts.iter().zip(expected) {
            assert_eq!(key, &Value::from(name));
            assert_eq!(*count, n);
        }
    }

    #[test]
    fn missing_group_field_uses_the_sentinel() {
        let counts = group_count(&products(), "department");
        assert_eq!(counts, vec![(Value::from(UNCATEGORIZED), 10)]);
    }

    #[test]
    fn inventory_value_matches_the_literal_sum() {
        let products = products();
        let expected: f64 = products
            .as_slice()
            .iter()
            .map(|p| p.price * f64::from(p.stock))
            .sum();

        let value = sum_product(&products, "price", "stock");
        assert!((value - expected).abs() < 1e-9);
        assert!((value - 39_299.25).abs() < 1e-6);
    }

    #[test]
    fn sum_product_with_a_missing_field_is_zero() {
        assert_eq!(sum_product(&products(), "price", "salary"), 0.0);
    }

    #[test]
    fn average_salary_and_empty_collection() {
        let employees = employees();
        assert!((average(&employees, "salary") - 37_000.0).abs() < 1e-9);

        let empty: Collection<Employee> = Collection::new(Vec::new()).expect("empty is valid");
        assert_eq!(average(&empty, "salary"), 0.0);
    }

    #[test]
    fn top_n_truncates_and_tolerates_overrun() {
        let products = products();

        let priciest = top_n_by(&products, "price", 3, Direction::Desc);
        let ids: Vec<u32> = priciest.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 4, 1]);

        let everything = top_n_by(&products, "price", 999, Direction::Asc);
        assert_eq!(everything.len(), 10);
    }

    #[test]
    fn top_n_directions_reverse_each_other_on_distinct_keys() {
        let products = products();
        let n = products.len();

        let asc: Vec<u32> = top_n_by(&products, "price", n, Direction::Asc)
            .iter()
            .map(|p| p.id)
            .collect();
        let mut desc: Vec<u32> = top_n_by(&products, "price", n, Direction::Desc)
            .iter()
            .map(|p| p.id)
            .collect();

        desc.reverse();
        assert_eq!(asc, desc);
    }
}
