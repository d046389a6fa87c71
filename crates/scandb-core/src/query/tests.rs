use crate::{
    model::{Employee, Product},
    predicate::Predicate,
    query::{
        Direction, filter_available, filter_by_field_ci, filter_by_range, filter_by_substring,
        filter_low_stock, filter_min_stock, filter_out_of_stock, find_by_field_ci,
        find_by_full_name, find_by_id,
    },
    record::Collection,
    value::Value,
};
use proptest::prelude::*;

fn products() -> Collection<Product> {
    Collection::new(Product::catalog()).expect("catalog ids are unique")
}

fn employees() -> Collection<Employee> {
    Collection::new(Employee::roster()).expect("roster ids are unique")
}

fn ids<R: crate::record::Record>(rows: &[&R]) -> Vec<u32> {
    rows.iter().map(|row| row.id()).collect()
}

#[test]
fn find_by_id_returns_the_unique_record_or_none() {
    let products = products();

    assert_eq!(find_by_id(&products, 3).map(|p| p.name.as_str()), Some("MacBook Air M3"));
    assert!(find_by_id(&products, 99).is_none());
}

#[test]
fn find_by_field_ci_normalizes_both_sides() {
    let products = products();

    let hit = find_by_field_ci(&products, "name", Value::from("  macbook air m3 "));
    assert_eq!(hit.map(|p| p.id), Some(3));

    assert!(find_by_field_ci(&products, "name", Value::from("Producto Inexistente")).is_none());
}

#[test]
fn filter_by_field_ci_is_stable_and_complete() {
    let products = products();

    let laptops = filter_by_field_ci(&products, "category", Value::from("LAPTOP"));
    assert_eq!(ids(&laptops), vec![3, 4, 10]);

    let apple = filter_by_field_ci(&products, "brand", Value::from("apple"));
    assert_eq!(ids(&apple), vec![1, 3, 6, 8]);
}

#[test]
fn filter_by_range_is_inclusive_both_ends() {
    let products = products();

    let mid = filter_by_range(&products, "price", 249.99, 599.99);
    assert_eq!(ids(&mid), vec![5, 6, 7, 8]);
}

#[test]
fn reversed_range_yields_empty_not_error() {
    let products = products();
    assert!(filter_by_range(&products, "price", 1000.0, 100.0).is_empty());
}

#[test]
fn availability_excludes_out_of_stock_listings() {
    let products = products();

    let available = filter_available(&products);
    assert_eq!(available.len(), 8);
    assert!(available.iter().all(|p| p.available && p.stock > 0));
    // Dell XPS 13 and Samsung Galaxy Tab are out of stock.
    assert!(!ids(&available).contains(&4));
    assert!(!ids(&available).contains(&7));
}

#[test]
fn availability_on_empty_collection_is_empty() {
    let empty: Collection<Product> = Collection::new(Vec::new()).expect("empty is valid");
    assert!(filter_available(&empty).is_empty());
}

#[test]
fn stock_filters_cover_low_zero_and_minimum() {
    let products = products();

    // 0 < stock <= 5: MacBook (5), iPad (3), HP Pavilion (2).
    assert_eq!(ids(&filter_low_stock(&products, 5)), vec![3, 6, 10]);
    assert_eq!(ids(&filter_out_of_stock(&products)), vec![4, 7]);
    assert_eq!(ids(&filter_min_stock(&products, 12)), vec![5, 8, 9]);
}

#[test]
fn substring_search_matches_mid_word() {
    let employees = employees();

    let garc = filter_by_substring(&employees, "last_name", "garc");
    assert_eq!(ids(&garc), vec![101]);

    let mar = filter_by_substring(&employees, "first_name", "Mar");
    assert_eq!(ids(&mar), vec![103]);
}

#[test]
fn full_name_lookup_exact_and_tokenized() {
    let employees = employees();

    assert_eq!(find_by_full_name(&employees, "Ana García").map(|e| e.id), Some(101));
    assert_eq!(find_by_full_name(&employees, "  carlos lópez  ").map(|e| e.id), Some(102));
    assert!(find_by_full_name(&employees, "Juan Pérez").is_none());
    assert!(find_by_full_name(&employees, "").is_none());
    // A single token never satisfies stage (b).
    assert!(find_by_full_name(&employees, "Ana").is_none());
}

#[test]
fn query_order_and_limit_compose() {
    let products = products();

    let cheapest: Vec<u32> = products
        .query()
        .order_by("price")
        .limit(3)
        .all()
        .iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(cheapest, vec![9, 8, 5]);

    let priciest_available: Vec<u32> = products
        .query()
        .filter(Predicate::eq("available", Value::Bool(true)))
        .order_by_desc("price")
        .limit(2)
        .all()
        .iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(priciest_available, vec![3, 1]);
}

#[test]
fn first_respects_ordering_when_present() {
    let products = products();

    let cheapest = products.query().order_by("price").first();
    assert_eq!(cheapest.map(|p| p.id), Some(9));

    let first_in_order = products.query().first();
    assert_eq!(first_in_order.map(|p| p.id), Some(1));
}

proptest! {
    #[test]
    fn reversed_ranges_are_always_empty(
        lo in 0.0_f64..5000.0,
        delta in 0.001_f64..1000.0,
    ) {
        let products = products();
        let hits = filter_by_range(&products, "price", lo + delta, lo);
        prop_assert!(hits.is_empty());
    }

    #[test]
    fn range_output_is_a_subset_satisfying_the_bounds(
        lo in 0.0_f64..2000.0,
        span in 0.0_f64..2000.0,
    ) {
        let products = products();
        let hi = lo + span;
        let hits = filter_by_range(&products, "price", lo, hi);
        prop_assert!(hits.iter().all(|p| p.price >= lo && p.price <= hi));
    }
}
