//! Display formatting: multi-line record blocks, list lines, currency.

use scandb_core::model::{Employee, Product};
use serde::Serialize;

/// Format an amount as currency with thousands separators and two
/// decimals, e.g. `$1,299.99`.
#[must_use]
#[expect(clippy::cast_possible_truncation)]
pub fn currency(amount: f64) -> String {
    let cents = (amount * 100.0).round() as i64;
    let (whole, cents) = (cents / 100, (cents % 100).unsigned_abs());

    let mut digits = whole.unsigned_abs().to_string();
    let mut grouped = String::new();
    while digits.len() > 3 {
        let tail = digits.split_off(digits.len() - 3);
        grouped = if grouped.is_empty() {
            tail
        } else {
            format!("{tail},{grouped}")
        };
    }
    grouped = if grouped.is_empty() {
        digits
    } else {
        format!("{digits},{grouped}")
    };

    let sign = if whole < 0 { "-" } else { "" };
    format!("{sign}${grouped}.{cents:02}")
}

/// Multi-line display block for one product.
#[must_use]
pub fn product_block(product: &Product) -> String {
    let status = if product.available && product.stock > 0 {
        "available"
    } else {
        "unavailable"
    };

    format!(
        "  id:        {}\n  name:      {}\n  brand:     {}\n  category:  {}\n  price:     {}\n  stock:     {}\n  status:    {}",
        product.id,
        product.name,
        product.brand,
        product.category,
        currency(product.price),
        product.stock,
        status,
    )
}

/// Multi-line display block for one employee.
#[must_use]
pub fn employee_block(employee: &Employee) -> String {
    let status = if employee.active { "active" } else { "inactive" };

    format!(
        "  id:          {}\n  name:        {}\n  department:  {}\n  salary:      {}\n  status:      {}",
        employee.id,
        employee.full_name(),
        employee.department,
        currency(employee.salary),
        status,
    )
}

/// One-line summary for result listings.
#[must_use]
pub fn product_line(product: &Product) -> String {
    format!(
        "  - {} ({}, stock: {})",
        product.name,
        currency(product.price),
        product.stock
    )
}

/// One-line summary for result listings.
#[must_use]
pub fn employee_line(employee: &Employee) -> String {
    let status = if employee.active { "active" } else { "inactive" };
    format!(
        "  - {} | {} | {} | {}",
        employee.full_name(),
        employee.department,
        currency(employee.salary),
        status
    )
}

/// Pretty-printed JSON for `--json` output.
pub fn json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}
