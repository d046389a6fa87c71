//! Dynamic multi-criteria input, validated at the boundary and lowered
//! into a conjunctive predicate.
//!
//! The recognized keys are explicit struct fields; anything else arrives
//! through `extra` and must name a declared field of the record shape.
//! Unknown names are rejected here, before execution, rather than
//! silently excluding every record.

use crate::{
    predicate::Predicate,
    record::{Collection, Record},
    value::Value,
};
use thiserror::Error as ThisError;

///
/// CriteriaError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum CriteriaError {
    #[error("unknown criteria field '{field}'; declared fields are {declared:?}")]
    UnknownField {
        field: String,
        declared: &'static [&'static str],
    },
}

///
/// Criteria
///
/// Conjunctive (AND) filter configuration. All bounds are inclusive.
/// Range criteria against a shape lacking the field (for example
/// `salary_min` on products) match nothing, per predicate semantics.
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Criteria {
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    pub stock_min: Option<i64>,
    pub stock_max: Option<i64>,
    pub salary_min: Option<f64>,
    pub salary_max: Option<f64>,
    pub available: Option<bool>,
    pub name_contains: Option<String>,
    pub last_name_contains: Option<String>,
    /// Exact-match criteria on any declared field: case-insensitive
    /// equality for text values, exact equality otherwise.
    pub extra: Vec<(String, Value)>,
}

impl Criteria {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn price_min(mut self, min: f64) -> Self {
        self.price_min = Some(min);
        self
    }

    #[must_use]
    pub const fn price_max(mut self, max: f64) -> Self {
        self.price_max = Some(max);
        self
    }

    #[must_use]
    pub const fn stock_min(mut self, min: i64) -> Self {
        self.stock_min = Some(min);
        self
    }

    #[must_use]
    pub const fn stock_max(mut self, max: i64) -> Self {
        self.stock_max = Some(max);
        self
    }

    #[must_use]
    pub const fn salary_min(mut self, min: f64) -> Self {
        self.salary_min = Some(min);
        self
    }

    #[must_use]
    pub const fn salary_max(mut self, max: f64) -> Self {
        self.salary_max = Some(max);
        self
    }

    #[must_use]
    pub const fn available(mut self, available: bool) -> Self {
        self.available = Some(available);
        self
    }

    #[must_use]
    pub fn name_contains(mut self, text: impl Into<String>) -> Self {
        self.name_contains = Some(text.into());
        self
    }

    #[must_use]
    pub fn last_name_contains(mut self, text: impl Into<String>) -> Self {
        self.last_name_contains = Some(text.into());
        self
    }

    /// Add an exact-match criterion on a declared field.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.push((name.into(), value.into()));
        self
    }

    /// Lower the criteria into a validated conjunctive predicate for a
    /// shape declaring `declared` fields.
    ///
    /// Only `extra` entries are validated: the fixed keys are recognized
    /// criteria by definition, and evaluate as non-matches on shapes that
    /// lack the underlying field.
    pub fn lower(&self, declared: &'static [&'static str]) -> Result<Predicate, CriteriaError> {
        let mut clauses = Vec::new();

        if let Some(min) = self.price_min {
            clauses.push(Predicate::gte("price", Value::Float(min)));
        }
        if let Some(max) = self.price_max {
            clauses.push(Predicate::lte("price", Value::Float(max)));
        }
        if let Some(min) = self.stock_min {
            clauses.push(Predicate::gte("stock", Value::Int(min)));
        }
        if let Some(max) = self.stock_max {
            clauses.push(Predicate::lte("stock", Value::Int(max)));
        }
        if let Some(min) = self.salary_min {
            clauses.push(Predicate::gte("salary", Value::Float(min)));
        }
        if let Some(max) = self.salary_max {
            clauses.push(Predicate::lte("salary", Value::Float(max)));
        }
        if let Some(available) = self.available {
            clauses.push(Predicate::eq("available", Value::Bool(available)));
        }
        if let Some(text) = &self.name_contains {
            clauses.push(Predicate::contains_ci("name", Value::from(text.as_str())));
        }
        if let Some(text) = &self.last_name_contains {
            clauses.push(Predicate::contains_ci(
                "last_name",
                Value::from(text.as_str()),
            ));
        }

        for (name, value) in &self.extra {
            if !declared.contains(&name.as_str()) {
                return Err(CriteriaError::UnknownField {
                    field: name.clone(),
                    declared,
                });
            }
            clauses.push(Predicate::eq_ci(name.as_str(), value.clone()));
        }

        Ok(match clauses.len() {
            0 => Predicate::True,
            1 => clauses.remove(0),
            _ => Predicate::and(clauses),
        })
    }
}

/// Records satisfying every supplied criterion, in original order.
pub fn filter_by_criteria<'a, R: Record>(
    collection: &'a Collection<R>,
    criteria: &Criteria,
) -> Result<Vec<&'a R>, CriteriaError> {
    let predicate = criteria.lower(R::fields())?;
    Ok(collection.query().filter(predicate).all())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Employee, Product};
    use crate::record::Collection;

    fn products() -> Collection<Product> {
        Collection::new(Product::catalog()).expect("catalog ids are unique")
    }

    fn employees() -> Collection<Employee> {
        Collection::new(Employee::roster()).expect("roster ids are unique")
    }

    #[test]
    fn active_technicians_scenario() {
        let employees = employees();
        let criteria = Criteria::new()
            .field("department", "Técnico")
            .field("active", true);

        let hits = filter_by_criteria(&employees, &criteria).expect("fields are declared");
        let ids: Vec<u32> = hits.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![102, 105]);
    }

    #[test]
    fn conjunction_of_bounds_and_flags() {
        let products = products();
        let criteria = Criteria::new()
            .price_min(200.0)
            .price_max(1000.0)
            .available(true)
            .field("brand", "apple");

        let hits = filter_by_criteria(&products, &criteria).expect("fields are declared");
        let ids: Vec<u32> = hits.iter().map(|p| p.id).collect();
        // iPhone 15 (999.99), iPad Air (599.99), AirPods Pro (249.99).
        assert_eq!(ids, vec![1, 6, 8]);
    }

    #[test]
    fn substring_criteria_lower_to_containment() {
        let employees = employees();
        let criteria = Criteria::new().last_name_contains("ez");

        let hits = filter_by_criteria(&employees, &criteria).expect("fields are declared");
        let ids: Vec<u32> = hits.iter().map(|e| e.id).collect();
        // Everyone but García: López, Rodríguez, Martínez, Hernández, Gómez.
        assert_eq!(ids, vec![102, 103, 104, 105, 106]);
    }

    #[test]
    fn unknown_extra_field_is_rejected_at_the_boundary() {
        let products = products();
        let criteria = Criteria::new().field("warranty", "2y");

        let err = filter_by_criteria(&products, &criteria)
            .expect_err("undeclared field must be rejected");
        assert!(matches!(
            err,
            CriteriaError::UnknownField { ref field, .. } if field == "warranty"
        ));
    }

    #[test]
    fn cross_shape_range_criteria_match_nothing() {
        // salary bounds against products: the field is missing on every
        // record, so the criterion is an always-false clause, not an error.
        let products = products();
        let criteria = Criteria::new().salary_min(1.0);

        let hits = filter_by_criteria(&products, &criteria).expect("fixed keys are not validated");
        assert!(hits.is_empty());
    }

    #[test]
    fn empty_criteria_match_everything() {
        let products = products();
        let hits = filter_by_criteria(&products, &Criteria::new()).expect("no criteria");
        assert_eq!(hits.len(), 10);
    }

    #[test]
    fn salary_band_scenario() {
        let employees = employees();
        let criteria = Criteria::new().salary_min(35_000.0).salary_max(40_000.0);

        let hits = filter_by_criteria(&employees, &criteria).expect("fields are declared");
        let ids: Vec<u32> = hits.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![101, 103]);
    }
}
