//! scandb-core: a linear-scan typed query engine over fixed in-memory
//! catalogs.
//!
//! ## Crate layout
//! - `value`: dynamic scalar values, normalization, and canonical ordering.
//! - `record`: the field-access seam and the immutable collection wrapper.
//! - `model`: the product and employee record shapes and sample catalogs.
//! - `predicate`: the predicate AST and pure runtime evaluation.
//! - `query`: the fluent scan builder and the named search operations.
//! - `criteria`: dynamic multi-criteria input, validated and lowered.
//! - `aggregate`: group counts, top-N, sum-of-products, averages.
//! - `obs`: scan counters for observability surfaces.
//!
//! Every operation is a straight-through pass over an immutable collection
//! passed by reference. Lookups that find nothing return `None`; filters
//! that match nothing return an empty vec. Neither is an error.

pub mod aggregate;
pub mod criteria;
pub mod model;
pub mod obs;
pub mod predicate;
pub mod query;
pub mod record;
pub mod value;

pub use criteria::{Criteria, CriteriaError, filter_by_criteria};
pub use predicate::{CompareOp, ComparePredicate, Predicate};
pub use query::{Direction, Query};
pub use record::{Collection, CollectionError, Record};
pub use value::{TextMode, Value};

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
