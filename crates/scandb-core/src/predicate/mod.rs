//! Predicates: pure AST plus pure runtime evaluation.
//!
//! The AST carries no schema knowledge. Validation of dynamic input
//! happens at the criteria boundary; evaluation itself never fails — a
//! missing field or an undefined comparison is simply a non-match.

mod ast;
mod eval;


pub use ast::{CompareOp, ComparePredicate, Predicate};
pub use eval::eval;
