//! The two record shapes this engine ships with, plus their fixed sample
//! catalogs. Collections are constructed once at startup from these
//! literals and never mutated.

mod employee;
mod product;

pub use employee::Employee;
pub use product::Product;
