//! Query execution against the relational store

mod executor;
mod result;

pub use executor::QueryExecutor;
pub use result::{TabularResult, TabularRow};
