//! Configuration for stumps
//!
//! Two independent surfaces: the relational store holding the historical
//! cricket data, and the live Cricbuzz API. Both are plain structs with
//! environment loaders; secrets are redacted from `Debug` output and never
//! logged.

mod database;
mod live;

pub use database::DatabaseConfig;
pub use live::{LiveApiConfig, DEFAULT_API_HOST};
