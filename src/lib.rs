#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

//! # Stumps
//!
//! Stumps is cricket analytics from the terminal: a fixed catalogue of
//! analytical SQL questions over a historical cricket database, a CRUD
//! gateway for curating player records, and live match coverage pulled
//! from a hosted cricket data API.
//!
//! ## Features
//!
//! - **Query Catalogue**: 25 curated analytical questions, enumerable and
//!   runnable by label
//! - **Record Store**: player CRUD over PostgreSQL with idempotent inserts
//!   and explicit not-found reporting
//! - **Live Coverage**: live matches, full scorecards, player search,
//!   ICC rankings and career stats
//! - **Four Output Shapes**: tables for humans, JSON/CSV/TSV for pipes
//!
//! ## Quick Start
//!
//! ```bash
//! # See every catalogue question
//! $ stumps queries list
//!
//! # Run one against the store
//! $ stumps queries run "Q6. Count players by role"
//!
//! # Live matches, grouped by series
//! $ RAPIDAPI_KEY=... stumps live matches
//! ```
//!
//! ## Library Usage
//!
//! ```no_run
//! use stumps::catalogue::QueryCatalogue;
//! use stumps::config::DatabaseConfig;
//! use stumps::query::QueryExecutor;
//!
//! #[tokio::main]
//! async fn main() -> stumps::Result<()> {
//!     let catalogue = QueryCatalogue::builtin();
//!     let definition = catalogue.get("Q1. Players from India")?;
//!
//!     let executor = QueryExecutor::new(DatabaseConfig::from_env()?);
//!     let result = executor.execute(definition).await?;
//!     println!("{} rows in {} ms", result.row_count, result.execution_ms);
//!     Ok(())
//! }
//! ```
//!
//! The store and the live API are independent surfaces: catalogue queries
//! and record edits need PostgreSQL, live views need a `RAPIDAPI_KEY`, and
//! neither touches the other.

pub mod catalogue;
pub mod config;
pub mod error;
pub mod live;
pub mod query;
pub mod store;

pub use catalogue::{QueryCatalogue, QueryDefinition};
pub use config::{DatabaseConfig, LiveApiConfig};
pub use error::{CatalogueError, DatabaseError, LiveError, Result, StumpsError};
pub use live::{
    LiveClient, LiveMatch, PlayerProfile, PlayerSearchHit, Scorecard, StatsTable,
};
pub use query::{QueryExecutor, TabularResult, TabularRow};
pub use store::{
    InsertOutcome, MutationOutcome, Player, PlayerSummary, RecordStore, RosterRow, Team,
};
