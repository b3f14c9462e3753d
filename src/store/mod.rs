//! Record store gateway for the CRUD surface

mod cache;
mod gateway;
mod models;

pub use gateway::RecordStore;
pub use models::{InsertOutcome, MutationOutcome, Player, PlayerSummary, RosterRow, Team};
