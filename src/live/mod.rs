//! Live match data and player stats
//!
//! Read-only views over a hosted cricket data API, entirely separate from
//! the relational store: nothing fetched here is written back. Requires a
//! `RAPIDAPI_KEY`; see [`crate::config::LiveApiConfig`].

mod client;
mod model;

pub use client::LiveClient;
pub use model::{
    BattingLine, BowlingLine, InningsCard, InningsScore, LiveMatch, PlayerProfile,
    PlayerSearchHit, RankEntry, Scorecard, StatsTable,
};
