//! Standings Core - NHL playoff picture from standings and head-to-head results.
//!
//! This module provides:
//! - Team record store keyed by team abbreviation
//! - Game ingestion with per-id deduplication and head-to-head tallies
//! - Tiebreaker keys (points, games played, win types, goals)
//! - Ranking engine: primary-key grouping, head-to-head, secondary key
//! - NHL web API client and the `StandingsSource` abstraction
//! - Season loader that wires source, store and ingestion together

pub mod error;
pub mod ingest;
pub mod models;
pub mod ranking;
pub mod standings;
pub mod store;
pub mod tiebreaker;

// Gateway
pub mod clients;
pub mod providers;
pub mod season;

pub use error::{Result, StandingsError};
pub use ingest::{IngestOutcome, IngestReport};
pub use models::{
    Game, GameId, GameState, GameType, HeadToHead, Schedule, TeamRecord, TeamStats,
};
pub use ranking::{rank, tied_groups, RankedTeam};
pub use season::{load_season, LoadReport, SeasonLoad};
pub use standings::Standings;
pub use store::TeamStore;
