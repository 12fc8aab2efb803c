//! Standings source abstractions
//!
//! Defines the StandingsSource trait so the season loader can run against the
//! NHL web API or any other feed (including in-memory fixtures in tests).

use crate::error::Result;
use crate::models::{Schedule, TeamStats};
use async_trait::async_trait;

pub mod nhl;

pub use nhl::NhlStandingsSource;

/// Supplies a standings snapshot and per-team schedules.
#[async_trait]
pub trait StandingsSource: Send + Sync {
    /// Base statistics for every team, keyed by team identifier
    async fn fetch_standings(&self) -> Result<Vec<(String, TeamStats)>>;

    /// Full season schedule for one team, played and unplayed. Entries that
    /// fail to parse are reported in `Schedule::errors`, not as an `Err`.
    async fn fetch_team_schedule(&self, team: &str) -> Result<Schedule>;

    /// Source name for logging and debugging
    fn source_name(&self) -> &str;
}
