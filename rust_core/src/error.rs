//! Error types shared by the store, ingestion and the NHL gateway.

use crate::models::GameId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, StandingsError>;

#[derive(Debug, Error)]
pub enum StandingsError {
    /// Store lookup for a team that was never upserted.
    #[error("team not found: {0}")]
    TeamNotFound(String),

    /// A game references a team absent from the store. The game is skipped.
    #[error("game {game_id} references unknown team {team}")]
    UnknownTeam { game_id: GameId, team: String },

    /// A game lists the same team as home and away. The game is skipped.
    #[error("game {game_id} lists {team} as both home and away team")]
    SameTeam { game_id: GameId, team: String },

    /// A gateway record is missing a required field.
    #[error("{record} is missing required field `{field}`")]
    MissingField { record: String, field: &'static str },

    #[error("NHL API returned {status} for {url}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl StandingsError {
    /// True for errors scoped to a single game, which never abort a schedule.
    pub fn is_per_game(&self) -> bool {
        matches!(
            self,
            StandingsError::UnknownTeam { .. } | StandingsError::SameTeam { .. }
        )
    }
}
