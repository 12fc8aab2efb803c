//! Game results as delivered by a schedule feed.

use crate::error::StandingsError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub type GameId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameState {
    /// Result is official
    Final,
    /// Scheduled, in progress, or otherwise unresolved
    NotFinal,
}

impl GameState {
    /// Map an NHL `gameState` code.
    pub fn from_nhl_code(code: &str) -> Self {
        match code {
            "OFF" | "FINAL" => GameState::Final,
            _ => GameState::NotFinal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameType {
    Preseason,
    RegularSeason,
    Playoffs,
    Other(u8),
}

impl GameType {
    /// Map an NHL `gameType` number.
    pub fn from_nhl_code(code: u64) -> Self {
        match code {
            1 => GameType::Preseason,
            2 => GameType::RegularSeason,
            3 => GameType::Playoffs,
            other => GameType::Other(u8::try_from(other).unwrap_or(u8::MAX)),
        }
    }

    /// Only regular season games count toward standings tiebreakers.
    pub fn is_excluded(&self) -> bool {
        !matches!(self, GameType::RegularSeason)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub id: GameId,
    pub state: GameState,
    pub game_type: GameType,
    pub date: Option<NaiveDate>,
    pub home_team: String,
    pub away_team: String,
    pub home_score: Option<u32>,
    pub away_score: Option<u32>,
}

impl Game {
    /// Winner and loser identifiers, if the scores separate the two sides.
    pub fn winner_and_loser(&self) -> Option<(&str, &str)> {
        let (home, away) = (self.home_score?, self.away_score?);
        if home > away {
            Some((&self.home_team, &self.away_team))
        } else if away > home {
            Some((&self.away_team, &self.home_team))
        } else {
            None
        }
    }
}

/// A team's schedule as parsed from a feed.
#[derive(Debug, Default)]
pub struct Schedule {
    pub games: Vec<Game>,
    /// Entries that could not be parsed; the rest of the schedule is still usable
    pub errors: Vec<StandingsError>,
}
