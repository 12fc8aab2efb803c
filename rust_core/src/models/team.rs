//! Team records and their head-to-head tallies.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Wins and losses against one specific opponent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadToHead {
    pub wins: u32,
    pub losses: u32,
}

impl HeadToHead {
    pub fn games(&self) -> u32 {
        self.wins + self.losses
    }
}

/// Base statistics of a team as reported by a standings snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamStats {
    pub points: u32,
    pub games_played: u32,
    pub regulation_wins: u32,
    pub regulation_plus_ot_wins: u32,
    pub total_wins: u32,
    pub goal_differential: i32,
    pub goals_for: u32,
    pub division: String,
    pub conference: String,
}

/// One team in the standings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRecord {
    pub identifier: String,
    pub points: u32,
    pub games_played: u32,
    pub regulation_wins: u32,
    pub regulation_plus_ot_wins: u32,
    pub total_wins: u32,
    pub goal_differential: i32,
    pub goals_for: u32,
    pub division: String,
    pub conference: String,
    /// opponent identifier -> record against that opponent
    #[serde(default)]
    head_to_head: FxHashMap<String, HeadToHead>,
}

impl TeamRecord {
    pub fn new(identifier: impl Into<String>, stats: TeamStats) -> Self {
        Self {
            identifier: identifier.into(),
            points: stats.points,
            games_played: stats.games_played,
            regulation_wins: stats.regulation_wins,
            regulation_plus_ot_wins: stats.regulation_plus_ot_wins,
            total_wins: stats.total_wins,
            goal_differential: stats.goal_differential,
            goals_for: stats.goals_for,
            division: stats.division,
            conference: stats.conference,
            head_to_head: FxHashMap::default(),
        }
    }

    /// Replace the base statistics, keeping head-to-head state.
    pub fn apply_stats(&mut self, stats: TeamStats) {
        self.points = stats.points;
        self.games_played = stats.games_played;
        self.regulation_wins = stats.regulation_wins;
        self.regulation_plus_ot_wins = stats.regulation_plus_ot_wins;
        self.total_wins = stats.total_wins;
        self.goal_differential = stats.goal_differential;
        self.goals_for = stats.goals_for;
        self.division = stats.division;
        self.conference = stats.conference;
    }

    /// Record against `opponent`. Teams never met read as 0-0; the map is not touched.
    pub fn head_to_head(&self, opponent: &str) -> HeadToHead {
        self.head_to_head.get(opponent).copied().unwrap_or_default()
    }

    /// All opponents with at least one recorded meeting.
    pub fn opponents(&self) -> impl Iterator<Item = (&str, HeadToHead)> {
        self.head_to_head.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub(crate) fn record_win_over(&mut self, opponent: &str) {
        self.head_to_head
            .entry(opponent.to_string())
            .or_default()
            .wins += 1;
    }

    pub(crate) fn record_loss_to(&mut self, opponent: &str) {
        self.head_to_head
            .entry(opponent.to_string())
            .or_default()
            .losses += 1;
    }
}
