//! The standings context: team records plus the game bookkeeping that feeds them.

use crate::models::{Game, GameId, TeamRecord, TeamStats};
use crate::store::TeamStore;
use rustc_hash::{FxHashMap, FxHashSet};

/// Owns everything a playoff picture is computed from.
///
/// Built by the caller (usually `season::load_season`) and passed around
/// explicitly; there is no process-wide instance.
#[derive(Debug, Clone, Default)]
pub struct Standings {
    pub(crate) teams: TeamStore,
    /// Ids of games whose result has been applied (or deliberately discarded)
    pub(crate) seen_games: FxHashSet<GameId>,
    /// Games not yet final, keyed by id
    pub(crate) remaining_games: FxHashMap<GameId, Game>,
}

impl Standings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn teams(&self) -> &TeamStore {
        &self.teams
    }

    pub fn upsert_team(&mut self, identifier: &str, stats: TeamStats) {
        self.teams.upsert(identifier, stats);
    }

    pub fn team(&self, identifier: &str) -> crate::error::Result<&TeamRecord> {
        self.teams.get(identifier)
    }

    pub fn has_seen(&self, game_id: GameId) -> bool {
        self.seen_games.contains(&game_id)
    }

    pub fn seen_game_count(&self) -> usize {
        self.seen_games.len()
    }

    /// Unplayed games ordered by date, then id. Undated games sort last.
    pub fn remaining_games(&self) -> Vec<&Game> {
        let mut games: Vec<&Game> = self.remaining_games.values().collect();
        games.sort_by_key(|g| (g.date.is_none(), g.date, g.id));
        games
    }
}
