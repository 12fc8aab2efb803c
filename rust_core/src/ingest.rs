//! Game ingestion: turns schedule entries into head-to-head tallies.

use crate::error::{Result, StandingsError};
use crate::models::{Game, GameId, GameState};
use crate::standings::Standings;
use tracing::{debug, warn};

/// What `Standings::ingest` did with a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IngestOutcome {
    /// Head-to-head updated for both teams
    Recorded { winner: String, loser: String },
    /// Id already ingested; nothing changed
    Duplicate,
    /// Preseason, playoff or other non-standings game
    Excluded,
    /// Not final yet; kept in the remaining-games collection
    Deferred,
    /// Final, but the scores do not name a winner; marked seen, no tally change
    Unresolved,
}

/// Summary of a batch passed to `Standings::ingest_all`.
#[derive(Debug, Default)]
pub struct IngestReport {
    pub recorded: usize,
    pub duplicates: usize,
    pub excluded: usize,
    pub deferred: usize,
    pub unresolved: usize,
    /// Per-game failures; the rest of the batch was still processed
    pub errors: Vec<StandingsError>,
}

impl IngestReport {
    fn count(&mut self, outcome: &IngestOutcome) {
        match outcome {
            IngestOutcome::Recorded { .. } => self.recorded += 1,
            IngestOutcome::Duplicate => self.duplicates += 1,
            IngestOutcome::Excluded => self.excluded += 1,
            IngestOutcome::Deferred => self.deferred += 1,
            IngestOutcome::Unresolved => self.unresolved += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.recorded
            + self.duplicates
            + self.excluded
            + self.deferred
            + self.unresolved
            + self.errors.len()
    }

    pub fn merge(&mut self, other: IngestReport) {
        self.recorded += other.recorded;
        self.duplicates += other.duplicates;
        self.excluded += other.excluded;
        self.deferred += other.deferred;
        self.unresolved += other.unresolved;
        self.errors.extend(other.errors);
    }
}

impl Standings {
    /// Apply one game.
    ///
    /// Returns `UnknownTeam` if either side is not in the store; the game is
    /// then left unrecorded so a later ingest (after the team is added) can
    /// still apply it. A game with the same team on both sides is rejected
    /// with `SameTeam` and never marked seen.
    pub fn ingest(&mut self, game: Game) -> Result<IngestOutcome> {
        if game.game_type.is_excluded() {
            return Ok(IngestOutcome::Excluded);
        }
        if self.seen_games.contains(&game.id) {
            return Ok(IngestOutcome::Duplicate);
        }
        for team in [&game.home_team, &game.away_team] {
            if !self.teams.contains(team) {
                return Err(StandingsError::UnknownTeam {
                    game_id: game.id,
                    team: team.clone(),
                });
            }
        }
        if game.home_team == game.away_team {
            return Err(StandingsError::SameTeam {
                game_id: game.id,
                team: game.home_team,
            });
        }

        if game.state != GameState::Final {
            self.remaining_games.insert(game.id, game);
            return Ok(IngestOutcome::Deferred);
        }

        let outcome = match game.winner_and_loser() {
            Some((winner, loser)) => {
                self.record_result(game.id, winner, loser)?;
                IngestOutcome::Recorded {
                    winner: winner.to_string(),
                    loser: loser.to_string(),
                }
            }
            None => {
                warn!(
                    "Game {} ({} vs {}) is final without a winner ({:?}-{:?})",
                    game.id, game.home_team, game.away_team, game.home_score, game.away_score
                );
                IngestOutcome::Unresolved
            }
        };

        self.seen_games.insert(game.id);
        self.remaining_games.remove(&game.id);
        Ok(outcome)
    }

    /// Apply a batch. Per-game errors are logged and collected, never fatal.
    pub fn ingest_all<I>(&mut self, games: I) -> IngestReport
    where
        I: IntoIterator<Item = Game>,
    {
        let mut report = IngestReport::default();
        for game in games {
            let game_id = game.id;
            match self.ingest(game) {
                Ok(outcome) => report.count(&outcome),
                Err(e) => {
                    warn!("Skipping game {}: {}", game_id, e);
                    report.errors.push(e);
                }
            }
        }
        report
    }

    fn record_result(&mut self, game_id: GameId, winner: &str, loser: &str) -> Result<()> {
        // Both sides were checked by the caller; these lookups cannot miss.
        self.teams.get_mut(winner)?.record_win_over(loser);
        self.teams.get_mut(loser)?.record_loss_to(winner);
        debug!("Game {}: {} def. {}", game_id, winner, loser);
        Ok(())
    }
}
