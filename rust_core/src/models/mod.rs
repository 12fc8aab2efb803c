// Shared models for the standings engine
pub mod game;
pub mod team;

pub use game::{Game, GameId, GameState, GameType, Schedule};
pub use team::{HeadToHead, TeamRecord, TeamStats};
