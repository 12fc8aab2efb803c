//! Team record store.
//!
//! This module provides:
//! - One `TeamRecord` per team identifier
//! - Upserts that refresh base statistics without losing head-to-head state
//! - Iteration in first-insertion order

use crate::error::{Result, StandingsError};
use crate::models::{TeamRecord, TeamStats};
use rustc_hash::FxHashMap;

#[derive(Debug, Clone, Default)]
pub struct TeamStore {
    /// Records in first-insertion order
    records: Vec<TeamRecord>,
    /// identifier -> position in `records`
    index: FxHashMap<String, usize>,
}

impl TeamStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create or replace a team's base statistics.
    ///
    /// An existing record keeps its head-to-head tallies and its position.
    pub fn upsert(&mut self, identifier: &str, stats: TeamStats) {
        match self.index.get(identifier) {
            Some(&pos) => self.records[pos].apply_stats(stats),
            None => {
                self.index.insert(identifier.to_string(), self.records.len());
                self.records.push(TeamRecord::new(identifier, stats));
            }
        }
    }

    pub fn get(&self, identifier: &str) -> Result<&TeamRecord> {
        self.index
            .get(identifier)
            .map(|&pos| &self.records[pos])
            .ok_or_else(|| StandingsError::TeamNotFound(identifier.to_string()))
    }

    pub(crate) fn get_mut(&mut self, identifier: &str) -> Result<&mut TeamRecord> {
        match self.index.get(identifier) {
            Some(&pos) => Ok(&mut self.records[pos]),
            None => Err(StandingsError::TeamNotFound(identifier.to_string())),
        }
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.index.contains_key(identifier)
    }

    /// Get number of teams.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if store is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TeamRecord> {
        self.records.iter()
    }

    pub fn records(&self) -> &[TeamRecord] {
        &self.records
    }

    /// Team identifiers in insertion order.
    pub fn identifiers(&self) -> Vec<String> {
        self.records.iter().map(|r| r.identifier.clone()).collect()
    }
}
