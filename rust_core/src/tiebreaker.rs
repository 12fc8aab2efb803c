//! Tiebreaker keys and pairwise comparison for tied teams.
//!
//! Keys sort ascending: a lower tuple is a better standing.
//!
//! 1. Points (more is better)
//! 2. Games played (fewer is better)
//! 3. Regulation wins
//! 4. Regulation + overtime wins
//! 5. Total wins
//! 6. Head-to-head record (pairwise, only inside a tied group)
//! 7. Goal differential
//! 8. Goals for

use crate::models::TeamRecord;
use std::cmp::Ordering;

/// Criteria 1-5.
pub type PrimaryKey = (i64, u32, i64, i64, i64);

/// Criteria 7-8.
pub type SecondaryKey = (i64, i64);

pub fn primary_key(team: &TeamRecord) -> PrimaryKey {
    (
        -i64::from(team.points),
        team.games_played,
        -i64::from(team.regulation_wins),
        -i64::from(team.regulation_plus_ot_wins),
        -i64::from(team.total_wins),
    )
}

pub fn secondary_key(team: &TeamRecord) -> SecondaryKey {
    (-i64::from(team.goal_differential), -i64::from(team.goals_for))
}

/// `Less` if `a` won more meetings against `b` than it lost, `Greater` if fewer,
/// `Equal` when even (including teams that never met).
pub fn compare_head_to_head(a: &TeamRecord, b: &TeamRecord) -> Ordering {
    let matchup = a.head_to_head(&b.identifier);
    matchup.losses.cmp(&matchup.wins)
}

pub fn compare_secondary(a: &TeamRecord, b: &TeamRecord) -> Ordering {
    secondary_key(a).cmp(&secondary_key(b))
}

/// Order two teams that share a primary key.
///
/// Head-to-head is pairwise and can be cyclic across three or more teams, so
/// this is not guaranteed to be a total order.
pub fn compare_tied(a: &TeamRecord, b: &TeamRecord) -> Ordering {
    compare_head_to_head(a, b).then_with(|| compare_secondary(a, b))
}
