// Functions and methods for ordering teams into final standings.

use crate::models::TeamRecord;
use crate::standings::Standings;
use crate::tiebreaker::{compare_tied, primary_key};
use std::cmp::Ordering;

/// One line of the final standings: identifier and the full record.
pub type RankedTeam<'a> = (&'a str, &'a TeamRecord);

/// Order teams by the full tiebreaker protocol.
///
/// Teams are sorted by primary key, cut into groups sharing that key, and
/// each group of two or more is ordered by head-to-head and then by the
/// secondary key. Teams that stay equal keep their input order.
pub fn rank<'a, I>(teams: I) -> Vec<RankedTeam<'a>>
where
    I: IntoIterator<Item = &'a TeamRecord>,
{
    tied_groups(teams)
        .into_iter()
        .flat_map(|mut group| {
            if group.len() > 1 {
                insertion_sort_by(&mut group, |a, b| compare_tied(a, b));
            }
            group
        })
        .map(|team| (team.identifier.as_str(), team))
        .collect()
}

/// Teams sorted by primary key and split into maximal runs of equal key.
pub fn tied_groups<'a, I>(teams: I) -> Vec<Vec<&'a TeamRecord>>
where
    I: IntoIterator<Item = &'a TeamRecord>,
{
    let mut sorted: Vec<&TeamRecord> = teams.into_iter().collect();
    sorted.sort_by_key(|t| primary_key(t));

    let mut groups: Vec<Vec<&TeamRecord>> = Vec::new();
    for team in sorted {
        match groups.last_mut() {
            Some(group) if primary_key(group[0]) == primary_key(team) => group.push(team),
            _ => groups.push(vec![team]),
        }
    }
    groups
}

/// Stable insertion sort that tolerates comparators that are not a total order.
///
/// `slice::sort_by` may panic when the comparator is inconsistent, and
/// head-to-head cycles make `compare_tied` inconsistent. Each pass only moves
/// an element left past strictly greater neighbours, so this always
/// terminates and gives the same result for the same input.
fn insertion_sort_by<T, F>(items: &mut [T], mut cmp: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for i in 1..items.len() {
        let mut j = i;
        while j > 0 && cmp(&items[j - 1], &items[j]) == Ordering::Greater {
            items.swap(j - 1, j);
            j -= 1;
        }
    }
}

impl Standings {
    /// League-wide final standings.
    pub fn playoff_picture(&self) -> Vec<RankedTeam<'_>> {
        rank(self.teams.iter())
    }

    /// Final standings restricted to teams matching `predicate`.
    pub fn rank_where<P>(&self, mut predicate: P) -> Vec<RankedTeam<'_>>
    where
        P: FnMut(&TeamRecord) -> bool,
    {
        rank(self.teams.iter().filter(|t| predicate(t)))
    }

    pub fn conference_standings(&self, conference: &str) -> Vec<RankedTeam<'_>> {
        self.rank_where(|t| t.conference == conference)
    }

    pub fn division_standings(&self, division: &str) -> Vec<RankedTeam<'_>> {
        self.rank_where(|t| t.division == division)
    }

    /// Distinct conference codes in team insertion order.
    pub fn conferences(&self) -> Vec<&str> {
        distinct(self.teams.iter().map(|t| t.conference.as_str()))
    }

    /// Distinct division codes in team insertion order.
    pub fn divisions(&self) -> Vec<&str> {
        distinct(self.teams.iter().map(|t| t.division.as_str()))
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut out: Vec<&str> = Vec::new();
    for v in values {
        if !v.is_empty() && !out.contains(&v) {
            out.push(v);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Game, GameState, GameType, TeamStats};

    fn stats(points: u32, games_played: u32) -> TeamStats {
        TeamStats {
            points,
            games_played,
            ..Default::default()
        }
    }

    fn ids(ranked: &[RankedTeam<'_>]) -> Vec<String> {
        ranked.iter().map(|(id, _)| id.to_string()).collect()
    }

    fn win(standings: &mut Standings, id: u64, winner: &str, loser: &str) {
        standings
            .ingest(Game {
                id,
                state: GameState::Final,
                game_type: GameType::RegularSeason,
                date: None,
                home_team: winner.to_string(),
                away_team: loser.to_string(),
                home_score: Some(3),
                away_score: Some(1),
            })
            .unwrap();
    }

    #[test]
    fn test_empty_and_single() {
        let empty: Vec<TeamRecord> = Vec::new();
        assert!(rank(&empty).is_empty());

        let only = vec![TeamRecord::new("BOS", stats(10, 5))];
        assert_eq!(ids(&rank(&only)), vec!["BOS"]);
    }

    #[test]
    fn test_fewer_games_played_wins_tie() {
        let teams = vec![
            TeamRecord::new("Y", stats(100, 82)),
            TeamRecord::new("X", stats(100, 80)),
        ];
        assert_eq!(ids(&rank(&teams)), vec!["X", "Y"]);
    }

    #[test]
    fn test_points_order() {
        let teams = vec![
            TeamRecord::new("A", stats(50, 40)),
            TeamRecord::new("B", stats(70, 40)),
            TeamRecord::new("C", stats(60, 40)),
        ];
        assert_eq!(ids(&rank(&teams)), vec!["B", "C", "A"]);
    }

    #[test]
    fn test_head_to_head_beats_goal_differential() {
        let mut s = Standings::new();
        s.upsert_team(
            "A",
            TeamStats {
                goal_differential: -10,
                ..stats(90, 82)
            },
        );
        s.upsert_team(
            "B",
            TeamStats {
                goal_differential: 25,
                ..stats(90, 82)
            },
        );
        win(&mut s, 1, "A", "B");
        win(&mut s, 2, "A", "B");
        win(&mut s, 3, "B", "A");

        assert_eq!(ids(&s.playoff_picture()), vec!["A", "B"]);
    }

    #[test]
    fn test_no_meetings_falls_to_secondary_key() {
        let teams = vec![
            TeamRecord::new(
                "A",
                TeamStats {
                    goal_differential: 5,
                    goals_for: 200,
                    ..stats(90, 82)
                },
            ),
            TeamRecord::new(
                "B",
                TeamStats {
                    goal_differential: 5,
                    goals_for: 240,
                    ..stats(90, 82)
                },
            ),
            TeamRecord::new(
                "C",
                TeamStats {
                    goal_differential: 12,
                    goals_for: 180,
                    ..stats(90, 82)
                },
            ),
        ];
        assert_eq!(ids(&rank(&teams)), vec!["C", "B", "A"]);
    }

    #[test]
    fn test_fully_equal_teams_keep_input_order() {
        let teams = vec![
            TeamRecord::new("C", stats(90, 82)),
            TeamRecord::new("A", stats(90, 82)),
            TeamRecord::new("B", stats(90, 82)),
        ];
        assert_eq!(ids(&rank(&teams)), vec!["C", "A", "B"]);
    }

    #[test]
    fn test_groups_stay_in_primary_order() {
        let mut s = Standings::new();
        s.upsert_team("LOW1", stats(60, 82));
        s.upsert_team("TOP", stats(110, 82));
        s.upsert_team("LOW2", stats(60, 82));
        win(&mut s, 1, "LOW2", "LOW1");

        let groups = tied_groups(s.teams().iter());
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[1].len(), 2);
        assert_eq!(ids(&s.playoff_picture()), vec!["TOP", "LOW2", "LOW1"]);
    }

    #[test]
    fn test_head_to_head_cycle_is_deterministic() {
        let mut s = Standings::new();
        for id in ["A", "B", "C"] {
            s.upsert_team(id, stats(90, 82));
        }
        win(&mut s, 1, "A", "B");
        win(&mut s, 2, "B", "C");
        win(&mut s, 3, "C", "A");

        let first = ids(&s.playoff_picture());
        assert_eq!(first.len(), 3);
        for _ in 0..10 {
            assert_eq!(ids(&s.playoff_picture()), first);
        }
        assert_eq!(first, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_conference_and_division_views() {
        let mut s = Standings::new();
        let team = |points, conference: &str, division: &str| TeamStats {
            conference: conference.to_string(),
            division: division.to_string(),
            ..stats(points, 82)
        };
        s.upsert_team("BOS", team(95, "E", "A"));
        s.upsert_team("VAN", team(99, "W", "P"));
        s.upsert_team("NYR", team(101, "E", "M"));
        s.upsert_team("TOR", team(97, "E", "A"));

        assert_eq!(s.conferences(), vec!["E", "W"]);
        assert_eq!(s.divisions(), vec!["A", "P", "M"]);
        assert_eq!(ids(&s.conference_standings("E")), vec!["NYR", "TOR", "BOS"]);
        assert_eq!(ids(&s.division_standings("A")), vec!["TOR", "BOS"]);
        assert_eq!(ids(&s.conference_standings("W")), vec!["VAN"]);
    }

    #[test]
    fn test_insertion_sort_matches_std_for_total_orders() {
        let mut ours = vec![5, 3, 9, 1, 3, 7];
        let mut std_sorted = ours.clone();
        insertion_sort_by(&mut ours, |a, b| a.cmp(b));
        std_sorted.sort();
        assert_eq!(ours, std_sorted);
    }
}
