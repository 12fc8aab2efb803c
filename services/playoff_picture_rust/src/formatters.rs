use standings_core::{RankedTeam, Standings};

use crate::config::StandingsView;

const HEADER: &str = " #  TEAM   GP  PTS   RW  ROW    W    GD   GF";

/// Render the standings for the chosen view.
pub fn format_standings(standings: &Standings, view: StandingsView) -> String {
    match view {
        StandingsView::League => format_table("League", &standings.playoff_picture()),
        StandingsView::Conference => standings
            .conferences()
            .into_iter()
            .map(|c| {
                format_table(
                    &format!("{} Conference", c),
                    &standings.conference_standings(c),
                )
            })
            .collect::<Vec<_>>()
            .join("\n"),
        StandingsView::Division => standings
            .divisions()
            .into_iter()
            .map(|d| {
                format_table(
                    &format!("{} Division", d),
                    &standings.division_standings(d),
                )
            })
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

pub fn format_table(title: &str, ranked: &[RankedTeam<'_>]) -> String {
    let mut out = String::new();
    out.push_str(&format!("{title}\n"));
    out.push_str(HEADER);
    out.push('\n');
    for (i, (id, team)) in ranked.iter().enumerate() {
        out.push_str(&format!(
            "{:>2}  {:<4} {:>4} {:>4} {:>4} {:>4} {:>4} {:>5} {:>4}\n",
            i + 1,
            id,
            team.games_played,
            team.points,
            team.regulation_wins,
            team.regulation_plus_ot_wins,
            team.total_wins,
            format_differential(team.goal_differential),
            team.goals_for,
        ));
    }
    out
}

fn format_differential(gd: i32) -> String {
    if gd > 0 {
        format!("+{gd}")
    } else {
        gd.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use standings_core::TeamStats;

    fn standings() -> Standings {
        let mut s = Standings::new();
        let team = |points, gd, conference: &str, division: &str| TeamStats {
            points,
            games_played: 82,
            goal_differential: gd,
            conference: conference.to_string(),
            division: division.to_string(),
            ..Default::default()
        };
        s.upsert_team("BOS", team(99, 12, "E", "A"));
        s.upsert_team("VAN", team(101, -4, "W", "P"));
        s.upsert_team("TOR", team(104, 0, "E", "A"));
        s
    }

    #[test]
    fn test_league_table() {
        let out = format_standings(&standings(), StandingsView::League);
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], "League");
        assert_eq!(lines[1], HEADER);
        assert!(lines[2].starts_with(" 1  TOR"));
        assert!(lines[3].starts_with(" 2  VAN"));
        assert!(lines[3].contains("-4"));
        assert!(lines[4].starts_with(" 3  BOS"));
        assert!(lines[4].contains("+12"));
    }

    #[test]
    fn test_conference_tables() {
        let out = format_standings(&standings(), StandingsView::Conference);

        assert!(out.contains("E Conference"));
        assert!(out.contains("W Conference"));
        let east = out.find("E Conference").unwrap();
        let west = out.find("W Conference").unwrap();
        assert!(east < west);
    }

    #[test]
    fn test_division_tables() {
        let out = format_standings(&standings(), StandingsView::Division);
        assert!(out.starts_with("A Division"));
        assert!(out.contains("P Division"));
    }
}
