use crate::error::{Result, StandingsError};
use crate::models::{Game, GameState, GameType, Schedule, TeamStats};
use chrono::NaiveDate;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

pub const DEFAULT_BASE_URL: &str = "https://api-web.nhle.com";
pub const DEFAULT_SEASON: &str = "20242025";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct NhlClientConfig {
    pub base_url: String,
    /// Season code, e.g. "20242025"
    pub season: String,
    pub timeout: Duration,
}

impl Default for NhlClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            season: DEFAULT_SEASON.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

#[derive(Debug, Clone)]
pub struct NhlClient {
    client: Client,
    config: NhlClientConfig,
}

impl NhlClient {
    pub fn new() -> Self {
        Self::with_config(NhlClientConfig::default())
    }

    pub fn with_config(config: NhlClientConfig) -> Self {
        Self {
            client: Client::builder()
                .timeout(config.timeout)
                .build()
                .unwrap_or_else(|_| Client::new()),
            config,
        }
    }

    pub fn config(&self) -> &NhlClientConfig {
        &self.config
    }

    /// Current league standings, one entry per team.
    pub async fn get_standings(&self) -> Result<Vec<(String, TeamStats)>> {
        let url = format!("{}/v1/standings/now", self.base_url());
        let data = self.get_json(&url).await?;
        parse_standings(&data)
    }

    /// Every game on a team's schedule for the configured season.
    pub async fn get_team_schedule(&self, team: &str) -> Result<Schedule> {
        let url = format!(
            "{}/v1/club-schedule-season/{}/{}",
            self.base_url(),
            team,
            self.config.season
        );
        let data = self.get_json(&url).await?;
        parse_schedule(&data)
    }

    fn base_url(&self) -> &str {
        self.config.base_url.trim_end_matches('/')
    }

    async fn get_json(&self, url: &str) -> Result<Value> {
        debug!("GET {}", url);
        let resp = self.client.get(url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(StandingsError::UnexpectedStatus {
                url: url.to_string(),
                status,
            });
        }
        let body = resp.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

impl Default for NhlClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a `/v1/standings/now` response.
pub fn parse_standings(data: &Value) -> Result<Vec<(String, TeamStats)>> {
    let entries = data["standings"]
        .as_array()
        .ok_or_else(|| missing("standings response", "standings"))?;

    let mut teams = Vec::with_capacity(entries.len());
    for (i, entry) in entries.iter().enumerate() {
        let record = format!("standings[{}]", i);
        let abbrev = entry["teamAbbrev"]["default"]
            .as_str()
            .ok_or_else(|| missing(&record, "teamAbbrev.default"))?
            .to_string();
        // Name the team in later errors once we know it
        let record = format!("standings entry {}", abbrev);

        let stats = TeamStats {
            points: require_u32(entry, "points", &record)?,
            games_played: require_u32(entry, "gamesPlayed", &record)?,
            regulation_wins: require_u32(entry, "regulationWins", &record)?,
            regulation_plus_ot_wins: require_u32(entry, "regulationPlusOtWins", &record)?,
            total_wins: require_u32(entry, "wins", &record)?,
            goal_differential: require_i32(entry, "goalDifferential", &record)?,
            goals_for: require_u32(entry, "goalFor", &record)?,
            division: require_str(entry, "divisionAbbrev", &record)?,
            conference: require_str(entry, "conferenceAbbrev", &record)?,
        };
        teams.push((abbrev, stats));
    }

    Ok(teams)
}

/// Parse a `/v1/club-schedule-season/{team}/{season}` response.
///
/// Only a missing `games` array fails the whole schedule. A malformed game is
/// skipped and its error kept in `Schedule::errors`.
pub fn parse_schedule(data: &Value) -> Result<Schedule> {
    let entries = data["games"]
        .as_array()
        .ok_or_else(|| missing("schedule response", "games"))?;

    let mut schedule = Schedule::default();
    for (i, entry) in entries.iter().enumerate() {
        match parse_game(entry, i) {
            Ok(game) => schedule.games.push(game),
            Err(e) => {
                warn!("Skipping malformed schedule entry: {}", e);
                schedule.errors.push(e);
            }
        }
    }

    Ok(schedule)
}

fn parse_game(entry: &Value, index: usize) -> Result<Game> {
    let record = format!("games[{}]", index);
    let id = entry["id"].as_u64().ok_or_else(|| missing(&record, "id"))?;
    let record = format!("game {}", id);

    let game_type = entry["gameType"]
        .as_u64()
        .map(GameType::from_nhl_code)
        .ok_or_else(|| missing(&record, "gameType"))?;
    let state = entry["gameState"]
        .as_str()
        .map(GameState::from_nhl_code)
        .ok_or_else(|| missing(&record, "gameState"))?;
    let date = entry["gameDate"]
        .as_str()
        .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok());

    let home = &entry["homeTeam"];
    let away = &entry["awayTeam"];
    let home_team = home["abbrev"]
        .as_str()
        .ok_or_else(|| missing(&record, "homeTeam.abbrev"))?
        .to_string();
    let away_team = away["abbrev"]
        .as_str()
        .ok_or_else(|| missing(&record, "awayTeam.abbrev"))?
        .to_string();

    // Scores are only present once a game has started
    let home_score = home["score"].as_u64().and_then(|s| u32::try_from(s).ok());
    let away_score = away["score"].as_u64().and_then(|s| u32::try_from(s).ok());

    if state == GameState::Final && (home_score.is_none() || away_score.is_none()) {
        let field = if home_score.is_none() {
            "homeTeam.score"
        } else {
            "awayTeam.score"
        };
        return Err(missing(&record, field));
    }

    Ok(Game {
        id,
        state,
        game_type,
        date,
        home_team,
        away_team,
        home_score,
        away_score,
    })
}

fn missing(record: &str, field: &'static str) -> StandingsError {
    StandingsError::MissingField {
        record: record.to_string(),
        field,
    }
}

fn require_u32(entry: &Value, field: &'static str, record: &str) -> Result<u32> {
    entry[field]
        .as_u64()
        .and_then(|v| u32::try_from(v).ok())
        .ok_or_else(|| missing(record, field))
}

fn require_i32(entry: &Value, field: &'static str, record: &str) -> Result<i32> {
    entry[field]
        .as_i64()
        .and_then(|v| i32::try_from(v).ok())
        .ok_or_else(|| missing(record, field))
}

fn require_str(entry: &Value, field: &'static str, record: &str) -> Result<String> {
    entry[field]
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| missing(record, field))
}
