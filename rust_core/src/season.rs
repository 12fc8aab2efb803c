//! Season loading: standings snapshot, then schedules, then ingestion.

use crate::error::{Result, StandingsError};
use crate::ingest::IngestReport;
use crate::models::Schedule;
use crate::providers::StandingsSource;
use crate::standings::Standings;
use futures_util::stream::{self, StreamExt};
use rustc_hash::FxHashMap;
use tracing::{debug, info, warn};

/// Default cap on concurrent schedule requests
pub const DEFAULT_MAX_CONCURRENT: usize = 8;

#[derive(Debug, Default)]
pub struct LoadReport {
    pub teams_loaded: usize,
    pub schedules_fetched: usize,
    /// (team, error) for every schedule that could not be fetched
    pub schedule_failures: Vec<(String, StandingsError)>,
    pub ingest: IngestReport,
}

#[derive(Debug)]
pub struct SeasonLoad {
    pub standings: Standings,
    pub report: LoadReport,
}

/// Build a `Standings` from a source.
///
/// A failed standings fetch is fatal. A failed schedule fetch only loses that
/// team's games; every other schedule is still ingested. Malformed entries
/// inside a schedule only lose themselves and land in `report.ingest.errors`. All schedules are
/// fetched before ingestion starts, and ingestion runs in standings order so
/// the result does not depend on which request finished first.
pub async fn load_season(
    source: &dyn StandingsSource,
    max_concurrent: usize,
) -> Result<SeasonLoad> {
    let mut standings = Standings::new();
    let mut report = LoadReport::default();

    info!("Fetching standings from {}...", source.source_name());
    for (identifier, stats) in source.fetch_standings().await? {
        standings.upsert_team(&identifier, stats);
    }
    report.teams_loaded = standings.teams().len();
    info!("Loaded {} teams", report.teams_loaded);

    let teams = standings.teams().identifiers();
    let mut schedules: FxHashMap<String, Schedule> = stream::iter(teams.iter().cloned())
        .map(|team| async move {
            debug!("Fetching schedule for {}", team);
            let schedule = source.fetch_team_schedule(&team).await;
            (team, schedule)
        })
        .buffer_unordered(max_concurrent.max(1))
        .filter_map(|(team, schedule)| {
            let kept = match schedule {
                Ok(schedule) => Some((team, schedule)),
                Err(e) => {
                    warn!("Failed to fetch schedule for {}: {}", team, e);
                    report.schedule_failures.push((team, e));
                    None
                }
            };
            async move { kept }
        })
        .collect()
        .await;
    report.schedules_fetched = schedules.len();

    for team in &teams {
        if let Some(schedule) = schedules.remove(team) {
            debug!(
                "Ingesting {} games from {}'s schedule",
                schedule.games.len(),
                team
            );
            report.ingest.errors.extend(schedule.errors);
            report.ingest.merge(standings.ingest_all(schedule.games));
        }
    }

    info!(
        "Ingested {} games ({} recorded, {} duplicates, {} remaining, {} errors)",
        report.ingest.total(),
        report.ingest.recorded,
        report.ingest.duplicates,
        report.ingest.deferred,
        report.ingest.errors.len()
    );

    Ok(SeasonLoad { standings, report })
}
