//! Playoff Picture Service
//!
//! Builds the current NHL standings with the full tiebreaker protocol.
//!
//! This service:
//! - Fetches the standings snapshot from the NHL web API
//! - Fetches every team's season schedule and records head-to-head results
//! - Prints the ranked standings by league, conference or division

mod config;
mod formatters;

use anyhow::{Context, Result};
use config::Config;
use dotenv::dotenv;
use standings_core::load_season;
use standings_core::providers::NhlStandingsSource;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    info!(
        "Starting playoff picture for season {} ({})",
        config.season, config.base_url
    );

    let source = NhlStandingsSource::new(config.client_config());
    let load = load_season(&source, config.max_concurrent_requests)
        .await
        .context("Failed to load season")?;

    for (team, e) in &load.report.schedule_failures {
        warn!("Schedule for {} is missing from the head-to-head data: {}", team, e);
    }
    for e in &load.report.ingest.errors {
        warn!("Game skipped: {}", e);
    }
    info!(
        "{} teams, {} games recorded, {} remaining",
        load.report.teams_loaded,
        load.report.ingest.recorded,
        load.standings.remaining_games().len()
    );

    println!("{}", formatters::format_standings(&load.standings, config.view));

    Ok(())
}
