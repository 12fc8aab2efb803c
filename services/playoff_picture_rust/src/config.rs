//! Configuration constants and environment loading for the playoff picture
//!
//! This module manages all runtime configuration:
//! - NHL API location and season
//! - Request timeout and schedule fetch concurrency
//! - Which standings view to print

use anyhow::{anyhow, Context, Result};
use standings_core::clients::nhl::{
    NhlClientConfig, DEFAULT_BASE_URL, DEFAULT_SEASON, DEFAULT_TIMEOUT_SECS,
};
use standings_core::season::DEFAULT_MAX_CONCURRENT;
use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Upper bound on concurrent schedule requests
pub const MAX_CONCURRENT_LIMIT: usize = 32;

/// How the standings are grouped when printed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StandingsView {
    League,
    Conference,
    Division,
}

impl FromStr for StandingsView {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "league" => Ok(StandingsView::League),
            "conference" => Ok(StandingsView::Conference),
            "division" => Ok(StandingsView::Division),
            other => Err(anyhow!(
                "Invalid STANDINGS_VIEW: {} (expected league, conference or division)",
                other
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub season: String,
    pub request_timeout: Duration,
    pub max_concurrent_requests: usize,
    pub view: StandingsView,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let base_url =
            env::var("NHL_API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let season = env::var("NHL_SEASON").unwrap_or_else(|_| DEFAULT_SEASON.to_string());
        validate_season(&season).context("NHL_SEASON")?;

        let request_timeout = Duration::from_secs(
            parse_env("NHL_REQUEST_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)
                .context("NHL_REQUEST_TIMEOUT_SECS")?,
        );

        let max_concurrent_requests = parse_env("MAX_CONCURRENT_REQUESTS", DEFAULT_MAX_CONCURRENT)
            .context("MAX_CONCURRENT_REQUESTS")?
            .clamp(1, MAX_CONCURRENT_LIMIT);

        let view = match env::var("STANDINGS_VIEW") {
            Ok(v) => v.parse()?,
            Err(_) => StandingsView::Conference,
        };

        Ok(Self {
            base_url,
            season,
            request_timeout,
            max_concurrent_requests,
            view,
        })
    }

    pub fn client_config(&self) -> NhlClientConfig {
        NhlClientConfig {
            base_url: self.base_url.clone(),
            season: self.season.clone(),
            timeout: self.request_timeout,
        }
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(v) => v
            .trim()
            .parse::<T>()
            .map_err(|e| anyhow!("Invalid {}: {} ({})", key, v, e)),
        Err(_) => Ok(default),
    }
}

/// Season codes are two consecutive years, e.g. "20242025".
fn validate_season(season: &str) -> Result<()> {
    let valid = season.len() == 8
        && season.chars().all(|c| c.is_ascii_digit())
        && match (season[..4].parse::<u32>(), season[4..].parse::<u32>()) {
            (Ok(start), Ok(end)) => end == start + 1,
            _ => false,
        };

    if valid {
        Ok(())
    } else {
        Err(anyhow!(
            "Invalid season {} (expected two consecutive years, e.g. 20242025)",
            season
        ))
    }
}
