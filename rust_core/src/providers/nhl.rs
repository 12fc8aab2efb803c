//! NHL Standings Source
//!
//! Implements the StandingsSource trait on top of the NHL web API client.

use super::StandingsSource;
use crate::clients::nhl::{NhlClient, NhlClientConfig};
use crate::error::Result;
use crate::models::{Schedule, TeamStats};
use async_trait::async_trait;

pub struct NhlStandingsSource {
    client: NhlClient,
}

impl NhlStandingsSource {
    pub fn new(config: NhlClientConfig) -> Self {
        Self {
            client: NhlClient::with_config(config),
        }
    }

    pub fn season(&self) -> &str {
        &self.client.config().season
    }
}

impl Default for NhlStandingsSource {
    fn default() -> Self {
        Self::new(NhlClientConfig::default())
    }
}

#[async_trait]
impl StandingsSource for NhlStandingsSource {
    async fn fetch_standings(&self) -> Result<Vec<(String, TeamStats)>> {
        self.client.get_standings().await
    }

    async fn fetch_team_schedule(&self, team: &str) -> Result<Schedule> {
        self.client.get_team_schedule(team).await
    }

    fn source_name(&self) -> &str {
        "nhl"
    }
}
