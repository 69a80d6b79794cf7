//! HTTP client for the football standings API.

use reqwest::{header, Client};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::types::{LeaguesEnvelope, StandingsPayload};
use crate::{
    core::config::Config,
    error::{FootyError, Result},
    standings::LeagueEntry,
    LeagueCode, Season,
};


const USER_AGENT: &str = concat!("football-standings/", env!("CARGO_PKG_VERSION"));

/// Thin client over the two endpoints we use. One request per call, no
/// retries; the timeout comes from [`Config::http_timeout`].
#[derive(Debug, Clone)]
pub struct StandingsClient {
    client: Client,
    base_url: String,
}

impl StandingsClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.http_timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn leagues_url(&self) -> String {
        format!("{}/leagues/", self.base_url)
    }

    pub fn standings_url(&self, league: &LeagueCode) -> String {
        format!("{}/leagues/{}/standings", self.base_url, league)
    }

    /// `GET /leagues/`: every league the API serves.
    pub async fn fetch_leagues(&self) -> Result<Vec<LeagueEntry>> {
        let envelope: LeaguesEnvelope = self.get_json(&self.leagues_url(), &[]).await?;
        Ok(envelope.data.into_iter().map(LeagueEntry::from).collect())
    }

    /// `GET /leagues/{code}/standings?season={year}&sort=asc`
    pub async fn fetch_standings(
        &self,
        league: &LeagueCode,
        season: Season,
    ) -> Result<StandingsPayload> {
        let season = season.to_string();
        let params = [("season", season.as_str()), ("sort", "asc")];
        self.get_json(&self.standings_url(league), &params).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str, params: &[(&str, &str)]) -> Result<T> {
        debug!(%url, ?params, "GET");

        let body = self
            .client
            .get(url)
            .header(header::ACCEPT, "application/json")
            .query(params)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        serde_json::from_str(&body).map_err(|e| FootyError::schema(format!("{url}: {e}")))
    }
}
