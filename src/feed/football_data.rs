//! football-data.org v4 client.

use async_trait::async_trait;
use chrono::NaiveDate;
use dioxus_logger::tracing;
use serde::de::DeserializeOwned;

use crate::{
    error::feed::FeedError,
    feed::FeedClient,
    model::feed::{
        FeedMatch, FeedStanding, FeedTeam, MatchesResponse, StandingsResponse, TeamsResponse,
    },
};

const AUTH_HEADER: &str = "X-Auth-Token";

/// Standings table type holding the overall (home + away) ranking.
const TOTAL_TABLE: &str = "TOTAL";

/// HTTP client for the football-data.org API.
#[derive(Clone)]
pub struct FootballDataClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    season: Option<u16>,
}

impl FootballDataClient {
    /// Creates a new instance of [`FootballDataClient`].
    ///
    /// # Arguments
    /// - `http` - Shared reqwest client
    /// - `base_url` - API origin without the `/v4` suffix, e.g. `https://api.football-data.org`
    /// - `api_key` - Token sent in the `X-Auth-Token` header
    /// - `season` - Season standings are requested for, `None` for the feed's current season
    pub fn new(
        http: reqwest::Client,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        season: Option<u16>,
    ) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            season,
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, FeedError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .header(AUTH_HEADER, &self.api_key)
            .query(query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FeedError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl FeedClient for FootballDataClient {
    async fn fetch_teams(&self, league_code: &str) -> Result<Vec<FeedTeam>, FeedError> {
        let response: TeamsResponse = self
            .get_json(&format!("/v4/competitions/{}/teams", league_code), &[])
            .await?;

        Ok(response.teams)
    }

    async fn fetch_standings(&self, league_code: &str) -> Result<Vec<FeedStanding>, FeedError> {
        let query: Vec<(&str, String)> = self
            .season
            .map(|season| vec![("season", season.to_string())])
            .unwrap_or_default();

        let response: StandingsResponse = self
            .get_json(&format!("/v4/competitions/{}/standings", league_code), &query)
            .await?;

        // Prefer the overall table, the feed also publishes home-only and away-only tables
        let mut groups = response.standings;
        let index = groups
            .iter()
            .position(|group| group.kind.as_deref() == Some(TOTAL_TABLE))
            .unwrap_or(0);

        if index >= groups.len() || groups[index].table.is_empty() {
            return Err(FeedError::EmptyStandings(league_code.to_string()));
        }

        Ok(groups.swap_remove(index).table)
    }

    async fn fetch_matches(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<FeedMatch>, FeedError> {
        let query = [
            ("dateFrom", from.format("%Y-%m-%d").to_string()),
            ("dateTo", to.format("%Y-%m-%d").to_string()),
        ];

        let response: MatchesResponse = self.get_json("/v4/matches", &query).await?;

        Ok(response.matches)
    }
}
