//! Upstream football data feed.
//!
//! This module defines the [`FeedClient`] contract the sync jobs depend on, the
//! football-data.org implementation of it, and the alias table used to canonicalize the
//! team and competition names the feed returns.

pub mod alias;
pub mod football_data;

#[cfg(test)]
mod tests;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::{
    error::feed::FeedError,
    model::feed::{FeedMatch, FeedStanding, FeedTeam},
};

pub use football_data::FootballDataClient;

/// Source of raw team, standings, and fixture records.
///
/// Every method may fail transiently; callers treat a failure as "skip this league or
/// period and retry on the next scheduled tick".
#[async_trait]
pub trait FeedClient: Send + Sync {
    /// Fetches the teams participating in a competition.
    async fn fetch_teams(&self, league_code: &str) -> Result<Vec<FeedTeam>, FeedError>;

    /// Fetches the complete league table of a competition.
    async fn fetch_standings(&self, league_code: &str) -> Result<Vec<FeedStanding>, FeedError>;

    /// Fetches every fixture kicking off between `from` and `to`, both inclusive.
    async fn fetch_matches(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<FeedMatch>, FeedError>;
}
