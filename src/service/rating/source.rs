//! Data the calculator reads while scoring a fixture.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    data::{football_match::MatchRepository, standing::StandingRepository},
    error::Error,
    model::fixture::Fixture,
    service::resolver::LeagueResolver,
};

/// Lookups the rating calculator depends on.
///
/// Every lookup separates "not found" (`Ok(None)`, empty history) from a failed read (`Err`).
#[async_trait]
pub trait RatingSource: Send + Sync {
    /// League a team plays in.
    async fn resolve_league(&self, team_id: i64) -> Result<Option<String>, Error>;

    /// Position of a team in its league table.
    async fn team_position(&self, league: &str, team_id: i64) -> Result<Option<i32>, Error>;

    /// Short name of a team by its display name within a league.
    async fn team_short_name(&self, league: &str, name: &str) -> Result<Option<String>, Error>;

    /// Last `limit` finished fixtures of a team that kicked off before `before`, most recent
    /// first.
    async fn recent_finished_matches(
        &self,
        team_id: i64,
        before: DateTime<Utc>,
        limit: u64,
    ) -> Result<Vec<Fixture>, Error>;
}

/// [`RatingSource`] reading from the entity store through the league resolver.
pub struct StoreRatingSource<'a> {
    db: &'a DatabaseConnection,
    resolver: &'a LeagueResolver,
}

impl<'a> StoreRatingSource<'a> {
    pub fn new(db: &'a DatabaseConnection, resolver: &'a LeagueResolver) -> Self {
        Self { db, resolver }
    }
}

#[async_trait]
impl<'a> RatingSource for StoreRatingSource<'a> {
    async fn resolve_league(&self, team_id: i64) -> Result<Option<String>, Error> {
        self.resolver.resolve_league(team_id).await
    }

    async fn team_position(&self, league: &str, team_id: i64) -> Result<Option<i32>, Error> {
        Ok(StandingRepository::new(self.db)
            .get_position(league, team_id)
            .await?)
    }

    async fn team_short_name(&self, league: &str, name: &str) -> Result<Option<String>, Error> {
        self.resolver.short_name(league, name).await
    }

    async fn recent_finished_matches(
        &self,
        team_id: i64,
        before: DateTime<Utc>,
        limit: u64,
    ) -> Result<Vec<Fixture>, Error> {
        let history = MatchRepository::new(self.db)
            .get_recent_finished(team_id, before, limit)
            .await?;

        Ok(history.iter().map(Fixture::from).collect())
    }
}
