//! Team to league resolution.

use std::{collections::HashMap, sync::Arc};

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use tokio::sync::RwLock;

use crate::{
    data::{standing::StandingRepository, team::TeamRepository},
    error::Error,
    model::league::LeagueTable,
};

/// Resolves which league a team plays in and looks up team short names.
///
/// Lookups by team are served from an in-memory index `team_id -> league key` built from the
/// stored standings of every tracked league. The index is built lazily on first use and
/// rebuilt with [`refresh`](Self::refresh) after the teams and standings jobs commit. A team
/// ranked in several tables resolves to the first league in league-table order.
#[derive(Clone)]
pub struct LeagueResolver {
    db: DatabaseConnection,
    leagues: Arc<LeagueTable>,
    index: Arc<RwLock<Option<HashMap<i64, String>>>>,
}

impl LeagueResolver {
    /// Creates a new instance of [`LeagueResolver`] with an empty, unbuilt index.
    pub fn new(db: DatabaseConnection, leagues: Arc<LeagueTable>) -> Self {
        Self {
            db,
            leagues,
            index: Arc::new(RwLock::new(None)),
        }
    }

    /// Finds the league a team currently plays in.
    ///
    /// # Arguments
    /// - `team_id` - Feed identifier of the team
    ///
    /// # Returns
    /// - `Ok(Some(String))` - Key of the league the team is ranked in
    /// - `Ok(None)` - The team is not ranked in any tracked league
    /// - `Err(Error::DbErr)` - The index had to be built and the standings could not be read
    pub async fn resolve_league(&self, team_id: i64) -> Result<Option<String>, Error> {
        {
            let index = self.index.read().await;
            if let Some(index) = index.as_ref() {
                return Ok(index.get(&team_id).cloned());
            }
        }

        let mut index = self.index.write().await;
        if index.is_none() {
            *index = Some(self.build_index().await?);
        }

        Ok(index
            .as_ref()
            .and_then(|index| index.get(&team_id).cloned()))
    }

    /// Looks up the short name of a team by its exact display name within a league.
    ///
    /// # Returns
    /// - `Ok(Some(String))` - Short name of the team
    /// - `Ok(None)` - No team with that name plays in the league
    /// - `Err(Error::DbErr)` - The lookup failed
    pub async fn short_name(&self, league: &str, full_name: &str) -> Result<Option<String>, Error> {
        Ok(TeamRepository::new(&self.db)
            .get_short_name(league, full_name)
            .await?)
    }

    /// Rebuilds the index from the stored standings.
    ///
    /// On failure the previous index is kept.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of teams in the rebuilt index
    /// - `Err(Error::DbErr)` - The standings could not be read
    pub async fn refresh(&self) -> Result<usize, Error> {
        let rebuilt = self.build_index().await?;
        let size = rebuilt.len();

        *self.index.write().await = Some(rebuilt);
        tracing::debug!("League resolver index rebuilt with {} team(s)", size);

        Ok(size)
    }

    async fn build_index(&self) -> Result<HashMap<i64, String>, Error> {
        let repo = StandingRepository::new(&self.db);
        let mut index = HashMap::new();

        for league in self.leagues.iter() {
            for team_id in repo.get_team_ids(&league.key).await? {
                index.entry(team_id).or_insert_with(|| league.key.clone());
            }
        }

        Ok(index)
    }
}
