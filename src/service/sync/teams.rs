use dioxus_logger::tracing;
use sea_orm::TransactionTrait;

use crate::{
    data::team::TeamRepository,
    error::Error,
    model::{app::SyncState, feed::FeedTeam, league::League},
    service::sync::SyncReport,
};

/// Recreates the teams of every tracked league.
pub struct TeamSyncService<'a> {
    state: &'a SyncState,
}

impl<'a> TeamSyncService<'a> {
    pub fn new(state: &'a SyncState) -> Self {
        Self { state }
    }

    /// Fetches and replaces the teams of every league, in league-table order.
    ///
    /// A league whose fetch or write fails keeps its previous teams and is reported as
    /// skipped. The league resolver is refreshed once at least one league was replaced.
    pub async fn sync(&self) -> Result<SyncReport, Error> {
        let mut report = SyncReport::default();

        for league in self.state.leagues.iter() {
            match self.sync_league(league).await {
                Ok(count) => {
                    tracing::debug!("Stored {} team(s) for {}", count, league.key);
                    report.refreshed.push(league.key.clone());
                    report.records += count;
                }
                Err(e) => {
                    tracing::warn!("Skipping teams of {}: {}", league.key, e);
                    report.skipped.push(league.key.clone());
                }
            }
        }

        if !report.refreshed.is_empty() {
            if let Err(e) = self.state.resolver.refresh().await {
                tracing::error!("Failed to refresh league resolver after teams sync: {}", e);
            }
        }

        Ok(report)
    }

    async fn sync_league(&self, league: &League) -> Result<usize, Error> {
        let teams: Vec<FeedTeam> = self
            .state
            .feed
            .fetch_teams(&league.code)
            .await?
            .into_iter()
            .map(|team| self.state.aliases.normalize_team(team))
            .collect();

        let txn = self.state.db.begin().await?;
        let stored = TeamRepository::new(&txn)
            .replace_league(&league.key, teams)
            .await?;
        txn.commit().await?;

        Ok(stored.len())
    }
}
