use dioxus_logger::tracing;
use sea_orm::TransactionTrait;

use crate::{
    cache::keys,
    data::standing::StandingRepository,
    error::Error,
    model::{app::SyncState, feed::FeedStanding, league::League},
    service::sync::SyncReport,
};

/// Replaces the league table of every tracked league.
pub struct StandingSyncService<'a> {
    state: &'a SyncState,
}

impl<'a> StandingSyncService<'a> {
    pub fn new(state: &'a SyncState) -> Self {
        Self { state }
    }

    /// Fetches and replaces every league table, in league-table order.
    ///
    /// A table whose positions are not exactly `1..=N` is rejected and the stored table kept.
    /// The rendered table image of each replaced league is invalidated, and the league
    /// resolver is refreshed once at least one league was replaced.
    pub async fn sync(&self) -> Result<SyncReport, Error> {
        let mut report = SyncReport::default();

        for league in self.state.leagues.iter() {
            match self.sync_league(league).await {
                Ok(count) => {
                    tracing::debug!("Stored {} standing row(s) for {}", count, league.key);
                    report.refreshed.push(league.key.clone());
                    report.records += count;

                    self.state
                        .invalidator
                        .invalidate_pattern(&keys::table_image(&league.collection))
                        .await;
                }
                Err(e) => {
                    tracing::warn!("Skipping standings of {}: {}", league.key, e);
                    report.skipped.push(league.key.clone());
                }
            }
        }

        if !report.refreshed.is_empty() {
            if let Err(e) = self.state.resolver.refresh().await {
                tracing::error!("Failed to refresh league resolver after standings sync: {}", e);
            }
        }

        Ok(report)
    }

    async fn sync_league(&self, league: &League) -> Result<usize, Error> {
        let rows: Vec<FeedStanding> = self
            .state
            .feed
            .fetch_standings(&league.code)
            .await?
            .into_iter()
            .map(|row| self.state.aliases.normalize_standing(row))
            .collect();

        validate_positions(league, &rows)?;

        let txn = self.state.db.begin().await?;
        let stored = StandingRepository::new(&txn)
            .replace_league(&league.key, rows)
            .await?;
        txn.commit().await?;

        Ok(stored.len())
    }
}

/// Checks that the positions of a table are a permutation of `1..=N`.
///
/// A table whose size differs from the league's team count is still accepted but logged.
pub(crate) fn validate_positions(league: &League, rows: &[FeedStanding]) -> Result<(), Error> {
    let mut positions: Vec<i32> = rows.iter().map(|row| row.position).collect();
    positions.sort_unstable();

    let contiguous = positions
        .iter()
        .enumerate()
        .all(|(i, position)| *position == i as i32 + 1);

    if !contiguous {
        return Err(Error::ParseError(format!(
            "standings positions are not a permutation of 1..={}: {:?}",
            rows.len(),
            positions
        )));
    }

    if !covers_league(league, rows) {
        tracing::warn!(
            "Standings of {} list {} team(s), the league has {}",
            league.key,
            rows.len(),
            league.team_count
        );
    }

    Ok(())
}

/// Whether a table holds exactly one row per team of the league.
pub(crate) fn covers_league(league: &League, rows: &[FeedStanding]) -> bool {
    rows.len() == league.team_count as usize
}
