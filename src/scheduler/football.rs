//! Job bodies registered with the scheduler.
//!
//! Each takes an owned [`SyncState`] so the returned future is `'static` and can be handed
//! to the cron scheduler.

use dioxus_logger::tracing;

use crate::{
    error::Error,
    model::app::SyncState,
    service::sync::{MatchSyncService, StandingSyncService, TeamSyncService},
};

/// Refreshes the teams of every tracked league.
///
/// # Returns
/// - `Ok(usize)` - Number of teams written
/// - `Err(Error)` - The job could not run at all
pub async fn sync_teams(state: SyncState) -> Result<usize, Error> {
    let report = TeamSyncService::new(&state).sync().await?;

    if !report.skipped.is_empty() {
        tracing::warn!("Teams of {:?} were not refreshed", report.skipped);
    }

    Ok(report.records)
}

/// Refreshes the league table of every tracked league.
pub async fn sync_standings(state: SyncState) -> Result<usize, Error> {
    let report = StandingSyncService::new(&state).sync().await?;

    if !report.skipped.is_empty() {
        tracing::warn!("Standings of {:?} were not refreshed", report.skipped);
    }

    Ok(report.records)
}

/// Stores and rates the fixtures of the upcoming window.
///
/// # Returns
/// - `Ok(usize)` - Number of fixtures stored
/// - `Err(Error)` - The fixtures could not be fetched
pub async fn sync_matches(state: SyncState) -> Result<usize, Error> {
    let report = MatchSyncService::new(&state).sync().await?;

    tracing::debug!(
        "Matches sync: {} fetched, {} rated, {} skipped, {} failed",
        report.fetched,
        report.rated,
        report.skipped,
        report.failed
    );

    Ok(report.stored)
}
