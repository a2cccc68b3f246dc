//! Periodic synchronization jobs.
//!
//! Each job walks the league table, pulls records from the feed, normalizes them, and writes
//! them to the store. Failures are contained to the smallest unit: a league for the teams and
//! standings jobs, a fixture for the matches job. Cache invalidation runs after the writes
//! and never fails a job.

pub mod matches;
pub mod standings;
pub mod teams;

pub use matches::{MatchSyncReport, MatchSyncService};
pub use standings::StandingSyncService;
pub use teams::TeamSyncService;

/// Outcome of a per-league job run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// Keys of the leagues whose data was replaced
    pub refreshed: Vec<String>,
    /// Keys of the leagues skipped after a feed, validation, or store failure
    pub skipped: Vec<String>,
    /// Number of records written across the refreshed leagues
    pub records: usize,
}
