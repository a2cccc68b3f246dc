//! Cron scheduler driving the sync jobs.
//!
//! Three jobs run on independent cron timers: teams, standings, and matches. Every tick goes
//! through [`JobGuards`], so a kind never runs concurrently with itself and each run is
//! bounded by the configured deadline. On start the jobs also run once in dependency order
//! so a fresh deployment has data before the first tick.

use std::{fmt, future::Future, sync::Arc, time::Duration};

use dioxus_logger::tracing;
use tokio::task::JoinHandle;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{config::Config, error::Error, model::app::SyncState};

pub mod config;
pub mod football;
pub mod guard;

#[cfg(test)]
mod tests;

pub use guard::{JobGuards, RunOutcome};

use self::football::{sync_matches, sync_standings, sync_teams};

/// Periodic job kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum JobKind {
    Teams,
    Standings,
    Matches,
}

impl JobKind {
    /// Every kind, in the order the warm-up runs them.
    pub const ALL: [JobKind; 3] = [JobKind::Teams, JobKind::Standings, JobKind::Matches];
}

impl fmt::Display for JobKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            JobKind::Teams => "teams",
            JobKind::Standings => "standings",
            JobKind::Matches => "matches",
        };
        write!(f, "{}", name)
    }
}

/// Job scheduler for the football data sync jobs.
pub struct Scheduler {
    state: SyncState,
    sched: JobScheduler,
    guards: JobGuards,
    timeout: Duration,
    warm_up: Option<JoinHandle<()>>,
}

impl Scheduler {
    /// Creates a new instance of [`Scheduler`].
    ///
    /// # Arguments
    /// - `state` - Collaborators handed to every job run
    /// - `timeout` - Deadline applied to each run
    ///
    /// # Returns
    /// - `Ok(Scheduler)` - Successfully created scheduler instance
    /// - `Err(Error)` - Failed to initialize the underlying job scheduler
    pub async fn new(state: SyncState, timeout: Duration) -> Result<Self, Error> {
        let sched = JobScheduler::new().await?;

        Ok(Self {
            state,
            sched,
            guards: JobGuards::new(),
            timeout,
            warm_up: None,
        })
    }

    /// Guards shared by the cron ticks and the warm-up run.
    pub fn guards(&self) -> &JobGuards {
        &self.guards
    }

    /// Registers the three sync jobs, starts the scheduler, and spawns the warm-up run.
    ///
    /// # Returns
    /// - `Ok(())` - All jobs registered and the scheduler started
    /// - `Err(Error)` - A cron expression is invalid or the scheduler failed to start
    pub async fn start(&mut self, config: &Config) -> Result<(), Error> {
        self.register_job(JobKind::Teams, &config.teams_cron, sync_teams)
            .await?;
        self.register_job(JobKind::Standings, &config.standings_cron, sync_standings)
            .await?;
        self.register_job(JobKind::Matches, &config.matches_cron, sync_matches)
            .await?;

        self.sched.start().await?;

        self.warm_up = Some(tokio::spawn(warm_up(
            self.state.clone(),
            self.guards.clone(),
            self.timeout,
        )));

        Ok(())
    }

    /// Registers a recurring job with the specified cron expression.
    ///
    /// Every tick runs `work` through the guard of `kind`, so a tick that fires while the
    /// previous run of the same kind is still executing is skipped.
    ///
    /// # Arguments
    /// - `kind` - Job kind, selects the guard and names the job in log messages
    /// - `cron` - Cron expression with seconds, e.g. "0 0 * * * *" for hourly
    /// - `work` - Async function running one sync, returning the number of records written
    ///
    /// # Returns
    /// - `Ok(())` - Job successfully registered with the scheduler
    /// - `Err(Error)` - Failed to create or add the job (invalid cron expression or scheduler
    ///   error)
    pub async fn register_job<F, Fut>(
        &mut self,
        kind: JobKind,
        cron: &str,
        work: F,
    ) -> Result<(), Error>
    where
        F: Fn(SyncState) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<usize, Error>> + Send + 'static,
    {
        let state = self.state.clone();
        let guards = self.guards.clone();
        let timeout = self.timeout;
        let work = Arc::new(work);

        self.sched
            .add(Job::new_async(cron, move |_, _| {
                let state = state.clone();
                let guards = guards.clone();
                let work = Arc::clone(&work);

                Box::pin(async move {
                    guards.run(kind, timeout, || work(state)).await;
                })
            })?)
            .await?;

        tracing::debug!("Registered {} sync with schedule {}", kind, cron);

        Ok(())
    }

    /// Stops scheduling new ticks and waits for in-flight runs to finish or hit their
    /// deadline.
    pub async fn shutdown(mut self) -> Result<(), Error> {
        self.sched.shutdown().await?;

        if let Some(handle) = self.warm_up.take() {
            if let Err(e) = handle.await {
                tracing::error!("Warm-up run panicked: {}", e);
            }
        }

        self.guards.wait_idle().await;

        Ok(())
    }
}

/// Runs every job once, teams then standings then matches, through the same guards as the
/// cron ticks.
pub async fn warm_up(state: SyncState, guards: JobGuards, timeout: Duration) {
    tracing::info!("Running initial sync");

    guards
        .run(JobKind::Teams, timeout, || sync_teams(state.clone()))
        .await;
    guards
        .run(JobKind::Standings, timeout, || sync_standings(state.clone()))
        .await;
    guards
        .run(JobKind::Matches, timeout, || sync_matches(state.clone()))
        .await;
}
