//! Per-kind run guards.

use std::{future::Future, sync::Arc, time::Duration};

use dioxus_logger::tracing;
use tokio::sync::Mutex;

use crate::{error::Error, scheduler::JobKind};

/// How a single tick of a job ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// The run finished and wrote the given number of records
    Completed(usize),
    /// The run returned an error, it will be retried on the next tick
    Failed,
    /// A previous run of the same kind was still executing
    Deferred,
    /// The run exceeded its deadline and was dropped
    TimedOut,
}

/// One mutex per job kind, so a kind never runs twice at once while different kinds may
/// overlap.
#[derive(Clone, Default)]
pub struct JobGuards {
    teams: Arc<Mutex<()>>,
    standings: Arc<Mutex<()>>,
    matches: Arc<Mutex<()>>,
}

impl JobGuards {
    pub fn new() -> Self {
        Self::default()
    }

    fn guard(&self, kind: JobKind) -> Arc<Mutex<()>> {
        match kind {
            JobKind::Teams => self.teams.clone(),
            JobKind::Standings => self.standings.clone(),
            JobKind::Matches => self.matches.clone(),
        }
    }

    /// Runs `work` under the guard of `kind`, bounded by `deadline`.
    ///
    /// The guard is taken without waiting: a tick that finds the previous run still executing
    /// is deferred rather than queued. On expiry the work future is dropped, so whatever it
    /// committed before the deadline stays committed.
    ///
    /// # Arguments
    /// - `kind` - Job kind whose guard is taken
    /// - `deadline` - Maximum duration of the run
    /// - `work` - Produces the run future, called only once the guard is held
    ///
    /// # Returns
    /// - [`RunOutcome`] - How the run ended, every outcome has already been logged
    pub async fn run<F, Fut>(&self, kind: JobKind, deadline: Duration, work: F) -> RunOutcome
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<usize, Error>>,
    {
        let _permit = match self.guard(kind).try_lock_owned() {
            Ok(permit) => permit,
            Err(_) => {
                tracing::warn!(
                    "Previous {} sync is still running, deferring to the next tick",
                    kind
                );
                return RunOutcome::Deferred;
            }
        };

        match tokio::time::timeout(deadline, work()).await {
            Ok(Ok(count)) => {
                tracing::info!("Finished {} sync, {} record(s) written", kind, count);
                RunOutcome::Completed(count)
            }
            Ok(Err(e)) => {
                tracing::error!("Error running {} sync: {:?}", kind, e);
                RunOutcome::Failed
            }
            Err(_) => {
                tracing::error!(
                    "{} sync exceeded its {:?} deadline and was aborted",
                    kind,
                    deadline
                );
                RunOutcome::TimedOut
            }
        }
    }

    /// Waits until no run of any kind is in flight.
    pub async fn wait_idle(&self) {
        for kind in JobKind::ALL {
            let _ = self.guard(kind).lock().await;
        }
    }
}
