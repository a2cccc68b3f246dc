use chrono::{DateTime, Utc};
use dioxus_logger::tracing;

use crate::{
    cache::keys,
    data::football_match::MatchRepository,
    error::Error,
    model::{app::SyncState, db::MatchModel, fixture::Fixture},
    service::rating::{source::StoreRatingSource, RatingCalculator, RatingOutcome},
    util::time::match_window,
};

/// Outcome of a matches job run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MatchSyncReport {
    /// Fixtures returned by the feed for the window
    pub fetched: usize,
    /// Fixtures of tracked leagues upserted into the store
    pub stored: usize,
    /// Fixtures whose rating was written
    pub rated: usize,
    /// Fixtures left unrated because a side could not be resolved or ranked
    pub skipped: usize,
    /// Fixtures that failed to store or rate
    pub failed: usize,
}

/// Stores upcoming fixtures and scores them.
pub struct MatchSyncService<'a> {
    state: &'a SyncState,
}

impl<'a> MatchSyncService<'a> {
    pub fn new(state: &'a SyncState) -> Self {
        Self { state }
    }

    /// Runs the matches job for the window starting today.
    pub async fn sync(&self) -> Result<MatchSyncReport, Error> {
        self.sync_at(Utc::now()).await
    }

    /// Runs the matches job for the window starting on the UTC day of `now`.
    ///
    /// Every fixture of a tracked league is upserted first, then each stored fixture is
    /// rated. A fixture that cannot be rated keeps whatever rating it had. Both schedule
    /// images are invalidated afterwards.
    ///
    /// # Returns
    /// - `Ok(MatchSyncReport)` - Counts of stored, rated, skipped, and failed fixtures
    /// - `Err(Error::FeedError)` - The fixtures could not be fetched, nothing was written
    pub async fn sync_at(&self, now: DateTime<Utc>) -> Result<MatchSyncReport, Error> {
        let (from, to) = match_window(now, self.state.matches_window_days)?;
        let feed_matches = self.state.feed.fetch_matches(from, to).await?;

        let mut report = MatchSyncReport {
            fetched: feed_matches.len(),
            ..Default::default()
        };

        let fixtures: Vec<Fixture> = feed_matches
            .into_iter()
            .filter_map(|feed_match| {
                self.state
                    .aliases
                    .normalize_match(feed_match, &self.state.leagues)
            })
            .collect();

        let repo = MatchRepository::new(&self.state.db);
        let mut stored: Vec<MatchModel> = Vec::with_capacity(fixtures.len());
        for fixture in fixtures {
            let match_id = fixture.match_id;
            match repo.upsert(fixture).await {
                Ok(model) => stored.push(model),
                Err(e) => {
                    tracing::warn!("Failed to store match {}: {}", match_id, e);
                    report.failed += 1;
                }
            }
        }
        report.stored = stored.len();

        let calculator =
            RatingCalculator::new(self.state.policy.clone(), self.state.leagues.clone());
        let source = StoreRatingSource::new(&self.state.db, &self.state.resolver);

        for model in &stored {
            let fixture = Fixture::from(model);
            let outcome = match calculator.rate(&fixture, &source).await {
                Ok(outcome) => outcome,
                Err(e) => {
                    tracing::warn!("Failed to rate match {}: {}", fixture.match_id, e);
                    report.failed += 1;
                    continue;
                }
            };

            match outcome {
                RatingOutcome::Rated(rating) => {
                    match repo.update_rating(fixture.match_id, rating).await {
                        Ok(_) => report.rated += 1,
                        Err(e) => {
                            tracing::warn!(
                                "Failed to store rating of match {}: {}",
                                fixture.match_id,
                                e
                            );
                            report.failed += 1;
                        }
                    }
                }
                RatingOutcome::Skipped(reason) => {
                    tracing::debug!(
                        "Skipping rating of {} vs {}: {}",
                        fixture.home.name,
                        fixture.away.name,
                        reason
                    );
                    report.skipped += 1;
                }
            }
        }

        self.state
            .invalidator
            .invalidate_all(keys::schedule_images())
            .await;

        Ok(report)
    }
}
