use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::{
    cache::{ArtifactCache, CacheInvalidator},
    feed::{alias::NameAliases, FeedClient},
    model::league::LeagueTable,
    service::{rating::policy::RatingPolicy, resolver::LeagueResolver},
};

/// Collaborators and static tables shared by every sync job.
///
/// Cloning is cheap: the connection and the cache are pooled handles and every table is
/// reference counted.
#[derive(Clone)]
pub struct SyncState {
    pub db: DatabaseConnection,
    pub feed: Arc<dyn FeedClient>,
    pub invalidator: CacheInvalidator,
    pub leagues: Arc<LeagueTable>,
    pub aliases: Arc<NameAliases>,
    pub policy: Arc<RatingPolicy>,
    pub resolver: LeagueResolver,
    /// Days ahead of today the matches job requests fixtures for
    pub matches_window_days: i64,
}

impl SyncState {
    /// Creates a new instance of [`SyncState`] with the built-in league, alias, and rating
    /// tables.
    pub fn new(
        db: DatabaseConnection,
        feed: Arc<dyn FeedClient>,
        cache: Arc<dyn ArtifactCache>,
        matches_window_days: i64,
    ) -> Self {
        let leagues = Arc::new(LeagueTable::default());
        let resolver = LeagueResolver::new(db.clone(), leagues.clone());

        Self {
            db,
            feed,
            invalidator: CacheInvalidator::new(cache),
            leagues,
            aliases: Arc::new(NameAliases::default()),
            policy: Arc::new(RatingPolicy::default()),
            resolver,
            matches_window_days,
        }
    }

    /// Replaces the league table, rebuilding the resolver over it.
    pub fn with_leagues(mut self, leagues: LeagueTable) -> Self {
        self.leagues = Arc::new(leagues);
        self.resolver = LeagueResolver::new(self.db.clone(), self.leagues.clone());
        self
    }

    /// Replaces the rating policy.
    pub fn with_policy(mut self, policy: RatingPolicy) -> Self {
        self.policy = Arc::new(policy);
        self
    }

    /// Replaces the alias tables.
    pub fn with_aliases(mut self, aliases: NameAliases) -> Self {
        self.aliases = Arc::new(aliases);
        self
    }
}
