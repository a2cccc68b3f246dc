mod sync;

use std::sync::Arc;

use matchday_test_utils::prelude::*;

use crate::{
    cache::{ArtifactCache, MemoryCache},
    feed::FootballDataClient,
    model::{
        app::SyncState,
        league::{League, LeagueTable},
    },
};

/// Premier League and Champions League only, keeping mock setups small.
pub(super) fn test_leagues() -> LeagueTable {
    LeagueTable::new(vec![
        League::new("PremierLeague", "Premier League", "PL", 20, false),
        League::new("LaLiga", "La Liga", "PD", 20, false),
        League::new("ChampionsLeague", "Champions League", "CL", 36, true),
    ])
}

/// Sync state over the test database and mock feed server.
pub(super) fn sync_state(test: &TestContext, cache: Arc<dyn ArtifactCache>) -> SyncState {
    let feed = FootballDataClient::new(
        reqwest::Client::new(),
        test.server_url(),
        test.api_key(),
        None,
    );

    SyncState::new(test.db.clone(), Arc::new(feed), cache, 7).with_leagues(test_leagues())
}

pub(super) fn memory_cache() -> Arc<MemoryCache> {
    Arc::new(MemoryCache::new())
}

/// Cache whose every operation fails, standing in for an unreachable Valkey.
pub(super) struct UnavailableCache;

#[async_trait::async_trait]
impl ArtifactCache for UnavailableCache {
    async fn invalidate_pattern(&self, _prefix: &str) -> Result<u64, crate::error::Error> {
        Err(crate::error::Error::InternalError("cache unavailable".to_string()))
    }

    async fn get_bytes(&self, _key: &str) -> Result<Option<Vec<u8>>, crate::error::Error> {
        Err(crate::error::Error::InternalError("cache unavailable".to_string()))
    }

    async fn set_bytes(
        &self,
        _key: &str,
        _bytes: &[u8],
        _ttl: Option<std::time::Duration>,
    ) -> Result<(), crate::error::Error> {
        Err(crate::error::Error::InternalError("cache unavailable".to_string()))
    }
}
