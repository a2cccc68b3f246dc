
use async_trait::async_trait;
use std::time::Duration;

use crate::{cache::ArtifactCache, error::Error};

/// Cache whose every operation fails, standing in for an unreachable Valkey.
pub(super) struct FailingCache;

#[async_trait]
impl ArtifactCache for FailingCache {
    async fn invalidate_pattern(&self, _prefix: &str) -> Result<u64, Error> {
        Err(Error::InternalError("cache unavailable".to_string()))
    }

    async fn get_bytes(&self, _key: &str) -> Result<Option<Vec<u8>>, Error> {
        Err(Error::InternalError("cache unavailable".to_string()))
    }

    async fn set_bytes(
        &self,
        _key: &str,
        _bytes: &[u8],
        _ttl: Option<Duration>,
    ) -> Result<(), Error> {
        Err(Error::InternalError("cache unavailable".to_string()))
    }
}
