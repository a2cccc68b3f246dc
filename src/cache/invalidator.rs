//! Best-effort invalidation of rendered artifacts.

use std::sync::Arc;

use dioxus_logger::tracing;

use crate::cache::ArtifactCache;

/// Drops cached artifacts after a job changed the data they were rendered from.
///
/// Invalidation never fails the calling job: a cache failure only means stale images are
/// served until they expire, so errors are logged and swallowed.
#[derive(Clone)]
pub struct CacheInvalidator {
    cache: Arc<dyn ArtifactCache>,
}

impl CacheInvalidator {
    /// Creates a new instance of [`CacheInvalidator`].
    pub fn new(cache: Arc<dyn ArtifactCache>) -> Self {
        Self { cache }
    }

    /// Removes every cached artifact whose key starts with `prefix`.
    ///
    /// # Returns
    /// - `Some(u64)` - Number of entries removed
    /// - `None` - The cache failed, the failure has been logged
    pub async fn invalidate_pattern(&self, prefix: &str) -> Option<u64> {
        match self.cache.invalidate_pattern(prefix).await {
            Ok(removed) => {
                tracing::debug!("Invalidated {} cached artifact(s) under {}", removed, prefix);
                Some(removed)
            }
            Err(e) => {
                tracing::error!("Failed to invalidate cached artifacts under {}: {}", prefix, e);
                None
            }
        }
    }

    /// Invalidates each prefix in turn, continuing past failures.
    ///
    /// # Returns
    /// - `u64` - Total number of entries removed across the prefixes that succeeded
    pub async fn invalidate_all<I, S>(&self, prefixes: I) -> u64
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut removed = 0;
        for prefix in prefixes {
            removed += self.invalidate_pattern(prefix.as_ref()).await.unwrap_or(0);
        }
        removed
    }
}
