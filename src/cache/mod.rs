//! Rendered-artifact cache.
//!
//! Downstream renderers store standings and schedule images under well-known key prefixes.
//! The sync jobs never read those artifacts, they only drop them once the data behind them
//! has changed. [`ArtifactCache`] is the storage contract, [`ValkeyCache`] the production
//! implementation and [`MemoryCache`] an in-process one.

pub mod invalidator;
pub mod keys;
pub mod lua;
pub mod memory;
pub mod valkey;

#[cfg(test)]
mod tests;

use std::time::Duration;

use async_trait::async_trait;

use crate::error::Error;

pub use invalidator::CacheInvalidator;
pub use memory::MemoryCache;
pub use valkey::ValkeyCache;

/// Key-value store for rendered artifacts.
#[async_trait]
pub trait ArtifactCache: Send + Sync {
    /// Removes every entry whose key starts with `prefix`.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of entries removed
    /// - `Err(Error::CacheError)` - The cache could not be reached or the removal failed
    async fn invalidate_pattern(&self, prefix: &str) -> Result<u64, Error>;

    /// Returns the artifact stored under `key`, if any.
    async fn get_bytes(&self, key: &str) -> Result<Option<Vec<u8>>, Error>;

    /// Stores an artifact under `key`, expiring after `ttl` when given.
    async fn set_bytes(&self, key: &str, bytes: &[u8], ttl: Option<Duration>)
        -> Result<(), Error>;
}
