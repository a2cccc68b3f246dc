//! Valkey-backed artifact cache.

use std::time::Duration;

use async_trait::async_trait;
use fred::{bytes::Bytes, prelude::*, types::Expiration};

use crate::{
    cache::{lua::INVALIDATE_PATTERN_SCRIPT, ArtifactCache},
    error::Error,
};

/// SCAN COUNT hint used while walking the keyspace.
const SCAN_BATCH_SIZE: u32 = 500;

/// [`ArtifactCache`] stored in Valkey (or Redis).
#[derive(Clone)]
pub struct ValkeyCache {
    pool: Pool,
}

impl ValkeyCache {
    /// Creates a new instance of [`ValkeyCache`] over an initialized pool.
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ArtifactCache for ValkeyCache {
    async fn invalidate_pattern(&self, prefix: &str) -> Result<u64, Error> {
        let pattern = format!("{}*", escape_glob(prefix));

        let removed: i64 = self
            .pool
            .eval(
                INVALIDATE_PATTERN_SCRIPT,
                Vec::<String>::new(),
                vec![pattern, SCAN_BATCH_SIZE.to_string()],
            )
            .await?;

        Ok(removed.max(0) as u64)
    }

    async fn get_bytes(&self, key: &str) -> Result<Option<Vec<u8>>, Error> {
        let value: Option<Bytes> = self.pool.get(key).await?;

        Ok(value.map(|bytes| bytes.to_vec()))
    }

    async fn set_bytes(
        &self,
        key: &str,
        bytes: &[u8],
        ttl: Option<Duration>,
    ) -> Result<(), Error> {
        let expire = ttl.map(|ttl| Expiration::PX(ttl_millis(ttl)));

        let _: () = self
            .pool
            .set(key, Bytes::copy_from_slice(bytes), expire, None, false)
            .await?;

        Ok(())
    }
}

/// Expiry in milliseconds, at least 1 and saturating at `i64::MAX`.
pub(crate) fn ttl_millis(ttl: Duration) -> i64 {
    i64::try_from(ttl.as_millis()).unwrap_or(i64::MAX).max(1)
}

/// Escapes the glob metacharacters of a key prefix so it only matches literally.
pub(crate) fn escape_glob(prefix: &str) -> String {
    let mut escaped = String::with_capacity(prefix.len());
    for c in prefix.chars() {
        if matches!(c, '*' | '?' | '[' | ']' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
