//! In-process artifact cache.

use std::{
    collections::HashMap,
    sync::Mutex,
    time::{Duration, Instant},
};

use async_trait::async_trait;

use crate::{cache::ArtifactCache, error::Error};

struct Entry {
    bytes: Vec<u8>,
    expires_at: Option<Instant>,
}

impl Entry {
    fn is_live(&self, now: Instant) -> bool {
        self.expires_at.map_or(true, |expires_at| expires_at > now)
    }
}

/// [`ArtifactCache`] kept in a mutex-guarded map, for single-process deployments and tests.
#[derive(Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<String, Entry>>,
}

impl MemoryCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        let now = Instant::now();
        self.lock()
            .map(|entries| entries.values().filter(|e| e.is_live(now)).count())
            .unwrap_or(0)
    }

    /// Whether the cache holds no live entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, Entry>>, Error> {
        self.entries
            .lock()
            .map_err(|_| Error::InternalError("memory cache mutex poisoned".to_string()))
    }
}

#[async_trait]
impl ArtifactCache for MemoryCache {
    async fn invalidate_pattern(&self, prefix: &str) -> Result<u64, Error> {
        let mut entries = self.lock()?;
        let before = entries.len();
        entries.retain(|key, _| !key.starts_with(prefix));

        Ok((before - entries.len()) as u64)
    }

    async fn get_bytes(&self, key: &str) -> Result<Option<Vec<u8>>, Error> {
        let mut entries = self.lock()?;
        let now = Instant::now();

        match entries.get(key) {
            Some(entry) if entry.is_live(now) => Ok(Some(entry.bytes.clone())),
            Some(_) => {
                entries.remove(key);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    async fn set_bytes(
        &self,
        key: &str,
        bytes: &[u8],
        ttl: Option<Duration>,
    ) -> Result<(), Error> {
        let entry = Entry {
            bytes: bytes.to_vec(),
            expires_at: ttl.map(|ttl| Instant::now() + ttl),
        };
        self.lock()?.insert(key.to_string(), entry);

        Ok(())
    }
}
