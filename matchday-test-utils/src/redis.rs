use fred::prelude::*;

use crate::{constant::TEST_VALKEY_URL, TestError};

// Removes every key matching ARGV[1], returns the number removed
static CLEANUP_SCRIPT: &str = r#"
local keys = redis.call('KEYS', ARGV[1])
for _, key in ipairs(keys) do
    redis.call('DEL', key)
end
return #keys
"#;

/// Valkey test setup with automatic cleanup
///
/// Every instance owns a unique key namespace so tests running in parallel never touch each
/// other's keys. Keys under the namespace are removed when the struct is dropped.
pub struct RedisTest {
    pub redis_pool: Pool,
    namespace: String,
}

impl RedisTest {
    /// Create a new RedisTest instance with a unique key namespace
    pub async fn new() -> Result<Self, TestError> {
        let redis_config = Config::from_url(TEST_VALKEY_URL)?;
        let redis_pool = Pool::new(redis_config, None, None, None, 5)?;
        redis_pool.init().await?;

        Ok(RedisTest {
            redis_pool,
            namespace: Self::generate_unique_namespace(),
        })
    }

    /// Prefix every key created by the test should start with
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Key under this test's namespace
    pub fn key(&self, suffix: &str) -> String {
        format!("{}{}", self.namespace, suffix)
    }

    /// Generate a unique namespace using timestamp and thread ID
    fn generate_unique_namespace() -> String {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};
        use std::time::{SystemTime, UNIX_EPOCH};

        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or_default();

        let mut hasher = DefaultHasher::new();
        timestamp.hash(&mut hasher);
        std::thread::current().id().hash(&mut hasher);

        format!("test:{}:{:x}:", timestamp, hasher.finish())
    }
}

impl Drop for RedisTest {
    fn drop(&mut self) {
        let pool = self.redis_pool.clone();
        let pattern = format!("{}*", self.namespace);

        if let Ok(handle) = tokio::runtime::Handle::try_current() {
            handle.spawn(async move {
                let _: Result<i64, fred::error::Error> = pool
                    .eval(CLEANUP_SCRIPT, Vec::<String>::new(), vec![pattern])
                    .await;
            });
        }
    }
}
