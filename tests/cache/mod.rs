//! ValkeyCache against a live Valkey instance.
//!
//! Requires a server at `TEST_VALKEY_URL`, run with `cargo test --features redis-test`.

use std::time::Duration;

use matchday::cache::{ArtifactCache, ValkeyCache};
use matchday_test_utils::prelude::*;

mod invalidate_pattern;

async fn setup() -> Result<(RedisTest, ValkeyCache), TestError> {
    let redis = RedisTest::new().await?;
    let cache = ValkeyCache::new(redis.redis_pool.clone());

    Ok((redis, cache))
}
