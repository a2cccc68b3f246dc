/// API token the mock feed endpoints expect in the `X-Auth-Token` header.
pub const TEST_API_KEY: &str = "matchday-test-token";

/// Valkey instance used by tests gated behind the `redis-test` feature.
pub const TEST_VALKEY_URL: &str = "redis://127.0.0.1:6379";
