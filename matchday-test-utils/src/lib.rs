pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod redis;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        fixtures::football::{data, FixtureMatch},
        redis::RedisTest,
        TestBuilder, TestContext, TestError,
    };
}
