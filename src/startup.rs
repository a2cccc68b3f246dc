use sea_orm::DatabaseConnection;

use crate::{config::Config, error::Error, feed::FootballDataClient};

/// Build the football-data.org client from the configured credentials
pub fn build_feed_client(config: &Config) -> Result<FootballDataClient, Error> {
    let http = reqwest::Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(crate::error::feed::FeedError::from)?;

    Ok(FootballDataClient::new(
        http,
        &config.football_data_url,
        &config.football_data_api_key,
        config.football_data_season,
    ))
}

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Connect to Valkey/Redis for the rendered-artifact cache
pub async fn connect_to_cache(config: &Config) -> Result<fred::prelude::Pool, Error> {
    use fred::prelude::*;

    let redis_config = Config::from_url(&config.valkey_url)?;
    let pool = Pool::new(redis_config, None, None, None, 6)?;

    pool.connect();
    pool.wait_for_connect().await?;

    Ok(pool)
}
