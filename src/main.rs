use std::sync::Arc;

use dioxus_logger::tracing::{self, Level};

use matchday::{
    cache::ValkeyCache, config::Config, error::Error, model::app::SyncState,
    scheduler::Scheduler, startup,
};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = dioxus_logger::init(Level::INFO) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    if let Err(e) = run(config).await {
        tracing::error!("Fatal error: {}", e);
        std::process::exit(1);
    }
}

async fn run(config: Config) -> Result<(), Error> {
    let feed = startup::build_feed_client(&config)?;
    let db = startup::connect_to_database(&config).await?;
    let cache_pool = startup::connect_to_cache(&config).await?;

    let state = SyncState::new(
        db,
        Arc::new(feed),
        Arc::new(ValkeyCache::new(cache_pool)),
        config.matches_window_days,
    );

    let mut scheduler = Scheduler::new(state, config.job_timeout).await?;
    scheduler.start(&config).await?;

    tracing::info!("Sync scheduler started");

    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }

    tracing::info!("Shutting down, waiting for in-flight jobs");
    scheduler.shutdown().await?;

    Ok(())
}
