mod config;
mod db;
mod models;
mod notify;
mod processor;
mod scheduler;

use config::AppConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load config
    let config = AppConfig::load()?;

    // Init logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_level))
        .init();

    info!("Starting Transit Loyalty Worker...");

    // Init DB
    let pool = db::init_pool(&config.database_url).await?;
    info!("Connected to database");

    // Start the award loop
    scheduler::start_award_scheduler(&config, pool).await?;

    Ok(())
}
