use chrono::Utc;
use tokio::time::{interval, Duration, MissedTickBehavior};
use tracing::info;

use crate::config::AppConfig;
use crate::db::store::PgAwardStore;
use crate::db::DbPool;
use crate::notify::KafkaNotifier;
use crate::processor::award_processor;

/// Runs the loyalty award cycle on a fixed interval. Ticks are delayed,
/// never stacked, so runs within this process cannot overlap.
pub async fn start_award_scheduler(config: &AppConfig, pool: DbPool) -> anyhow::Result<()> {
    let store = PgAwardStore::new(pool);
    let notifier = KafkaNotifier::new(config)?;

    let mut ticker = interval(Duration::from_secs(config.award_interval_secs));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    info!(
        "Award scheduler started (every {}s, timezone {})",
        config.award_interval_secs, config.booking_timezone
    );

    loop {
        ticker.tick().await;

        let now = Utc::now();
        let awarded =
            award_processor::run_award_cycle(&store, &notifier, config.booking_timezone, now)
                .await;

        info!("Loyalty run complete: {} booking(s) credited", awarded);
    }
}
