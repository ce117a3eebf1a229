use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use super::SyncEngine;

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(20);

/// Start the background refresh timer.
///
/// The first tick fires one `period` after start; the caller is expected
/// to have done the initial refresh. Each tick spawns its own refresh, so
/// a slow response never delays the next tick and refreshes may overlap.
pub fn spawn_poller(
    engine: Arc<SyncEngine>,
    period: Duration,
    shutdown: CancellationToken,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        info!(period_secs = period.as_secs(), "feed poller started");

        loop {
            tokio::select! {
                _ = shutdown.cancelled() => break,
                _ = ticker.tick() => {
                    let engine = engine.clone();
                    tokio::spawn(async move {
                        if let Err(err) = engine.refresh().await {
                            debug!(error = %err, "scheduled refresh failed");
                        }
                    });
                }
            }
        }

        info!("feed poller stopped");
    })
}
