//! Periodic sync timer
//!
//! Each tick spawns its own sync so a slow fetch never holds the timer back;
//! the book's single-flight guard turns overlapping ticks into no-ops.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::quotes::QuoteBook;
use crate::sync::SyncOutcome;

/// Run syncs forever, one per `period`. The first one starts immediately.
pub async fn run_periodic_sync(book: Arc<QuoteBook>, period: Duration) {
    let mut ticker = tokio::time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    tracing::info!("Periodic sync every {}s", period.as_secs());

    loop {
        ticker.tick().await;
        let book = book.clone();
        tokio::spawn(async move {
            if book.trigger_sync().await == SyncOutcome::Skipped {
                tracing::debug!("Sync tick skipped, previous sync still running");
            }
        });
    }
}

/// Start [`run_periodic_sync`] on the tokio runtime; abort the handle to stop
pub fn spawn_periodic_sync(book: Arc<QuoteBook>, period: Duration) -> JoinHandle<()> {
    tokio::spawn(run_periodic_sync(book, period))
}
