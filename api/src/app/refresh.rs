//! Background refresh
//!
//! Reloads the feed on a fixed interval. The first tick fires immediately and
//! doubles as the initial load.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use super::news_service::NewsService;
use crate::domain::ports::FeedSource;
use crate::error::AppError;

/// Spawn the refresh loop. Abort the returned handle to stop it.
pub fn spawn_refresh_loop<FS>(service: Arc<NewsService<FS>>, every: Duration) -> JoinHandle<()>
where
    FS: FeedSource + ?Sized + 'static,
{
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            ticker.tick().await;

            match service.load().await {
                Ok(summary) => {
                    tracing::debug!(count = summary.count, "Scheduled refresh finished");
                }
                Err(AppError::ReloadInProgress) => {
                    tracing::debug!("Skipping scheduled refresh, a reload is already running");
                }
                Err(AppError::EmptyFeed) => {
                    tracing::info!("Scheduled refresh found no stories");
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Scheduled refresh failed");
                }
            }
        }
    })
}
