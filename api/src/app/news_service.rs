//! News service
//!
//! Runs the fetch → decode → replace cycle and serves display-ordered views
//! of the current records. Every trigger (timer, manual reload, retry) goes
//! through `load`, which refuses to start while another cycle is running.

use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::news_state::{FeedStatus, NewsState};
use crate::domain::entities::{columns, NewsRecord};
use crate::domain::ports::FeedSource;
use crate::error::AppError;
use crate::feed::{decode_records, filter_records, sort_for_display};

/// Result of a successful load cycle
#[derive(Debug, Clone, Serialize)]
pub struct LoadSummary {
    /// Stories kept after decoding
    pub count: usize,
    /// Stories marked "Alta"
    pub high_priority: usize,
    pub loaded_at: DateTime<Utc>,
}

/// A story at its display position
#[derive(Debug, Clone, Serialize)]
pub struct NewsItem {
    /// 1-based position in display order
    pub position: usize,
    pub high_priority: bool,
    pub record: NewsRecord,
}

/// Display-ordered feed with its counters
#[derive(Debug, Clone, Serialize)]
pub struct NewsView {
    pub status: FeedStatus,
    pub last_updated: Option<DateTime<Utc>>,
    /// Search term, when the view is a search result
    pub query: Option<String>,
    pub total: usize,
    pub high_priority: usize,
    /// Distinct non-empty categories among the items
    pub categories: usize,
    pub items: Vec<NewsItem>,
}

impl NewsView {
    fn build(
        status: FeedStatus,
        last_updated: Option<DateTime<Utc>>,
        query: Option<String>,
        records: &[NewsRecord],
    ) -> Self {
        let items: Vec<NewsItem> = sort_for_display(records)
            .into_iter()
            .enumerate()
            .map(|(i, record)| NewsItem {
                position: i + 1,
                high_priority: record.is_high_priority(),
                record,
            })
            .collect();

        let categories = items
            .iter()
            .filter_map(|item| item.record.non_empty(columns::CATEGORY))
            .collect::<BTreeSet<_>>()
            .len();
        let high_priority = items.iter().filter(|item| item.high_priority).count();

        Self {
            status,
            last_updated,
            query,
            total: items.len(),
            high_priority,
            categories,
            items,
        }
    }
}

/// Service owning the feed state
pub struct NewsService<FS>
where
    FS: FeedSource + ?Sized,
{
    source: Arc<FS>,
    feed_url: String,
    state: Arc<NewsState>,
}

impl<FS> NewsService<FS>
where
    FS: FeedSource + ?Sized,
{
    pub fn new(source: Arc<FS>, feed_url: impl Into<String>) -> Self {
        Self::with_state(source, feed_url, Arc::new(NewsState::new()))
    }

    pub fn with_state(source: Arc<FS>, feed_url: impl Into<String>, state: Arc<NewsState>) -> Self {
        Self {
            source,
            feed_url: feed_url.into(),
            state,
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> &Arc<NewsState> {
        &self.state
    }

    /// Fetch and decode the feed, replacing the current records.
    ///
    /// Fails with `ReloadInProgress` if another cycle is running, with
    /// `Connectivity` if the feed cannot be fetched (records are kept), and
    /// with `EmptyFeed` if the feed decodes to no stories (records are cleared).
    pub async fn load(&self) -> Result<LoadSummary, AppError> {
        let _cycle = self
            .state
            .try_begin_cycle()
            .ok_or(AppError::ReloadInProgress)?;

        let body = match self.source.fetch_text(&self.feed_url).await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!(error = %e, url = %self.feed_url, "Failed to fetch news feed");
                self.state.mark_unavailable(e.to_string()).await;
                return Err(AppError::Connectivity(e));
            }
        };

        let records = decode_records(&body);
        let count = records.len();
        let high_priority = records.iter().filter(|r| r.is_high_priority()).count();
        let loaded_at = Utc::now();

        self.state.replace_records(records, loaded_at).await;

        if count == 0 {
            tracing::info!(bytes = body.len(), "News feed decoded to no stories");
            return Err(AppError::EmptyFeed);
        }

        tracing::info!(count, high_priority, "News feed loaded");

        Ok(LoadSummary {
            count,
            high_priority,
            loaded_at,
        })
    }

    /// Current records in feed order
    pub async fn records(&self) -> Vec<NewsRecord> {
        self.state.records().await
    }

    /// All current records, ordered for display
    pub async fn display_view(&self) -> NewsView {
        let snapshot = self.state.snapshot().await;
        NewsView::build(
            snapshot.status,
            snapshot.last_updated,
            None,
            &snapshot.records,
        )
    }

    /// Records matching `term`, ordered for display
    pub async fn search(&self, term: &str) -> NewsView {
        let snapshot = self.state.snapshot().await;
        let matches = filter_records(&snapshot.records, term);
        NewsView::build(
            snapshot.status,
            snapshot.last_updated,
            Some(term.trim().to_string()),
            &matches,
        )
    }

    /// Story at a 1-based display position
    pub async fn record_at(&self, position: usize) -> Option<NewsRecord> {
        if position == 0 {
            return None;
        }
        let records = self.records().await;
        sort_for_display(&records).into_iter().nth(position - 1)
    }
}
