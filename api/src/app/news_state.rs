//! News state
//!
//! The owned, injectable state behind the service: the current records, how
//! the last cycle ended, and the lock that keeps reload cycles from overlapping.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::{Mutex, MutexGuard, RwLock};

use crate::domain::entities::NewsRecord;

/// Outcome of the most recent load cycle, as shown to readers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum FeedStatus {
    /// No cycle has finished yet
    #[default]
    Pending,
    Ready,
    /// The feed was reached but had no stories
    Empty,
    /// The last fetch failed; records from an earlier cycle may still be shown
    Unavailable { reason: String },
}

impl std::fmt::Display for FeedStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeedStatus::Pending => write!(f, "pending"),
            FeedStatus::Ready => write!(f, "ready"),
            FeedStatus::Empty => write!(f, "empty"),
            FeedStatus::Unavailable { .. } => write!(f, "unavailable"),
        }
    }
}

/// Point-in-time copy of the state
#[derive(Debug, Clone, Default)]
pub struct FeedSnapshot {
    pub records: Vec<NewsRecord>,
    pub status: FeedStatus,
    pub last_updated: Option<DateTime<Utc>>,
}

#[derive(Default)]
pub struct NewsState {
    snapshot: RwLock<FeedSnapshot>,
    cycle: Mutex<()>,
}

impl NewsState {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn snapshot(&self) -> FeedSnapshot {
        self.snapshot.read().await.clone()
    }

    pub async fn records(&self) -> Vec<NewsRecord> {
        self.snapshot.read().await.records.clone()
    }

    /// Claim the reload cycle. `None` while another cycle holds it.
    pub fn try_begin_cycle(&self) -> Option<MutexGuard<'_, ()>> {
        self.cycle.try_lock().ok()
    }

    /// Replace the records wholesale after a successful fetch
    pub async fn replace_records(&self, records: Vec<NewsRecord>, at: DateTime<Utc>) -> FeedStatus {
        let mut snapshot = self.snapshot.write().await;
        snapshot.status = if records.is_empty() {
            FeedStatus::Empty
        } else {
            FeedStatus::Ready
        };
        snapshot.records = records;
        snapshot.last_updated = Some(at);
        snapshot.status.clone()
    }

    /// Record a failed fetch; current records are left in place
    pub async fn mark_unavailable(&self, reason: String) {
        self.snapshot.write().await.status = FeedStatus::Unavailable { reason };
    }
}
