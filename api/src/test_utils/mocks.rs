//! Mock implementations of port traits
//!
//! In-memory implementations that can be configured for testing and record
//! how they were called.

use async_trait::async_trait;
use std::sync::RwLock;
use tokio::sync::Notify;

use crate::domain::ports::FeedSource;
use crate::error::FetchError;

/// Lets a test hold a fetch open while it triggers another cycle
#[derive(Default)]
struct FetchGate {
    entered: Notify,
    release: Notify,
}

// ============================================================================
// Mock Feed Source
// ============================================================================

pub struct MockFeedSource {
    /// Body to return, or the HTTP status to fail with
    response: RwLock<Result<String, u16>>,
    requests: RwLock<Vec<String>>,
    gate: Option<FetchGate>,
}

impl MockFeedSource {
    pub fn with_body(body: &str) -> Self {
        Self {
            response: RwLock::new(Ok(body.to_string())),
            requests: RwLock::new(Vec::new()),
            gate: None,
        }
    }

    pub fn failing(status: u16) -> Self {
        let source = Self::with_body("");
        source.fail_with_status(status);
        source
    }

    /// Block every fetch until `release` is called
    pub fn gated(mut self) -> Self {
        self.gate = Some(FetchGate::default());
        self
    }

    pub fn set_body(&self, body: &str) {
        *self.response.write().unwrap() = Ok(body.to_string());
    }

    pub fn fail_with_status(&self, status: u16) {
        *self.response.write().unwrap() = Err(status);
    }

    /// Wait until a gated fetch has started
    pub async fn wait_until_fetching(&self) {
        if let Some(gate) = &self.gate {
            gate.entered.notified().await;
        }
    }

    /// Let a gated fetch complete
    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.release.notify_one();
        }
    }

    pub fn fetch_count(&self) -> usize {
        self.requests.read().unwrap().len()
    }

    pub fn requested_urls(&self) -> Vec<String> {
        self.requests.read().unwrap().clone()
    }
}

#[async_trait]
impl FeedSource for MockFeedSource {
    async fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        self.requests.write().unwrap().push(url.to_string());

        if let Some(gate) = &self.gate {
            gate.entered.notify_one();
            gate.release.notified().await;
        }

        let response = self.response.read().unwrap().clone();
        response.map_err(|status| FetchError::Status { status })
    }
}
