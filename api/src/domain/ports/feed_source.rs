//! Feed source port trait
//!
//! Defines the transport used to download the raw spreadsheet export.

use async_trait::async_trait;

use crate::error::FetchError;

/// Fetches the raw text body of the published feed
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Download `url`, returning the body on a success status.
    ///
    /// Network failures and non-success statuses are both reported as errors;
    /// callers treat them uniformly as a connectivity problem.
    async fn fetch_text(&self, url: &str) -> Result<String, FetchError>;
}
