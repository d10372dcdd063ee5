//! HTTP feed source
//!
//! Downloads the published spreadsheet export with reqwest.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::domain::ports::FeedSource;
use crate::error::FetchError;

/// Implementation of the feed source over HTTP(S)
pub struct HttpFeedSource {
    http: Client,
}

impl HttpFeedSource {
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("newsfeed-api/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { http })
    }

    async fn handle_response(&self, response: reqwest::Response) -> Result<String, FetchError> {
        let status = response.status();

        if status.is_success() {
            response
                .text()
                .await
                .map_err(|e| FetchError::Body(e.to_string()))
        } else {
            Err(FetchError::Status {
                status: status.as_u16(),
            })
        }
    }
}

#[async_trait]
impl FeedSource for HttpFeedSource {
    async fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        tracing::debug!(url, "Fetching news feed");

        let response = self
            .http
            .get(url)
            .header(reqwest::header::CACHE_CONTROL, "no-cache")
            .send()
            .await?;

        self.handle_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_with_timeout() {
        assert!(HttpFeedSource::new(Duration::from_secs(5)).is_ok());
    }

    #[tokio::test]
    async fn unreachable_host_is_a_request_error() {
        let source = HttpFeedSource::new(Duration::from_secs(2)).unwrap();

        // Claim a free port, then release it so nothing is listening there
        let addr = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap();
        let result = source.fetch_text(&format!("http://{}/feed.csv", addr)).await;

        assert!(matches!(result, Err(FetchError::Request(_))));
    }

    #[tokio::test]
    async fn invalid_url_is_a_request_error() {
        let source = HttpFeedSource::new(Duration::from_secs(2)).unwrap();

        let result = source.fetch_text("not a url").await;

        assert!(matches!(result, Err(FetchError::Request(_))));
    }
}
