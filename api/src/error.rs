//! Unified error types for the news feed API
//!
//! This module defines error types for each layer:
//! - `FetchError`: Feed transport errors (network failure, non-success status)
//! - `AppError`: Application layer errors (wraps transport errors for HTTP responses)
//!
//! Malformed rows and unparseable dates are not errors: the decoder skips the
//! former and the sorter treats the latter as undated.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Feed transport errors
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Feed responded with status {status}")]
    Status { status: u16 },

    #[error("Failed to read feed body: {0}")]
    Body(String),
}

/// Application layer errors - used by services and HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    /// The feed could not be reached. Surfaced as a retry-able banner.
    #[error("Feed unavailable: {0}")]
    Connectivity(#[from] FetchError),

    /// The feed was reached but produced no publishable stories.
    #[error("Feed has no publishable news")]
    EmptyFeed,

    #[error("A feed reload is already in progress")]
    ReloadInProgress,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid request: {0}")]
    BadRequest(String),
}

impl AppError {
    /// Whether the client should offer a retry control for this error
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            AppError::Connectivity(_) | AppError::EmptyFeed | AppError::ReloadInProgress
        )
    }
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
    retryable: bool,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::Connectivity(e) => {
                tracing::warn!(error = %e, "Feed fetch failed");
                (
                    StatusCode::BAD_GATEWAY,
                    "Feed unavailable",
                    Some(e.to_string()),
                )
            }
            AppError::EmptyFeed => (
                StatusCode::NOT_FOUND,
                "No news available",
                Some("The feed was reached but contains no stories with a title".to_string()),
            ),
            AppError::ReloadInProgress => (
                StatusCode::CONFLICT,
                "Reload already in progress",
                None,
            ),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "Not found", Some(msg.clone())),
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "Bad request", Some(msg.clone()))
            }
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            details,
            retryable: self.is_retryable(),
        });

        (status, body).into_response()
    }
}
