//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod news;

pub use news::{get_article, get_news, reload_news, search_news};
