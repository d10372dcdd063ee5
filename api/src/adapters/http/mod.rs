//! HTTP adapter implementations

pub mod feed_client;

pub use feed_client::HttpFeedSource;
