//! Adapters layer
//!
//! Concrete implementations of domain ports.
//! - `http`: Feed download over HTTP(S)

pub mod http;

pub use http::HttpFeedSource;
