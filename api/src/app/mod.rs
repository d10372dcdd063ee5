//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports, and background tasks.

pub mod news_service;
pub mod news_state;
pub mod refresh;

pub use news_service::{NewsItem, NewsService, NewsView};
pub use news_state::FeedStatus;
// Re-exported for consumers that inject their own state or inspect load results
#[allow(unused_imports)]
pub use news_service::LoadSummary;
#[allow(unused_imports)]
pub use news_state::NewsState;
pub use refresh::spawn_refresh_loop;
