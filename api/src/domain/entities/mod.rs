//! Domain entities
//!
//! Pure domain models representing the stories of the feed.

pub mod news_record;

#[allow(unused_imports)]
pub use news_record::{columns, NewsRecord, HIGH_PRIORITY};
