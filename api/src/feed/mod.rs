//! Feed module
//!
//! Decoding, ordering, searching and rendering of the news feed.

pub mod csv;
pub mod dates;
pub mod renderer;
pub mod search;
pub mod sorter;

pub use csv::decode_records;
pub use renderer::{render_article, render_news};
pub use search::filter_records;
pub use sorter::sort_for_display;
