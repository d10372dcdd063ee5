//! Story search
//!
//! Case-insensitive substring match over the text columns a reader sees.

use crate::domain::entities::{columns, NewsRecord};

/// Columns searched by `filter_records`
pub const SEARCH_COLUMNS: [&str; 5] = [
    columns::TITLE,
    columns::DESCRIPTION,
    columns::CONTENT,
    columns::CATEGORY,
    columns::COUNTRY,
];

/// Records where any searched column contains `term`, in input order.
///
/// A blank term matches everything.
pub fn filter_records(records: &[NewsRecord], term: &str) -> Vec<NewsRecord> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return records.to_vec();
    }

    records
        .iter()
        .filter(|record| matches(record, &needle))
        .cloned()
        .collect()
}

/// `needle` must already be lowercase
fn matches(record: &NewsRecord, needle: &str) -> bool {
    SEARCH_COLUMNS.iter().any(|column| {
        record
            .get(column)
            .map(|value| value.to_lowercase().contains(needle))
            .unwrap_or(false)
    })
}
