//! Display ordering
//!
//! High-priority stories first, then newest first. The pairwise comparator
//! treats a pair as equal when either date fails to parse. Sorting uses a total
//! key instead, parsed once per record, so undated stories sink below the dated
//! ones of the same rank and keep their feed order.

use std::cmp::{Ordering, Reverse};

use chrono::NaiveDateTime;

use super::dates::parse_display_date;
use crate::domain::entities::NewsRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct DisplayKey {
    /// 0 for "Alta", 1 for everything else
    rank: u8,
    recency: Reverse<Option<NaiveDateTime>>,
}

impl DisplayKey {
    fn of(record: &NewsRecord) -> Self {
        Self {
            rank: if record.is_high_priority() { 0 } else { 1 },
            recency: Reverse(record.date().and_then(parse_display_date)),
        }
    }
}

/// Compare two records for display.
///
/// Same rank and either date unparseable compares `Equal`. This relation is not
/// transitive across mixed dated and undated records, so `sort_for_display`
/// does not sort with it.
#[allow(dead_code)]
pub fn compare_for_display(a: &NewsRecord, b: &NewsRecord) -> Ordering {
    let (a, b) = (DisplayKey::of(a), DisplayKey::of(b));
    a.rank.cmp(&b.rank).then_with(|| match (a.recency, b.recency) {
        (Reverse(Some(_)), Reverse(Some(_))) => a.recency.cmp(&b.recency),
        _ => Ordering::Equal,
    })
}

/// Return a display-ordered copy of `records`; the input is left untouched
pub fn sort_for_display(records: &[NewsRecord]) -> Vec<NewsRecord> {
    let mut sorted = records.to_vec();
    // Stable: equal keys keep their feed order
    sorted.sort_by_cached_key(DisplayKey::of);
    sorted
}
