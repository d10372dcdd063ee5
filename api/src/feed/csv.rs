//! Feed decoder
//!
//! Turns the spreadsheet's CSV export into news records. Quoting follows
//! RFC 4180 (double-quote enclosure, `""` escapes) but fields never span
//! physical lines.

use crate::domain::entities::NewsRecord;

/// Decode the raw feed body into records, in input order.
///
/// The first non-blank line is the header. Rows with fewer fields than the
/// header are skipped, extra trailing fields are dropped, and rows without a
/// title are left out. A body with no data rows yields an empty list.
pub fn decode_records(text: &str) -> Vec<NewsRecord> {
    let lines: Vec<(usize, &str)> = text
        .split('\n')
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .collect();

    if lines.len() < 2 {
        tracing::debug!(lines = lines.len(), "Feed has no data rows");
        return Vec::new();
    }

    let header = decode_line(lines[0].1);
    let mut records = Vec::with_capacity(lines.len() - 1);

    for &(index, line) in &lines[1..] {
        let values = decode_line(line);

        if values.len() < header.len() {
            tracing::debug!(
                line = index + 1,
                fields = values.len(),
                expected = header.len(),
                "Skipping malformed feed row"
            );
            continue;
        }

        let record: NewsRecord = header.iter().zip(values.iter()).collect();

        if record.has_title() {
            records.push(record);
        } else {
            tracing::debug!(line = index + 1, "Skipping feed row without a title");
        }
    }

    records
}

/// Split one physical line into its fields.
///
/// Never fails: an unterminated quote simply runs to the end of the line.
pub fn decode_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }

    fields.push(current);
    fields
}
