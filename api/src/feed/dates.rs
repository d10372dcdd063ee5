//! Story date parsing
//!
//! The sheet is edited by hand, so `Fecha` arrives either in Spanish long form
//! ("3 de marzo de 2026") or in whatever format the editor typed. Parsing is
//! only used to order stories; failures are never surfaced.

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use regex::Regex;

static LONG_SPANISH_DATE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)(\d{1,2})\s+de\s+(\p{L}+)\s+de\s+(\d{4})").ok());

const SPANISH_MONTHS: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%m/%d/%Y %H:%M:%S",
];

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%B %d, %Y",
    "%B %d %Y",
    "%d %B %Y",
];

/// Parse a story date. Returns `None` for empty input or unrecognised text.
pub fn parse_display_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    parse_spanish_long_date(raw).or_else(|| parse_free_form(raw))
}

/// Zero-based month index for a Spanish month name
pub fn spanish_month_index(name: &str) -> Option<usize> {
    let name = name.to_lowercase();
    SPANISH_MONTHS.iter().position(|m| *m == name)
}

fn parse_spanish_long_date(raw: &str) -> Option<NaiveDateTime> {
    let caps = LONG_SPANISH_DATE.as_ref()?.captures(raw)?;

    let day: u32 = caps.get(1)?.as_str().parse().ok()?;
    let month = spanish_month_index(caps.get(2)?.as_str())?;
    let year: i32 = caps.get(3)?.as_str().parse().ok()?;

    NaiveDate::from_ymd_opt(year, month as u32 + 1, day)?.and_hms_opt(0, 0, 0)
}

fn parse_free_form(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt.naive_utc());
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}
