//! News record domain entity
//!
//! One story of the feed: a mapping from spreadsheet column name to cell value.
//! No schema is enforced beyond the title; the column names below are the ones
//! the sheet conventionally carries.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Conventional column names of the news sheet
pub mod columns {
    pub const TITLE: &str = "Título";
    pub const DESCRIPTION: &str = "Descripción";
    pub const CONTENT: &str = "Contenido";
    pub const IMAGE: &str = "Imagen";
    pub const CATEGORY: &str = "Categoría";
    pub const COUNTRY: &str = "País";
    pub const DATE: &str = "Fecha";
    pub const PRIORITY: &str = "Prioridad";
    pub const SOURCE: &str = "Fuente";
}

/// Priority value that moves a story to the top of the feed
pub const HIGH_PRIORITY: &str = "Alta";

/// A decoded feed row, keyed by header cell
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NewsRecord {
    fields: BTreeMap<String, String>,
}

impl NewsRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, trimming both key and value
    pub fn insert(&mut self, column: &str, value: &str) {
        self.fields
            .insert(column.trim().to_string(), value.trim().to_string());
    }

    /// Builder-style `insert`
    pub fn with(mut self, column: &str, value: &str) -> Self {
        self.insert(column, value);
        self
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }

    /// Field value, `None` when missing or empty
    pub fn non_empty(&self, column: &str) -> Option<&str> {
        self.get(column).filter(|v| !v.is_empty())
    }

    pub fn title(&self) -> Option<&str> {
        self.non_empty(columns::TITLE)
    }

    pub fn has_title(&self) -> bool {
        self.title().is_some()
    }

    pub fn date(&self) -> Option<&str> {
        self.non_empty(columns::DATE)
    }

    pub fn priority(&self) -> Option<&str> {
        self.non_empty(columns::PRIORITY)
    }

    /// Only the exact literal "Alta" counts; every other value, or none, ranks the same
    pub fn is_high_priority(&self) -> bool {
        self.get(columns::PRIORITY) == Some(HIGH_PRIORITY)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.fields.len()
    }
}

impl<K: AsRef<str>, V: AsRef<str>> FromIterator<(K, V)> for NewsRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = NewsRecord::new();
        for (k, v) in iter {
            record.insert(k.as_ref(), v.as_ref());
        }
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_trims_key_and_value() {
        let record = NewsRecord::new().with("  Título ", "  Hola  ");
        assert_eq!(record.get("Título"), Some("Hola"));
        assert_eq!(record.title(), Some("Hola"));
    }

    #[test]
    fn empty_title_is_not_a_title() {
        let record = NewsRecord::new().with(columns::TITLE, "   ");
        assert_eq!(record.get(columns::TITLE), Some(""));
        assert!(!record.has_title());
    }

    #[test]
    fn keys_are_not_normalized() {
        let record = NewsRecord::new().with("titulo", "sin acento");
        assert!(!record.has_title());
        assert_eq!(record.get("titulo"), Some("sin acento"));
    }

    #[test]
    fn high_priority_is_exact_literal() {
        assert!(NewsRecord::new()
            .with(columns::PRIORITY, "Alta")
            .is_high_priority());
        assert!(!NewsRecord::new()
            .with(columns::PRIORITY, "alta")
            .is_high_priority());
        assert!(!NewsRecord::new()
            .with(columns::PRIORITY, "Media")
            .is_high_priority());
        assert!(!NewsRecord::new().is_high_priority());
    }

    #[test]
    fn collects_from_pairs() {
        let record: NewsRecord = [("Título", "A"), ("Fecha", "1 de enero de 2026")]
            .into_iter()
            .collect();
        assert_eq!(record.len(), 2);
        assert_eq!(record.date(), Some("1 de enero de 2026"));
    }

    #[test]
    fn serializes_as_plain_map() {
        let record = NewsRecord::new().with(columns::TITLE, "A");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json, serde_json::json!({ "Título": "A" }));
    }
}
