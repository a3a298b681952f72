//! The root data document.
//!
//! ```json
//! {
//!   "abbrs": { "authors": {...}, "sources": {...}, "venues": {...}, "types": {...}, "positions": {...} },
//!   "publications": { "items": [ ... ] },
//!   "talks": { "items": [ ... ] }
//! }
//! ```
//!
//! Every top-level key other than `abbrs` names a content list. A list is
//! either `{"items": [...]}` or a bare array.

use super::abbrs::Abbreviations;
use super::error::{DataError, Result};
use chrono::{Datelike, Local};
use serde::Deserialize;
use serde_json::Value;
use std::{collections::BTreeMap, fs, path::Path};

#[derive(Deserialize)]
struct RawDocument {
    #[serde(default)]
    abbrs: Abbreviations,
    #[serde(flatten)]
    lists: BTreeMap<String, Value>,
}

/// Parsed data document. Read-only once loaded.
#[derive(Debug, Clone)]
pub struct Document {
    abbrs: Abbreviations,
    lists: BTreeMap<String, Value>,
    /// Year substituted for `@now`, captured when the document is loaded.
    current_year: i32,
}

impl Document {
    /// Parse a document from a JSON string.
    pub fn from_str(content: &str) -> Result<Self> {
        let raw: RawDocument = serde_json::from_str(content)?;
        Ok(Self {
            abbrs: raw.abbrs,
            lists: raw.lists,
            current_year: Local::now().year(),
        })
    }

    /// Load a document from file path.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| DataError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Pin the year `@now` resolves to.
    #[cfg(test)]
    pub fn with_current_year(mut self, year: i32) -> Self {
        self.current_year = year;
        self
    }

    pub const fn current_year(&self) -> i32 {
        self.current_year
    }

    pub const fn abbrs(&self) -> &Abbreviations {
        &self.abbrs
    }

    /// Names of all content lists, sorted.
    #[cfg(test)]
    pub fn list_names(&self) -> impl Iterator<Item = &str> {
        self.lists.keys().map(String::as_str)
    }

    pub fn has_list(&self, name: &str) -> bool {
        self.lists.contains_key(name)
    }

    /// Raw entries of the list called `name`.
    pub fn records(&self, name: &str) -> Result<&[Value]> {
        let list = self
            .lists
            .get(name)
            .ok_or_else(|| DataError::MissingList(name.to_owned()))?;
        match list {
            Value::Array(items) => Ok(items),
            Value::Object(map) => match map.get("items") {
                Some(Value::Array(items)) => Ok(items),
                Some(other) => Err(DataError::invalid("items", other, "list of item records")),
                None => Err(DataError::MissingField("items")),
            },
            other => Err(DataError::invalid("items", other, "list or {\"items\": [...]}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_from_str_lists_and_abbrs() {
        let doc = Document::from_str(
            r#"{
                "abbrs": {"positions": {"@pc": "Program Committee"}},
                "publications": {"items": [{"title": "A"}, {"title": "B"}]},
                "talks": []
            }"#,
        )
        .unwrap();

        let names: Vec<_> = doc.list_names().collect();
        assert_eq!(names, ["publications", "talks"]);
        assert!(!doc.has_list("abbrs"));
        assert_eq!(doc.records("publications").unwrap().len(), 2);
        assert!(doc.records("talks").unwrap().is_empty());
        assert_eq!(doc.abbrs().position("@pc").unwrap(), "Program Committee");
    }

    #[test]
    fn test_root_level_items_list() {
        let doc = Document::from_str(r#"{"items": [{"title": "Paper A"}]}"#).unwrap();
        assert_eq!(doc.records("items").unwrap().len(), 1);
    }

    #[test]
    fn test_missing_list() {
        let doc = Document::from_str("{}").unwrap();
        assert!(matches!(doc.records("press"), Err(DataError::MissingList(name)) if name == "press"));
    }

    #[test]
    fn test_list_without_items() {
        let doc = Document::from_str(r#"{"press": {"entries": []}}"#).unwrap();
        assert!(matches!(doc.records("press"), Err(DataError::MissingField("items"))));

        let doc = Document::from_str(r#"{"press": "nope"}"#).unwrap();
        assert!(matches!(doc.records("press"), Err(DataError::InvalidValue { .. })));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(Document::from_str("{"), Err(DataError::Parse(_))));
        assert!(matches!(
            Document::from_str(r#"{"abbrs": {"authors": {"@me": 3}}}"#),
            Err(DataError::Parse(_))
        ));
    }

    #[test]
    fn test_current_year_override() {
        let doc = Document::from_str("{}").unwrap();
        assert_eq!(doc.current_year(), Local::now().year());
        assert_eq!(doc.with_current_year(1999).current_year(), 1999);
    }

    #[test]
    fn test_from_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.json");
        std::fs::write(&path, r#"{"code": {"items": []}}"#).unwrap();

        let doc = Document::from_path(&path).unwrap();
        assert!(doc.has_list("code"));

        let missing = Document::from_path(&dir.path().join("nope.json"));
        assert!(matches!(missing, Err(DataError::Io(..))));
    }
}
