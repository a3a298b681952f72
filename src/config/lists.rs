//! `[[lists]]` entries: which document lists to render, and how.

use crate::data::Document;
use crate::items::ItemKind;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One `[[lists]]` entry in folio.toml.
///
/// # Example
/// ```toml
/// [[lists]]
/// name = "papers"
/// kind = "publication"
/// output = "papers.html"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ListConfig {
    /// Top-level key of the list in the data document.
    pub name: String,

    /// Item variant used to build the list.
    pub kind: ItemKind,

    /// Output file name, relative to `[build].output`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
}

impl ListConfig {
    pub fn new(name: impl Into<String>, kind: ItemKind) -> Self {
        Self {
            name: name.into(),
            kind,
            output: None,
        }
    }

    /// Output file name, defaulting to `<name>.html`.
    pub fn output_file(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(format!("{}.html", self.name)))
    }

    /// Conventional lists present in `doc`, used when none are configured.
    pub fn defaults_for(doc: &Document) -> Vec<Self> {
        ItemKind::ALL
            .into_iter()
            .filter(|kind| doc.has_list(kind.default_list()))
            .map(|kind| Self::new(kind.default_list(), kind))
            .collect()
    }
}
