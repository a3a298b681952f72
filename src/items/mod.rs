//! Content items and list operations.
//!
//! # Variants
//!
//! | Kind          | Container classes                              | File fields   |
//! |---------------|------------------------------------------------|---------------|
//! | `publication` | `publications`                                 | url, links    |
//! | `blog`        | `publications publications-blog`               | url           |
//! | `press`       | `publications publications-press`              | url           |
//! | `talk`        | `publications publications-talks`              | url, links    |
//! | `writing`     | `publications publications-other-writing`      | url, links    |
//! | `code`        | `publications`                                 | links         |
//! | `involvement` | none (bare `<tr>` rows)                        | none          |
//!
//! # Pipeline
//!
//! ```text
//! Document ──► ItemKind::build_list() ──► Vec<Item>
//!                                            │
//!                      ┌─────────────────────┴─────────────────┐
//!                      ▼                                       ▼
//!          ItemKind::render_list()                   Item::validate(root)
//!      (sort newest first, wrap, render)        (local file references exist)
//! ```

mod blog;
mod code;
mod html;
mod involvement;
mod press;
mod publication;
mod talk;
mod writing;

pub use blog::Blog;
pub use code::Code;
pub use involvement::Involvement;
pub use press::Press;
pub use publication::Publication;
pub use talk::Talk;
pub use writing::Writing;

use crate::data::{
    DataError, Date, Document,
    error::Result,
    values::Link,
};
use crate::utils::markup::Markup;
use serde::{Deserialize, Serialize};
use std::{fmt, path::Path};

// ============================================================================
// File References
// ============================================================================

/// A file-bearing field value, named by the field it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileRef<'a> {
    pub field: &'static str,
    pub value: &'a str,
}

impl<'a> FileRef<'a> {
    fn from_url(url: &'a Option<String>) -> Vec<Self> {
        url.as_deref()
            .map(|value| Self { field: "url", value })
            .into_iter()
            .collect()
    }

    fn from_links(links: &'a [Link]) -> impl Iterator<Item = Self> + 'a {
        links.iter().map(|link| Self {
            field: "links",
            value: &link.url,
        })
    }

    /// Anything without `//` is treated as a path relative to the site root.
    pub fn is_local(&self) -> bool {
        !self.value.is_empty() && !self.value.contains("//")
    }
}

// ============================================================================
// Item Kinds
// ============================================================================

/// The closed set of item variants, as named in `folio.toml`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Publication,
    Blog,
    Press,
    Talk,
    Writing,
    Code,
    Involvement,
}

impl ItemKind {
    pub const ALL: [Self; 7] = [
        Self::Publication,
        Self::Blog,
        Self::Press,
        Self::Talk,
        Self::Writing,
        Self::Code,
        Self::Involvement,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Publication => "publication",
            Self::Blog => "blog",
            Self::Press => "press",
            Self::Talk => "talk",
            Self::Writing => "writing",
            Self::Code => "code",
            Self::Involvement => "involvement",
        }
    }

    /// Conventional document key for lists of this kind.
    pub const fn default_list(self) -> &'static str {
        match self {
            Self::Publication => "publications",
            Self::Blog => "blog",
            Self::Press => "press",
            Self::Talk => "talks",
            Self::Writing => "writing",
            Self::Code => "code",
            Self::Involvement => "involvement",
        }
    }

    /// CSS classes of the list container. Empty means no container.
    pub const fn html_classes(self) -> &'static [&'static str] {
        match self {
            Self::Publication | Self::Code => &["publications"],
            Self::Blog => &["publications", "publications-blog"],
            Self::Press => &["publications", "publications-press"],
            Self::Talk => &["publications", "publications-talks"],
            Self::Writing => &["publications", "publications-other-writing"],
            Self::Involvement => &[],
        }
    }

    /// Build one item of this kind from a raw record.
    pub fn from_record(self, record: &serde_json::Value, doc: &Document) -> Result<Item> {
        let record = record
            .as_object()
            .ok_or_else(|| DataError::invalid("items", record, "item record"))?;
        Ok(match self {
            Self::Publication => Item::Publication(Publication::from_record(record, doc)?),
            Self::Blog => Item::Blog(Blog::from_record(record, doc)?),
            Self::Press => Item::Press(Press::from_record(record, doc)?),
            Self::Talk => Item::Talk(Talk::from_record(record, doc)?),
            Self::Writing => Item::Writing(Writing::from_record(record, doc)?),
            Self::Code => Item::Code(Code::from_record(record, doc)?),
            Self::Involvement => Item::Involvement(Involvement::from_record(record, doc)?),
        })
    }

    /// Build every item of the list `name`, in document order.
    ///
    /// The first bad record aborts the whole list.
    pub fn build_list(self, doc: &Document, name: &str) -> Result<Vec<Item>> {
        doc.records(name)?
            .iter()
            .map(|record| self.from_record(record, doc))
            .collect()
    }

    /// Render `items` newest first, wrapped in this kind's container.
    pub fn render_list(self, items: &[Item], markup: &mut Markup) {
        let sorted = sorted(items);
        let classes = self.html_classes();
        if classes.is_empty() {
            render_items(&sorted, markup);
            return;
        }
        let open = format!("<ul class='{}'>", classes.join(" "));
        markup.scope(open, "</ul>", |m| render_items(&sorted, m));
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Items
// ============================================================================

#[derive(Debug, Clone)]
pub enum Item {
    Publication(Publication),
    Blog(Blog),
    Press(Press),
    Talk(Talk),
    Writing(Writing),
    Code(Code),
    Involvement(Involvement),
}

impl Item {
    pub const fn kind(&self) -> ItemKind {
        match self {
            Self::Publication(_) => ItemKind::Publication,
            Self::Blog(_) => ItemKind::Blog,
            Self::Press(_) => ItemKind::Press,
            Self::Talk(_) => ItemKind::Talk,
            Self::Writing(_) => ItemKind::Writing,
            Self::Code(_) => ItemKind::Code,
            Self::Involvement(_) => ItemKind::Involvement,
        }
    }

    pub const fn date(&self) -> &Date {
        match self {
            Self::Publication(i) => &i.date,
            Self::Blog(i) => &i.date,
            Self::Press(i) => &i.date,
            Self::Talk(i) => &i.date,
            Self::Writing(i) => &i.date,
            Self::Code(i) => &i.date,
            Self::Involvement(i) => &i.date,
        }
    }

    /// Append this item's fragment. Only involvement rows look at `previous`.
    pub fn render(&self, markup: &mut Markup, previous: Option<&Item>) {
        match self {
            Self::Publication(i) => i.render(markup),
            Self::Blog(i) => i.render(markup),
            Self::Press(i) => i.render(markup),
            Self::Talk(i) => i.render(markup),
            Self::Writing(i) => i.render(markup),
            Self::Code(i) => i.render(markup),
            Self::Involvement(i) => {
                let previous = previous.and_then(|p| match p {
                    Self::Involvement(p) => Some(p),
                    _ => None,
                });
                i.render(markup, previous)
            }
        }
    }

    /// Field values that may name local files.
    pub fn file_refs(&self) -> Vec<FileRef<'_>> {
        match self {
            Self::Publication(i) => i.file_refs(),
            Self::Blog(i) => i.file_refs(),
            Self::Press(i) => i.file_refs(),
            Self::Talk(i) => i.file_refs(),
            Self::Writing(i) => i.file_refs(),
            Self::Code(i) => i.file_refs(),
            Self::Involvement(_) => Vec::new(),
        }
    }

    /// Check that every local file reference exists under `root`.
    pub fn validate(&self, root: &Path) -> Result<bool> {
        for file_ref in self.file_refs().iter().filter(|r| r.is_local()) {
            let path = root.join(file_ref.value);
            if !path.is_file() {
                return Err(DataError::MissingFile {
                    field: file_ref.field,
                    path,
                });
            }
        }
        Ok(true)
    }
}

// ============================================================================
// List Helpers
// ============================================================================

/// Items ordered newest first. Equal dates keep document order.
pub fn sorted(items: &[Item]) -> Vec<&Item> {
    let mut sorted: Vec<&Item> = items.iter().collect();
    sorted.sort_by(|a, b| b.date().cmp(a.date()));
    sorted
}

fn render_items(items: &[&Item], markup: &mut Markup) {
    let mut previous = None;
    for item in items {
        item.render(markup, previous);
        previous = Some(*item);
    }
}

// ============================================================================
// Tests
// ============================================================================
