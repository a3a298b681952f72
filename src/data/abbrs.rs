//! Abbreviation tables and `@token` resolution.
//!
//! The data document carries one shared `abbrs` object:
//!
//! ```json
//! "abbrs": {
//!   "authors":   { "@me": "Pete Snyder" },
//!   "sources":   { "@brave": { "title": "Brave Blog", "url": "https://brave.com/blog" } },
//!   "venues":    { "@usenix": { "title": "USENIX Security" } },
//!   "types":     { "@invited": { "label": "invited", "style": "primary" } },
//!   "positions": { "@pc": "Program Committee" }
//! }
//! ```
//!
//! Only strings starting with [`ABBR_PREFIX`] are looked up; anything else is
//! a literal value and never reaches this module. A token missing from its
//! table is a [`DataError::Lookup`].

use super::error::{DataError, Result};
use super::values::{Author, Outlet, TalkType};
use serde::Deserialize;
use std::{collections::BTreeMap, fmt};

pub const ABBR_PREFIX: char = '@';

/// Whether `value` is an abbreviation reference rather than a literal.
pub fn is_abbr(value: &str) -> bool {
    value.starts_with(ABBR_PREFIX)
}

/// The five lookup tables of the `abbrs` object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbbrCategory {
    Authors,
    Sources,
    Venues,
    Types,
    Positions,
}

impl AbbrCategory {
    /// Singular name used in diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Authors => "author",
            Self::Sources => "source",
            Self::Venues => "venue",
            Self::Types => "type",
            Self::Positions => "position",
        }
    }
}

impl fmt::Display for AbbrCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Abbreviations {
    pub authors: BTreeMap<String, String>,
    pub sources: BTreeMap<String, Outlet>,
    pub venues: BTreeMap<String, Outlet>,
    pub types: BTreeMap<String, TalkType>,
    pub positions: BTreeMap<String, String>,
}

/// Look `token` up in `table`, failing with a lookup error for `category`.
pub fn resolve<'a, T>(
    category: AbbrCategory,
    token: &str,
    table: &'a BTreeMap<String, T>,
) -> Result<&'a T> {
    table.get(token).ok_or_else(|| DataError::Lookup {
        category,
        token: token.to_owned(),
    })
}

impl Abbreviations {
    pub fn author(&self, token: &str) -> Result<Author> {
        let name = resolve(AbbrCategory::Authors, token, &self.authors)?;
        Ok(Author {
            name: name.clone(),
            abbreviation: Some(token.to_owned()),
        })
    }

    pub fn source(&self, token: &str) -> Result<Outlet> {
        let source = resolve(AbbrCategory::Sources, token, &self.sources)?;
        Ok(with_abbreviation(source, token))
    }

    pub fn venue(&self, token: &str) -> Result<Outlet> {
        let venue = resolve(AbbrCategory::Venues, token, &self.venues)?;
        Ok(with_abbreviation(venue, token))
    }

    pub fn talk_type(&self, token: &str) -> Result<TalkType> {
        resolve(AbbrCategory::Types, token, &self.types).cloned()
    }

    pub fn position(&self, token: &str) -> Result<String> {
        resolve(AbbrCategory::Positions, token, &self.positions).cloned()
    }
}

fn with_abbreviation(outlet: &Outlet, token: &str) -> Outlet {
    Outlet {
        abbreviation: Some(token.to_owned()),
        ..outlet.clone()
    }
}
