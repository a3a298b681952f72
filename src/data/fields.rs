//! Typed field accessors over raw JSON item records.

use super::abbrs::is_abbr;
use super::date::Date;
use super::document::Document;
use super::error::{DataError, Result};
use super::values::{Author, Link, Outlet, PubNote};
use serde_json::{Map, Value};

/// One raw entry of a content list.
pub type Record = Map<String, Value>;

/// Fetch a field, treating JSON `null` as absent.
fn get<'a>(record: &'a Record, field: &str) -> Option<&'a Value> {
    record.get(field).filter(|v| !v.is_null())
}

pub fn required<'a>(record: &'a Record, field: &'static str) -> Result<&'a Value> {
    get(record, field).ok_or(DataError::MissingField(field))
}

pub fn required_str<'a>(record: &'a Record, field: &'static str) -> Result<&'a str> {
    match required(record, field)? {
        Value::String(s) => Ok(s),
        other => Err(DataError::invalid(field, other, "string")),
    }
}

pub fn optional_str(record: &Record, field: &'static str) -> Result<Option<String>> {
    match get(record, field) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(DataError::invalid(field, other, "string")),
    }
}

/// `date`, falling back to `year`; one of them is required.
pub fn date(record: &Record, doc: &Document) -> Result<Date> {
    match (get(record, "date"), get(record, "year")) {
        (Some(value), _) => Date::from_json("date", value, doc.current_year()),
        (None, Some(value)) => Date::from_json("year", value, doc.current_year()),
        (None, None) => Err(DataError::MissingField("date")),
    }
}

fn string_list<'a>(record: &'a Record, field: &'static str) -> Result<Vec<&'a str>> {
    match get(record, field) {
        None => Ok(Vec::new()),
        Some(Value::Array(values)) => values
            .iter()
            .map(|v| v.as_str().ok_or_else(|| DataError::invalid(field, v, "string")))
            .collect(),
        Some(other) => Err(DataError::invalid(field, other, "list of strings")),
    }
}

/// Optional `authors` list of literal names and `@author` tokens.
pub fn authors(record: &Record, doc: &Document) -> Result<Vec<Author>> {
    string_list(record, "authors")?
        .into_iter()
        .map(|author| {
            if is_abbr(author) {
                doc.abbrs().author(author)
            } else {
                Ok(Author::literal(author))
            }
        })
        .collect()
}

/// Optional `notes` list.
pub fn notes(record: &Record) -> Result<Vec<PubNote>> {
    Ok(string_list(record, "notes")?
        .into_iter()
        .map(|text| PubNote { text: text.to_owned() })
        .collect())
}

/// Optional `links` mapping of title to URL, sorted by title.
pub fn links(record: &Record) -> Result<Vec<Link>> {
    let Some(value) = get(record, "links") else {
        return Ok(Vec::new());
    };
    let Value::Object(map) = value else {
        return Err(DataError::invalid("links", value, "mapping of title to url"));
    };
    let mut links = map
        .iter()
        .map(|(title, url)| match url {
            Value::String(url) => Ok(Link {
                title: title.clone(),
                url: url.clone(),
            }),
            other => Err(DataError::invalid("links", other, "url string")),
        })
        .collect::<Result<Vec<_>>>()?;
    links.sort_by(|a, b| a.title.cmp(&b.title));
    Ok(links)
}

/// Which abbreviation table an outlet field resolves against.
#[derive(Debug, Clone, Copy)]
pub enum OutletField {
    Source,
    Venue,
}

impl OutletField {
    const fn name(self) -> &'static str {
        match self {
            Self::Source => "source",
            Self::Venue => "venue",
        }
    }
}

/// Required `source` / `venue` field.
pub fn outlet(record: &Record, which: OutletField, doc: &Document) -> Result<Outlet> {
    let field = which.name();
    outlet_value(required(record, field)?, which, doc)
}

/// Same as [`outlet`] but absent is `None`.
pub fn optional_outlet(record: &Record, which: OutletField, doc: &Document) -> Result<Option<Outlet>> {
    get(record, which.name())
        .map(|value| outlet_value(value, which, doc))
        .transpose()
}

/// An outlet is an `@token`, a literal title, or an inline `{title, url}`.
fn outlet_value(value: &Value, which: OutletField, doc: &Document) -> Result<Outlet> {
    let field = which.name();
    match value {
        Value::String(token) if is_abbr(token) => match which {
            OutletField::Source => doc.abbrs().source(token),
            OutletField::Venue => doc.abbrs().venue(token),
        },
        Value::String(title) => Ok(Outlet::literal(title.as_str())),
        Value::Object(_) => serde_json::from_value(value.clone())
            .map_err(|_| DataError::invalid(field, value, "record with a `title`")),
        other => Err(DataError::invalid(field, other, "string or record")),
    }
}
