//! Talks and presentations.

use super::{FileRef, html};
use crate::data::{
    DataError, Date, Document,
    abbrs::is_abbr,
    error::Result,
    fields::{self, OutletField, Record},
    values::{Author, Link, PubNote, TalkType, Venue},
};
use crate::utils::markup::Markup;

const EXPECTED_KIND: &str = "one of invited, keynote, conference, workshop, panel, lecture";

/// Talk categories accepted as literal `type` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TalkKind {
    Invited,
    Keynote,
    Conference,
    Workshop,
    Panel,
    Lecture,
}

impl TalkKind {
    pub const ALL: [Self; 6] = [
        Self::Invited,
        Self::Keynote,
        Self::Conference,
        Self::Workshop,
        Self::Panel,
        Self::Lecture,
    ];

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == s)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Invited => "invited",
            Self::Keynote => "keynote",
            Self::Conference => "conference",
            Self::Workshop => "workshop",
            Self::Panel => "panel",
            Self::Lecture => "lecture",
        }
    }

    pub const fn style(self) -> &'static str {
        match self {
            Self::Invited => "primary",
            Self::Keynote => "danger",
            Self::Conference => "success",
            Self::Workshop => "info",
            Self::Panel => "warning",
            Self::Lecture => "default",
        }
    }

    fn to_type(self) -> TalkType {
        TalkType {
            label: self.as_str().to_owned(),
            style: Some(self.style().to_owned()),
        }
    }
}

/// Resolve the `type` field.
///
/// A literal must name a [`TalkKind`]. An `@token` resolves against
/// `abbrs.types`; a resolved type without its own `style` must also name a
/// [`TalkKind`] so it can borrow that kind's style.
fn talk_type(record: &Record, doc: &Document) -> Result<TalkType> {
    let raw = fields::required_str(record, "type")?;
    if !is_abbr(raw) {
        return TalkKind::parse(raw)
            .map(TalkKind::to_type)
            .ok_or_else(|| DataError::invalid("type", raw, EXPECTED_KIND));
    }

    let resolved = doc.abbrs().talk_type(raw)?;
    if resolved.style.is_some() {
        return Ok(resolved);
    }
    let kind = TalkKind::parse(&resolved.label)
        .ok_or_else(|| DataError::invalid("type", &resolved.label, EXPECTED_KIND))?;
    Ok(TalkType {
        style: Some(kind.style().to_owned()),
        ..resolved
    })
}

#[derive(Debug, Clone)]
pub struct Talk {
    pub date: Date,
    pub title: String,
    pub url: Option<String>,
    pub kind: TalkType,
    pub venue: Venue,
    pub authors: Vec<Author>,
    pub links: Vec<Link>,
    pub notes: Vec<PubNote>,
}

impl Talk {
    pub fn from_record(record: &Record, doc: &Document) -> Result<Self> {
        Ok(Self {
            date: fields::date(record, doc)?,
            title: fields::required_str(record, "title")?.to_owned(),
            url: fields::optional_str(record, "url")?,
            kind: talk_type(record, doc)?,
            venue: fields::outlet(record, OutletField::Venue, doc)?,
            authors: fields::authors(record, doc)?,
            links: fields::links(record)?,
            notes: fields::notes(record)?,
        })
    }

    pub fn render(&self, markup: &mut Markup) {
        markup.scope("<li>", "</li>", |m| {
            m.add(html::title_html(&self.title, self.url.as_deref()));
            html::add_authors(&self.authors, m);
            html::add_dest(&self.venue, &self.date, m);
            m.add(self.kind.to_html());
            html::add_notes_and_links(&self.notes, &self.links, m);
        });
    }

    pub fn file_refs(&self) -> Vec<FileRef<'_>> {
        let mut refs = FileRef::from_url(&self.url);
        refs.extend(FileRef::from_links(&self.links));
        refs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc() -> Document {
        Document::from_str(
            r#"{"abbrs": {
                "venues": {"@w3c": {"title": "W3C TPAC", "url": "https://w3.org"}},
                "types": {
                    "@invited": {"label": "invited"},
                    "@guest": {"label": "guest", "style": "info"},
                    "@odd": {"label": "odd"}
                }
            }}"#,
        )
        .unwrap()
    }

    fn build(value: serde_json::Value) -> Result<Talk> {
        Talk::from_record(value.as_object().unwrap(), &doc())
    }

    fn talk_with_type(kind: &str) -> Result<Talk> {
        build(json!({"title": "T", "year": 2022, "venue": "@w3c", "type": kind}))
    }

    #[test]
    fn test_literal_kind() {
        let talk = talk_with_type("keynote").unwrap();
        assert_eq!(talk.kind.label, "keynote");
        assert_eq!(talk.kind.style.as_deref(), Some("danger"));
    }

    #[test]
    fn test_literal_kind_rejected() {
        let err = talk_with_type("rant").unwrap_err();
        assert!(matches!(err, DataError::InvalidValue { field: "type", .. }));
    }

    #[test]
    fn test_abbr_kind_borrows_style() {
        let talk = talk_with_type("@invited").unwrap();
        assert_eq!(talk.kind.style.as_deref(), Some("primary"));
    }

    #[test]
    fn test_abbr_kind_with_own_style() {
        let talk = talk_with_type("@guest").unwrap();
        assert_eq!(talk.kind.label, "guest");
        assert_eq!(talk.kind.style.as_deref(), Some("info"));
    }

    #[test]
    fn test_abbr_kind_unknown_label_without_style() {
        assert!(matches!(talk_with_type("@odd"), Err(DataError::InvalidValue { .. })));
    }

    #[test]
    fn test_abbr_kind_missing() {
        assert!(matches!(talk_with_type("@nope"), Err(DataError::Lookup { .. })));
    }

    #[test]
    fn test_render() {
        let talk = build(json!({
            "title": "Privacy Budget",
            "year": 2022,
            "venue": "@w3c",
            "type": "invited",
            "links": {"video": "https://youtube.com/x", "slides": "talks/pb.pdf"}
        }))
        .unwrap();

        let mut markup = Markup::new(2);
        talk.render(&mut markup);
        let html = markup.into_string();

        assert!(html.contains("<span class='pub-title'>Privacy Budget</span>"));
        assert!(!html.contains("class='authors'"));
        assert!(html.contains("<span class='label label-primary talk-type'>invited</span>"));
        let slides = html.find("slides").unwrap();
        let video = html.find("video").unwrap();
        assert!(slides < video);
    }
}
