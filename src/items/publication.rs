//! Papers: title, authors, venue, notes and links.

use super::{FileRef, html};
use crate::data::{
    Date, Document,
    error::Result,
    fields::{self, OutletField, Record},
    values::{Author, Link, PubNote, Venue},
};
use crate::utils::markup::Markup;

#[derive(Debug, Clone)]
pub struct Publication {
    pub date: Date,
    pub title: String,
    pub url: Option<String>,
    pub authors: Vec<Author>,
    pub venue: Venue,
    pub links: Vec<Link>,
    pub notes: Vec<PubNote>,
}

impl Publication {
    pub fn from_record(record: &Record, doc: &Document) -> Result<Self> {
        Ok(Self {
            date: fields::date(record, doc)?,
            title: fields::required_str(record, "title")?.to_owned(),
            url: fields::optional_str(record, "url")?,
            authors: fields::authors(record, doc)?,
            venue: fields::outlet(record, OutletField::Venue, doc)?,
            links: fields::links(record)?,
            notes: fields::notes(record)?,
        })
    }

    pub fn render(&self, markup: &mut Markup) {
        markup.scope("<li>", "</li>", |m| {
            m.add(html::title_html(&self.title, self.url.as_deref()));
            html::add_authors(&self.authors, m);
            html::add_dest(&self.venue, &self.date, m);
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

    fn build(doc: &Document, value: serde_json::Value) -> Result<Publication> {
        Publication::from_record(value.as_object().unwrap(), doc)
    }

    fn doc() -> Document {
        Document::from_str(
            r#"{"abbrs": {
                "authors": {"@me": "Pete Snyder"},
                "venues": {"@usenix": {"title": "USENIX Security"}}
            }}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_from_record_full() {
        let publication = build(
            &doc(),
            json!({
                "title": "Paper A",
                "year": 2020,
                "url": "papers/a.pdf",
                "venue": "@usenix",
                "authors": ["@me", "Jane Doe"],
                "links": {"slides": "slides/a.pdf", "code": "https://github.com/a"},
                "notes": ["Distinguished paper"]
            }),
        )
        .unwrap();

        assert_eq!(publication.date, Date::Year(2020));
        assert_eq!(publication.venue.title, "USENIX Security");
        assert_eq!(publication.authors.len(), 2);
        assert_eq!(publication.links[0].title, "code");
        assert_eq!(publication.notes[0].text, "Distinguished paper");
    }

    #[test]
    fn test_from_record_requires_title_and_venue() {
        let doc = doc();
        let err = build(&doc, json!({"year": 2020, "venue": "@usenix"})).unwrap_err();
        assert!(matches!(err, crate::data::DataError::MissingField("title")));

        let err = build(&doc, json!({"year": 2020, "title": "A"})).unwrap_err();
        assert!(matches!(err, crate::data::DataError::MissingField("venue")));
    }

    #[test]
    fn test_render() {
        let publication = build(
            &doc(),
            json!({
                "title": "Paper <A>",
                "year": 2020,
                "venue": "@usenix",
                "authors": ["Jane Doe"],
                "notes": ["Best paper"],
                "links": {"pdf": "a.pdf"}
            }),
        )
        .unwrap();

        let mut markup = Markup::new(2);
        publication.render(&mut markup);
        let html = markup.into_string();

        assert!(html.starts_with("<li>\n"));
        assert!(html.ends_with("</li>\n"));
        assert!(html.contains("<span class='pub-title'>Paper &lt;A&gt;</span>"));
        assert!(html.contains("<li>Jane Doe</li>"));
        assert!(html.contains("USENIX Security"));
        assert!(html.contains("<time datetime='2020'>2020</time>"));
        let note = html.find("Best paper").unwrap();
        let link = html.find("a.pdf").unwrap();
        assert!(note < link);
    }

    #[test]
    fn test_file_refs() {
        let publication = build(
            &doc(),
            json!({
                "title": "A",
                "year": 2020,
                "venue": "Workshop",
                "url": "papers/a.pdf",
                "links": {"slides": "slides/a.pdf"}
            }),
        )
        .unwrap();

        let refs = publication.file_refs();
        assert_eq!(refs.len(), 2);
        assert_eq!(refs[0], FileRef { field: "url", value: "papers/a.pdf" });
        assert_eq!(refs[1], FileRef { field: "links", value: "slides/a.pdf" });
    }
}
