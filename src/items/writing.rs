//! Other writing: essays, reports, op-eds.

use super::{FileRef, html};
use crate::data::{
    Date, Document,
    error::Result,
    fields::{self, OutletField, Record},
    values::{Author, Link, PubNote, Venue},
};
use crate::utils::markup::Markup;

#[derive(Debug, Clone)]
pub struct Writing {
    pub date: Date,
    pub title: String,
    pub url: Option<String>,
    pub venue: Option<Venue>,
    pub authors: Vec<Author>,
    pub links: Vec<Link>,
    pub notes: Vec<PubNote>,
    pub desc: Option<String>,
}

impl Writing {
    pub fn from_record(record: &Record, doc: &Document) -> Result<Self> {
        Ok(Self {
            date: fields::date(record, doc)?,
            title: fields::required_str(record, "title")?.to_owned(),
            url: fields::optional_str(record, "url")?,
            venue: fields::optional_outlet(record, OutletField::Venue, doc)?,
            authors: fields::authors(record, doc)?,
            links: fields::links(record)?,
            notes: fields::notes(record)?,
            desc: fields::optional_str(record, "desc")?,
        })
    }

    pub fn render(&self, markup: &mut Markup) {
        markup.scope("<li>", "</li>", |m| {
            m.add(html::title_html(&self.title, self.url.as_deref()));
            html::add_authors(&self.authors, m);
            match &self.venue {
                Some(venue) => html::add_dest(venue, &self.date, m),
                None => html::add_date(&self.date, m),
            }
            html::add_notes_and_links(&self.notes, &self.links, m);
            if let Some(desc) = &self.desc {
                html::add_desc(desc, m);
            }
        });
    }

    pub fn file_refs(&self) -> Vec<FileRef<'_>> {
        let mut refs = FileRef::from_url(&self.url);
        refs.extend(FileRef::from_links(&self.links));
        refs
    }
}
