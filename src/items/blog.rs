//! Blog posts written for an outside source.

use super::{FileRef, html};
use crate::data::{
    Date, Document,
    error::Result,
    fields::{self, OutletField, Record},
    values::{Author, Source},
};
use crate::utils::markup::Markup;

#[derive(Debug, Clone)]
pub struct Blog {
    pub date: Date,
    pub title: String,
    pub url: Option<String>,
    pub source: Source,
    pub authors: Vec<Author>,
    pub desc: Option<String>,
}

impl Blog {
    pub fn from_record(record: &Record, doc: &Document) -> Result<Self> {
        Ok(Self {
            date: fields::date(record, doc)?,
            title: fields::required_str(record, "title")?.to_owned(),
            url: fields::optional_str(record, "url")?,
            source: fields::outlet(record, OutletField::Source, doc)?,
            authors: fields::authors(record, doc)?,
            desc: fields::optional_str(record, "desc")?,
        })
    }

    pub fn render(&self, markup: &mut Markup) {
        markup.scope("<li>", "</li>", |m| {
            m.add(html::title_html(&self.title, self.url.as_deref()));
            html::add_coauthors(&self.authors, m);
            html::add_dest(&self.source, &self.date, m);
            if let Some(desc) = &self.desc {
                html::add_desc(desc, m);
            }
        });
    }

    pub fn file_refs(&self) -> Vec<FileRef<'_>> {
        FileRef::from_url(&self.url)
    }
}
