//! Software projects.

use super::{FileRef, html};
use crate::data::{
    Date, Document,
    error::Result,
    fields::{self, Record},
    values::Link,
};
use crate::utils::markup::Markup;

#[derive(Debug, Clone)]
pub struct Code {
    pub date: Date,
    pub title: String,
    pub url: Option<String>,
    pub links: Vec<Link>,
    pub desc: Option<String>,
}

impl Code {
    pub fn from_record(record: &Record, doc: &Document) -> Result<Self> {
        Ok(Self {
            date: fields::date(record, doc)?,
            title: fields::required_str(record, "title")?.to_owned(),
            url: fields::optional_str(record, "url")?,
            links: fields::links(record)?,
            desc: fields::optional_str(record, "desc")?,
        })
    }

    pub fn render(&self, markup: &mut Markup) {
        markup.scope("<li>", "</li>", |m| {
            m.add(html::title_html(&self.title, self.url.as_deref()));
            html::add_date(&self.date, m);
            html::add_links(&self.links, m);
            if let Some(desc) = &self.desc {
                html::add_desc(desc, m);
            }
        });
    }

    /// Project URLs point at repositories; only links may be local files.
    pub fn file_refs(&self) -> Vec<FileRef<'_>> {
        FileRef::from_links(&self.links).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_code_item() {
        let doc = Document::from_str("{}").unwrap().with_current_year(2026);
        let record = json!({
            "title": "PageGraph",
            "year": "@now",
            "url": "https://github.com/brave/pagegraph",
            "links": {"docs": "docs/pagegraph.pdf"},
            "desc": "Instrumented browser."
        });
        let code = Code::from_record(record.as_object().unwrap(), &doc).unwrap();

        assert_eq!(code.date, Date::Year(2026));
        assert_eq!(code.file_refs().len(), 1);

        let mut markup = Markup::new(2);
        code.render(&mut markup);
        let html = markup.into_string();
        assert!(html.contains("href='https://github.com/brave/pagegraph'"));
        assert!(html.contains("<time datetime='2026'>2026</time>"));
        assert!(html.contains("Instrumented browser."));
    }
}
