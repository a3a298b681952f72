//! Press coverage: news articles, podcasts, radio and video appearances.

use super::{FileRef, html};
use crate::data::{
    DataError, Date, Document,
    error::Result,
    fields::{self, OutletField, Record},
    values::Source,
};
use crate::utils::markup::Markup;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressType {
    News,
    Podcast,
    Radio,
    Video,
}

impl PressType {
    pub const ALL: [Self; 4] = [Self::News, Self::Podcast, Self::Radio, Self::Video];

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == s)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::News => "news",
            Self::Podcast => "podcast",
            Self::Radio => "radio",
            Self::Video => "video",
        }
    }

    /// Bootstrap label colour for the type pill.
    pub const fn style(self) -> &'static str {
        match self {
            Self::News => "success",
            Self::Podcast => "primary",
            Self::Radio => "warning",
            Self::Video => "info",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Press {
    pub date: Date,
    pub title: String,
    pub url: Option<String>,
    pub source: Source,
    pub kind: PressType,
}

impl Press {
    pub fn from_record(record: &Record, doc: &Document) -> Result<Self> {
        let raw_type = fields::required_str(record, "type")?;
        let kind = PressType::parse(raw_type)
            .ok_or_else(|| DataError::invalid("type", raw_type, "one of news, podcast, radio, video"))?;

        Ok(Self {
            date: fields::date(record, doc)?,
            title: fields::required_str(record, "title")?.to_owned(),
            url: fields::optional_str(record, "url")?,
            source: fields::outlet(record, OutletField::Source, doc)?,
            kind,
        })
    }

    pub fn render(&self, markup: &mut Markup) {
        markup.scope("<li>", "</li>", |m| {
            m.add(html::title_html(&self.title, self.url.as_deref()));
            m.scope("<span class='press-type'>", "</span>", |m| {
                m.add(format!(
                    "<span class='label label-{}'>{}</span>",
                    self.kind.style(),
                    self.kind.as_str()
                ));
            });
            html::add_dest(&self.source, &self.date, m);
        });
    }

    pub fn file_refs(&self) -> Vec<FileRef<'_>> {
        FileRef::from_url(&self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn build(value: serde_json::Value) -> Result<Press> {
        let doc = Document::from_str(
            r#"{"abbrs": {"sources": {"@wired": {"title": "Wired", "url": "https://wired.com"}}}}"#,
        )
        .unwrap();
        Press::from_record(value.as_object().unwrap(), &doc)
    }

    #[test]
    fn test_press_type_parse() {
        for kind in PressType::ALL {
            assert_eq!(PressType::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(PressType::parse("blog"), None);
        assert_eq!(PressType::parse("News"), None);
    }

    #[test]
    fn test_invalid_type_rejected_at_construction() {
        let err = build(json!({
            "title": "Story", "date": "2020-01-01", "source": "@wired", "type": "tv"
        }))
        .unwrap_err();
        assert!(matches!(err, DataError::InvalidValue { field: "type", .. }));
    }

    #[test]
    fn test_missing_type() {
        let err = build(json!({"title": "Story", "date": "2020-01-01", "source": "@wired"})).unwrap_err();
        assert!(matches!(err, DataError::MissingField("type")));
    }

    #[test]
    fn test_render_type_pill() {
        let press = build(json!({
            "title": "Ad blockers",
            "date": "2020-01-01",
            "url": "https://wired.com/ads",
            "source": "@wired",
            "type": "podcast"
        }))
        .unwrap();

        let mut markup = Markup::new(2);
        press.render(&mut markup);
        let html = markup.into_string();

        assert!(html.contains("  <span class='press-type'>\n    <span class='label label-primary'>podcast</span>\n  </span>"));
        assert!(html.contains("<a href='https://wired.com'>Wired</a>"));
        assert!(html.contains("Jan 01, 2020"));
    }
}
