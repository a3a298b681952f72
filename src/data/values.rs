//! Small immutable value records referenced by content items.

use crate::utils::markup::escape_html;
use serde::Deserialize;

/// Abbreviation reserved for the site owner.
pub const SELF_ABBR: &str = "@me";

/// A person credited on an item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub name: String,
    pub abbreviation: Option<String>,
}

impl Author {
    pub fn literal(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            abbreviation: None,
        }
    }

    /// Abbreviation if there is one, else the display name.
    pub fn id(&self) -> &str {
        self.abbreviation.as_deref().unwrap_or(&self.name)
    }

    /// Whether this author is the site owner (`@me`).
    pub fn is_self(&self) -> bool {
        self.id() == SELF_ABBR
    }

    pub fn to_html(&self) -> String {
        escape_html(&self.name)
    }
}

/// A publishing outlet or event venue.
///
/// Sources (blogs, newspapers) and venues (conferences, journals) share one
/// shape: a title, an optional homepage and the abbreviation it was
/// resolved from.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Outlet {
    pub title: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, alias = "abbr")]
    pub abbreviation: Option<String>,
}

pub type Source = Outlet;
pub type Venue = Outlet;

impl Outlet {
    pub fn literal(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: None,
            abbreviation: None,
        }
    }

    pub fn to_html(&self) -> String {
        let title = escape_html(&self.title);
        match &self.url {
            Some(url) => format!("<a href='{url}'>{title}</a>"),
            None => title,
        }
    }
}

/// A named external reference, e.g. `"pdf" -> "papers/a.pdf"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub title: String,
    pub url: String,
}

impl Link {
    pub fn to_html(&self) -> String {
        format!("<a href='{}'>{}</a>", self.url, escape_html(&self.title))
    }
}

/// Free-form annotation shown next to an item's links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PubNote {
    pub text: String,
}

impl PubNote {
    pub fn to_html(&self) -> String {
        format!(
            "<span class='label label-info pub-note'>{}</span>",
            escape_html(&self.text)
        )
    }
}

/// Category of a talk, rendered as a coloured label.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TalkType {
    pub label: String,
    #[serde(default)]
    pub style: Option<String>,
}

impl TalkType {
    pub fn to_html(&self) -> String {
        let style = self.style.as_deref().unwrap_or("default");
        format!(
            "<span class='label label-{} talk-type'>{}</span>",
            escape_html(style),
            escape_html(&self.label)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_author_identity() {
        let plain = Author::literal("Jane Doe");
        assert_eq!(plain.id(), "Jane Doe");
        assert!(!plain.is_self());

        let me = Author {
            name: "Pete Snyder".into(),
            abbreviation: Some("@me".into()),
        };
        assert_eq!(me.id(), "@me");
        assert!(me.is_self());
    }

    #[test]
    fn test_author_html_escapes() {
        assert_eq!(Author::literal("O'Neil & Co").to_html(), "O&#x27;Neil &amp; Co");
    }

    #[test]
    fn test_outlet_html() {
        assert_eq!(Outlet::literal("Blog <X>").to_html(), "Blog &lt;X&gt;");

        let venue = Outlet {
            title: "USENIX Security".into(),
            url: Some("https://usenix.org".into()),
            abbreviation: Some("@usenix".into()),
        };
        assert_eq!(venue.to_html(), "<a href='https://usenix.org'>USENIX Security</a>");
    }

    #[test]
    fn test_outlet_deserialize_abbr_alias() {
        let venue: Outlet =
            serde_json::from_str(r#"{"title": "CCS", "abbr": "@ccs"}"#).unwrap();
        assert_eq!(venue.abbreviation.as_deref(), Some("@ccs"));
        assert_eq!(venue.url, None);
    }

    #[test]
    fn test_link_html() {
        let link = Link {
            title: "slides".into(),
            url: "talks/a.pdf".into(),
        };
        assert_eq!(link.to_html(), "<a href='talks/a.pdf'>slides</a>");
    }

    #[test]
    fn test_note_html() {
        let note = PubNote {
            text: "Best paper".into(),
        };
        assert_eq!(note.to_html(), "<span class='label label-info pub-note'>Best paper</span>");
    }

    #[test]
    fn test_talk_type_html() {
        let styled = TalkType {
            label: "invited".into(),
            style: Some("primary".into()),
        };
        assert_eq!(styled.to_html(), "<span class='label label-primary talk-type'>invited</span>");

        let plain = TalkType {
            label: "guest".into(),
            style: None,
        };
        assert!(plain.to_html().contains("label-default"));
    }
}
