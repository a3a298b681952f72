//! Professional service, rendered as table rows grouped by year.

use crate::data::{
    Date, Document,
    error::Result,
    fields::{self, OutletField, Record},
    values::Venue,
};
use crate::utils::markup::{Markup, escape_html};

#[derive(Debug, Clone)]
pub struct Involvement {
    pub date: Date,
    pub venue: Venue,
    pub position: String,
}

impl Involvement {
    /// `position` is always an abbreviation; there is no literal form.
    pub fn from_record(record: &Record, doc: &Document) -> Result<Self> {
        let position = fields::required_str(record, "position")?;
        Ok(Self {
            date: fields::date(record, doc)?,
            venue: fields::outlet(record, OutletField::Venue, doc)?,
            position: doc.abbrs().position(position)?,
        })
    }

    /// Emit a year header row unless `previous` shares this item's year.
    pub fn render(&self, markup: &mut Markup, previous: Option<&Involvement>) {
        if previous.is_none_or(|p| p.date.year() != self.date.year()) {
            markup.scope("<tr>", "</tr>", |m| {
                m.add(format!(
                    "<th colspan=\"2\" class=\"year active\">{}</th>",
                    self.date.year()
                ));
            });
        }
        markup.scope("<tr>", "</tr>", |m| {
            m.add(format!("<td class=\"venue\">{}</td>", self.venue.to_html()));
            m.add(format!(
                "<td class=\"position\">{}</td>",
                escape_html(&self.position)
            ));
        });
    }
}
