//! Fragment writers shared by several item variants.
//!
//! Each writer leaves the markup at the indentation level it found it.

use crate::data::{
    Date,
    values::{Author, Link, Outlet, PubNote},
};
use crate::utils::markup::{Markup, escape_html};

const LINK_OPEN: &str = "<span class='label label-default pub-link'>";
const LINK_CLOSE: &str = "</span>";

/// Title as a link when the item has a URL, else a plain span.
pub fn title_html(title: &str, url: Option<&str>) -> String {
    let title = escape_html(title);
    match url {
        Some(url) => format!("<a class='pub-title' href='{url}'>{title}</a>"),
        None => format!("<span class='pub-title'>{title}</span>"),
    }
}

pub fn add_desc(desc: &str, markup: &mut Markup) {
    markup.add(format!("<span class='description'>{}</span>", escape_html(desc)));
}

pub fn add_authors(authors: &[Author], markup: &mut Markup) {
    if authors.is_empty() {
        return;
    }
    markup.scope("<ol class='authors'>", "</ol>", |m| {
        for author in authors {
            m.add(format!("<li>{}</li>", author.to_html()));
        }
    });
}

/// Authors other than the site owner, under a "Written with:" caption.
pub fn add_coauthors(authors: &[Author], markup: &mut Markup) {
    let others: Vec<&Author> = authors.iter().filter(|a| !a.is_self()).collect();
    if others.is_empty() {
        return;
    }
    markup.scope("<div class='co-authors-sec'>", "</div>", |m| {
        m.add("<span class='co-authors-desc'>Written with:</span>");
        m.scope("<ol class='authors co-authors'>", "</ol>", |m| {
            for author in others {
                m.add(format!("<li>{}</li>", author.to_html()));
            }
        });
    });
}

pub fn add_links(links: &[Link], markup: &mut Markup) {
    add_notes_and_links(&[], links, markup);
}

/// Notes first, then link pills, inside one `pub-links` span.
pub fn add_notes_and_links(notes: &[PubNote], links: &[Link], markup: &mut Markup) {
    if notes.is_empty() && links.is_empty() {
        return;
    }
    markup.scope("<span class='pub-links'>", "</span>", |m| {
        for note in notes {
            m.add(note.to_html());
        }
        for link in links {
            m.add(format!("{LINK_OPEN}{}{LINK_CLOSE}", link.to_html()));
        }
    });
}

/// Venue or source followed by the item date.
pub fn add_dest(dest: &Outlet, date: &Date, markup: &mut Markup) {
    markup.scope("<span class='venue'>", "</span>", |m| {
        m.add(dest.to_html());
        m.add(date.to_html());
    });
}

/// Date alone, for items without a venue.
pub fn add_date(date: &Date, markup: &mut Markup) {
    markup.scope("<span class='venue'>", "</span>", |m| {
        m.add(date.to_html());
    });
}
