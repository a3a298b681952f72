//! Indentation-tracking markup buffer.
//!
//! Every fragment writer appends whole lines through [`Markup::add`] and
//! moves the indentation with [`Markup::up`] / [`Markup::down`]. Container
//! elements should go through [`Markup::scope`], which keeps the open and
//! close tags balanced no matter what the body writes.
//!
//! ```ignore
//! let mut markup = Markup::new(2);
//! markup.scope("<ul>", "</ul>", |m| {
//!     m.add("<li>one</li>");
//! });
//! assert_eq!(markup.as_str(), "<ul>\n  <li>one</li>\n</ul>\n");
//! ```

/// Text buffer that prefixes each added line with the current indentation.
#[derive(Debug, Clone)]
pub struct Markup {
    buf: String,
    level: usize,
    width: usize,
}

impl Markup {
    /// Create an empty buffer using `width` spaces per indentation level.
    pub fn new(width: usize) -> Self {
        Self {
            buf: String::with_capacity(4096),
            level: 0,
            width,
        }
    }

    /// Append one line at the current indentation level.
    pub fn add(&mut self, line: impl AsRef<str>) -> &mut Self {
        for _ in 0..self.level * self.width {
            self.buf.push(' ');
        }
        self.buf.push_str(line.as_ref());
        self.buf.push('\n');
        self
    }

    /// Increase the indentation level.
    pub fn up(&mut self) -> &mut Self {
        self.level += 1;
        self
    }

    /// Decrease the indentation level. Never goes below zero.
    #[allow(unused)]
    pub fn down(&mut self) -> &mut Self {
        debug_assert!(self.level > 0, "unbalanced Markup::down");
        self.level = self.level.saturating_sub(1);
        self
    }

    /// Write `open`, run `body` one level deeper, then write `close`.
    pub fn scope(
        &mut self,
        open: impl AsRef<str>,
        close: impl AsRef<str>,
        body: impl FnOnce(&mut Self),
    ) -> &mut Self {
        let level = self.level;
        self.add(open).up();
        body(self);
        self.level = level;
        self.add(close)
    }

    /// Current indentation level.
    #[cfg(test)]
    pub const fn level(&self) -> usize {
        self.level
    }

    #[cfg(test)]
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn into_string(self) -> String {
        self.buf
    }
}

/// Escape text for use in HTML element content or quoted attribute values.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_without_indent() {
        let mut markup = Markup::new(2);
        markup.add("<p>").add("</p>");
        assert_eq!(markup.as_str(), "<p>\n</p>\n");
    }

    #[test]
    fn test_up_down_indentation() {
        let mut markup = Markup::new(4);
        markup.add("<ul>").up();
        markup.add("<li>a</li>");
        markup.down().add("</ul>");
        assert_eq!(markup.as_str(), "<ul>\n    <li>a</li>\n</ul>\n");
        assert_eq!(markup.level(), 0);
    }

    #[test]
    fn test_scope_restores_level() {
        let mut markup = Markup::new(2);
        markup.scope("<ol>", "</ol>", |m| {
            // an unbalanced body must not leak into the closing tag
            m.add("<li>").up();
        });
        assert_eq!(markup.level(), 0);
        assert_eq!(markup.as_str().lines().last(), Some("</ol>"));
    }

    #[test]
    fn test_nested_scopes() {
        let mut markup = Markup::new(2);
        markup.scope("<ul>", "</ul>", |m| {
            m.scope("<li>", "</li>", |m| {
                m.add("x");
            });
        });
        assert_eq!(markup.into_string(), "<ul>\n  <li>\n    x\n  </li>\n</ul>\n");
    }

    #[test]
    fn test_zero_width() {
        let mut markup = Markup::new(0);
        markup.scope("<a>", "</a>", |m| {
            m.add("b");
        });
        assert_eq!(markup.as_str(), "<a>\nb\n</a>\n");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("hello"), "hello");
        assert_eq!(escape_html("<b>"), "&lt;b&gt;");
        assert_eq!(escape_html("a & b"), "a &amp; b");
        assert_eq!(escape_html(r#"say "hi""#), "say &quot;hi&quot;");
        assert_eq!(escape_html("it's"), "it&#x27;s");
    }

    #[test]
    fn test_escape_html_unicode() {
        assert_eq!(escape_html("Zoë & René"), "Zoë &amp; René");
    }
}
