//! Fragment minification, driven by `[build].minify`.

use crate::config::SiteConfig;
use std::borrow::Cow;

/// Minify a rendered fragment if the config asks for it.
///
/// Returns `Cow::Borrowed` if minify disabled, `Cow::Owned` if minified.
pub fn minify<'a>(fragment: &'a str, config: &SiteConfig) -> Cow<'a, str> {
    if !config.build.minify {
        return Cow::Borrowed(fragment);
    }
    let bytes = minify_html::minify(fragment.as_bytes(), &fragment_cfg());
    Cow::Owned(String::from_utf8_lossy(&bytes).into_owned())
}

/// Fragments are spliced into other templates, so nothing may be dropped
/// that the surrounding page relies on.
fn fragment_cfg() -> minify_html::Cfg {
    let mut cfg = minify_html::Cfg::new();
    cfg.keep_closing_tags = true;
    cfg.keep_html_and_head_opening_tags = true;
    cfg.keep_comments = false;
    cfg
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_minify(enabled: bool) -> SiteConfig {
        let mut config = SiteConfig::default();
        config.build.minify = enabled;
        config
    }

    const FRAGMENT: &str = "<ul class='publications'>\n  <li>\n    <span class='pub-title'>Hello</span>\n  </li>\n</ul>\n";

    #[test]
    fn test_minify_disabled_borrows() {
        let result = minify(FRAGMENT, &config_with_minify(false));
        assert!(matches!(result, Cow::Borrowed(_)));
        assert_eq!(result, FRAGMENT);
    }

    #[test]
    fn test_minify_enabled() {
        let result = minify(FRAGMENT, &config_with_minify(true));

        assert!(result.len() < FRAGMENT.len());
        assert!(!result.contains("\n  "));
        assert!(result.contains("Hello"));
        assert!(result.contains("</li>"));
    }
}
