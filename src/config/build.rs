//! `[build]` section configuration.
//!
//! Contains paths and output settings for rendering fragments.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[build]` section in folio.toml - rendering pipeline configuration.
///
/// # Example
/// ```toml
/// [build]
/// data = "data.json"      # Data document
/// output = "_includes"    # Fragment output directory
/// files = "static"        # Root for local file references
/// minify = false
/// indent = 2
/// check = true
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Project root directory (usually set via CLI `--root`).
    #[serde(default = "defaults::build::root")]
    #[educe(Default = defaults::build::root())]
    pub root: Option<PathBuf>,

    /// JSON data document holding every content list.
    #[serde(default = "defaults::build::data")]
    #[educe(Default = defaults::build::data())]
    pub data: PathBuf,

    /// Directory the HTML fragments are written to.
    #[serde(default = "defaults::build::output")]
    #[educe(Default = defaults::build::output())]
    pub output: PathBuf,

    /// Directory local file references (`papers/a.pdf`) are resolved against.
    #[serde(default = "defaults::build::files")]
    #[educe(Default = defaults::build::files())]
    pub files: PathBuf,

    /// Minify fragments (removes indentation and newlines).
    #[serde(default = "defaults::r#false")]
    #[educe(Default = false)]
    pub minify: bool,

    /// Spaces per indentation level.
    #[serde(default = "defaults::build::indent")]
    #[educe(Default = defaults::build::indent())]
    pub indent: usize,

    /// Check local file references before writing anything.
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub check: bool,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;
    use std::path::PathBuf;

    #[test]
    fn test_build_config_defaults() {
        let config: SiteConfig = toml::from_str("").unwrap();

        assert_eq!(config.build.root, None);
        assert_eq!(config.build.data, PathBuf::from("data.json"));
        assert_eq!(config.build.output, PathBuf::from("_includes"));
        assert_eq!(config.build.files, PathBuf::from("."));
        assert!(!config.build.minify);
        assert_eq!(config.build.indent, 2);
        assert!(config.build.check);
    }

    #[test]
    fn test_build_config_full() {
        let config = r#"
            [build]
            data = "site/data.json"
            output = "partials"
            files = "static"
            minify = true
            indent = 4
            check = false
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.build.data, PathBuf::from("site/data.json"));
        assert_eq!(config.build.output, PathBuf::from("partials"));
        assert_eq!(config.build.files, PathBuf::from("static"));
        assert!(config.build.minify);
        assert_eq!(config.build.indent, 4);
        assert!(!config.build.check);
    }

    #[test]
    fn test_unknown_field_rejection() {
        let config = r#"
            [build]
            content = "content"
        "#;
        let result: Result<SiteConfig, _> = toml::from_str(config);

        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("unknown field"));
    }
}
