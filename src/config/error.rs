//! `folio.toml` loading and validation errors.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config `{}`", .0.display())]
    Io(PathBuf, #[source] std::io::Error),

    #[error("folio.toml is not valid: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid folio.toml setting {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_io_error_names_path() {
        let err = ConfigError::Io(
            PathBuf::from("site/folio.toml"),
            Error::new(ErrorKind::NotFound, "file not found"),
        );
        assert_eq!(format!("{err}"), "cannot read config `site/folio.toml`");
    }

    #[test]
    fn test_toml_error_carries_location() {
        let err: ConfigError = toml::from_str::<toml::Value>("[build")
            .unwrap_err()
            .into();
        let display = format!("{err}");
        assert!(display.starts_with("folio.toml is not valid: "));
        assert!(display.contains("line 1"));
    }

    #[test]
    fn test_validation_message() {
        let err = ConfigError::Validation("[build.indent] must be at most 8".into());
        assert_eq!(
            format!("{err}"),
            "invalid folio.toml setting [build.indent] must be at most 8"
        );
    }
}
