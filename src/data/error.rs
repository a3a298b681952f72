//! Data document error types.

use super::abbrs::AbbrCategory;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading the data document, building items from it,
/// or validating the items' file references.
///
/// All of them are fatal: the caller aborts instead of rendering a partial
/// list.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    #[error("no list named `{0}` in data document")]
    MissingList(String),

    #[error("unknown {category} abbreviation `{token}`")]
    Lookup {
        category: AbbrCategory,
        token: String,
    },

    #[error("invalid value for `{field}`: {value} ({expected})")]
    InvalidValue {
        field: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("`{field}` references a missing file: `{}`", .path.display())]
    MissingFile { field: &'static str, path: PathBuf },

    #[error("IO error when reading `{}`", .0.display())]
    Io(PathBuf, #[source] std::io::Error),

    #[error("malformed data document")]
    Parse(#[from] serde_json::Error),
}

impl DataError {
    pub(crate) fn invalid(
        field: &'static str,
        value: impl ToString,
        expected: &'static str,
    ) -> Self {
        Self::InvalidValue {
            field,
            value: value.to_string(),
            expected,
        }
    }
}

pub type Result<T> = std::result::Result<T, DataError>;
