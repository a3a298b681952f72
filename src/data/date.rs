//! Item dates: either a full calendar date-time or a bare year.

use super::error::{DataError, Result};
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use serde_json::Value;
use std::{cmp::Ordering, fmt};

/// Sentinel accepted in place of a year, meaning "the current year".
pub const NOW_TOKEN: &str = "@now";

const EXPECTED: &str = "integer year, ISO-8601 date or @now";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Date {
    DateTime(NaiveDateTime),
    Year(i32),
}

impl Date {
    /// Build a date from a JSON value.
    ///
    /// Accepts an integer year, an ISO-8601 date or date-time string, or
    /// [`NOW_TOKEN`], which becomes `current_year`.
    pub fn from_json(field: &'static str, value: &Value, current_year: i32) -> Result<Self> {
        match value {
            Value::Number(n) => n
                .as_i64()
                .and_then(|y| i32::try_from(y).ok())
                .map(Self::Year)
                .ok_or_else(|| DataError::invalid(field, n, EXPECTED)),
            Value::String(s) if s == NOW_TOKEN => Ok(Self::Year(current_year)),
            Value::String(s) => Self::parse(s).ok_or_else(|| DataError::invalid(field, value, EXPECTED)),
            other => Err(DataError::invalid(field, other, EXPECTED)),
        }
    }

    /// Parse "YYYY-MM-DD", "YYYY-MM-DDTHH:MM:SS[.f]" (space separator also
    /// allowed) or an RFC 3339 timestamp with offset.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Some(Self::DateTime(dt.naive_local()));
        }
        for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
            if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
                return Some(Self::DateTime(dt));
            }
        }
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(Self::DateTime)
    }

    pub fn year(&self) -> i32 {
        match self {
            Self::DateTime(dt) => dt.year(),
            Self::Year(y) => *y,
        }
    }

    /// Machine-readable value for the `datetime` attribute.
    pub fn machine(&self) -> String {
        match self {
            Self::DateTime(dt) => dt.format("%Y-%m-%d").to_string(),
            Self::Year(y) => y.to_string(),
        }
    }

    /// `<time>` element for this date.
    pub fn to_html(&self) -> String {
        format!("<time datetime='{}'>{self}</time>", self.machine())
    }

    /// Bare years sort before full dates of the same year.
    fn sort_key(&self) -> (i32, Option<NaiveDateTime>) {
        match self {
            Self::DateTime(dt) => (dt.year(), Some(*dt)),
            Self::Year(y) => (*y, None),
        }
    }
}

impl Ord for Date {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl PartialOrd for Date {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DateTime(dt) => write!(f, "{}", dt.format("%b %d, %Y")),
            Self::Year(y) => write!(f, "{y}"),
        }
    }
}
