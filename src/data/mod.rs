//! Data document model.
//!
//! Loads the JSON data file, exposes its content lists as raw records, and
//! resolves `@`-prefixed abbreviations against the shared `abbrs` tables.
//!
//! # Modules
//!
//! | Module     | Purpose                                           |
//! |------------|---------------------------------------------------|
//! | `document` | Root document: lists + abbreviation tables        |
//! | `abbrs`    | Lookup tables and `@token` resolution             |
//! | `values`   | Author, Outlet (source/venue), Link, note, type   |
//! | `date`     | Full date or bare year, with `@now`               |
//! | `fields`   | Typed accessors over raw item records             |
//! | `error`    | `DataError`                                       |

pub mod abbrs;
pub mod date;
pub mod document;
pub mod error;
pub mod fields;
pub mod values;

pub use date::Date;
pub use document::Document;
pub use error::DataError;
