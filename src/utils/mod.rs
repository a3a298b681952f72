//! Shared utilities: terminal logging, indented markup, minification.

pub mod log;
pub mod markup;
pub mod minify;
