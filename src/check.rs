//! Local file reference validation.

use crate::{
    build::{BuiltList, load_lists},
    config::SiteConfig,
    log,
    utils::log::plural,
};
use anyhow::{Context, Result};
use std::path::Path;

/// Check every item of every list against `files`. Returns the item count.
///
/// Stops at the first missing file.
pub fn validate_lists(lists: &[BuiltList], files: &Path) -> Result<usize> {
    let mut checked = 0;
    for built in lists {
        for item in &built.items {
            item.validate(files).with_context(|| {
                format!("Invalid {} item in list `{}`", item.kind(), built.list.name)
            })?;
        }
        checked += built.items.len();
    }
    Ok(checked)
}

/// Load, build and validate every list without writing anything.
pub fn check_all(config: &SiteConfig) -> Result<usize> {
    let lists = load_lists(config)?;
    let checked = validate_lists(&lists, &config.build.files)?;

    log!("check"; "{} in {} ok",
        plural(checked, "item"),
        plural(lists.len(), "list"));
    Ok(checked)
}
