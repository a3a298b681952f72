//! Fragment building orchestration.
//!
//! # Architecture
//!
//! ```text
//! build_all()
//!     │
//!     ├── load_lists() ──► Document + one Vec<Item> per configured list
//!     │                    (any bad record aborts before anything is written)
//!     │
//!     ├── check::validate_lists() ──► local file references exist
//!     │                               (only with `[build].check`)
//!     │
//!     └── render + minify + write ──► <output>/<list>.html
//! ```

use crate::{
    check,
    config::{ListConfig, SiteConfig},
    data::Document,
    items::Item,
    log,
    utils::{log::plural, markup::Markup, minify::minify},
};
use anyhow::{Context, Result};
use std::{fs, path::PathBuf};

/// A configured list with its items built from the data document.
#[derive(Debug)]
pub struct BuiltList {
    pub list: ListConfig,
    pub items: Vec<Item>,
}

impl BuiltList {
    /// Render the list as an indented HTML fragment.
    pub fn render(&self, indent: usize) -> String {
        let mut markup = Markup::new(indent);
        self.list.kind.render_list(&self.items, &mut markup);
        markup.into_string()
    }
}

/// Load the data document and build every list the config names.
pub fn load_lists(config: &SiteConfig) -> Result<Vec<BuiltList>> {
    let data = &config.build.data;
    let doc = Document::from_path(data)
        .with_context(|| format!("Failed to load {}", data.display()))?;

    config
        .lists_for(&doc)
        .into_iter()
        .map(|list| {
            let items = list
                .kind
                .build_list(&doc, &list.name)
                .with_context(|| format!("Failed to build list `{}` ({})", list.name, list.kind))?;
            Ok(BuiltList { list, items })
        })
        .collect()
}

/// Build every list and write its fragment. Returns the written paths.
pub fn build_all(config: &SiteConfig) -> Result<Vec<PathBuf>> {
    let lists = load_lists(config)?;

    if config.build.check {
        check::validate_lists(&lists, &config.build.files)?;
    }

    let output = &config.build.output;
    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create {}", output.display()))?;

    let mut written = Vec::with_capacity(lists.len());
    for built in &lists {
        let html = built.render(config.build.indent);
        let html = minify(&html, config);
        let path = output.join(built.list.output_file());
        fs::write(&path, html.as_bytes())
            .with_context(|| format!("Failed to write {}", path.display()))?;

        log!("build"; "{}: {} -> {}",
            built.list.name,
            plural(built.items.len(), "item"),
            built.list.output_file().display());
        written.push(path);
    }

    let total: usize = lists.iter().map(|built| built.items.len()).sum();
    log!("build"; "{} in {} written to {}",
        plural(total, "item"),
        plural(written.len(), "fragment"),
        output.display());
    Ok(written)
}
