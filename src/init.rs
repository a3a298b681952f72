//! Project initialization module.
//!
//! Creates `folio.toml` and a starter data document.

use crate::config::SiteConfig;
use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

/// Default config filename
const CONFIG_FILE: &str = "folio.toml";

/// Starter data document: every abbreviation table and one list of each
/// kind, all of which render and check cleanly.
const STARTER_DATA: &str = r#"{
  "abbrs": {
    "authors": {
      "@me": "Your Name",
      "@ada": "Ada Lovelace"
    },
    "venues": {
      "@pets": {"title": "Privacy Enhancing Technologies Symposium", "url": "https://petsymposium.org"}
    },
    "sources": {
      "@blog": {"title": "Project Blog", "url": "https://example.com/blog"}
    },
    "types": {
      "@invited": {"label": "invited"}
    },
    "positions": {
      "@pc": "Program Committee"
    }
  },
  "publications": {
    "items": [
      {
        "title": "An Example Paper",
        "year": 2024,
        "authors": ["@me", "@ada"],
        "venue": "@pets",
        "url": "https://example.com/paper.pdf"
      }
    ]
  },
  "blog": {
    "items": [
      {
        "title": "Announcing the paper",
        "date": "2024-07-15",
        "source": "@blog",
        "url": "https://example.com/blog/paper",
        "authors": ["@me", "@ada"]
      }
    ]
  },
  "talks": {
    "items": [
      {
        "title": "Talking about the paper",
        "date": "2024-07-16T10:30:00",
        "type": "@invited",
        "venue": "@pets"
      }
    ]
  },
  "press": {
    "items": [
      {
        "title": "Researchers look at the paper",
        "date": "2024-08-01",
        "source": "Example News",
        "type": "news",
        "url": "https://news.example.com/paper"
      }
    ]
  },
  "writing": {
    "items": [
      {
        "title": "Notes on the paper",
        "year": 2024,
        "authors": ["@me"],
        "desc": "A longer write-up for a general audience."
      }
    ]
  },
  "code": {
    "items": [
      {
        "title": "example-tool",
        "year": "@now",
        "url": "https://github.com/example/example-tool",
        "desc": "The artifact behind the paper."
      }
    ]
  },
  "involvement": {
    "items": [
      {"year": "@now", "venue": "@pets", "position": "@pc"}
    ]
  }
}
"#;

/// Create a new project with default config and starter data
pub fn new_project(config: &SiteConfig, has_name: bool) -> Result<()> {
    let root = config.get_root();

    if !has_name && !is_dir_empty(root)? {
        bail!(
            "Current directory is not empty. Use `folio init <NAME>` to create in a subdirectory."
        );
    }

    fs::create_dir_all(root).with_context(|| format!("Failed to create {}", root.display()))?;
    init_default_config(root)?;
    init_starter_data(&config.build.data)?;

    Ok(())
}

/// Check if a directory is completely empty
fn is_dir_empty(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(true);
    }
    Ok(fs::read_dir(path)?.next().is_none())
}

/// Write default configuration file
fn init_default_config(root: &Path) -> Result<()> {
    let content = toml::to_string_pretty(&SiteConfig::default())?;
    fs::write(root.join(CONFIG_FILE), content)?;
    Ok(())
}

/// Write the starter data document unless one is already there
fn init_starter_data(path: &Path) -> Result<()> {
    if path.exists() {
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, STARTER_DATA).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
