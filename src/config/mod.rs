//! Site configuration management for `folio.toml`.
//!
//! # Sections
//!
//! | Section     | Purpose                                         |
//! |-------------|-------------------------------------------------|
//! | `[build]`   | Data file, output directory, minify, indent     |
//! | `[[lists]]` | Document lists to render and their item kinds   |
//!
//! # Example
//!
//! ```toml
//! [build]
//! data = "data.json"
//! output = "_includes"
//! files = "static"
//!
//! [[lists]]
//! name = "publications"
//! kind = "publication"
//!
//! [[lists]]
//! name = "service"
//! kind = "involvement"
//! output = "service-rows.html"
//! ```
//!
//! Without any `[[lists]]`, every conventionally named list found in the
//! data document is rendered (`publications`, `talks`, `press`, ...).

mod build;
pub mod defaults;
mod error;
mod lists;

pub use lists::ListConfig;

use build::BuildConfig;
use error::ConfigError;

use crate::cli::{Cli, Commands};
use crate::data::Document;
use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

/// Largest accepted `[build].indent`.
const MAX_INDENT: usize = 8;

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing folio.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// CLI arguments reference
    #[serde(skip)]
    pub cli: Option<&'static Cli>,

    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Build settings
    #[serde(default)]
    pub build: BuildConfig,

    /// Lists to render; empty means "every conventional list present"
    #[serde(default)]
    pub lists: Vec<ListConfig>,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content).map_err(ConfigError::from)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        self.build.root.as_deref().unwrap_or(Path::new("./"))
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.build.root = Some(path.to_path_buf())
    }

    /// Lists to render for `doc`: the configured ones, or the conventional
    /// ones the document actually contains.
    pub fn lists_for(&self, doc: &Document) -> Vec<ListConfig> {
        if self.lists.is_empty() {
            ListConfig::defaults_for(doc)
        } else {
            self.lists.clone()
        }
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &'static Cli) {
        self.cli = Some(cli);

        let base = cli
            .root
            .as_ref()
            .cloned()
            .unwrap_or_else(|| self.get_root().to_owned());
        let root = match &cli.command {
            Commands::Init { name: Some(name) } => base.join(name),
            _ => base,
        };

        Self::update_option(&mut self.build.data, cli.data.as_ref());
        Self::update_option(&mut self.build.output, cli.output.as_ref());

        if let Commands::Build { build_args } | Commands::Watch { build_args } = &cli.command {
            Self::update_option(&mut self.build.minify, build_args.minify.as_ref());
            Self::update_option(&mut self.build.check, build_args.check.as_ref());
            Self::update_option(&mut self.build.indent, build_args.indent.as_ref());
        }

        self.update_path_with_root(&root, &cli.config);
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Update all paths relative to root directory and normalize to absolute paths
    fn update_path_with_root(&mut self, root: &Path, config_file: &Path) {
        let root = Self::normalize_path(root);
        self.set_root(&root);

        self.config_path = Self::normalize_path(&root.join(config_file));
        self.build.data = Self::normalize_path(&root.join(&self.build.data));
        self.build.output = Self::normalize_path(&root.join(&self.build.output));
        self.build.files = Self::normalize_path(&root.join(&self.build.files));
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            // For non-existent paths, manually make them absolute
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Validate configuration before building or checking
    pub fn validate(&self) -> Result<()> {
        if !self.config_path.exists() {
            bail!("Config file not found");
        }

        if !self.build.data.is_file() {
            bail!(ConfigError::Validation(format!(
                "[build.data] `{}` not found",
                self.build.data.display()
            )));
        }

        if self.build.indent > MAX_INDENT {
            bail!(ConfigError::Validation(format!(
                "[build.indent] must be at most {MAX_INDENT}"
            )));
        }

        let mut names = HashSet::new();
        let mut outputs = HashSet::new();
        for list in &self.lists {
            if !names.insert(list.name.as_str()) {
                bail!(ConfigError::Validation(format!(
                    "[[lists]] `{}` is listed more than once",
                    list.name
                )));
            }
            if !outputs.insert(list.output_file()) {
                bail!(ConfigError::Validation(format!(
                    "[[lists]] output `{}` is used more than once",
                    list.output_file().display()
                )));
            }
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
