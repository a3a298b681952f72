//! Folio - renders portfolio content lists from a JSON document into HTML fragments.

mod build;
mod check;
mod cli;
mod config;
mod data;
mod init;
mod items;
mod utils;
mod watch;

use anyhow::{Result, bail};
use build::build_all;
use check::check_all;
use clap::Parser;
use cli::{Cli, Commands};
use config::SiteConfig;
use init::new_project;
use std::path::Path;
use watch::watch_for_changes_blocking;

fn main() -> Result<()> {
    let cli: &'static Cli = Box::leak(Box::new(Cli::parse()));
    let config = load_config(cli)?;

    match &cli.command {
        Commands::Init { name } => new_project(&config, name.is_some()),
        Commands::Build { .. } => build_all(&config).map(|_| ()),
        Commands::Check => check_all(&config).map(|_| ()),
        Commands::Watch { .. } => {
            if let Err(err) = build_all(&config) {
                log!("error"; "{err:#}");
            }
            watch_for_changes_blocking(cli, config)
        }
    }
}

/// Load and validate configuration from CLI arguments
fn load_config(cli: &'static Cli) -> Result<SiteConfig> {
    let root = cli.root.as_deref().unwrap_or(Path::new("./"));
    let config_path = match &cli.command {
        Commands::Init { name: Some(name) } => root.join(name).join(&cli.config),
        _ => root.join(&cli.config),
    };

    let mut config = if config_path.exists() {
        SiteConfig::from_path(&config_path)?
    } else {
        SiteConfig::default()
    };
    config.update_with_cli(cli);

    // Validate config state based on command
    let config_exists = config.config_path.exists();
    match (cli.is_init(), config_exists) {
        (true, true) => {
            bail!("Config file already exists. Remove it manually or init in a different path.")
        }
        (false, false) => bail!("Config file not found."),
        _ => {}
    }

    if !cli.is_init() {
        config.validate()?;
    }

    Ok(config)
}
