//! File system watcher for live rebuilds.
//!
//! Watches the data document and the config file. Directories are watched
//! non-recursively (the parents of those two files) so editors that save
//! through rename are still seen, and every other path is ignored.
//!
//! ```text
//! notify events ──► Debouncer (300ms) ──► handle_changes()
//!                                              │
//!                     config changed ──► reload config, full build
//!                     data changed   ──► full build
//! ```

use crate::{build::build_all, cli::Cli, config::SiteConfig, load_config, log};
use anyhow::{Context, Result};
use notify::{Event, EventKind, RecursiveMode, Watcher};
use rustc_hash::FxHashSet;
use std::{
    path::{Path, PathBuf},
    sync::mpsc::{self, RecvTimeoutError},
    time::{Duration, Instant},
};

const DEBOUNCE_MS: u64 = 300;
const REBUILD_COOLDOWN_MS: u64 = 800;

/// Check if path is a temp/backup file (editor artifacts).
fn is_temp_file(path: &Path) -> bool {
    let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");

    matches!(ext, "bck" | "bak" | "backup" | "swp" | "swo" | "tmp")
        || name.ends_with('~')
        || name.starts_with('.')
}

/// Batches rapid file events with debouncing and rebuild cooldown.
struct Debouncer {
    pending: FxHashSet<PathBuf>,
    last_event: Option<Instant>,
    last_rebuild: Option<Instant>,
}

impl Debouncer {
    fn new() -> Self {
        Self {
            pending: FxHashSet::default(),
            last_event: None,
            last_rebuild: None,
        }
    }

    fn in_cooldown(&self) -> bool {
        self.last_rebuild
            .is_some_and(|t| t.elapsed() < Duration::from_millis(REBUILD_COOLDOWN_MS))
    }

    fn add(&mut self, event: Event) {
        for path in event.paths {
            if !is_temp_file(&path) {
                self.pending.insert(path);
            }
        }
        self.last_event = Some(Instant::now());
    }

    fn ready(&self) -> bool {
        !self.pending.is_empty()
            && self
                .last_event
                .is_some_and(|t| t.elapsed() >= Duration::from_millis(DEBOUNCE_MS))
    }

    fn take(&mut self) -> Vec<PathBuf> {
        self.last_event = None;
        self.pending.drain().collect()
    }

    fn mark_rebuild(&mut self) {
        self.last_rebuild = Some(Instant::now());
    }

    fn timeout(&self) -> Duration {
        if self.pending.is_empty() {
            Duration::from_secs(60)
        } else {
            Duration::from_millis(DEBOUNCE_MS)
        }
    }
}

/// What a batch of changed paths asks for.
#[derive(Debug, PartialEq, Eq)]
enum Change {
    Config,
    Data,
    None,
}

/// Compare event paths against the watched files, tolerating symlinked
/// temp dirs by canonicalizing when the file still exists.
fn same_file(event_path: &Path, target: &Path) -> bool {
    event_path == target
        || event_path
            .canonicalize()
            .is_ok_and(|p| p == target)
}

fn classify(paths: &[PathBuf], config: &SiteConfig) -> Change {
    if paths.iter().any(|p| same_file(p, &config.config_path)) {
        Change::Config
    } else if paths.iter().any(|p| same_file(p, &config.build.data)) {
        Change::Data
    } else {
        Change::None
    }
}

/// Attempt a full rebuild, logging errors on failure.
/// Returns true if successful (for cooldown tracking).
fn try_rebuild(config: &SiteConfig, reason: &str) -> bool {
    log!("watch"; "{reason}");
    match build_all(config) {
        Ok(_) => true,
        Err(err) => {
            log!("error"; "{err:#}");
            false
        }
    }
}

/// Directories to watch for `config`: the parents of the data and config files.
fn watch_dirs(config: &SiteConfig) -> FxHashSet<PathBuf> {
    [&config.build.data, &config.config_path]
        .into_iter()
        .filter_map(|path| path.parent())
        .map(Path::to_path_buf)
        .collect()
}

fn is_relevant(event: &Event) -> bool {
    matches!(
        event.kind,
        EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_)
    )
}

/// Start blocking file watcher with debouncing and live rebuild.
///
/// Errors from rebuilds are logged and the loop keeps going; only watcher
/// setup failures end it.
pub fn watch_for_changes_blocking(cli: &'static Cli, initial: SiteConfig) -> Result<()> {
    let mut config = initial;

    let (tx, rx) = mpsc::channel();
    let mut watcher = notify::recommended_watcher(tx).context("Failed to create file watcher")?;

    let mut watched = watch_dirs(&config);
    for dir in &watched {
        watcher
            .watch(dir, RecursiveMode::NonRecursive)
            .with_context(|| format!("Failed to watch {}", dir.display()))?;
    }
    log!("watch"; "watching {} and {}",
        config.build.data.display(),
        config.config_path.display());

    let mut debouncer = Debouncer::new();

    loop {
        match rx.recv_timeout(debouncer.timeout()) {
            Ok(Ok(event)) if is_relevant(&event) && !debouncer.in_cooldown() => {
                debouncer.add(event);
            }
            Ok(Err(e)) => log!("watch"; "error: {e}"),
            Err(RecvTimeoutError::Timeout) if debouncer.ready() => {
                let paths = debouncer.take();
                let rebuilt = match classify(&paths, &config) {
                    Change::Config => match load_config(cli) {
                        Ok(reloaded) => {
                            config = reloaded;
                            for dir in watch_dirs(&config).difference(&watched) {
                                if let Err(e) = watcher.watch(dir, RecursiveMode::NonRecursive) {
                                    log!("watch"; "failed to watch {}: {e}", dir.display());
                                }
                            }
                            watched.extend(watch_dirs(&config));
                            try_rebuild(&config, "config changed, rebuilding...")
                        }
                        Err(err) => {
                            log!("error"; "config reload failed: {err:#}");
                            false
                        }
                    },
                    Change::Data => try_rebuild(&config, "data changed, rebuilding..."),
                    Change::None => false,
                };
                if rebuilt {
                    debouncer.mark_rebuild();
                }
            }
            Err(RecvTimeoutError::Disconnected) => break,
            _ => {}
        }
    }

    Ok(())
}
