//! Configuration file watcher for hot reload.
//!
//! # Design Decisions
//! - The parent directory is watched, not the file: editors that save by
//!   writing a temp file and renaming it over the original replace the
//!   inode, which would silently end a watch held on the file itself
//! - Events are filtered down to the configured file name
//! - A file that fails to load or validate is logged and skipped; the
//!   settings in force stay in force

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;

use crate::config::loader::load_config;
use crate::config::schema::RouterConfig;

/// Monitors the configuration file and pushes validated reloads.
pub struct ConfigWatcher {
    path: PathBuf,
    update_tx: mpsc::UnboundedSender<RouterConfig>,
}

impl ConfigWatcher {
    /// Create a watcher and the receiver its reloads are delivered on.
    pub fn new(path: &Path) -> (Self, mpsc::UnboundedReceiver<RouterConfig>) {
        let (update_tx, update_rx) = mpsc::unbounded_channel();
        let watcher = Self {
            path: path.to_path_buf(),
            update_tx,
        };
        (watcher, update_rx)
    }

    /// Start watching. The returned handle must be kept alive.
    pub fn run(self) -> Result<RecommendedWatcher, notify::Error> {
        let directory = watched_directory(&self.path);
        let file_name = self
            .path
            .file_name()
            .map(OsStr::to_os_string)
            .ok_or_else(|| {
                notify::Error::generic("config path has no file name").add_path(self.path.clone())
            })?;

        let reload = Reload {
            path: self.path.clone(),
            file_name,
            update_tx: self.update_tx,
        };
        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) => reload.on_event(&event),
                Err(e) => tracing::error!(error = ?e, "Config watch error"),
            },
            Config::default(),
        )?;
        watcher.watch(&directory, RecursiveMode::NonRecursive)?;

        tracing::info!(path = ?self.path, directory = ?directory, "Config watcher started");
        Ok(watcher)
    }
}

/// State owned by the notify callback.
struct Reload {
    path: PathBuf,
    file_name: OsString,
    update_tx: mpsc::UnboundedSender<RouterConfig>,
}

impl Reload {
    fn on_event(&self, event: &Event) {
        if !concerns(event, &self.file_name) {
            return;
        }

        tracing::info!(path = ?self.path, kind = ?event.kind, "Config file change detected, reloading");
        match load_config(&self.path) {
            Ok(config) => {
                let _ = self.update_tx.send(config);
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to reload config, keeping current settings");
            }
        }
    }
}

/// Directory holding `path`; `.` for a bare file name.
fn watched_directory(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Whether `event` wrote or created the file called `file_name`.
fn concerns(event: &Event, file_name: &OsStr) -> bool {
    (event.kind.is_modify() || event.kind.is_create())
        && event
            .paths
            .iter()
            .any(|path| path.file_name() == Some(file_name))
}
