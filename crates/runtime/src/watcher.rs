//! # Tuning Hot-Reloading
//!
//! Watches a tuning file while the drive loop runs. Every time the file is
//! written, it is parsed and validated on the watcher thread and the new
//! profile is sent over a channel. The drive loop drains the channel between
//! ticks, so a reload never lands in the middle of one.
//!
//! Invalid files are logged and skipped; the kart keeps its current tuning.

use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, Sender};

use anyhow::{Context, Result};
use kart::KartTuningProfile;
use notify::{Event, RecommendedWatcher, RecursiveMode, Watcher as NotifyWatcher};
use tracing::{error, info, warn};

use crate::config;

/// Handler for tuning file events.
struct TuningChangeHandler {
    target: PathBuf,
    tx: Sender<KartTuningProfile>,
}

impl TuningChangeHandler {
    fn handle_event(&self, event: &Event) {
        if !(event.kind.is_modify() || event.kind.is_create()) {
            return;
        }
        if event.paths.iter().any(|path| self.is_tuning_file(path)) {
            self.reload();
        }
    }

    fn is_tuning_file(&self, path: &Path) -> bool {
        path.file_name() == self.target.file_name()
    }

    fn reload(&self) {
        match config::load_tuning(&self.target) {
            Ok(tuning) => {
                info!(path = %self.target.display(), "tuning file changed");
                if self.tx.send(tuning).is_err() {
                    warn!("drive loop is gone, dropping reloaded tuning");
                }
            }
            Err(e) => error!("Ignoring invalid tuning file: {e:#}"),
        }
    }
}

/// Start watching `path`.
///
/// The returned watcher must be kept alive for as long as reloads are
/// wanted. The receiver yields every successfully reloaded profile.
///
/// # Errors
///
/// Fails when the watcher cannot be created or the file's directory cannot
/// be watched.
pub fn watch_tuning(path: &Path) -> Result<(RecommendedWatcher, Receiver<KartTuningProfile>)> {
    let (tx, rx) = mpsc::channel();
    let handler = TuningChangeHandler {
        target: path.to_path_buf(),
        tx,
    };

    let mut watcher = notify::recommended_watcher(move |res: notify::Result<Event>| match res {
        Ok(event) => handler.handle_event(&event),
        Err(e) => error!("Error watching tuning file: {e:?}"),
    })?;

    // Editors often replace the file, so watch the directory.
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    watcher
        .watch(dir, RecursiveMode::NonRecursive)
        .with_context(|| format!("watching {}", dir.display()))?;
    info!(path = %path.display(), "tuning watcher started");
    Ok((watcher, rx))
}
