//! Polling file watcher for `--watch`.

use std::{
    fs,
    path::{Path, PathBuf},
    time::{Duration, SystemTime},
};

pub const POLL_INTERVAL: Duration = Duration::from_millis(250);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WatchEvent {
    /// Modified, or back after having been removed.
    Changed(PathBuf),
    Removed(PathBuf),
}

#[derive(Debug)]
struct WatchedFile {
    path: PathBuf,
    modified: Option<SystemTime>,
}

#[derive(Debug)]
pub struct Watcher {
    files: Vec<WatchedFile>,
}

fn modified_time(path: &Path) -> Option<SystemTime> {
    fs::metadata(path).and_then(|m| m.modified()).ok()
}

impl Watcher {
    /// Start watching, taking the current state of each file as the baseline.
    pub fn new(paths: impl IntoIterator<Item = PathBuf>) -> Self {
        let files = paths
            .into_iter()
            .map(|path| WatchedFile {
                modified: modified_time(&path),
                path,
            })
            .collect();
        Self { files }
    }

    /// Compare every file against the last poll.
    pub fn poll(&mut self) -> Vec<WatchEvent> {
        let mut events = Vec::new();

        for file in &mut self.files {
            let current = modified_time(&file.path);
            match (file.modified, current) {
                (Some(before), Some(now)) if before != now => {
                    events.push(WatchEvent::Changed(file.path.clone()));
                }
                (None, Some(_)) => events.push(WatchEvent::Changed(file.path.clone())),
                (Some(_), None) => events.push(WatchEvent::Removed(file.path.clone())),
                _ => {}
            }
            file.modified = current;
        }

        events
    }
}
