// LinkStash persistence layer
// One JSON document on disk holds the full snapshot; a background loop
// drains the latest-snapshot watch channel so mutations never block on I/O.

use std::env;
use std::path::PathBuf;

use tokio::sync::watch;

use crate::types::snapshot::Snapshot;

pub mod file_store;
pub mod seed;

use file_store::{FileStore, FileStoreTrait};

/// Name of the persisted snapshot file inside the data directory.
pub const DATA_FILE_NAME: &str = "links_data.json";

/// Returns the platform-specific data directory for LinkStash.
///
/// - **Linux**: `~/.local/share/linkstash` (or `$XDG_DATA_HOME/linkstash`)
/// - **macOS**: `~/Library/Application Support/LinkStash`
/// - **Windows**: `%APPDATA%/LinkStash`
pub fn get_data_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = env::var("XDG_DATA_HOME") {
            PathBuf::from(xdg).join("linkstash")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
            PathBuf::from(home)
                .join(".local")
                .join("share")
                .join("linkstash")
        }
    }
    #[cfg(target_os = "macos")]
    {
        let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
        PathBuf::from(home)
            .join("Library")
            .join("Application Support")
            .join("LinkStash")
    }
    #[cfg(target_os = "windows")]
    {
        let appdata = env::var("APPDATA").unwrap_or_else(|_| String::from("."));
        PathBuf::from(appdata).join("LinkStash")
    }
    #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
    {
        PathBuf::from(".").join("linkstash")
    }
}

/// Default location of the snapshot file.
pub fn default_data_file() -> PathBuf {
    get_data_dir().join(DATA_FILE_NAME)
}

/// Background persistence loop: writes the latest snapshot whenever the
/// store schedules one.
///
/// The watch channel holds only the most recent snapshot, so a burst of
/// mutations while a write is in flight collapses into exactly one more
/// write — at most one in flight, plus one pending. Failed writes are logged
/// and retried implicitly by the next mutation. The loop exits when the
/// store (the sender) is dropped, after draining any unseen snapshot.
pub async fn run_persist_loop(store: FileStore, mut rx: watch::Receiver<Snapshot>) {
    while rx.changed().await.is_ok() {
        let snapshot = rx.borrow_and_update().clone();
        let writer = store.clone();
        match tokio::task::spawn_blocking(move || writer.save(&snapshot)).await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => {
                log::warn!("snapshot save failed, will retry on next mutation: {}", e);
            }
            Err(e) => log::warn!("snapshot save task aborted: {}", e),
        }
    }
}
