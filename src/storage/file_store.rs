// LinkStash snapshot file store
// Serializes the full snapshot to a single JSON document with `links` and
// `categories` arrays. Writes are whole-file overwrites; loads are tolerant
// of missing or corrupt files.

use std::fs;
use std::path::{Path, PathBuf};

use crate::types::errors::StorageError;
use crate::types::snapshot::Snapshot;

/// Trait defining the snapshot file store interface.
pub trait FileStoreTrait {
    fn save(&self, snapshot: &Snapshot) -> Result<(), StorageError>;
    fn load(&self) -> Option<Snapshot>;
    fn data_path(&self) -> &Path;
}

/// Snapshot store backed by one JSON file on disk.
#[derive(Clone)]
pub struct FileStore {
    data_path: PathBuf,
}

impl FileStore {
    /// Creates a new `FileStore`.
    ///
    /// If `path_override` is `Some`, uses that path for the data file.
    /// Otherwise, uses the platform data directory with `links_data.json`.
    pub fn new(path_override: Option<PathBuf>) -> Self {
        let data_path = path_override.unwrap_or_else(super::default_data_file);
        Self { data_path }
    }
}

impl FileStoreTrait for FileStore {
    /// Writes the snapshot as one pretty-printed JSON document.
    ///
    /// Creates parent directories if they don't exist.
    fn save(&self, snapshot: &Snapshot) -> Result<(), StorageError> {
        if let Some(parent) = self.data_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                StorageError::Io(format!("Failed to create data directory: {}", e))
            })?;
        }

        let json = serde_json::to_string_pretty(snapshot).map_err(|e| {
            StorageError::Serialization(format!("Failed to serialize snapshot: {}", e))
        })?;

        fs::write(&self.data_path, json)
            .map_err(|e| StorageError::Io(format!("Failed to write data file: {}", e)))?;

        Ok(())
    }

    /// Reads the snapshot from disk.
    ///
    /// Returns `None` when the file is absent, unreadable, or malformed —
    /// the caller falls back to seed data in every case. Missing top-level
    /// keys and missing per-record optional fields take their serde
    /// defaults, so older or partially written files still load.
    fn load(&self) -> Option<Snapshot> {
        if !self.data_path.exists() {
            return None;
        }

        let content = match fs::read_to_string(&self.data_path) {
            Ok(content) => content,
            Err(e) => {
                log::warn!("failed to read {}: {}", self.data_path.display(), e);
                return None;
            }
        };

        match serde_json::from_str(&content) {
            Ok(snapshot) => Some(snapshot),
            Err(e) => {
                log::warn!("malformed data file {}: {}", self.data_path.display(), e);
                None
            }
        }
    }

    fn data_path(&self) -> &Path {
        &self.data_path
    }
}
