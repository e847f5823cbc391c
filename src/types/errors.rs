use std::fmt;

// === StorageError ===

/// Errors related to snapshot persistence.
///
/// These never reach mutation callers: a failed load falls back to seed data
/// and a failed save is retried on the next mutation. They exist so the
/// persistence layer and its tests can tell the two failure classes apart.
#[derive(Debug)]
pub enum StorageError {
    /// An I/O error occurred while reading or writing the data file.
    Io(String),
    /// Failed to serialize or deserialize the snapshot document.
    Serialization(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Io(msg) => write!(f, "Storage I/O error: {}", msg),
            StorageError::Serialization(msg) => {
                write!(f, "Storage serialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for StorageError {}
