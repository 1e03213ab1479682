//! Storage backends for unbounded or externally-managed caches
//!
//! A backend is a plain key-value capability: no ordering, no capacity, no
//! eviction. Keys and values are strings (the stable textual encoding of a
//! call key and its result) so that one namespace per cache instance maps
//! cleanly onto a file or a database table.
//!
//! Backends may fail on any operation with
//! [`CacheError::BackendUnavailable`](crate::CacheError::BackendUnavailable);
//! the cache facade surfaces those errors to its caller rather than
//! swallowing them.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub mod file;
pub mod memory;
pub mod sqlite;

pub use file::FileBackend;
pub use memory::MemoryBackend;
pub use sqlite::SqliteBackend;

/// Capability set required of any concrete storage backend.
pub trait StorageBackend {
    /// Whether a key is present.
    fn has(&self, key: &str) -> Result<bool> {
        Ok(self.get(key)?.is_some())
    }

    /// Fetch the value stored under a key.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store a value under a key, overwriting any previous value.
    fn put(&mut self, key: &str, value: String) -> Result<()>;

    /// Remove every entry.
    fn clear(&mut self) -> Result<()>;

    /// Number of entries currently stored.
    fn len(&self) -> Result<usize>;
}

/// Selects a concrete backend variant and where its persisted state lives.
///
/// Two cache instances MAY name the same path; writes then race with
/// last-write-wins semantics and no cross-instance consistency guarantee.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BackendConfig {
    /// Unbounded in-process map. No persisted state.
    Memory,

    /// JSON file-backed store.
    File { path: PathBuf },

    /// Embedded SQLite database.
    Sqlite { path: PathBuf },
}

impl BackendConfig {
    /// Open the configured backend, acquiring its persistent resources.
    ///
    /// Resources are held for the backend's lifetime and released on drop,
    /// on every exit path.
    pub fn open(&self) -> Result<Box<dyn StorageBackend>> {
        match self {
            BackendConfig::Memory => Ok(Box::new(MemoryBackend::new())),
            BackendConfig::File { path } => Ok(Box::new(FileBackend::open(path)?)),
            BackendConfig::Sqlite { path } => Ok(Box::new(SqliteBackend::open(path)?)),
        }
    }
}
