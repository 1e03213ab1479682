//! JSON file-backed storage

use crate::backend::StorageBackend;
use crate::error::{CacheError, Result};
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Key-value storage persisted as one JSON object per cache instance.
///
/// The whole map is loaded at open time (a missing file starts empty) and
/// rewritten on every mutation, so a crash between operations never leaves a
/// half-written entry. Suited to the modest entry counts of per-function
/// memoization; a cache with heavy write traffic belongs on
/// [`SqliteBackend`](crate::backend::SqliteBackend) instead.
pub struct FileBackend {
    path: PathBuf,
    entries: HashMap<String, String>,
}

impl FileBackend {
    /// Open the store at `path`, loading any previously persisted entries.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let entries = match fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content).map_err(|e| {
                CacheError::BackendUnavailable(format!(
                    "corrupt store file {}: {}",
                    path.display(),
                    e
                ))
            })?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => {
                return Err(CacheError::BackendUnavailable(format!(
                    "cannot read {}: {}",
                    path.display(),
                    e
                )))
            }
        };

        info!(path = %path.display(), entries = entries.len(), "opened file-backed store");
        Ok(Self { path, entries })
    }

    /// Path of the persisted state.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<()> {
        let content = serde_json::to_string(&self.entries)
            .map_err(|e| CacheError::Encoding(e.to_string()))?;
        fs::write(&self.path, content).map_err(|e| {
            CacheError::BackendUnavailable(format!("cannot write {}: {}", self.path.display(), e))
        })?;
        debug!(entries = self.entries.len(), "persisted file-backed store");
        Ok(())
    }
}

impl StorageBackend for FileBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: String) -> Result<()> {
        self.entries.insert(key.to_string(), value);
        self.persist()
    }

    fn clear(&mut self) -> Result<()> {
        self.entries.clear();
        self.persist()
    }

    fn len(&self) -> Result<usize> {
        Ok(self.entries.len())
    }
}
