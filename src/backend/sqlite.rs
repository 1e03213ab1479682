//! Embedded SQLite storage

use crate::backend::StorageBackend;
use crate::error::{CacheError, Result};
use rusqlite::{params, Connection};
use std::path::Path;
use tracing::info;

/// Key-value storage in an embedded SQLite database, one `entries` table per
/// cache instance.
///
/// The connection is opened at construction and held for the backend's
/// lifetime; it is closed when the backend is dropped.
pub struct SqliteBackend {
    conn: Connection,
}

impl SqliteBackend {
    /// Open (creating if necessary) the database at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let conn = Connection::open(path).map_err(|e| {
            CacheError::BackendUnavailable(format!(
                "cannot open database {}: {}",
                path.display(),
                e
            ))
        })?;
        info!(path = %path.display(), "opened sqlite-backed store");
        Self::init_schema(conn)
    }

    /// Open a private in-memory database. Useful for tests and for callers
    /// that want SQLite semantics without persistence.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(db_err)?;
        Self::init_schema(conn)
    }

    fn init_schema(conn: Connection) -> Result<Self> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS entries (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
            [],
        )
        .map_err(db_err)?;
        Ok(Self { conn })
    }
}

impl StorageBackend for SqliteBackend {
    fn has(&self, key: &str) -> Result<bool> {
        match self
            .conn
            .query_row("SELECT 1 FROM entries WHERE key = ?1", params![key], |_| {
                Ok(())
            }) {
            Ok(()) => Ok(true),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(false),
            Err(e) => Err(db_err(e)),
        }
    }

    fn get(&self, key: &str) -> Result<Option<String>> {
        match self.conn.query_row(
            "SELECT value FROM entries WHERE key = ?1",
            params![key],
            |row| row.get(0),
        ) {
            Ok(value) => Ok(Some(value)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(db_err(e)),
        }
    }

    fn put(&mut self, key: &str, value: String) -> Result<()> {
        self.conn
            .execute(
                "INSERT OR REPLACE INTO entries (key, value) VALUES (?1, ?2)",
                params![key, value],
            )
            .map_err(db_err)?;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.conn.execute("DELETE FROM entries", []).map_err(db_err)?;
        Ok(())
    }

    fn len(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM entries", [], |row| row.get(0))
            .map_err(db_err)?;
        Ok(count as usize)
    }
}

fn db_err(e: rusqlite::Error) -> CacheError {
    CacheError::BackendUnavailable(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_get_overwrite() {
        let mut backend = SqliteBackend::open_in_memory().unwrap();
        assert_eq!(backend.get("k").unwrap(), None);
        assert!(!backend.has("k").unwrap());

        backend.put("k", "v1".to_string()).unwrap();
        assert_eq!(backend.get("k").unwrap(), Some("v1".to_string()));
        assert!(backend.has("k").unwrap());

        backend.put("k", "v2".to_string()).unwrap();
        assert_eq!(backend.get("k").unwrap(), Some("v2".to_string()));
        assert_eq!(backend.len().unwrap(), 1);
    }

    #[test]
    fn test_clear() {
        let mut backend = SqliteBackend::open_in_memory().unwrap();
        backend.put("a", "1".to_string()).unwrap();
        backend.put("b", "2".to_string()).unwrap();

        backend.clear().unwrap();
        assert_eq!(backend.len().unwrap(), 0);
    }

    #[test]
    fn test_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.sqlite");

        let mut backend = SqliteBackend::open(&path).unwrap();
        backend.put("k", "v".to_string()).unwrap();
        drop(backend);

        let reopened = SqliteBackend::open(&path).unwrap();
        assert_eq!(reopened.get("k").unwrap(), Some("v".to_string()));
    }

    #[test]
    fn test_unopenable_path_surfaces_backend_error() {
        let result = SqliteBackend::open("/nonexistent-memocache-dir/store.sqlite");
        assert!(matches!(result, Err(CacheError::BackendUnavailable(_))));
    }
}
