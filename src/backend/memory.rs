//! Unbounded in-process map backend

use crate::backend::StorageBackend;
use crate::error::Result;
use std::collections::HashMap;

/// Plain hash-map storage with no capacity management and no persistence.
///
/// Infallible in practice; operations still report through `Result` to
/// satisfy the backend contract.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: HashMap<String, String>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: String) -> Result<()> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.entries.clear();
        Ok(())
    }

    fn len(&self) -> Result<usize> {
        Ok(self.entries.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_get_overwrite() {
        let mut backend = MemoryBackend::new();
        assert_eq!(backend.get("k").unwrap(), None);

        backend.put("k", "v1".to_string()).unwrap();
        assert_eq!(backend.get("k").unwrap(), Some("v1".to_string()));
        assert!(backend.has("k").unwrap());

        backend.put("k", "v2".to_string()).unwrap();
        assert_eq!(backend.get("k").unwrap(), Some("v2".to_string()));
        assert_eq!(backend.len().unwrap(), 1);
    }

    #[test]
    fn test_clear() {
        let mut backend = MemoryBackend::new();
        backend.put("a", "1".to_string()).unwrap();
        backend.put("b", "2".to_string()).unwrap();

        backend.clear().unwrap();
        assert_eq!(backend.len().unwrap(), 0);
        assert!(!backend.has("a").unwrap());
    }
}
