//! Memoizing cache facade over a bounded LRU store or a storage backend

use crate::backend::{MemoryBackend, StorageBackend};
use crate::cache::{
    lru::OrderedStore,
    types::{CacheStats, Capacity},
};
use crate::error::{CacheError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::hash::Hash;
use tracing::{debug, info};

/// The backing store a [`MemoCache`] delegates to. Chosen at construction,
/// owned exclusively for the cache's whole lifetime.
enum Backing<K, V> {
    /// In-process store with LRU eviction.
    Bounded(OrderedStore<K, V>),

    /// Unbounded or externally-capacity-managed key-value storage. Keys and
    /// values cross this boundary in their stable textual encoding.
    External(Box<dyn StorageBackend>),
}

/// A cache for memoized function results.
///
/// Composes either an [`OrderedStore`] (bounded, LRU-evicting) or a
/// [`StorageBackend`] (unbounded in-process map, file-backed store, embedded
/// database) behind one lookup/record contract, and keeps hit/miss counters.
///
/// `lookup` and `record` are deliberately separate operations: the cache
/// never invokes user code, so what to compute on a miss belongs entirely to
/// the caller (see [`crate::memo`]).
pub struct MemoCache<K, V> {
    backing: Backing<K, V>,
    hits: u64,
    misses: u64,
}

impl<K, V> MemoCache<K, V>
where
    K: Hash + Eq + Clone + Serialize,
    V: Clone + Serialize + DeserializeOwned,
{
    /// Create a cache over an in-process LRU store holding at most
    /// `capacity` entries.
    ///
    /// Fails with [`CacheError::InvalidCapacity`] when `capacity` is zero.
    pub fn bounded(capacity: usize) -> Result<Self> {
        let store = OrderedStore::new(capacity)?;
        info!(capacity, "initialized bounded memo cache");
        Ok(Self {
            backing: Backing::Bounded(store),
            hits: 0,
            misses: 0,
        })
    }

    /// Create a cache over a storage backend. The backend owns capacity
    /// management, if any; this cache performs no eviction.
    pub fn unbounded(backend: Box<dyn StorageBackend>) -> Self {
        info!("initialized unbounded memo cache");
        Self {
            backing: Backing::External(backend),
            hits: 0,
            misses: 0,
        }
    }

    /// Create a cache over a plain unbounded in-process map.
    pub fn in_memory() -> Self {
        Self::unbounded(Box::new(MemoryBackend::new()))
    }

    /// Look up a previously recorded result.
    ///
    /// Increments the hit counter and returns the value when present;
    /// increments the miss counter and returns `None` otherwise. The counter
    /// mutation happens on every call; counts accumulate until
    /// [`MemoCache::clear`].
    pub fn lookup(&mut self, key: &K) -> Result<Option<V>> {
        let found = match &mut self.backing {
            Backing::Bounded(store) => store.get(key).cloned(),
            Backing::External(backend) => match backend.get(&encode_key(key)?)? {
                Some(raw) => Some(decode_value(&raw)?),
                None => None,
            },
        };

        match found {
            Some(value) => {
                self.hits += 1;
                debug!(hits = self.hits, "cache hit");
                Ok(Some(value))
            }
            None => {
                self.misses += 1;
                debug!(misses = self.misses, "cache miss");
                Ok(None)
            }
        }
    }

    /// Record a computed result under its call key.
    ///
    /// Overwrites any previous value for the key; never touches the hit/miss
    /// counters.
    pub fn record(&mut self, key: K, value: V) -> Result<()> {
        match &mut self.backing {
            Backing::Bounded(store) => {
                store.insert(key, value);
                Ok(())
            }
            Backing::External(backend) => {
                let encoded_key = encode_key(&key)?;
                let encoded_value = serde_json::to_string(&value)
                    .map_err(|e| CacheError::Encoding(e.to_string()))?;
                backend.put(&encoded_key, encoded_value)
            }
        }
    }

    /// Read-only statistics snapshot.
    ///
    /// Fallible because a persistent backend's entry count can fail with
    /// [`CacheError::BackendUnavailable`].
    pub fn stats(&self) -> Result<CacheStats> {
        Ok(CacheStats {
            hits: self.hits,
            misses: self.misses,
            capacity: self.capacity(),
            entries: self.len()?,
        })
    }

    /// Number of entries currently resident in the backing store.
    pub fn len(&self) -> Result<usize> {
        match &self.backing {
            Backing::Bounded(store) => Ok(store.len()),
            Backing::External(backend) => backend.len(),
        }
    }

    /// Whether the backing store holds no entries.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    /// Nominal capacity of the backing store.
    pub fn capacity(&self) -> Capacity {
        match &self.backing {
            Backing::Bounded(store) => Capacity::Bounded(store.capacity()),
            Backing::External(_) => Capacity::Unbounded,
        }
    }

    /// Empty the backing store and reset both counters to zero.
    pub fn clear(&mut self) -> Result<()> {
        match &mut self.backing {
            Backing::Bounded(store) => store.clear(),
            Backing::External(backend) => backend.clear()?,
        }
        self.hits = 0;
        self.misses = 0;
        info!("cleared memo cache");
        Ok(())
    }
}

/// Encode a call key to the stable textual form external backends require.
///
/// serde_json is deterministic and order-sensitive for sequences and tuples.
/// Map-like keys must be canonicalized by the caller (use `BTreeMap`, not
/// `HashMap`) so equal contents encode equally regardless of insertion order.
fn encode_key<K: Serialize>(key: &K) -> Result<String> {
    serde_json::to_string(key).map_err(|e| CacheError::Encoding(e.to_string()))
}

/// Decode a stored value from its textual form. A value that no longer
/// decodes is surfaced as an error, never silently treated as a miss.
fn decode_value<V: DeserializeOwned>(raw: &str) -> Result<V> {
    serde_json::from_str(raw).map_err(|e| CacheError::Encoding(e.to_string()))
}
