//! Core type definitions for the cache system

use serde::{Deserialize, Serialize};
use std::fmt;

/// Nominal capacity of a cache.
///
/// Bounded caches evict once the limit is reached; unbounded caches grow with
/// their backing store (which may manage its own space externally).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Capacity {
    /// At most this many resident entries.
    Bounded(usize),

    /// No limit enforced by this cache.
    Unbounded,
}

impl Capacity {
    /// Entry limit, if one is enforced.
    pub fn limit(&self) -> Option<usize> {
        match self {
            Capacity::Bounded(limit) => Some(*limit),
            Capacity::Unbounded => None,
        }
    }

    /// Whether this cache evicts on overflow.
    pub fn is_bounded(&self) -> bool {
        matches!(self, Capacity::Bounded(_))
    }
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capacity::Bounded(limit) => write!(f, "{}", limit),
            Capacity::Unbounded => write!(f, "unbounded"),
        }
    }
}

/// Statistics snapshot for cache performance monitoring
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheStats {
    /// Total number of cache hits
    pub hits: u64,

    /// Total number of cache misses
    pub misses: u64,

    /// Nominal capacity of the cache
    pub capacity: Capacity,

    /// Number of entries currently resident
    pub entries: usize,
}

impl CacheStats {
    /// Calculate cache hit rate as a percentage
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            (self.hits as f64 / total as f64) * 100.0
        }
    }

    /// Calculate miss rate as a percentage
    pub fn miss_rate(&self) -> f64 {
        100.0 - self.hit_rate()
    }

    /// Total lookups observed since construction or the last clear
    pub fn total_lookups(&self) -> u64 {
        self.hits + self.misses
    }
}

impl fmt::Display for CacheStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CacheStats {{ hits: {}, misses: {}, hit_rate: {:.2}%, capacity: {}, entries: {} }}",
            self.hits,
            self.misses,
            self.hit_rate(),
            self.capacity,
            self.entries
        )
    }
}
