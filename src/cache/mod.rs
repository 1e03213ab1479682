//! # Memoization Cache Core
//!
//! This module implements the cache engine behind the memoization adapter:
//! a bounded, order-tracking key-value store with least-recently-used
//! eviction, and a facade that exposes the same lookup/record contract over
//! either that store or an external storage backend.
//!
//! ## Features
//!
//! - **LRU Eviction**: O(1) recency tracking and eviction for bounded caches
//! - **Pluggable Storage**: the same bookkeeping over an in-process map or a
//!   persistent backend (see [`crate::backend`])
//! - **Hit/Miss Accounting**: monotonic counters with a read-only snapshot
//!
//! ## Example
//!
//! ```rust
//! use memocache::cache::MemoCache;
//!
//! # fn example() -> memocache::Result<()> {
//! let mut cache: MemoCache<u64, u64> = MemoCache::bounded(128)?;
//!
//! // A miss, then a recorded result, then a hit.
//! assert!(cache.lookup(&42)?.is_none());
//! cache.record(42, 4242)?;
//! assert_eq!(cache.lookup(&42)?, Some(4242));
//!
//! let stats = cache.stats()?;
//! assert_eq!((stats.hits, stats.misses), (1, 1));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod lru;
pub mod store;
pub mod types;

pub use lru::OrderedStore;
pub use store::MemoCache;
pub use types::{CacheStats, Capacity};
