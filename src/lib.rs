//! # memocache
//!
//! Memoization of pure, deterministic function calls: given a function and
//! an argument tuple, return a previously computed result instead of
//! recomputing it, trading storage for compute.
//!
//! ## Features
//!
//! - Bounded in-process caching with O(1) least-recently-used eviction
//! - Pluggable storage backends: in-process map, JSON file, embedded SQLite
//! - Hit/miss accounting with a read-only statistics snapshot
//! - A memoization adapter that supports recursive functions
//! - Detailed error handling: construction, backend and encoding failures
//!   all surface to the caller
//!
//! ## Memoizing a function
//!
//! ```rust
//! use memocache::Memoized;
//!
//! # fn main() -> memocache::Result<()> {
//! let mut word_len = Memoized::new(|s: &String| s.len() as u64, 64)?;
//!
//! assert_eq!(word_len.call("memoization".to_string())?, 11);
//! assert_eq!(word_len.call("memoization".to_string())?, 11); // cache hit
//!
//! let stats = word_len.stats()?;
//! assert_eq!((stats.hits, stats.misses), (1, 1));
//! # Ok(())
//! # }
//! ```
//!
//! ## Recursive memoization
//!
//! ```rust
//! use memocache::{memoize, MemoCache, Result};
//!
//! fn fib(cache: &mut MemoCache<u64, u64>, n: u64) -> Result<u64> {
//!     memoize(cache, n, |cache, &n| {
//!         if n < 2 {
//!             return Ok(n);
//!         }
//!         Ok(fib(cache, n - 1)? + fib(cache, n - 2)?)
//!     })
//! }
//!
//! # fn main() -> Result<()> {
//! let mut cache = MemoCache::bounded(32)?;
//! assert_eq!(fib(&mut cache, 30)?, 832040);
//! # Ok(())
//! # }
//! ```
//!
//! ## Persistent results
//!
//! ```no_run
//! use memocache::{BackendConfig, MemoCache};
//! use std::path::PathBuf;
//!
//! # fn main() -> memocache::Result<()> {
//! let backend = BackendConfig::Sqlite {
//!     path: PathBuf::from("fib.sqlite"),
//! }
//! .open()?;
//!
//! let mut cache: MemoCache<u64, u64> = MemoCache::unbounded(backend);
//! cache.record(40, 102334155)?;
//! assert_eq!(cache.lookup(&40)?, Some(102334155));
//! # Ok(())
//! # }
//! ```
//!
//! ## Concurrency
//!
//! The crate is single-threaded by design: all mutating operations take
//! `&mut self`, so the borrow checker enforces exclusive access per
//! instance. A multi-threaded host wraps each cache in its own lock.

pub mod backend;
pub mod cache;
pub mod error;
pub mod memo;

// Re-export main types for convenience
pub use backend::{BackendConfig, FileBackend, MemoryBackend, SqliteBackend, StorageBackend};
pub use cache::{CacheStats, Capacity, MemoCache, OrderedStore};
pub use error::{CacheError, Result};
pub use memo::{memoize, CallKeyEncoder, JsonKeyEncoder, Memoized};
