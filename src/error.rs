//! Error types for cache operations
//!
//! This module defines the error taxonomy for the memocache library. Every
//! failure is reported to the immediate caller; the cache never degrades into
//! a silent recompute-only mode.

use thiserror::Error;

/// Main error type for cache operations
#[derive(Error, Debug)]
pub enum CacheError {
    /// A bounded store was requested with a capacity that cannot hold any
    /// entry. Construction-time only; never produced later.
    #[error("invalid capacity {0}: a bounded store must hold at least one entry")]
    InvalidCapacity(usize),

    /// A persistent backend could not be opened, read, or written. Not
    /// retried internally; retry policy belongs to the caller.
    #[error("storage backend unavailable: {0}")]
    BackendUnavailable(String),

    /// A call key or cached value could not be encoded to (or decoded from)
    /// its stable textual form.
    #[error("encoding failure: {0}")]
    Encoding(String),
}

/// Result type alias for cache operations
pub type Result<T> = std::result::Result<T, CacheError>;
