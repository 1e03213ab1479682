//! Memoization adapter and call-key encoding
//!
//! The adapter sits between user code and the cache facade: it derives a
//! call key from the arguments, asks the cache first, and only computes on a
//! miss. A failed computation propagates unmodified and is never recorded,
//! so the next identical call retries.

use crate::cache::{CacheStats, MemoCache};
use crate::error::{CacheError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::hash::Hash;

/// Contract for turning a call's arguments into a stable cache key.
///
/// Encodings must be deterministic and order-sensitive: equal argument
/// tuples produce equal keys, and unequal argument tuples produce, with
/// overwhelming probability, unequal keys. Keyword-style (named) arguments
/// must compare by contents, not insertion order: canonicalize them before
/// encoding.
pub trait CallKeyEncoder<A: ?Sized> {
    /// The key type produced by this encoder.
    type Key;

    fn encode(&self, args: &A) -> Result<Self::Key>;
}

/// Encodes arguments to the stable textual form persistent backends store.
///
/// serde_json is deterministic for scalars, tuples and sequences, and
/// positional order is preserved. Map-like argument sets canonicalize via
/// `BTreeMap` (sorted keys); a `HashMap` would leak iteration order into the
/// key and break key equality for equal contents.
#[derive(Debug, Default)]
pub struct JsonKeyEncoder;

impl<A: Serialize> CallKeyEncoder<A> for JsonKeyEncoder {
    type Key = String;

    fn encode(&self, args: &A) -> Result<String> {
        serde_json::to_string(args).map_err(|e| CacheError::Encoding(e.to_string()))
    }
}

/// Memoize one call through `cache`: look the arguments up, and on a miss
/// run `compute`, record its result, and return it.
///
/// `compute` receives the cache again so recursive functions can memoize
/// their inner calls through the same instance:
///
/// ```rust
/// use memocache::{memoize, MemoCache, Result};
///
/// fn fib(cache: &mut MemoCache<u64, u64>, n: u64) -> Result<u64> {
///     memoize(cache, n, |cache, &n| {
///         if n < 2 {
///             return Ok(n);
///         }
///         Ok(fib(cache, n - 1)? + fib(cache, n - 2)?)
///     })
/// }
///
/// # fn main() -> Result<()> {
/// let mut cache = MemoCache::bounded(32)?;
/// assert_eq!(fib(&mut cache, 10)?, 55);
/// # Ok(())
/// # }
/// ```
///
/// An `Err` from `compute` propagates unmodified and is **not** recorded;
/// a failed computation is retried on the next identical call.
pub fn memoize<K, V, E, F>(
    cache: &mut MemoCache<K, V>,
    args: K,
    compute: F,
) -> std::result::Result<V, E>
where
    K: Hash + Eq + Clone + Serialize,
    V: Clone + Serialize + DeserializeOwned,
    E: From<CacheError>,
    F: FnOnce(&mut MemoCache<K, V>, &K) -> std::result::Result<V, E>,
{
    if let Some(hit) = cache.lookup(&args)? {
        return Ok(hit);
    }
    let value = compute(cache, &args)?;
    cache.record(args, value.clone())?;
    Ok(value)
}

/// A callable wrapped with its own memo cache.
///
/// The wrapper owns one [`MemoCache`] for its whole lifetime and consults it
/// before every invocation of the wrapped function. The argument value is
/// the call key, so arguments must be hashable, comparable and clonable.
pub struct Memoized<A, V, F> {
    cache: MemoCache<A, V>,
    func: F,
}

impl<A, V, F> Memoized<A, V, F>
where
    A: Hash + Eq + Clone + Serialize,
    V: Clone + Serialize + DeserializeOwned,
    F: FnMut(&A) -> V,
{
    /// Wrap `func` with a bounded cache holding at most `capacity` results.
    pub fn new(func: F, capacity: usize) -> Result<Self> {
        Ok(Self {
            cache: MemoCache::bounded(capacity)?,
            func,
        })
    }

    /// Wrap `func` over an existing cache, bounded or not.
    pub fn with_cache(func: F, cache: MemoCache<A, V>) -> Self {
        Self { cache, func }
    }

    /// Invoke the wrapped function through the cache.
    ///
    /// On a hit the stored result is returned and the function is not
    /// called; on a miss the function runs and its result is recorded.
    pub fn call(&mut self, args: A) -> Result<V> {
        if let Some(hit) = self.cache.lookup(&args)? {
            return Ok(hit);
        }
        let value = (self.func)(&args);
        self.cache.record(args, value.clone())?;
        Ok(value)
    }

    /// The underlying cache.
    pub fn cache(&self) -> &MemoCache<A, V> {
        &self.cache
    }

    /// Statistics snapshot of the underlying cache.
    pub fn stats(&self) -> Result<CacheStats> {
        self.cache.stats()
    }

    /// Drop all memoized results and reset the statistics.
    pub fn clear(&mut self) -> Result<()> {
        self.cache.clear()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::collections::BTreeMap;

    #[test]
    fn test_json_key_is_deterministic() {
        let encoder = JsonKeyEncoder;
        let a = encoder.encode(&(1u32, "x")).unwrap();
        let b = encoder.encode(&(1u32, "x")).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_json_key_is_positional_order_sensitive() {
        let encoder = JsonKeyEncoder;
        let ab = encoder.encode(&(1u32, 2u32)).unwrap();
        let ba = encoder.encode(&(2u32, 1u32)).unwrap();
        assert_ne!(ab, ba);
    }

    #[test]
    fn test_json_key_canonicalizes_named_arguments() {
        let encoder = JsonKeyEncoder;

        let mut first = BTreeMap::new();
        first.insert("x", 1);
        first.insert("y", 2);

        let mut second = BTreeMap::new();
        second.insert("y", 2);
        second.insert("x", 1);

        assert_eq!(
            encoder.encode(&first).unwrap(),
            encoder.encode(&second).unwrap()
        );
    }

    #[test]
    fn test_memoize_computes_once() {
        let mut cache: MemoCache<u64, u64> = MemoCache::bounded(8).unwrap();
        let calls = Cell::new(0u32);

        for _ in 0..3 {
            let doubled: Result<u64> = memoize(&mut cache, 21, |_, &n| {
                calls.set(calls.get() + 1);
                Ok(n * 2)
            });
            assert_eq!(doubled.unwrap(), 42);
        }

        assert_eq!(calls.get(), 1);
        let stats = cache.stats().unwrap();
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.hits, 2);
    }

    #[derive(Debug)]
    enum TestError {
        Cache(CacheError),
        Boom,
    }

    impl From<CacheError> for TestError {
        fn from(e: CacheError) -> Self {
            TestError::Cache(e)
        }
    }

    #[test]
    fn test_memoize_does_not_record_failures() {
        let mut cache: MemoCache<u32, u32> = MemoCache::bounded(8).unwrap();
        let calls = Cell::new(0u32);

        let failed: std::result::Result<u32, TestError> = memoize(&mut cache, 1, |_, _| {
            calls.set(calls.get() + 1);
            Err(TestError::Boom)
        });
        assert!(matches!(failed, Err(TestError::Boom)));
        assert_eq!(cache.len().unwrap(), 0);

        // The failure was not memoized: the next identical call retries.
        let ok: std::result::Result<u32, TestError> = memoize(&mut cache, 1, |_, _| {
            calls.set(calls.get() + 1);
            Ok(7)
        });
        assert_eq!(ok.unwrap(), 7);
        assert_eq!(calls.get(), 2);
        assert_eq!(cache.len().unwrap(), 1);
    }

    #[test]
    fn test_memoized_wrapper() {
        let calls = Cell::new(0u32);
        let mut squared = Memoized::new(
            |&n: &u64| {
                calls.set(calls.get() + 1);
                n * n
            },
            4,
        )
        .unwrap();

        assert_eq!(squared.call(3).unwrap(), 9);
        assert_eq!(squared.call(3).unwrap(), 9);
        assert_eq!(calls.get(), 1);

        let stats = squared.stats().unwrap();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.entries, 1);
    }

    #[test]
    fn test_memoized_clear_forces_recompute() {
        let calls = Cell::new(0u32);
        let mut wrapped = Memoized::new(
            |&n: &u32| {
                calls.set(calls.get() + 1);
                n + 1
            },
            4,
        )
        .unwrap();

        wrapped.call(1).unwrap();
        wrapped.clear().unwrap();
        wrapped.call(1).unwrap();

        assert_eq!(calls.get(), 2);
        assert_eq!(wrapped.stats().unwrap().hits, 0);
    }

    #[test]
    fn test_memoized_over_unbounded_cache() {
        let mut wrapped = Memoized::with_cache(|&n: &u32| n * 10, MemoCache::in_memory());
        assert_eq!(wrapped.call(4).unwrap(), 40);
        assert_eq!(wrapped.call(4).unwrap(), 40);
        assert_eq!(wrapped.cache().capacity(), crate::cache::Capacity::Unbounded);
    }
}
