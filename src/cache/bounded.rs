//! Bounded Cache Module
//!
//! Thread-safe cache: a `CacheStore` behind one mutex. Every operation,
//! reads included, holds the lock for its whole duration since a hit
//! reorders the recency list.

use std::hash::Hash;
use std::time::Duration;

use parking_lot::Mutex;
use tracing::debug;

use crate::cache::{Cache, CacheStore};
use crate::error::Result;

// == Bounded Cache ==
/// In-memory LRU cache with optional per-entry TTL, shareable across threads.
///
/// Values are cloned out on read, so callers never hold references into the
/// cache between calls.
///
/// # Example
/// ```
/// use bounded_cache::{BoundedCache, Cache};
///
/// let cache = BoundedCache::new(2);
/// cache.insert("a", 1);
/// cache.insert("b", 2);
/// cache.get(&"a");
/// cache.insert("c", 3);
///
/// assert_eq!(cache.get(&"b"), None);
/// assert_eq!(cache.get(&"a"), Some(1));
/// ```
#[derive(Debug)]
pub struct BoundedCache<K, V> {
    capacity: usize,
    store: Mutex<CacheStore<K, V>>,
}

impl<K, V> BoundedCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    /// Creates an empty cache holding at most `capacity` entries.
    ///
    /// A capacity of zero yields a cache that stores nothing.
    pub fn new(capacity: usize) -> Self {
        debug!(capacity, "creating bounded cache");
        Self {
            capacity,
            store: Mutex::new(CacheStore::new(capacity)),
        }
    }

    /// Snapshot of keys from most to least recently used. Does not refresh recency.
    pub fn keys(&self) -> Vec<K> {
        self.store.lock().keys()
    }

    /// Returns true if `key` is present and not expired. Does not refresh recency.
    pub fn contains(&self, key: &K) -> bool {
        self.store.lock().contains(key)
    }

    /// Scans the internal structures for consistency.
    pub fn validate(&self) -> Result<()> {
        self.store.lock().validate()
    }
}

impl<K, V> Cache<K, V> for BoundedCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    fn capacity(&self) -> usize {
        // Fixed at construction, no lock needed
        self.capacity
    }

    fn len(&self) -> usize {
        self.store.lock().len()
    }

    fn clear(&self) {
        let mut store = self.store.lock();
        let dropped = store.len();
        store.clear();
        debug!(dropped, "cleared cache");
    }

    fn insert(&self, key: K, value: V) {
        self.store.lock().set(key, value, None);
    }

    fn insert_with_ttl(&self, key: K, value: V, ttl: Duration) {
        self.store.lock().set(key, value, Some(ttl));
    }

    fn get(&self, key: &K) -> Option<V> {
        self.store.lock().get(key).cloned()
    }

    fn remove(&self, key: &K) {
        self.store.lock().delete(key);
    }
}
