//! Cache Module
//!
//! Provides a bounded in-memory cache with LRU eviction and lazy TTL expiration.

mod bounded;
mod entry;
mod lru;
mod store;


use std::hash::Hash;
use std::time::Duration;

// Re-export public types
pub use bounded::BoundedCache;
pub use entry::CacheEntry;
pub use lru::{RecencyList, SlotId};
pub use store::CacheStore;

// == Cache Trait ==
/// Operations shared by thread-safe cache implementations.
///
/// None of these fail: a miss is `None`, removing an absent key does
/// nothing, and a full cache evicts instead of rejecting.
pub trait Cache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    /// Maximum number of entries, fixed at construction.
    fn capacity(&self) -> usize;

    /// Current number of entries, including expired ones not yet accessed.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes every entry.
    fn clear(&self);

    /// Inserts or updates a permanent entry and marks it most recently used.
    fn insert(&self, key: K, value: V);

    /// Inserts or updates an entry that expires `ttl` from now.
    /// Any previous expiry is replaced, never extended.
    fn insert_with_ttl(&self, key: K, value: V, ttl: Duration);

    /// Returns a copy of the live value for `key` and marks it most recently used.
    /// An expired entry is removed and reported as a miss.
    fn get(&self, key: &K) -> Option<V>;

    /// Removes the entry for `key` if present.
    fn remove(&self, key: &K);
}
