//! Cache Store Module
//!
//! Unsynchronized cache engine combining a key index with the LRU recency
//! list and lazy TTL expiration. `BoundedCache` wraps it in a mutex.

use std::collections::HashMap;
use std::hash::Hash;
use std::time::{Duration, Instant};

use tracing::{debug, trace};

use crate::cache::lru::{RecencyList, SlotId};
use crate::cache::CacheEntry;
use crate::error::{CacheError, Result};

// == Cache Store ==
/// Bounded key-value storage with LRU eviction and TTL support.
///
/// Every key in `index` points at exactly one node of `order`, and every
/// node of `order` is pointed at by its own key.
#[derive(Debug)]
pub struct CacheStore<K, V> {
    /// Key to recency-list slot
    index: HashMap<K, SlotId>,
    /// Entries ordered by recency of use
    order: RecencyList<CacheEntry<K, V>>,
    /// Maximum number of entries allowed
    capacity: usize,
}

impl<K, V> CacheStore<K, V>
where
    K: Eq + Hash + Clone,
{
    // == Constructor ==
    /// Creates an empty store holding at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self {
            index: HashMap::with_capacity(capacity),
            order: RecencyList::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    // == Length ==
    /// Returns the number of stored entries, expired-but-untouched ones included.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    // == Set ==
    /// Stores a key-value pair with optional TTL.
    ///
    /// If the key already exists, the value is overwritten, the TTL is reset
    /// and the entry becomes most recently used. Otherwise the least recently
    /// used entry is evicted first when the store is full.
    ///
    /// With a capacity of zero nothing is ever stored.
    pub fn set(&mut self, key: K, value: V, ttl: Option<Duration>) {
        if let Some(&slot) = self.index.get(&key) {
            if let Some(entry) = self.order.get_mut(slot) {
                entry.refresh(value, ttl);
            }
            self.order.move_to_front(slot);
            return;
        }

        if self.capacity == 0 {
            trace!("capacity is zero, dropping insert");
            return;
        }

        if self.order.len() >= self.capacity {
            self.evict_oldest();
        }

        let slot = self
            .order
            .push_front(CacheEntry::new(key.clone(), value, ttl));
        self.index.insert(key, slot);
    }

    // == Get ==
    /// Retrieves a value by key.
    ///
    /// A live entry becomes most recently used. An expired entry is removed
    /// and reported as a miss.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        let slot = *self.index.get(key)?;

        let expired = self.order.get(slot)?.is_expired_at(Instant::now());
        if expired {
            self.index.remove(key);
            self.order.remove(slot);
            debug!(remaining = self.order.len(), "removed expired entry on access");
            return None;
        }

        self.order.move_to_front(slot);
        self.order.get(slot).map(|entry| &entry.value)
    }

    // == Contains ==
    /// Returns true if `key` is present and live, without touching recency.
    pub fn contains(&self, key: &K) -> bool {
        let now = Instant::now();
        self.index
            .get(key)
            .and_then(|&slot| self.order.get(slot))
            .is_some_and(|entry| !entry.is_expired_at(now))
    }

    // == Delete ==
    /// Removes an entry by key, returning its value. Absent keys are a no-op.
    pub fn delete(&mut self, key: &K) -> Option<V> {
        let slot = self.index.remove(key)?;
        self.order.remove(slot).map(|entry| entry.value)
    }

    // == Clear ==
    /// Drops every entry. Capacity is unchanged.
    pub fn clear(&mut self) {
        self.index.clear();
        self.order.clear();
    }

    // == Keys ==
    /// Returns stored keys from most to least recently used.
    pub fn keys(&self) -> Vec<K> {
        self.order.iter().map(|entry| entry.key.clone()).collect()
    }

    // == Evict Oldest ==
    /// Evicts the least recently used entry regardless of its expiry.
    ///
    /// Does nothing on an empty store.
    fn evict_oldest(&mut self) {
        if let Some(entry) = self.order.pop_back() {
            self.index.remove(&entry.key);
            debug!(capacity = self.capacity, "evicted least recently used entry");
        }
    }

    // == Validate ==
    /// Checks that the index and the recency list describe the same entries
    /// and that the store is within capacity.
    pub fn validate(&self) -> Result<()> {
        let order = self.order.validate()?;

        if order.len() > self.capacity {
            return Err(CacheError::Corrupted(format!(
                "{} entries exceed capacity {}",
                order.len(),
                self.capacity
            )));
        }
        if order.len() != self.index.len() {
            return Err(CacheError::Corrupted(format!(
                "index holds {} keys but recency list holds {} entries",
                self.index.len(),
                order.len()
            )));
        }
        for slot in order {
            let indexed = self
                .order
                .get(slot)
                .and_then(|entry| self.index.get(&entry.key));
            if indexed != Some(&slot) {
                return Err(CacheError::Corrupted(format!(
                    "slot {} is not indexed by its own key",
                    slot.index()
                )));
            }
        }
        Ok(())
    }
}
