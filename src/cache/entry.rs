//! Cache Entry Module
//!
//! Defines a single cached association with optional expiration.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// Represents a single cache entry with its key, value and expiry deadline.
#[derive(Debug, Clone)]
pub struct CacheEntry<K, V> {
    /// Key the entry is indexed under
    pub key: K,
    /// The stored value
    pub value: V,
    /// Expiration deadline, None = never expires
    pub expires_at: Option<Instant>,
}

impl<K, V> CacheEntry<K, V> {
    // == Constructor ==
    /// Creates a new cache entry with an optional TTL measured from now.
    pub fn new(key: K, value: V, ttl: Option<Duration>) -> Self {
        Self {
            key,
            value,
            expires_at: ttl.and_then(deadline_after),
        }
    }

    // == Refresh ==
    /// Replaces the value and resets the expiry; a previous TTL never carries over.
    pub fn refresh(&mut self, value: V, ttl: Option<Duration>) {
        self.value = value;
        self.expires_at = ttl.and_then(deadline_after);
    }

    // == Is Expired ==
    /// Checks if the entry has expired at `now`.
    ///
    /// Boundary condition: the entry is still live at exactly its deadline
    /// and expired once `now` passes it.
    pub fn is_expired_at(&self, now: Instant) -> bool {
        match self.expires_at {
            Some(expires) => now > expires,
            None => false,
        }
    }
}

// == Utility Functions ==
/// Deadline `ttl` from now; None when the addition overflows the clock,
/// which is treated as "never expires".
///
/// A zero TTL gets a deadline just behind the clock so it is already expired.
fn deadline_after(ttl: Duration) -> Option<Instant> {
    let now = Instant::now();
    if ttl.is_zero() {
        return Some(now.checked_sub(Duration::from_nanos(1)).unwrap_or(now));
    }
    now.checked_add(ttl)
}
