//! Bounded Cache - A thread-safe in-memory key-value cache
//!
//! Provides LRU eviction under a fixed capacity and lazily checked
//! per-entry TTL expiration.

pub mod cache;
pub mod config;
pub mod error;

pub use cache::{BoundedCache, Cache};
pub use config::Config;
pub use error::{CacheError, Result};
