//! Integration Tests for the public cache API
//!
//! Exercises end-to-end scenarios, TTL expiry against the real clock and
//! concurrent access from many threads.

use bounded_cache::{BoundedCache, Cache};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Barrier;
use std::thread::{self, sleep};
use std::time::Duration;

// == Scenario Tests ==

#[test]
fn test_update_then_evict_scenario() {
    let cache = BoundedCache::new(2);

    cache.insert("a", 1);
    cache.insert("b", 2);
    cache.insert("b", 4);

    assert_eq!(cache.get(&"a"), Some(1));
    assert_eq!(cache.get(&"b"), Some(4));
    assert_eq!(cache.len(), 2);

    // "a" was read before "b", so it is the oldest now
    cache.insert("c", 3);

    assert_eq!(cache.get(&"a"), None);
    assert_eq!(cache.get(&"b"), Some(4));
    assert_eq!(cache.get(&"c"), Some(3));
}

#[test]
fn test_ttl_scenario() {
    let cache = BoundedCache::new(2);

    cache.insert_with_ttl("a", 1, Duration::from_secs(1));
    cache.insert_with_ttl("b", 2, Duration::from_secs(5));

    sleep(Duration::from_secs(2));

    assert_eq!(cache.get(&"a"), None);
    assert_eq!(cache.get(&"b"), Some(2));
}

#[test]
fn test_ttl_eviction_and_expiry_mix() {
    let cache = BoundedCache::new(2);

    cache.insert_with_ttl("key1", "value1", Duration::from_millis(200));
    cache.insert_with_ttl("key2", "value2", Duration::from_millis(600));
    cache.insert_with_ttl("key2", "value4", Duration::from_secs(5));

    // key1 is the oldest and is pushed out
    cache.insert_with_ttl("key5", "value4", Duration::from_millis(200));
    assert_eq!(cache.get(&"key1"), None);
    assert_eq!(cache.get(&"key5"), Some("value4"));
    assert_eq!(cache.get(&"key2"), Some("value4"));

    sleep(Duration::from_millis(400));

    assert_eq!(cache.get(&"key5"), None);
    // key2's later TTL replaced the 600ms one
    sleep(Duration::from_millis(400));
    assert_eq!(cache.get(&"key2"), Some("value4"));
}

// == TTL Tests ==

#[test]
fn test_expired_get_removes_entry() {
    let cache = BoundedCache::new(4);

    cache.insert_with_ttl("k", 1, Duration::from_millis(50));
    cache.insert("other", 2);
    assert_eq!(cache.get(&"k"), Some(1));

    sleep(Duration::from_millis(100));

    // Still counted until touched
    assert_eq!(cache.len(), 2);
    assert_eq!(cache.get(&"k"), None);
    assert_eq!(cache.len(), 1);

    // Already gone
    cache.remove(&"k");
    assert_eq!(cache.len(), 1);
    cache.validate().unwrap();
}

#[test]
fn test_insert_makes_ttl_entry_permanent() {
    let cache = BoundedCache::new(2);

    cache.insert_with_ttl("k", 1, Duration::from_millis(50));
    cache.insert("k", 2);

    sleep(Duration::from_millis(100));

    assert_eq!(cache.get(&"k"), Some(2));
}

// == Clear / Remove Tests ==

#[test]
fn test_clear() {
    let cache = BoundedCache::new(3);
    cache.insert("a", 1);
    cache.insert_with_ttl("b", 2, Duration::from_secs(60));
    cache.insert("c", 3);

    cache.clear();

    assert_eq!(cache.len(), 0);
    assert_eq!(cache.capacity(), 3);
    for key in ["a", "b", "c"] {
        assert_eq!(cache.get(&key), None);
    }

    cache.clear();
    assert_eq!(cache.len(), 0);
}

#[test]
fn test_remove_from_empty_and_unknown() {
    let cache: BoundedCache<String, u32> = BoundedCache::new(2);
    cache.remove(&"nothing".to_string());
    assert_eq!(cache.len(), 0);

    cache.insert("a".to_string(), 1);
    cache.remove(&"never-inserted".to_string());
    assert_eq!(cache.len(), 1);

    cache.remove(&"a".to_string());
    assert_eq!(cache.len(), 0);
    assert_eq!(cache.get(&"a".to_string()), None);
}

// == Edge Cases ==

#[test]
fn test_zero_capacity_stores_nothing() {
    let cache = BoundedCache::new(0);

    cache.insert("a", 1);
    cache.insert_with_ttl("b", 2, Duration::from_secs(1));

    assert_eq!(cache.capacity(), 0);
    assert_eq!(cache.len(), 0);
    assert_eq!(cache.get(&"a"), None);
    cache.remove(&"a");
    cache.clear();
    cache.validate().unwrap();
}

#[test]
fn test_zero_value_keys() {
    let cache = BoundedCache::new(2);

    cache.insert(String::new(), 0);
    cache.insert_with_ttl(String::from("x"), 0, Duration::MAX);

    assert_eq!(cache.get(&String::new()), Some(0));
    assert_eq!(cache.get(&String::from("x")), Some(0));
}

// == Concurrency Tests ==

#[test]
fn test_concurrent_mixed_operations() {
    const THREADS: usize = 8;
    const OPS: usize = 2_000;
    const CAPACITY: usize = 16;

    let cache = BoundedCache::new(CAPACITY);
    let barrier = Barrier::new(THREADS);
    let hits = AtomicUsize::new(0);

    thread::scope(|s| {
        for t in 0..THREADS {
            let cache = &cache;
            let barrier = &barrier;
            let hits = &hits;
            s.spawn(move || {
                barrier.wait();
                for i in 0..OPS {
                    let key = (t * 7 + i) % 64;
                    match i % 5 {
                        0 | 1 => cache.insert(key, (t, i)),
                        2 => cache.insert_with_ttl(key, (t, i), Duration::from_millis(1)),
                        3 => {
                            if cache.get(&key).is_some() {
                                hits.fetch_add(1, Ordering::Relaxed);
                            }
                        }
                        _ => cache.remove(&key),
                    }
                    assert!(cache.len() <= CAPACITY);
                }
            });
        }
    });

    // One in five operations is a read
    let reads = THREADS * (OPS / 5);
    assert!(hits.load(Ordering::Relaxed) <= reads);
    assert!(cache.len() <= CAPACITY);
    cache.validate().unwrap();
}

#[test]
fn test_concurrent_inserts_fill_to_capacity() {
    const THREADS: usize = 4;
    const CAPACITY: usize = 32;

    let cache = BoundedCache::new(CAPACITY);

    thread::scope(|s| {
        for t in 0..THREADS {
            let cache = &cache;
            s.spawn(move || {
                for i in 0..CAPACITY * 4 {
                    cache.insert(format!("{}-{}", t, i), i);
                }
            });
        }
    });

    assert_eq!(cache.len(), CAPACITY);
    assert_eq!(cache.keys().len(), CAPACITY);
    cache.validate().unwrap();

    cache.clear();
    assert_eq!(cache.len(), 0);
}
