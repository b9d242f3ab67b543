//! Bounded Cache demo
//!
//! Builds a cache from environment configuration and reports its state.

use anyhow::Context;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bounded_cache::{BoundedCache, Cache, Config};

/// Summary printed at the end of the demo.
#[derive(Debug, Serialize)]
struct CacheSummary {
    capacity: usize,
    size: usize,
    keys: Vec<String>,
}

impl CacheSummary {
    fn of(cache: &BoundedCache<String, String>) -> Self {
        Self {
            capacity: cache.capacity(),
            size: cache.len(),
            keys: cache.keys(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bounded_cache=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().context("failed to load configuration")?;
    info!(
        "Configuration loaded: capacity={}, demo_ttl={:?}",
        config.capacity, config.demo_ttl
    );

    let cache: BoundedCache<String, String> = BoundedCache::new(config.capacity);
    info!("Cache created: capacity={}, size={}", cache.capacity(), cache.len());

    cache.insert("greeting".to_string(), "hello".to_string());
    cache.insert_with_ttl(
        "session".to_string(),
        "short-lived".to_string(),
        config.demo_ttl,
    );

    let summary = CacheSummary::of(&cache);
    println!(
        "{}",
        serde_json::to_string_pretty(&summary).context("failed to serialize summary")?
    );

    Ok(())
}
