//! Configuration Module
//!
//! Handles loading demo configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::error::{CacheError, Result};

/// Demo configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Maximum number of entries the cache can hold
    pub capacity: usize,
    /// TTL applied to the demo's expiring entry
    pub demo_ttl: Duration,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_CAPACITY` - Maximum cache entries (default: 3)
    /// - `CACHE_DEMO_TTL_MS` - Demo entry TTL in milliseconds (default: 1000)
    ///
    /// Unset variables fall back to defaults; unparseable ones are an error.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            capacity: parse_var("CACHE_CAPACITY")?.unwrap_or(defaults.capacity),
            demo_ttl: parse_var("CACHE_DEMO_TTL_MS")?
                .map(Duration::from_millis)
                .unwrap_or(defaults.demo_ttl),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: 3,
            demo_ttl: Duration::from_millis(1000),
        }
    }
}

fn parse_var<T: FromStr>(var: &str) -> Result<Option<T>> {
    match env::var(var) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| CacheError::InvalidConfig {
                var: var.to_string(),
                value: raw,
            }),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(raw)) => Err(CacheError::InvalidConfig {
            var: var.to_string(),
            value: raw.to_string_lossy().into_owned(),
        }),
    }
}
