//! Error types for the cache crate
//!
//! Cache operations themselves never fail; these cover configuration
//! loading and internal consistency checks.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Environment variable holds a value that cannot be parsed
    #[error("Invalid value for {var}: {value:?}")]
    InvalidConfig { var: String, value: String },

    /// Index and recency list disagree
    #[error("Cache state corrupted: {0}")]
    Corrupted(String),
}

// == Result Type Alias ==
/// Convenience Result type for the crate.
pub type Result<T> = std::result::Result<T, CacheError>;
