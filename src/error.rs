//! Error types for the cache
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for cache configuration failures.
///
/// Only configuration can fail: lookups, inserts and removals treat a missing
/// key as a normal result, never an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Limit below the minimum of one entry
    #[error("Limit cannot be smaller than 1, got {0}")]
    InvalidLimit(usize),

    /// Negative timeout
    #[error("Timeout cannot be negative, got {0}")]
    InvalidTimeout(i64),

    /// Timeout configured without a time unit
    #[error("A time unit is required when timeout is greater than 0")]
    MissingTimeUnit,
}

// == Result Type Alias ==
/// Convenience Result type for the cache.
pub type Result<T> = std::result::Result<T, CacheError>;
