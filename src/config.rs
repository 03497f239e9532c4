//! Configuration Module
//!
//! Holds the tunable parameters of a cache and validates them.

use crate::cache::TimeUnit;
use crate::error::{CacheError, Result};
use std::time::Duration;

/// Cache configuration parameters.
///
/// The default configuration disables the age sweep (timeout 0, no unit) and
/// leaves the entry count effectively unbounded.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Maximum number of entries the cache may hold after a size trim
    pub limit: usize,
    /// Entry timeout, expressed in `time_unit`; 0 disables the age sweep
    pub timeout: u64,
    /// Granularity of `timeout`; required whenever `timeout` is non-zero
    pub time_unit: Option<TimeUnit>,
}

impl CacheConfig {
    /// Validates the configuration invariants.
    ///
    /// The limit must be at least 1, and a non-zero timeout needs a time unit.
    pub fn validate(&self) -> Result<()> {
        if self.limit < 1 {
            return Err(CacheError::InvalidLimit(self.limit));
        }
        if self.timeout > 0 && self.time_unit.is_none() {
            return Err(CacheError::MissingTimeUnit);
        }
        Ok(())
    }

    /// Returns the timeout as a [`Duration`], or `None` when the age sweep is
    /// disabled (timeout 0 or no unit configured).
    pub fn timeout_duration(&self) -> Option<Duration> {
        if self.timeout == 0 {
            return None;
        }
        self.time_unit.map(|unit| unit.to_duration(self.timeout))
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            limit: usize::MAX,
            timeout: 0,
            time_unit: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = CacheConfig::default();
        assert_eq!(config.limit, usize::MAX);
        assert_eq!(config.timeout, 0);
        assert!(config.time_unit.is_none());
        assert!(config.validate().is_ok());
        assert!(config.timeout_duration().is_none());
    }

    #[test]
    fn test_config_zero_limit_invalid() {
        let config = CacheConfig {
            limit: 0,
            ..CacheConfig::default()
        };
        assert_eq!(config.validate(), Err(CacheError::InvalidLimit(0)));
    }

    #[test]
    fn test_config_timeout_without_unit_invalid() {
        let config = CacheConfig {
            timeout: 5,
            time_unit: None,
            ..CacheConfig::default()
        };
        assert_eq!(config.validate(), Err(CacheError::MissingTimeUnit));
    }

    #[test]
    fn test_config_timeout_duration() {
        let config = CacheConfig {
            timeout: 2,
            time_unit: Some(TimeUnit::Seconds),
            ..CacheConfig::default()
        };
        assert_eq!(config.timeout_duration(), Some(Duration::from_secs(2)));
    }

    #[test]
    fn test_config_zero_timeout_has_no_duration() {
        let config = CacheConfig {
            timeout: 0,
            time_unit: Some(TimeUnit::Seconds),
            ..CacheConfig::default()
        };
        assert!(config.timeout_duration().is_none());
    }
}
