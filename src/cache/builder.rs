//! Cache Builder Module
//!
//! Fluent configuration facade over a live [`Cache`]. Builder calls mutate
//! the wrapped cache in place; `build()` is the only point at which the
//! periodic age sweep starts.

use std::hash::Hash;

use tracing::debug;

use crate::cache::{Cache, TimeUnit};
use crate::error::{CacheError, Result};

// == Cache Builder ==
/// Staged configuration for a [`Cache`].
///
/// Obtained from [`Cache::builder`] (fresh cache) or [`Cache::builder_for`]
/// (reconfigure an existing one). Limit changes take effect immediately,
/// including an immediate size trim; timeout changes are only checked and
/// applied, with scheduling deferred to [`Self::build`].
pub struct CacheBuilder<K, V> {
    cache: Cache<K, V>,
}

impl<K, V> CacheBuilder<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    pub(crate) fn new(cache: Cache<K, V>) -> Self {
        Self { cache }
    }

    // == With Limit ==
    /// Sets the entry limit and immediately trims the cache down to it.
    ///
    /// Fails with [`CacheError::InvalidLimit`] if the limit is below 1.
    pub fn with_limit(self, limit: usize) -> Result<Self> {
        if limit < 1 {
            return Err(CacheError::InvalidLimit(limit));
        }

        let trimmed = {
            let mut store = self.cache.store().write();
            store.set_limit(limit);
            store.trim_to_limit()
        };
        if trimmed > 0 {
            debug!("Size trim removed {} entries after limit change", trimmed);
        }

        Ok(self)
    }

    // == With Timeout ==
    /// Sets the timeout and its unit.
    ///
    /// Fails with [`CacheError::InvalidTimeout`] on a negative timeout. Does
    /// not sweep and does not reschedule an already-running sweep task.
    pub fn with_timeout(self, timeout: i64, time_unit: TimeUnit) -> Result<Self> {
        if timeout < 0 {
            return Err(CacheError::InvalidTimeout(timeout));
        }

        self.cache.store().write().set_timeout(timeout as u64, time_unit);

        Ok(self)
    }

    // == Build ==
    /// Validates the configuration and returns the cache, starting the
    /// periodic age sweep if the timeout is non-zero.
    ///
    /// The sweep period is fixed here from the current timeout and unit;
    /// exactly one sweep task is ever installed per cache, so building the
    /// same cache again does not reschedule.
    ///
    /// Must be called inside a tokio runtime when the timeout is non-zero.
    pub fn build(self) -> Result<Cache<K, V>>
    where
        K: Send + Sync + 'static,
        V: Send + Sync + 'static,
    {
        let period = {
            let store = self.cache.store().read();
            store.config().validate()?;
            store.config().timeout_duration()
        };

        if let Some(period) = period {
            self.cache.install_sweeper(period);
        }

        Ok(self.cache)
    }
}
