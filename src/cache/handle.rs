//! Cache Handle Module
//!
//! The public, thread-safe cache surface. A [`Cache`] is a cheap cloneable
//! handle; every clone shares the same underlying store and sweep task.

use std::hash::Hash;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::{Mutex, RwLock};
use tokio::task::JoinHandle;

use crate::cache::{CacheBuilder, CacheStats, CacheStore, TimeUnit};
use crate::config::CacheConfig;
use crate::error::{CacheError, Result};
use crate::tasks::spawn_sweep_task;

// == Cache ==
/// Thread-safe key-value cache with age-based expiry and size-capped eviction.
///
/// All methods are synchronous and safe to call from any number of threads
/// without external locking. The periodic age sweep only starts once
/// [`CacheBuilder::build`] is called with a non-zero timeout; caches made
/// through the plain constructors never sweep on their own.
pub struct Cache<K, V> {
    /// Shared store; the sweep task holds a weak reference to it
    store: Arc<RwLock<CacheStore<K, V>>>,
    /// Sweep task handle; filled at most once, at build time
    sweeper: Arc<Mutex<Option<JoinHandle<()>>>>,
}

impl<K, V> std::fmt::Debug for Cache<K, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cache").finish_non_exhaustive()
    }
}

impl<K, V> Clone for Cache<K, V> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            sweeper: Arc::clone(&self.sweeper),
        }
    }
}

impl<K, V> Cache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    // == Constructors ==
    /// Creates a cache with expiry disabled and an effectively unlimited
    /// entry count.
    pub fn new() -> Self {
        Self::from_store(CacheStore::new(CacheConfig::default()))
    }

    /// Creates a cache with the given timeout; the entry limit defaults to
    /// the maximum.
    ///
    /// Fails with [`CacheError::InvalidTimeout`] on a negative timeout. The
    /// age sweep does not start until the cache goes through
    /// [`CacheBuilder::build`].
    pub fn with_timeout(timeout: i64, time_unit: TimeUnit) -> Result<Self> {
        Self::with_timeout_and_limit(timeout, time_unit, usize::MAX)
    }

    /// Creates a cache with the given entry limit and expiry disabled.
    ///
    /// Fails with [`CacheError::InvalidLimit`] if the limit is below 1.
    pub fn with_limit(limit: usize) -> Result<Self> {
        let config = CacheConfig {
            limit,
            ..CacheConfig::default()
        };
        config.validate()?;
        Ok(Self::from_store(CacheStore::new(config)))
    }

    /// Creates a fully specified cache.
    ///
    /// Validates the limit and timeout as the builder does. The age sweep
    /// does not start until the cache goes through [`CacheBuilder::build`].
    pub fn with_timeout_and_limit(timeout: i64, time_unit: TimeUnit, limit: usize) -> Result<Self> {
        if timeout < 0 {
            return Err(CacheError::InvalidTimeout(timeout));
        }
        let config = CacheConfig {
            limit,
            timeout: timeout as u64,
            time_unit: Some(time_unit),
        };
        config.validate()?;
        Ok(Self::from_store(CacheStore::new(config)))
    }

    fn from_store(store: CacheStore<K, V>) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            sweeper: Arc::new(Mutex::new(None)),
        }
    }

    // == Builder Entry Points ==
    /// Returns a builder wrapping a fresh, default-configured cache.
    pub fn builder() -> CacheBuilder<K, V> {
        CacheBuilder::new(Self::new())
    }

    /// Returns a builder that reconfigures an existing cache in place.
    pub fn builder_for(cache: &Cache<K, V>) -> CacheBuilder<K, V> {
        CacheBuilder::new(cache.clone())
    }

    // == Put ==
    /// Inserts a key-value pair only if the key is absent; otherwise a silent
    /// no-op (first-write-wins). Never fails.
    pub fn put(&self, key: K, value: V) {
        self.store.write().put(key, value);
    }

    // == Get ==
    /// Returns the value for `key`, or `None` if absent.
    ///
    /// Thin wrapper over [`Self::get_if_present`].
    pub fn get(&self, key: &K) -> Option<V> {
        self.get_if_present(key)
    }

    /// Returns the value for `key`, or `None` if absent.
    pub fn get_if_present(&self, key: &K) -> Option<V> {
        self.store.write().get_if_present(key)
    }

    // == Is Cached ==
    /// Returns true iff `get` would return a value for this key.
    pub fn is_cached(&self, key: &K) -> bool {
        self.store.read().contains(key)
    }

    // == Remove ==
    /// Removes an entry by key. Idempotent: removing an absent key is a no-op.
    pub fn remove(&self, key: &K) {
        self.store.write().remove(key);
    }

    // == Size ==
    /// Returns the current number of entries.
    pub fn len(&self) -> usize {
        self.store.read().len()
    }

    /// Returns true if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.store.read().is_empty()
    }

    // == Configuration Accessors ==
    /// Returns the configured entry limit.
    pub fn limit(&self) -> usize {
        self.store.read().config().limit
    }

    /// Returns the configured timeout (0 when expiry is disabled).
    pub fn timeout(&self) -> u64 {
        self.store.read().config().timeout
    }

    /// Returns the configured time unit, if any.
    pub fn time_unit(&self) -> Option<TimeUnit> {
        self.store.read().config().time_unit
    }

    // == Stats ==
    /// Returns a snapshot of the activity counters.
    pub fn stats(&self) -> CacheStats {
        self.store.read().stats()
    }

    // == Sweeper Control ==
    /// Stops the background sweep task, if one was started.
    ///
    /// The sweeper normally runs for the cache's whole lifetime; this hook
    /// exists for embedders that want an explicit stop.
    pub fn stop_sweeper(&self) {
        if let Some(handle) = self.sweeper.lock().take() {
            handle.abort();
        }
    }

    /// Shared access to the store for the builder and the sweep task.
    pub(crate) fn store(&self) -> &Arc<RwLock<CacheStore<K, V>>> {
        &self.store
    }

    /// Spawns the sweep task once; later calls are no-ops so a cache never
    /// carries more than one schedule.
    ///
    /// Must run inside a tokio runtime.
    pub(crate) fn install_sweeper(&self, period: Duration)
    where
        K: Send + Sync + 'static,
        V: Send + Sync + 'static,
    {
        let mut slot = self.sweeper.lock();
        if slot.is_some() {
            return;
        }
        *slot = Some(spawn_sweep_task(Arc::downgrade(&self.store), period));
    }
}

impl<K, V> Default for Cache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_new_defaults() {
        let cache: Cache<String, u32> = Cache::new();

        assert_eq!(cache.limit(), usize::MAX);
        assert_eq!(cache.timeout(), 0);
        assert!(cache.time_unit().is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_cache_with_timeout() {
        let cache: Cache<String, u32> = Cache::with_timeout(5, TimeUnit::Seconds).unwrap();

        assert_eq!(cache.timeout(), 5);
        assert_eq!(cache.time_unit(), Some(TimeUnit::Seconds));
        assert_eq!(cache.limit(), usize::MAX);
    }

    #[test]
    fn test_cache_with_negative_timeout_fails() {
        let result: Result<Cache<String, u32>> = Cache::with_timeout(-1, TimeUnit::Seconds);
        assert_eq!(result.unwrap_err(), CacheError::InvalidTimeout(-1));
    }

    #[test]
    fn test_cache_with_limit() {
        let cache: Cache<String, u32> = Cache::with_limit(10).unwrap();
        assert_eq!(cache.limit(), 10);
    }

    #[test]
    fn test_cache_with_zero_limit_fails() {
        let result: Result<Cache<String, u32>> = Cache::with_limit(0);
        assert_eq!(result.unwrap_err(), CacheError::InvalidLimit(0));
    }

    #[test]
    fn test_cache_with_timeout_and_limit() {
        let cache: Cache<String, u32> =
            Cache::with_timeout_and_limit(2, TimeUnit::Minutes, 100).unwrap();

        assert_eq!(cache.timeout(), 2);
        assert_eq!(cache.time_unit(), Some(TimeUnit::Minutes));
        assert_eq!(cache.limit(), 100);
    }

    #[test]
    fn test_cache_put_get_remove() {
        let cache: Cache<String, String> = Cache::new();

        assert!(!cache.is_cached(&"k".to_string()));
        assert_eq!(cache.get(&"k".to_string()), None);

        cache.put("k".to_string(), "v".to_string());
        assert!(cache.is_cached(&"k".to_string()));
        assert_eq!(cache.get(&"k".to_string()), Some("v".to_string()));

        cache.remove(&"k".to_string());
        assert!(!cache.is_cached(&"k".to_string()));
        assert_eq!(cache.get(&"k".to_string()), None);
    }

    #[test]
    fn test_cache_first_write_wins() {
        let cache: Cache<String, String> = Cache::new();

        cache.put("k".to_string(), "original".to_string());
        cache.put("k".to_string(), "replacement".to_string());

        assert_eq!(cache.get(&"k".to_string()), Some("original".to_string()));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_cache_clones_share_state() {
        let cache: Cache<String, String> = Cache::new();
        let clone = cache.clone();

        cache.put("k".to_string(), "v".to_string());

        assert_eq!(clone.get(&"k".to_string()), Some("v".to_string()));
        clone.remove(&"k".to_string());
        assert!(!cache.is_cached(&"k".to_string()));
    }

    #[test]
    fn test_cache_concurrent_puts() {
        let cache: Cache<String, usize> = Cache::new();
        let mut handles = Vec::new();

        for t in 0..8 {
            let cache = cache.clone();
            handles.push(std::thread::spawn(move || {
                for i in 0..50 {
                    cache.put(format!("key-{t}-{i}"), i);
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(cache.len(), 8 * 50);
    }

    #[test]
    fn test_cache_stats_snapshot() {
        let cache: Cache<String, String> = Cache::new();

        cache.put("k".to_string(), "v".to_string());
        cache.get(&"k".to_string());
        cache.get(&"missing".to_string());

        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.total_entries, 1);
    }
}
