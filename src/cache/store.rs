//! Cache Store Module
//!
//! Single-threaded cache engine combining HashMap storage with insertion-time
//! tracking and both eviction algorithms (age sweep and size trim). Concurrent
//! access is layered on top by [`Cache`](crate::cache::Cache).

use std::collections::HashMap;
use std::hash::Hash;
use std::time::Instant;

use crate::cache::{CacheEntry, CacheStats, TimeUnit};
use crate::config::CacheConfig;

// == Cache Store ==
/// Cache storage with first-write-wins inserts, age-based expiry and
/// size-capped eviction.
#[derive(Debug)]
pub struct CacheStore<K, V> {
    /// Key-value storage; each entry carries its insertion timestamp
    entries: HashMap<K, CacheEntry<V>>,
    /// Tunable limit/timeout parameters
    config: CacheConfig,
    /// Activity counters
    stats: CacheStats,
}

impl<K, V> CacheStore<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    // == Constructor ==
    /// Creates a new empty CacheStore with the given configuration.
    ///
    /// The configuration is assumed valid; callers validate before
    /// construction.
    pub fn new(config: CacheConfig) -> Self {
        Self {
            entries: HashMap::new(),
            config,
            stats: CacheStats::new(),
        }
    }

    // == Put ==
    /// Inserts a key-value pair only if the key is absent.
    ///
    /// A put for an already-present key is a silent no-op: neither the stored
    /// value nor the insertion timestamp changes (first-write-wins). Never
    /// fails.
    pub fn put(&mut self, key: K, value: V) {
        self.entries
            .entry(key)
            .or_insert_with(|| CacheEntry::new(value));
        self.stats.set_total_entries(self.entries.len());
    }

    // == Get If Present ==
    /// Retrieves a clone of the value for `key`, or `None` if absent.
    ///
    /// Entries past their timeout are still returned until the next age sweep
    /// removes them; staleness is bounded by one sweep interval.
    pub fn get_if_present(&mut self, key: &K) -> Option<V> {
        match self.entries.get(key) {
            Some(entry) => {
                self.stats.record_hit();
                Some(entry.value().clone())
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Contains ==
    /// Returns true iff the key is currently present.
    pub fn contains(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    // == Remove ==
    /// Removes an entry by key. Idempotent: removing an absent key is a no-op.
    pub fn remove(&mut self, key: &K) {
        if self.entries.remove(key).is_some() {
            self.stats.set_total_entries(self.entries.len());
        }
    }

    // == Age Sweep ==
    /// Removes every entry inserted strictly before `now - timeout`.
    ///
    /// Entries sitting exactly at the cutoff survive until the next sweep.
    /// No-op when the timeout is 0 or no time unit is configured.
    ///
    /// Returns the number of entries removed.
    pub fn sweep_expired(&mut self) -> usize {
        let Some(timeout) = self.config.timeout_duration() else {
            return 0;
        };
        // A timeout further back than the clock can represent means nothing
        // is old enough to expire.
        let Some(cutoff) = Instant::now().checked_sub(timeout) else {
            return 0;
        };

        let expired: Vec<K> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.inserted_at() < cutoff)
            .map(|(key, _)| key.clone())
            .collect();

        let count = expired.len();
        self.remove_entries(expired);
        self.stats.record_expirations(count as u64);
        count
    }

    // == Size Trim ==
    /// Removes surplus entries once the count exceeds the limit.
    ///
    /// Candidates are selected by sorting timestamps newest-first and taking
    /// the first `len - limit` keys, so the surplus newest entries are the
    /// ones dropped.
    ///
    /// Returns the number of entries removed.
    pub fn trim_to_limit(&mut self) -> usize {
        if self.entries.len() <= self.config.limit {
            return 0;
        }
        let surplus = self.entries.len() - self.config.limit;

        let mut by_age: Vec<(K, Instant)> = self
            .entries
            .iter()
            .map(|(key, entry)| (key.clone(), entry.inserted_at()))
            .collect();
        by_age.sort_by(|a, b| b.1.cmp(&a.1));

        let doomed: Vec<K> = by_age.into_iter().take(surplus).map(|(key, _)| key).collect();

        let count = doomed.len();
        self.remove_entries(doomed);
        self.stats.record_evictions(count as u64);
        count
    }

    // == Remove Entries ==
    /// Removes a batch of keys through the same path as [`Self::remove`].
    ///
    /// Keys already gone (e.g. removed concurrently between candidate
    /// selection and deletion) are skipped silently.
    fn remove_entries(&mut self, keys: Vec<K>) {
        for key in keys {
            self.entries.remove(&key);
        }
        self.stats.set_total_entries(self.entries.len());
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // == Configuration ==
    /// Returns the current configuration.
    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Updates the entry limit. Does not trim by itself.
    pub fn set_limit(&mut self, limit: usize) {
        self.config.limit = limit;
    }

    /// Updates the timeout and its unit. Does not sweep by itself.
    pub fn set_timeout(&mut self, timeout: u64, time_unit: TimeUnit) {
        self.config.timeout = timeout;
        self.config.time_unit = Some(time_unit);
    }

    // == Stats ==
    /// Returns a snapshot of the activity counters.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    /// Test helper: inserts with an explicit timestamp, bypassing the clock.
    #[cfg(test)]
    pub(crate) fn put_with_timestamp(&mut self, key: K, value: V, inserted_at: Instant) {
        self.entries
            .entry(key)
            .or_insert_with(|| CacheEntry::with_inserted_at(value, inserted_at));
        self.stats.set_total_entries(self.entries.len());
    }
}
