//! Cache Statistics Module
//!
//! Tracks cache activity: hits, misses, expirations and evictions.

use serde::Serialize;

// == Cache Stats ==
/// Tracks cache activity counters.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CacheStats {
    /// Number of successful cache retrievals
    pub hits: u64,
    /// Number of failed cache retrievals (key not present)
    pub misses: u64,
    /// Number of entries removed by the age sweep
    pub expirations: u64,
    /// Number of entries removed by the size trim
    pub evictions: u64,
    /// Current number of entries in the cache
    pub total_entries: usize,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Calculates the cache hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no lookups have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    // == Record Hit ==
    /// Increments the hit counter.
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    // == Record Miss ==
    /// Increments the miss counter.
    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    // == Record Expirations ==
    /// Adds to the expiration counter after an age sweep.
    pub fn record_expirations(&mut self, count: u64) {
        self.expirations += count;
    }

    // == Record Evictions ==
    /// Adds to the eviction counter after a size trim.
    pub fn record_evictions(&mut self, count: u64) {
        self.evictions += count;
    }

    // == Update Entry Count ==
    /// Updates the total entries count.
    pub fn set_total_entries(&mut self, count: usize) {
        self.total_entries = count;
    }
}
