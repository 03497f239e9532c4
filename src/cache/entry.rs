//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with insertion-time tracking.

use std::time::Instant;

// == Cache Entry ==
/// A single cache entry: the stored value plus the moment it was first inserted.
///
/// The insertion timestamp is set exactly once. Re-inserting the same key is a
/// no-op at the store level, so neither the value nor the timestamp ever
/// changes after the first successful insert.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub(crate) value: V,
    /// When the entry was first inserted
    pub(crate) inserted_at: Instant,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new cache entry stamped with the current time.
    pub fn new(value: V) -> Self {
        Self {
            value,
            inserted_at: Instant::now(),
        }
    }

    /// Creates an entry with an explicit insertion timestamp.
    ///
    /// Used by tests that need deterministic ages.
    #[cfg(test)]
    pub(crate) fn with_inserted_at(value: V, inserted_at: Instant) -> Self {
        Self { value, inserted_at }
    }

    // == Accessors ==
    /// Returns a reference to the stored value.
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Returns the insertion timestamp.
    pub fn inserted_at(&self) -> Instant {
        self.inserted_at
    }

    /// Returns how long ago the entry was inserted.
    pub fn age(&self) -> std::time::Duration {
        self.inserted_at.elapsed()
    }
}
