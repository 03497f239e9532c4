//! Cache Module
//!
//! Provides in-memory caching with age-based expiry and size-capped eviction.

mod builder;
mod entry;
mod handle;
mod stats;
mod store;
mod time_unit;


// Re-export public types
pub use builder::CacheBuilder;
pub use entry::CacheEntry;
pub use handle::Cache;
pub use stats::CacheStats;
pub use store::CacheStore;
pub use time_unit::TimeUnit;
