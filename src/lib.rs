//! Timed Cache - an in-process key-value cache
//!
//! Entries expire once they are older than a configured timeout (purged by a
//! background sweep task) and the entry count is capped by a configurable
//! limit (trimmed on demand). Inserts are first-write-wins: a put for an
//! already-present key changes neither the value nor the insertion time.

pub mod cache;
pub mod config;
pub mod error;
pub mod tasks;

pub use cache::{Cache, CacheBuilder, CacheStats, TimeUnit};
pub use config::CacheConfig;
pub use error::{CacheError, Result};
pub use tasks::spawn_sweep_task;
