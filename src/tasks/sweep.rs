//! Age Sweep Task
//!
//! Background task that periodically removes cache entries older than the
//! configured timeout.

use std::hash::Hash;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Weak;
use std::time::Duration;

use parking_lot::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::cache::CacheStore;

/// Spawns a background task that periodically sweeps expired cache entries.
///
/// The task ticks at a fixed `period`, starting with an immediate first tick,
/// and runs one sweep per tick. The period is captured once at spawn time;
/// the sweep itself reads the live timeout from the store on every iteration.
///
/// The task holds only a [`Weak`] reference to the store and exits on its own
/// once every cache handle has been dropped. A panic inside one sweep is
/// contained to that iteration and the schedule continues at the next tick.
///
/// Returns a JoinHandle which can be used to abort the task early; dropping
/// the handle leaves the task running for the cache's lifetime.
pub fn spawn_sweep_task<K, V>(
    store: Weak<RwLock<CacheStore<K, V>>>,
    period: Duration,
) -> JoinHandle<()>
where
    K: Eq + Hash + Clone + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    tokio::spawn(async move {
        info!("Starting age sweep task with period of {:?}", period);

        let mut ticker = tokio::time::interval(period);

        loop {
            ticker.tick().await;

            // The cache has been dropped; nothing left to sweep.
            let Some(store) = store.upgrade() else {
                debug!("Cache dropped, stopping age sweep task");
                break;
            };

            let swept = panic::catch_unwind(AssertUnwindSafe(|| store.write().sweep_expired()));

            match swept {
                Ok(0) => debug!("Age sweep: no expired entries found"),
                Ok(removed) => info!("Age sweep: removed {} expired entries", removed),
                Err(_) => warn!("Age sweep iteration panicked, retrying at next tick"),
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::TimeUnit;
    use crate::config::CacheConfig;
    use std::sync::Arc;
    use std::time::Duration;

    fn shared_store(
        timeout: u64,
        unit: TimeUnit,
    ) -> Arc<RwLock<CacheStore<String, String>>> {
        Arc::new(RwLock::new(CacheStore::new(CacheConfig {
            limit: usize::MAX,
            timeout,
            time_unit: Some(unit),
        })))
    }

    #[tokio::test]
    async fn test_sweep_task_removes_expired_entries() {
        let store = shared_store(50, TimeUnit::Milliseconds);

        store
            .write()
            .put("expire_soon".to_string(), "value".to_string());

        let handle = spawn_sweep_task(Arc::downgrade(&store), Duration::from_millis(50));

        // Wait for the entry to age past the timeout and a sweep to run
        tokio::time::sleep(Duration::from_millis(300)).await;

        assert!(
            !store.read().contains(&"expire_soon".to_string()),
            "Expired entry should have been swept"
        );

        handle.abort();
    }

    #[tokio::test]
    async fn test_sweep_task_preserves_young_entries() {
        let store = shared_store(1, TimeUnit::Hours);

        store
            .write()
            .put("long_lived".to_string(), "value".to_string());

        let handle = spawn_sweep_task(Arc::downgrade(&store), Duration::from_millis(50));

        tokio::time::sleep(Duration::from_millis(200)).await;

        assert!(
            store.read().contains(&"long_lived".to_string()),
            "Entry younger than the timeout should not be swept"
        );

        handle.abort();
    }

    #[tokio::test]
    async fn test_sweep_task_exits_when_store_dropped() {
        let store = shared_store(50, TimeUnit::Milliseconds);

        let handle = spawn_sweep_task(Arc::downgrade(&store), Duration::from_millis(20));
        drop(store);

        tokio::time::sleep(Duration::from_millis(150)).await;

        assert!(
            handle.is_finished(),
            "Task should stop once the store is gone"
        );
    }

    #[tokio::test]
    async fn test_sweep_task_can_be_aborted() {
        let store = shared_store(50, TimeUnit::Milliseconds);

        let handle = spawn_sweep_task(Arc::downgrade(&store), Duration::from_millis(20));
        handle.abort();

        tokio::time::sleep(Duration::from_millis(100)).await;

        assert!(handle.is_finished(), "Task should be finished after abort");
    }
}
