//! In-memory implementation of [`ReadingStore`].

use std::sync::{Mutex, MutexGuard};

use sensorhub_app::ports::ReadingStore;
use sensorhub_domain::error::SensorHubError;
use sensorhub_domain::id::ReadingId;
use sensorhub_domain::reading::{NewReading, SensorReading};
use sensorhub_domain::time::now;

use crate::error::StorageError;

/// Append-only reading sequence guarded by a single mutex.
///
/// Id assignment, timestamping and the push happen under the same lock, so
/// ids are exactly `1..=n` in insertion order and `received_at` never goes
/// backwards as ids grow. The lock is never held across an `.await`.
#[derive(Debug, Default)]
pub struct InMemoryReadingStore {
    readings: Mutex<Vec<SensorReading>>,
}

impl InMemoryReadingStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<SensorReading>>, StorageError> {
        self.readings.lock().map_err(|_| StorageError::LockPoisoned)
    }

    fn append_sync(&self, reading: NewReading) -> Result<SensorReading, StorageError> {
        let mut readings = self.lock()?;
        let stored = SensorReading::new(ReadingId::next_after(readings.len()), now(), reading);
        readings.push(stored.clone());
        Ok(stored)
    }

    fn list_sync(&self) -> Result<Vec<SensorReading>, StorageError> {
        Ok(self.lock()?.clone())
    }

    fn latest_sync(&self) -> Result<Option<SensorReading>, StorageError> {
        Ok(self.lock()?.last().cloned())
    }

    fn count_sync(&self) -> Result<usize, StorageError> {
        Ok(self.lock()?.len())
    }
}

impl ReadingStore for InMemoryReadingStore {
    async fn append(&self, reading: NewReading) -> Result<SensorReading, SensorHubError> {
        Ok(self.append_sync(reading)?)
    }

    async fn list(&self) -> Result<Vec<SensorReading>, SensorHubError> {
        Ok(self.list_sync()?)
    }

    async fn latest(&self) -> Result<Option<SensorReading>, SensorHubError> {
        Ok(self.latest_sync()?)
    }

    async fn count(&self) -> Result<usize, SensorHubError> {
        Ok(self.count_sync()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Arc;

    fn submission(device: &str) -> NewReading {
        NewReading::from_json(json!({"device": device, "temperature": 21.0})).unwrap()
    }

    #[tokio::test]
    async fn should_start_empty() {
        let store = InMemoryReadingStore::new();
        assert_eq!(store.count().await.unwrap(), 0);
        assert!(store.list().await.unwrap().is_empty());
        assert!(store.latest().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_assign_sequential_ids() {
        let store = InMemoryReadingStore::new();

        for expected in 1..=5 {
            let stored = store.append(submission("dev")).await.unwrap();
            assert_eq!(stored.id.value(), expected);
        }

        assert_eq!(store.count().await.unwrap(), 5);
    }

    #[tokio::test]
    async fn should_keep_insertion_order() {
        let store = InMemoryReadingStore::new();
        store.append(submission("first")).await.unwrap();
        store.append(submission("second")).await.unwrap();

        let readings = store.list().await.unwrap();

        assert_eq!(readings[0].device, json!("first"));
        assert_eq!(readings[1].device, json!("second"));
        assert!(readings[0].received_at <= readings[1].received_at);
    }

    #[tokio::test]
    async fn should_return_last_appended_as_latest() {
        let store = InMemoryReadingStore::new();
        store.append(submission("first")).await.unwrap();
        let second = store.append(submission("second")).await.unwrap();

        assert_eq!(store.latest().await.unwrap(), Some(second));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn should_not_duplicate_or_skip_ids_under_concurrency() {
        let store = Arc::new(InMemoryReadingStore::new());

        let handles: Vec<_> = (0..64)
            .map(|n| {
                let store = Arc::clone(&store);
                tokio::spawn(async move { store.append(submission(&format!("dev-{n}"))).await })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let readings = store.list().await.unwrap();
        let ids: Vec<u64> = readings.iter().map(|r| r.id.value()).collect();
        assert_eq!(ids, (1..=64).collect::<Vec<_>>());
    }

    fn poison(store: &InMemoryReadingStore) {
        let _guard = store.readings.lock().unwrap();
        panic!("poison the reading lock");
    }

    #[tokio::test]
    async fn should_report_poisoned_lock_as_storage_error() {
        let store = InMemoryReadingStore::new();
        std::thread::scope(|scope| {
            let joined = scope.spawn(|| poison(&store)).join();
            assert!(joined.is_err());
        });

        let result = store.count().await;

        assert!(matches!(result, Err(SensorHubError::Storage(_))));
    }
}
