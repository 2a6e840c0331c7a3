//! Storage-specific error type.

use sensorhub_domain::error::SensorHubError;

/// Errors originating from the in-memory storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A thread panicked while holding the reading lock.
    #[error("reading store lock poisoned")]
    LockPoisoned,
}

impl From<StorageError> for SensorHubError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}
