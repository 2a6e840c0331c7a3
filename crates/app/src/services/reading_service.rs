//! Reading service — use-cases for submitting and querying sensor readings.

use serde_json::Value;

use sensorhub_domain::error::{NotFoundError, SensorHubError};
use sensorhub_domain::reading::{NewReading, ReadingList, SensorReading};

use crate::ports::ReadingStore;

/// Application service over the reading store.
pub struct ReadingService<S> {
    store: S,
}

impl<S: ReadingStore> ReadingService<S> {
    /// Create a new service backed by the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Accept a raw JSON submission and append it to the store.
    ///
    /// No field-level checks are made: `temperature` and `humidity` are kept
    /// as whatever JSON the client sent.
    ///
    /// # Errors
    ///
    /// Returns [`SensorHubError::Validation`] if the body is not a non-empty
    /// JSON object, or a storage error propagated from the store.
    #[tracing::instrument(skip(self, body))]
    pub async fn submit_reading(&self, body: Value) -> Result<SensorReading, SensorHubError> {
        let reading = NewReading::from_json(body)?;
        let stored = self.store.append(reading).await?;
        tracing::info!(
            id = %stored.id,
            device = %stored.device,
            temperature = %stored.temperature,
            humidity = %stored.humidity,
            "sensor data received"
        );
        Ok(stored)
    }

    /// List every reading in insertion order along with the count.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the store.
    pub async fn list_readings(&self) -> Result<ReadingList, SensorHubError> {
        self.store.list().await.map(ReadingList::from)
    }

    /// Return the reading with the highest id.
    ///
    /// # Errors
    ///
    /// Returns [`SensorHubError::NotFound`] when nothing has been submitted
    /// yet, or a storage error from the store.
    #[tracing::instrument(skip(self))]
    pub async fn latest_reading(&self) -> Result<SensorReading, SensorHubError> {
        self.store
            .latest()
            .await?
            .ok_or_else(|| NotFoundError::NoReadings.into())
    }

    /// Number of readings stored so far.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the store.
    pub async fn reading_count(&self) -> Result<usize, SensorHubError> {
        self.store.count().await
    }
}
