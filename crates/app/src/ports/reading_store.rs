//! Reading store port — the append-only sequence of sensor readings.

use std::future::Future;

use sensorhub_domain::error::SensorHubError;
use sensorhub_domain::reading::{NewReading, SensorReading};

/// Ordered, append-only storage for [`SensorReading`]s.
///
/// Implementations must assign ids and receipt times inside the same atomic
/// step as the append, so that concurrent callers never observe duplicate or
/// skipped ids.
pub trait ReadingStore {
    /// Number the submission as `count + 1`, stamp it, and append it.
    fn append(
        &self,
        reading: NewReading,
    ) -> impl Future<Output = Result<SensorReading, SensorHubError>> + Send;

    /// Every stored reading in insertion order.
    fn list(&self) -> impl Future<Output = Result<Vec<SensorReading>, SensorHubError>> + Send;

    /// The most recently appended reading, if any.
    fn latest(&self) -> impl Future<Output = Result<Option<SensorReading>, SensorHubError>> + Send;

    /// Number of stored readings.
    fn count(&self) -> impl Future<Output = Result<usize, SensorHubError>> + Send;
}

impl<T: ReadingStore + Send + Sync> ReadingStore for std::sync::Arc<T> {
    fn append(
        &self,
        reading: NewReading,
    ) -> impl Future<Output = Result<SensorReading, SensorHubError>> + Send {
        (**self).append(reading)
    }

    fn list(&self) -> impl Future<Output = Result<Vec<SensorReading>, SensorHubError>> + Send {
        (**self).list()
    }

    fn latest(&self) -> impl Future<Output = Result<Option<SensorReading>, SensorHubError>> + Send {
        (**self).latest()
    }

    fn count(&self) -> impl Future<Output = Result<usize, SensorHubError>> + Send {
        (**self).count()
    }
}
