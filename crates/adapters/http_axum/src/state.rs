//! Shared application state for axum handlers.

use std::sync::Arc;

use sensorhub_app::ports::ReadingStore;
use sensorhub_app::services::reading_service::ReadingService;
use sensorhub_domain::config::DeviceConfig;

/// Application state shared across all axum handlers.
///
/// Generic over the reading store to avoid dynamic dispatch.
/// `Clone` is implemented manually so the store itself does not need to be
/// `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<S> {
    /// Reading submission and query service.
    pub reading_service: Arc<ReadingService<S>>,
    /// Static configuration record, frozen at start-up.
    pub device_config: Arc<DeviceConfig>,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            reading_service: Arc::clone(&self.reading_service),
            device_config: Arc::clone(&self.device_config),
        }
    }
}

impl<S> AppState<S>
where
    S: ReadingStore + Send + Sync + 'static,
{
    /// Create a new application state from the service and configuration.
    pub fn new(reading_service: ReadingService<S>, device_config: DeviceConfig) -> Self {
        Self {
            reading_service: Arc::new(reading_service),
            device_config: Arc::new(device_config),
        }
    }
}
