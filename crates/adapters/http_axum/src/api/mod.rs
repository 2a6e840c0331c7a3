//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod config;
#[allow(clippy::missing_errors_doc)]
pub mod sensors;

use axum::Router;
use axum::routing::get;

use sensorhub_app::ports::ReadingStore;

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<S>() -> Router<AppState<S>>
where
    S: ReadingStore + Send + Sync + 'static,
{
    Router::new()
        // Configuration
        .route("/config", get(config::get::<S>))
        // Readings
        .route("/sensors", get(sensors::list::<S>).post(sensors::create::<S>))
        .route("/sensors/latest", get(sensors::latest::<S>))
}
