//! JSON REST handler for the device configuration record.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};

use sensorhub_app::ports::ReadingStore;
use sensorhub_domain::config::DeviceConfig;

use crate::state::AppState;

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<DeviceConfig>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/config`
pub async fn get<S>(State(state): State<AppState<S>>) -> GetResponse
where
    S: ReadingStore + Send + Sync + 'static,
{
    GetResponse::Ok(Json(DeviceConfig::clone(&state.device_config)))
}
