//! JSON REST handlers for sensor readings.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::Value;

use sensorhub_app::ports::ReadingStore;
use sensorhub_domain::error::ValidationError;
use sensorhub_domain::reading::{ReadingList, SensorReading};

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<ReadingList>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the latest endpoint.
pub enum LatestResponse {
    Ok(Json<SensorReading>),
}

impl IntoResponse for LatestResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<SensorReading>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// `GET /api/sensors`
pub async fn list<S>(State(state): State<AppState<S>>) -> Result<ListResponse, ApiError>
where
    S: ReadingStore + Send + Sync + 'static,
{
    let readings = state.reading_service.list_readings().await?;
    Ok(ListResponse::Ok(Json(readings)))
}

/// `POST /api/sensors`
///
/// Any JSON rejection (missing content type, empty or malformed body) is
/// reported as the same `Invalid JSON body` error.
pub async fn create<S>(
    State(state): State<AppState<S>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<CreateResponse, ApiError>
where
    S: ReadingStore + Send + Sync + 'static,
{
    let Json(body) = payload.map_err(|rejection| {
        tracing::debug!(reason = %rejection.body_text(), "rejected sensor payload");
        ValidationError::InvalidBody
    })?;
    let created = state.reading_service.submit_reading(body).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `GET /api/sensors/latest`
pub async fn latest<S>(State(state): State<AppState<S>>) -> Result<LatestResponse, ApiError>
where
    S: ReadingStore + Send + Sync + 'static,
{
    let reading = state.reading_service.latest_reading().await?;
    Ok(LatestResponse::Ok(Json(reading)))
}
