//! Axum router assembly.

use axum::Json;
use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use sensorhub_app::ports::ReadingStore;
use sensorhub_domain::health::HealthStatus;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Serves `/health` at the root and nests the JSON API under `/api`.
/// Request bodies are not size-capped: any well-formed JSON object is accepted.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<S>(state: AppState<S>) -> Router
where
    S: ReadingStore + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", crate::api::routes())
        .layer(DefaultBodyLimit::disable())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> Json<HealthStatus> {
    Json(HealthStatus::ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use sensorhub_app::services::reading_service::ReadingService;
    use sensorhub_domain::config::DeviceConfig;
    use sensorhub_domain::error::SensorHubError;
    use sensorhub_domain::id::ReadingId;
    use sensorhub_domain::reading::{NewReading, SensorReading};
    use sensorhub_domain::time::now;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    /// Accepts everything and remembers nothing.
    struct StubStore;

    impl ReadingStore for StubStore {
        async fn append(&self, reading: NewReading) -> Result<SensorReading, SensorHubError> {
            Ok(SensorReading::new(ReadingId::FIRST, now(), reading))
        }
        async fn list(&self) -> Result<Vec<SensorReading>, SensorHubError> {
            Ok(vec![])
        }
        async fn latest(&self) -> Result<Option<SensorReading>, SensorHubError> {
            Ok(None)
        }
        async fn count(&self) -> Result<usize, SensorHubError> {
            Ok(0)
        }
    }

    fn test_app() -> Router {
        build(AppState::new(
            ReadingService::new(StubStore),
            DeviceConfig::default(),
        ))
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "ok");
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn should_serve_device_config() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/api/config")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({
                "sample_interval_ms": 5000,
                "device_name": "esp32-qemu-01",
                "firmware_version": "1.0.0",
                "sensors_enabled": ["temperature", "humidity"]
            })
        );
    }

    #[tokio::test]
    async fn should_return_not_found_when_store_empty() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/api/sensors/latest")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await, json!({"error": "No readings yet"}));
    }

    #[tokio::test]
    async fn should_return_created_for_json_object() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/sensors")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"temperature":23.1}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let body = body_json(response).await;
        assert_eq!(body["id"], 1);
        assert_eq!(body["device"], "unknown");
        assert!(body["humidity"].is_null());
    }

    #[tokio::test]
    async fn should_accept_json_object_larger_than_two_megabytes() {
        let note = "x".repeat(3 * 1024 * 1024);
        let payload = json!({"temperature": 1, "note": note}).to_string();

        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/sensors")
                    .header("content-type", "application/json")
                    .body(Body::from(payload))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(body_json(response).await["temperature"], 1);
    }

    #[tokio::test]
    async fn should_reject_body_without_json_content_type() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/sensors")
                    .body(Body::from(r#"{"temperature":23.1}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await, json!({"error": "Invalid JSON body"}));
    }

    #[tokio::test]
    async fn should_reject_malformed_json() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/sensors")
                    .header("content-type", "application/json")
                    .body(Body::from("{not json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await, json!({"error": "Invalid JSON body"}));
    }

    #[tokio::test]
    async fn should_reject_unknown_method() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/api/sensors")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
