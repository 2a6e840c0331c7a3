//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`SensorHubError`] via `#[from]`.

/// Top-level error shared by every layer.
#[derive(Debug, thiserror::Error)]
pub enum SensorHubError {
    #[error("validation error")]
    Validation(#[from] ValidationError),

    #[error("not found")]
    NotFound(#[from] NotFoundError),

    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// A submission was rejected before reaching the store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The body was missing, not JSON, or not a non-empty JSON object.
    #[error("Invalid JSON body")]
    InvalidBody,
}

/// A lookup found nothing to return.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotFoundError {
    /// The store is still empty.
    #[error("No readings yet")]
    NoReadings,
}
