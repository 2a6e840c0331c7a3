//! Health report returned by the liveness endpoint.

use serde::{Deserialize, Serialize};

use crate::time::{Timestamp, now};

/// `{"status": "ok", "timestamp": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: Timestamp,
}

impl HealthStatus {
    /// A healthy report stamped with the current time.
    #[must_use]
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: now(),
        }
    }
}
