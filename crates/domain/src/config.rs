//! Device configuration — static metadata handed to devices on request.

use serde::{Deserialize, Serialize};

/// Read-only configuration record served verbatim by `GET /api/config`.
///
/// Built once at start-up and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceConfig {
    pub sample_interval_ms: u64,
    pub device_name: String,
    pub firmware_version: String,
    pub sensors_enabled: Vec<String>,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            sample_interval_ms: 5000,
            device_name: "esp32-qemu-01".to_string(),
            firmware_version: "1.0.0".to_string(),
            sensors_enabled: vec!["temperature".to_string(), "humidity".to_string()],
        }
    }
}

impl DeviceConfig {
    /// Check the record before it is frozen for the process lifetime.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigValidationError::EmptyDeviceName`] if `device_name` is blank.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.device_name.trim().is_empty() {
            return Err(ConfigValidationError::EmptyDeviceName);
        }
        Ok(())
    }
}

/// Invalid device configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("device name must not be empty")]
    EmptyDeviceName,
}
