//! Reading — one sensor data point, numbered and timestamped at receipt.
//!
//! Submissions are deliberately permissive: only the overall shape of the
//! body is checked. `temperature`, `humidity` and `device` are open JSON
//! slots stored exactly as the client sent them.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ValidationError;
use crate::id::ReadingId;
use crate::time::Timestamp;

/// Device name recorded when a submission does not carry one.
pub const UNKNOWN_DEVICE: &str = "unknown";

/// A stored reading. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorReading {
    pub id: ReadingId,
    pub received_at: Timestamp,
    pub device: Value,
    pub temperature: Value,
    pub humidity: Value,
}

impl SensorReading {
    /// Stamp a submission with its id and receipt time.
    #[must_use]
    pub fn new(id: ReadingId, received_at: Timestamp, reading: NewReading) -> Self {
        Self {
            id,
            received_at,
            device: reading.device,
            temperature: reading.temperature,
            humidity: reading.humidity,
        }
    }
}

/// A validated submission that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewReading {
    pub device: Value,
    pub temperature: Value,
    pub humidity: Value,
}

impl NewReading {
    /// Extract a submission from a parsed request body.
    ///
    /// The body must be a non-empty JSON object. A missing `device` falls
    /// back to [`UNKNOWN_DEVICE`]; missing `temperature` or `humidity`
    /// become `null`. Present values are kept verbatim whatever their type.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidBody`] when the body is not an
    /// object or is an empty object.
    pub fn from_json(body: Value) -> Result<Self, ValidationError> {
        match body {
            Value::Object(fields) if !fields.is_empty() => Ok(Self::from_fields(fields)),
            _ => Err(ValidationError::InvalidBody),
        }
    }

    fn from_fields(mut fields: Map<String, Value>) -> Self {
        Self {
            device: fields
                .remove("device")
                .unwrap_or_else(|| Value::String(UNKNOWN_DEVICE.to_owned())),
            temperature: fields.remove("temperature").unwrap_or(Value::Null),
            humidity: fields.remove("humidity").unwrap_or(Value::Null),
        }
    }
}

/// Every stored reading in insertion order, with its length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadingList {
    pub readings: Vec<SensorReading>,
    pub count: usize,
}

impl From<Vec<SensorReading>> for ReadingList {
    fn from(readings: Vec<SensorReading>) -> Self {
        let count = readings.len();
        Self { readings, count }
    }
}
