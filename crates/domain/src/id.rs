//! Sequential reading identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a [`SensorReading`](crate::reading::SensorReading).
///
/// Ids start at 1 and are assigned as `existing_count + 1`, so they are
/// strictly increasing with no gaps. Serialised as a bare integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReadingId(u64);

impl ReadingId {
    /// The id given to the first reading of a fresh store.
    pub const FIRST: Self = Self(1);

    /// The id the next reading receives when `count` readings already exist.
    #[must_use]
    pub fn next_after(count: usize) -> Self {
        Self(count as u64 + 1)
    }

    /// Access the inner integer.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ReadingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
