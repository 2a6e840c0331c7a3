//! # sensorhub-adapter-storage-memory
//!
//! Process-local storage for sensor readings.
//!
//! ## Responsibilities
//! - Implement the [`ReadingStore`](sensorhub_app::ports::ReadingStore) port
//! - Keep readings in insertion order for the lifetime of the process
//! - Serialise appends so ids stay gapless under concurrent submissions
//!
//! Nothing is written to disk: restarting the process starts from an empty store.
//!
//! ## Dependency rule
//! Depends on `sensorhub-app` (for port traits) and `sensorhub-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod error;
pub mod reading_store;

pub use error::StorageError;
pub use reading_store::InMemoryReadingStore;
