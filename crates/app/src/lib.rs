//! # sensorhub-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `ReadingStore` — append-only reading sequence
//! - Define **driving/inbound ports** as use-case structs:
//!   - `ReadingService` — submit, list, latest
//! - Orchestrate domain objects without knowing *how* storage or IO works
//!
//! ## Dependency rule
//! Depends on `sensorhub-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
