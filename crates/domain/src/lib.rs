//! # sensorhub-domain
//!
//! Pure domain model for the sensorhub reading collector.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **Readings** (sensor data points numbered and timestamped at receipt)
//! - Define the **Device configuration** record served to clients
//! - Define the **Health** report
//! - Turn a raw JSON submission into a [`reading::NewReading`]
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod config;
pub mod health;
pub mod reading;
