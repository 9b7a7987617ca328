//! Configuration models and loading for Nexus.
//!
//! This crate owns the Nexus config schema: default chat settings, model
//! selection, history persistence paths, simulation tick intervals, and
//! catalog generation parameters.

mod error;
mod model;

/// Public error type returned by config loading APIs.
pub use error::ConfigError;
/// Configuration schema models.
pub use model::*;
