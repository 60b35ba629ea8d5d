//! Crate-level error type for file loaders.
//!
//! The decision path itself never returns these: each step converts failures
//! into values carried on the report or decision.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for vigilar operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by file loaders.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration file exists but could not be read or parsed.
    #[error("Could not load retraining config from {path}: {message}")]
    ConfigLoad { path: PathBuf, message: String },

    /// Baseline metrics artifact exists but could not be read or parsed.
    #[error("Could not load baseline metrics from {path}: {message}")]
    BaselineLoad { path: PathBuf, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
