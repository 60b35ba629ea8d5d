//! Monitoring HTTP API
//!
//! Exposes drift checks, retraining decisions and triggers over HTTP. The
//! policy and trigger store are built once at startup and shared by all
//! requests.
//!
//! # Example
//!
//! ```ignore
//! use vigilar::server::{run, AppState, ServerConfig};
//!
//! let state = AppState::new(Arc::new(policy), Arc::new(triggers));
//! run(ServerConfig::default(), state).await?;
//! ```

mod api;
mod handlers;
mod state;


pub use api::{router, run};
pub use handlers::*;
pub use state::AppState;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::dataset::Record;
use crate::eval::retrain::Analysis;
use crate::eval::{DriftReport, RetrainingConfig};

/// Server errors
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Bind error: {0}")]
    Bind(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for server operations
pub type Result<T> = std::result::Result<T, ServerError>;

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".to_string(), port: 8000 }
    }
}

impl ServerConfig {
    /// `host:port` for binding
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Error body for non-2xx responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_secs: u64,
    pub reference_loaded: bool,
    pub baseline_loaded: bool,
}

// =============================================================================
// Request/Response DTOs
// =============================================================================

/// Drift check request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DriftRequest {
    /// Row-oriented feature records
    #[serde(default)]
    pub data: Option<Vec<Record>>,
}

/// Drift check response
#[derive(Debug, Clone, Serialize)]
pub struct DriftResponse {
    pub drift_analysis: Analysis<DriftReport>,
    pub timestamp: DateTime<Utc>,
}

/// Retraining check request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RetrainingCheckRequest {
    #[serde(default)]
    pub new_data: Vec<Record>,
    /// An empty list is treated as absent
    #[serde(default)]
    pub predictions: Option<Vec<f64>>,
    #[serde(default)]
    pub actuals: Option<Vec<f64>>,
}

/// Active configuration response
#[derive(Debug, Clone, Serialize)]
pub struct ConfigResponse {
    pub config: RetrainingConfig,
    pub timestamp: DateTime<Utc>,
}

/// Monitoring status response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub monitoring_active: bool,
    pub drift_detection_enabled: bool,
    pub performance_monitoring_enabled: bool,
    pub automatic_retraining_enabled: bool,
    pub pending_retraining_triggers: usize,
    pub trigger_files: Vec<String>,
    pub timestamp: DateTime<Utc>,
}
