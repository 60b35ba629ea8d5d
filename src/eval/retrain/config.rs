//! Retraining policy configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Which monitoring checks run at all
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitoringToggles {
    pub enable_drift_detection: bool,
    pub enable_performance_monitoring: bool,
}

impl Default for MonitoringToggles {
    fn default() -> Self {
        Self { enable_drift_detection: true, enable_performance_monitoring: true }
    }
}

/// Thresholds and flags for the retraining decision.
///
/// Every key is optional in the JSON file; missing keys keep their default
/// and unknown keys are ignored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrainingConfig {
    /// KS p-value below which a feature counts as drifted
    pub drift_threshold: f64,
    /// Relative RMSE increase or R² decrease that counts as degradation
    pub performance_threshold: f64,
    pub min_samples_for_retraining: usize,
    pub max_days_since_last_training: u32,
    /// Master switch; when off, a positive decision is forced to false
    pub enable_automatic_retraining: bool,
    pub monitoring_config: MonitoringToggles,
}

impl Default for RetrainingConfig {
    fn default() -> Self {
        Self {
            drift_threshold: 0.05,
            performance_threshold: 0.1,
            min_samples_for_retraining: 100,
            max_days_since_last_training: 30,
            enable_automatic_retraining: true,
            monitoring_config: MonitoringToggles::default(),
        }
    }
}

/// A configuration together with the reason defaults were used, if any
#[derive(Clone, Debug, PartialEq)]
pub struct LoadedConfig {
    pub config: RetrainingConfig,
    /// Set when the file existed but could not be used
    pub warning: Option<String>,
}

impl RetrainingConfig {
    /// Parse a (possibly partial) JSON document
    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Read the config file; `Ok(None)` when it does not exist
    pub fn try_load(path: impl AsRef<Path>) -> Result<Option<Self>> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(path).map_err(|e| Error::ConfigLoad {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let config = Self::from_json_str(&content).map_err(|e| Error::ConfigLoad {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Ok(Some(config))
    }

    /// Load the config file, falling back to defaults on any failure
    pub fn load(path: impl AsRef<Path>) -> LoadedConfig {
        let path = path.as_ref();
        match Self::try_load(path) {
            Ok(Some(config)) => {
                tracing::info!(path = %path.display(), "retraining config loaded");
                LoadedConfig { config, warning: None }
            }
            Ok(None) => {
                tracing::debug!(path = %path.display(), "no retraining config, using defaults");
                LoadedConfig { config: Self::default(), warning: None }
            }
            Err(error) => {
                tracing::warn!(%error, "using default retraining config");
                LoadedConfig { config: Self::default(), warning: Some(error.to_string()) }
            }
        }
    }
}
