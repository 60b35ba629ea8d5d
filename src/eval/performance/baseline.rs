//! Baseline metrics recorded at training time.

use std::path::Path;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Accuracy of the deployed model at training time
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BaselineMetrics {
    pub rmse: f64,
    pub mae: f64,
    pub r2: f64,
    /// ISO-8601 training time, kept verbatim until needed
    #[serde(default)]
    pub training_timestamp: Option<String>,
}

impl BaselineMetrics {
    /// Read baseline metrics from a JSON artifact.
    ///
    /// Returns `Ok(None)` when the file does not exist.
    pub fn load(path: impl AsRef<Path>) -> Result<Option<Self>> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(path).map_err(|e| Error::BaselineLoad {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let metrics = serde_json::from_str(&content).map_err(|e| Error::BaselineLoad {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Ok(Some(metrics))
    }

    /// Parsed training time, if one was recorded
    pub fn trained_at(&self) -> Option<std::result::Result<DateTime<Utc>, chrono::ParseError>> {
        self.training_timestamp.as_deref().map(parse_timestamp)
    }
}

/// Parse an ISO-8601 timestamp.
///
/// Accepts RFC 3339, a naive `YYYY-MM-DDTHH:MM:SS[.fff]` (space separator
/// also accepted) read as UTC, or a bare date read as UTC midnight.
pub fn parse_timestamp(raw: &str) -> std::result::Result<DateTime<Utc>, chrono::ParseError> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(naive.and_utc());
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f") {
        return Ok(naive.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(|date| date.and_time(chrono::NaiveTime::default()).and_utc())
}

/// Result of loading the baseline artifact once at startup
#[derive(Clone, Debug, PartialEq)]
pub enum BaselineSource {
    /// Artifact parsed successfully
    Loaded(BaselineMetrics),
    /// No artifact on disk
    Missing,
    /// Artifact present but unreadable or malformed
    Failed(String),
}

impl BaselineSource {
    /// Load from disk, folding errors into [`BaselineSource::Failed`]
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match BaselineMetrics::load(path) {
            Ok(Some(metrics)) => {
                tracing::info!(
                    path = %path.display(),
                    rmse = metrics.rmse,
                    "baseline metrics loaded"
                );
                Self::Loaded(metrics)
            }
            Ok(None) => {
                tracing::warn!(path = %path.display(), "baseline metrics not found");
                Self::Missing
            }
            Err(error) => {
                tracing::warn!(%error, "could not load baseline metrics");
                Self::Failed(error.to_string())
            }
        }
    }

    /// The loaded metrics, if any
    pub fn metrics(&self) -> Option<&BaselineMetrics> {
        match self {
            Self::Loaded(metrics) => Some(metrics),
            Self::Missing | Self::Failed(_) => None,
        }
    }
}

impl From<BaselineMetrics> for BaselineSource {
    fn from(metrics: BaselineMetrics) -> Self {
        Self::Loaded(metrics)
    }
}

impl From<Option<BaselineMetrics>> for BaselineSource {
    fn from(metrics: Option<BaselineMetrics>) -> Self {
        metrics.map_or(Self::Missing, Self::Loaded)
    }
}
