//! Records accepted by monitoring sinks

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Severity of a sink log message
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogSeverity {
    Debug,
    Info,
    Warning,
    Error,
}

/// A structured log message
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: LogSeverity,
    /// Originating module tag, e.g. `retraining_trigger`
    pub module: String,
    pub message: String,
    /// Structured payload
    pub extra_data: Option<Value>,
}

impl LogEntry {
    /// Create a log entry stamped with the current time
    pub fn new(level: LogSeverity, module: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            level,
            module: module.into(),
            message: message.into(),
            extra_data: None,
        }
    }

    /// Attach a structured payload
    pub fn with_extra(mut self, extra: Value) -> Self {
        self.extra_data = Some(extra);
        self
    }
}

/// A model accuracy record
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ModelMetricEntry {
    pub timestamp: DateTime<Utc>,
    pub model_name: String,
    /// Distinguishes monitoring records from training-run records
    pub model_type: String,
    pub rmse: f64,
    pub mae: f64,
    pub r2_score: f64,
    /// Seconds spent training; zero for monitoring records
    pub training_time: f64,
    pub parameters: Value,
}

/// Any record stored by a sink
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SinkRecord {
    Log(LogEntry),
    ModelMetric(ModelMetricEntry),
}

impl SinkRecord {
    pub(crate) fn as_log(&self, module: Option<&str>) -> Option<&LogEntry> {
        match self {
            SinkRecord::Log(entry) if module.is_none_or(|m| entry.module == m) => Some(entry),
            _ => None,
        }
    }

    pub(crate) fn as_model_metric(&self, model_type: Option<&str>) -> Option<&ModelMetricEntry> {
        match self {
            SinkRecord::ModelMetric(entry) if model_type.is_none_or(|t| entry.model_type == t) => {
                Some(entry)
            }
            _ => None,
        }
    }
}
