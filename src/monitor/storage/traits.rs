//! Monitoring sink trait definitions

use super::error::SinkResult;
use super::record::{LogEntry, ModelMetricEntry};

/// Log/metric sink backend trait.
///
/// Writes take `&self` so a single sink can be shared across request
/// handlers; implementations synchronise internally.
pub trait MonitoringSink: Send + Sync {
    /// Append a log message
    fn log_message(&self, entry: LogEntry) -> SinkResult<()>;

    /// Append a model metric record
    fn log_model_metric(&self, entry: ModelMetricEntry) -> SinkResult<()>;

    /// Log messages, optionally restricted to one module tag
    fn query_logs(&self, module: Option<&str>) -> SinkResult<Vec<LogEntry>>;

    /// Model metric records, optionally restricted to one model type
    fn query_model_metrics(&self, model_type: Option<&str>) -> SinkResult<Vec<ModelMetricEntry>>;

    /// Total number of records of any kind
    fn count(&self) -> SinkResult<usize>;
}
