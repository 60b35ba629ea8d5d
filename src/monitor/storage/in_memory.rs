//! In-memory sink implementation

use std::sync::Mutex;

use super::error::{SinkError, SinkResult};
use super::record::{LogEntry, ModelMetricEntry, SinkRecord};
use super::traits::MonitoringSink;

/// In-memory sink (tests, embedded use)
#[derive(Debug, Default)]
pub struct InMemorySink {
    records: Mutex<Vec<SinkRecord>>,
}

impl InMemorySink {
    /// Create a new in-memory sink
    pub fn new() -> Self {
        Self { records: Mutex::new(Vec::new()) }
    }

    /// Snapshot of all records in write order
    pub fn all_records(&self) -> SinkResult<Vec<SinkRecord>> {
        Ok(self.records.lock().map_err(|_| SinkError::Poisoned)?.clone())
    }

    fn push(&self, record: SinkRecord) -> SinkResult<()> {
        self.records.lock().map_err(|_| SinkError::Poisoned)?.push(record);
        Ok(())
    }
}

impl MonitoringSink for InMemorySink {
    fn log_message(&self, entry: LogEntry) -> SinkResult<()> {
        self.push(SinkRecord::Log(entry))
    }

    fn log_model_metric(&self, entry: ModelMetricEntry) -> SinkResult<()> {
        self.push(SinkRecord::ModelMetric(entry))
    }

    fn query_logs(&self, module: Option<&str>) -> SinkResult<Vec<LogEntry>> {
        let records = self.records.lock().map_err(|_| SinkError::Poisoned)?;
        Ok(records.iter().filter_map(|r| r.as_log(module)).cloned().collect())
    }

    fn query_model_metrics(&self, model_type: Option<&str>) -> SinkResult<Vec<ModelMetricEntry>> {
        let records = self.records.lock().map_err(|_| SinkError::Poisoned)?;
        Ok(records.iter().filter_map(|r| r.as_model_metric(model_type)).cloned().collect())
    }

    fn count(&self) -> SinkResult<usize> {
        Ok(self.records.lock().map_err(|_| SinkError::Poisoned)?.len())
    }
}
