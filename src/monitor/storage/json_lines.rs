//! JSON-lines file sink implementation

use std::fs::OpenOptions;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::error::{SinkError, SinkResult};
use super::record::{LogEntry, ModelMetricEntry, SinkRecord};
use super::traits::MonitoringSink;

/// Append-only sink writing one JSON record per line
#[derive(Debug)]
pub struct JsonLinesSink {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonLinesSink {
    /// Open (or create) a JSON-lines sink, creating parent directories
    pub fn open<P: AsRef<Path>>(path: P) -> SinkResult<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        OpenOptions::new().create(true).append(true).open(&path)?;
        Ok(Self { path, write_lock: Mutex::new(()) })
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn append(&self, record: &SinkRecord) -> SinkResult<()> {
        let line = serde_json::to_string(record)?;
        let _guard = self.write_lock.lock().map_err(|_| SinkError::Poisoned)?;
        let mut file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        writeln!(file, "{line}")?;
        Ok(())
    }

    fn read_all(&self) -> SinkResult<Vec<SinkRecord>> {
        let _guard = self.write_lock.lock().map_err(|_| SinkError::Poisoned)?;
        let file = std::fs::File::open(&self.path)?;
        let mut records = Vec::new();
        for line in BufReader::new(file).lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            records.push(serde_json::from_str(&line)?);
        }
        Ok(records)
    }
}

impl MonitoringSink for JsonLinesSink {
    fn log_message(&self, entry: LogEntry) -> SinkResult<()> {
        self.append(&SinkRecord::Log(entry))
    }

    fn log_model_metric(&self, entry: ModelMetricEntry) -> SinkResult<()> {
        self.append(&SinkRecord::ModelMetric(entry))
    }

    fn query_logs(&self, module: Option<&str>) -> SinkResult<Vec<LogEntry>> {
        Ok(self.read_all()?.iter().filter_map(|r| r.as_log(module)).cloned().collect())
    }

    fn query_model_metrics(&self, model_type: Option<&str>) -> SinkResult<Vec<ModelMetricEntry>> {
        Ok(self
            .read_all()?
            .iter()
            .filter_map(|r| r.as_model_metric(model_type))
            .cloned()
            .collect())
    }

    fn count(&self) -> SinkResult<usize> {
        Ok(self.read_all()?.len())
    }
}
