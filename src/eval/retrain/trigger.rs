//! File-based retraining triggers.
//!
//! A trigger is a small JSON file dropped into a watched directory for an
//! external training job to pick up. Every call writes a new file.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

use super::policy::DECISION_LOG_MODULE;
use crate::monitor::storage::{LogEntry, LogSeverity, MonitoringSink};

/// Originator recorded when none is configured
pub const DEFAULT_ORIGINATOR: &str = "automated_monitoring";

/// File extension of trigger files
pub const TRIGGER_EXTENSION: &str = "trigger";

const TRIGGER_PREFIX: &str = "retrain_model";

/// Lifecycle state of a trigger; this crate only ever writes `Pending`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerStatus {
    Pending,
}

/// Contents of a trigger file
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TriggerRecord {
    pub timestamp: DateTime<Utc>,
    pub triggered_by: String,
    pub status: TriggerStatus,
}

/// Outcome of a trigger request
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TriggerResult {
    Success { trigger_file: PathBuf, timestamp: DateTime<Utc>, message: String },
    Error { error: String, timestamp: DateTime<Utc> },
}

impl TriggerResult {
    pub fn is_success(&self) -> bool {
        matches!(self, TriggerResult::Success { .. })
    }
}

/// Writes trigger files into one directory
pub struct TriggerStore {
    dir: PathBuf,
    originator: String,
    sink: Arc<dyn MonitoringSink>,
}

impl TriggerStore {
    pub fn new(dir: impl Into<PathBuf>, sink: Arc<dyn MonitoringSink>) -> Self {
        Self { dir: dir.into(), originator: DEFAULT_ORIGINATOR.to_string(), sink }
    }

    /// Override the `triggered_by` value
    #[must_use]
    pub fn with_originator(mut self, originator: impl Into<String>) -> Self {
        self.originator = originator.into();
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write a new pending trigger file.
    ///
    /// Never panics or returns `Err`: filesystem failures are reported as
    /// [`TriggerResult::Error`].
    pub fn trigger_retraining(&self) -> TriggerResult {
        let timestamp = Utc::now();
        match self.write_trigger(timestamp) {
            Ok(path) => {
                tracing::info!(path = %path.display(), "retraining triggered");
                let entry = LogEntry::new(
                    LogSeverity::Info,
                    DECISION_LOG_MODULE,
                    "Model retraining triggered",
                )
                .with_extra(json!({ "trigger_file": path, "triggered_by": self.originator }));
                if let Err(error) = self.sink.log_message(entry) {
                    tracing::warn!(%error, "failed to record retraining trigger");
                }
                TriggerResult::Success {
                    trigger_file: path,
                    timestamp,
                    message: "Model retraining triggered successfully".to_string(),
                }
            }
            Err(error) => {
                tracing::error!(dir = %self.dir.display(), %error, "failed to write trigger");
                TriggerResult::Error { error: error.to_string(), timestamp }
            }
        }
    }

    fn write_trigger(&self, timestamp: DateTime<Utc>) -> io::Result<PathBuf> {
        fs::create_dir_all(&self.dir)?;
        let name = format!(
            "{TRIGGER_PREFIX}-{}-{}.{TRIGGER_EXTENSION}",
            timestamp.format("%Y%m%dT%H%M%S%6fZ"),
            Uuid::new_v4().simple()
        );

        let record = TriggerRecord {
            timestamp,
            triggered_by: self.originator.clone(),
            status: TriggerStatus::Pending,
        };
        let body = serde_json::to_vec_pretty(&record)?;

        publish(&self.dir, &name, |file| file.write_all(&body))
    }

    /// Trigger files currently in the directory, sorted by name.
    ///
    /// A missing directory has no triggers.
    pub fn pending_triggers(&self) -> io::Result<Vec<PathBuf>> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e),
        };
        let mut paths = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == TRIGGER_EXTENSION) {
                paths.push(path);
            }
        }
        paths.sort();
        Ok(paths)
    }

    pub fn has_pending(&self) -> io::Result<bool> {
        Ok(!self.pending_triggers()?.is_empty())
    }

    /// Read a trigger file back
    pub fn read_trigger(path: impl AsRef<Path>) -> crate::Result<TriggerRecord> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

/// Write `dir/name` through a hidden temp file in the same directory and
/// rename it into place, so a reader never sees a partial trigger.
///
/// On any failure the temp file is removed and `dir/name` does not exist.
pub(crate) fn publish(
    dir: &Path,
    name: &str,
    write: impl FnOnce(&mut File) -> io::Result<()>,
) -> io::Result<PathBuf> {
    let path = dir.join(name);
    let temp_path = dir.join(format!(".{name}.tmp"));

    let result = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&temp_path)
        .and_then(|mut file| {
            write(&mut file)?;
            file.sync_all()
        })
        .and_then(|()| fs::rename(&temp_path, &path));

    match result {
        Ok(()) => Ok(path),
        Err(error) => {
            let _ = fs::remove_file(&temp_path);
            Err(error)
        }
    }
}
