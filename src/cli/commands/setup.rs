//! Component construction shared by the command handlers

use std::path::Path;
use std::sync::Arc;

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::PathArgs;
use crate::eval::{RetrainingConfig, RetrainingPolicy, TriggerStore};
use crate::monitor::storage::{JsonLinesSink, MonitoringSink};
use crate::FeatureFrame;

/// Everything a command needs, built once from the command line
pub struct Components {
    pub policy: RetrainingPolicy,
    pub triggers: TriggerStore,
}

/// Open the JSON-lines monitoring log
pub fn open_sink(paths: &PathArgs) -> Result<Arc<dyn MonitoringSink>, String> {
    let sink = JsonLinesSink::open(&paths.log_file).map_err(|e| {
        format!("Cannot open monitoring log {}: {e}", paths.log_file.display())
    })?;
    Ok(Arc::new(sink))
}

/// Load the retraining config, reporting a fallback to defaults
pub fn load_config(paths: &PathArgs, level: LogLevel) -> RetrainingConfig {
    let loaded = RetrainingConfig::load(&paths.config);
    if let Some(warning) = &loaded.warning {
        log(level, LogLevel::Normal, &format!("Warning: {warning}; using defaults"));
    }
    loaded.config
}

/// Build the policy and trigger store
pub fn build(paths: &PathArgs, level: LogLevel) -> Result<Components, String> {
    let sink = open_sink(paths)?;
    let config = load_config(paths, level);
    let policy =
        RetrainingPolicy::from_paths(config, &paths.reference, &paths.baseline, Arc::clone(&sink));
    if !policy.detector().has_reference() {
        log(
            level,
            LogLevel::Verbose,
            &format!("  Reference data unavailable: {}", paths.reference.display()),
        );
    }
    let triggers = TriggerStore::new(&paths.triggers_dir, sink);
    Ok(Components { policy, triggers })
}

/// Read a feature batch from CSV
pub fn read_frame(path: &Path) -> Result<FeatureFrame, String> {
    if !path.exists() {
        return Err(format!("File not found: {}", path.display()));
    }
    FeatureFrame::from_csv_path(path).map_err(|e| format!("Cannot read {}: {e}", path.display()))
}

/// Read numeric values from a JSON array or a one-value-per-line file.
///
/// A non-numeric first line is treated as a header and skipped.
pub fn read_values(path: &Path) -> Result<Vec<f64>, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Cannot read {}: {e}", path.display()))?;
    parse_values(&content).map_err(|e| format!("{}: {e}", path.display()))
}

pub(crate) fn parse_values(content: &str) -> Result<Vec<f64>, String> {
    let trimmed = content.trim_start();
    if trimmed.starts_with('[') {
        return serde_json::from_str(trimmed).map_err(|e| format!("invalid JSON array: {e}"));
    }

    let mut values = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match line.parse::<f64>() {
            Ok(value) => values.push(value),
            Err(_) if idx == 0 => {}
            Err(_) => return Err(format!("line {}: not a number: {line:?}", idx + 1)),
        }
    }
    Ok(values)
}
