//! Status command implementation

use chrono::Utc;
use serde_json::json;

use super::setup::{load_config, open_sink};
use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{OutputFormat, StatusArgs};
use crate::eval::TriggerStore;

pub fn run_status(args: StatusArgs, level: LogLevel) -> Result<(), String> {
    let level = level.for_output(args.format);
    let config = load_config(&args.paths, level);
    let store = TriggerStore::new(&args.paths.triggers_dir, open_sink(&args.paths)?);
    let pending = store
        .pending_triggers()
        .map_err(|e| format!("Cannot list {}: {e}", args.paths.triggers_dir.display()))?;

    if args.format == OutputFormat::Json {
        let names: Vec<String> = pending
            .iter()
            .filter_map(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
            .collect();
        let status = json!({
            "config": config,
            "pending_retraining_triggers": pending.len(),
            "trigger_files": names,
            "timestamp": Utc::now(),
        });
        let json = serde_json::to_string_pretty(&status).map_err(|e| e.to_string())?;
        println!("{json}");
        return Ok(());
    }

    log(level, LogLevel::Normal, "Monitoring Status:");
    log(
        level,
        LogLevel::Normal,
        &format!("  Drift detection: {}", config.monitoring_config.enable_drift_detection),
    );
    log(
        level,
        LogLevel::Normal,
        &format!(
            "  Performance monitoring: {}",
            config.monitoring_config.enable_performance_monitoring
        ),
    );
    log(
        level,
        LogLevel::Normal,
        &format!("  Automatic retraining: {}", config.enable_automatic_retraining),
    );
    log(level, LogLevel::Normal, &format!("  Pending triggers: {}", pending.len()));
    for path in &pending {
        log(level, LogLevel::Verbose, &format!("    {}", path.display()));
    }
    Ok(())
}
