//! CLI command tests

use super::*;
use crate::cli::LogLevel;
use crate::config::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const REFERENCE_CSV: &str = "A,B\n1,10\n2,20\n3,30\n4,40\n5,50\n6,60\n7,70\n8,80\n9,90\n10,100\n";

/// Paths rooted in a temp dir, with a reference dataset and fresh baseline
fn test_paths(dir: &TempDir) -> PathArgs {
    let root = dir.path();
    std::fs::write(root.join("X_train.csv"), REFERENCE_CSV).unwrap();
    let trained = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%S").to_string();
    std::fs::write(
        root.join("metrics.json"),
        format!(r#"{{"rmse": 1.0, "mae": 0.8, "r2": 0.9, "training_timestamp": "{trained}"}}"#),
    )
    .unwrap();
    std::fs::write(root.join("config.json"), r#"{"min_samples_for_retraining": 5}"#).unwrap();

    PathArgs {
        config: root.join("config.json"),
        reference: root.join("X_train.csv"),
        baseline: root.join("metrics.json"),
        triggers_dir: root.join("triggers"),
        log_file: root.join("logs").join("monitoring.jsonl"),
    }
}

fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

fn trigger_count(paths: &PathArgs) -> usize {
    std::fs::read_dir(&paths.triggers_dir).map(|d| d.count()).unwrap_or(0)
}

#[test]
fn test_drift_command_no_drift() {
    let dir = TempDir::new().unwrap();
    let paths = test_paths(&dir);
    let data = write(dir.path(), "batch.csv", REFERENCE_CSV);

    let args = DriftArgs { data, threshold: None, format: OutputFormat::Text, paths };
    assert!(drift::run_drift(args, LogLevel::Quiet).is_ok());
}

#[test]
fn test_drift_command_reports_drift() {
    let dir = TempDir::new().unwrap();
    let paths = test_paths(&dir);
    let data = write(
        dir.path(),
        "batch.csv",
        "A,B\n100,1000\n200,2000\n300,3000\n400,4000\n500,5000\n600,6000\n",
    );

    let args = DriftArgs { data, threshold: None, format: OutputFormat::Json, paths };
    let err = drift::run_drift(args, LogLevel::Quiet).unwrap_err();
    assert!(err.contains("Drift detected"));
}

#[test]
fn test_drift_command_missing_reference() {
    let dir = TempDir::new().unwrap();
    let mut paths = test_paths(&dir);
    paths.reference = dir.path().join("absent.csv");
    let data = write(dir.path(), "batch.csv", REFERENCE_CSV);

    let args = DriftArgs { data, threshold: Some(0.05), format: OutputFormat::Text, paths };
    let err = drift::run_drift(args, LogLevel::Quiet).unwrap_err();
    assert_eq!(err, "Reference data not available");
}

#[test]
fn test_drift_command_missing_data() {
    let dir = TempDir::new().unwrap();
    let paths = test_paths(&dir);
    let args = DriftArgs {
        data: dir.path().join("nope.csv"),
        threshold: None,
        format: OutputFormat::Text,
        paths,
    };
    let err = drift::run_drift(args, LogLevel::Quiet).unwrap_err();
    assert!(err.starts_with("File not found"));
}

#[test]
fn test_check_command_no_retrain() {
    let dir = TempDir::new().unwrap();
    let paths = test_paths(&dir);
    let data = write(dir.path(), "batch.csv", REFERENCE_CSV);

    let args = CheckArgs {
        data: Some(data),
        predictions: None,
        actuals: None,
        trigger: true,
        format: OutputFormat::Json,
        paths: paths.clone(),
    };
    assert!(check::run_check(args, LogLevel::Quiet).is_ok());
    assert_eq!(trigger_count(&paths), 0);
    assert!(paths.log_file.exists());
}

#[test]
fn test_check_command_triggers_on_degradation() {
    let dir = TempDir::new().unwrap();
    let paths = test_paths(&dir);
    let predictions = write(dir.path(), "predictions.txt", "prediction\n0\n0\n0\n");
    let actuals = write(dir.path(), "actuals.json", "[3.0, 3.0, 3.0]");

    let args = CheckArgs {
        data: None,
        predictions: Some(predictions),
        actuals: Some(actuals),
        trigger: true,
        format: OutputFormat::Text,
        paths: paths.clone(),
    };
    assert!(check::run_check(args, LogLevel::Quiet).is_ok());
    assert_eq!(trigger_count(&paths), 1);
}

#[test]
fn test_check_command_without_trigger_flag() {
    let dir = TempDir::new().unwrap();
    let paths = test_paths(&dir);
    let predictions = write(dir.path(), "predictions.txt", "0\n0\n0\n");
    let actuals = write(dir.path(), "actuals.txt", "3\n3\n3\n");

    let args = CheckArgs {
        data: None,
        predictions: Some(predictions),
        actuals: Some(actuals),
        trigger: false,
        format: OutputFormat::Text,
        paths: paths.clone(),
    };
    assert!(check::run_check(args, LogLevel::Quiet).is_ok());
    assert_eq!(trigger_count(&paths), 0);
}

#[test]
fn test_check_command_bad_values_file() {
    let dir = TempDir::new().unwrap();
    let paths = test_paths(&dir);
    let predictions = write(dir.path(), "predictions.txt", "1\ntwo\n");
    let actuals = write(dir.path(), "actuals.txt", "1\n2\n");

    let args = CheckArgs {
        data: None,
        predictions: Some(predictions),
        actuals: Some(actuals),
        trigger: false,
        format: OutputFormat::Text,
        paths,
    };
    assert!(check::run_check(args, LogLevel::Quiet).is_err());
}

#[test]
fn test_trigger_command() {
    let dir = TempDir::new().unwrap();
    let paths = test_paths(&dir);
    let args = TriggerArgs {
        originator: "cli".to_string(),
        format: OutputFormat::Text,
        paths: paths.clone(),
    };
    assert!(trigger::run_trigger(args, LogLevel::Quiet).is_ok());
    assert_eq!(trigger_count(&paths), 1);
}

#[test]
fn test_trigger_command_unwritable() {
    let dir = TempDir::new().unwrap();
    let mut paths = test_paths(&dir);
    paths.triggers_dir = write(dir.path(), "blocker", "not a directory");

    let args =
        TriggerArgs { originator: "cli".to_string(), format: OutputFormat::Json, paths };
    let err = trigger::run_trigger(args, LogLevel::Quiet).unwrap_err();
    assert!(err.starts_with("Failed to trigger retraining"));
}

#[test]
fn test_status_command() {
    let dir = TempDir::new().unwrap();
    let paths = test_paths(&dir);
    let args = StatusArgs { format: OutputFormat::Json, paths: paths.clone() };
    assert!(status::run_status(args, LogLevel::Quiet).is_ok());

    let args = StatusArgs { format: OutputFormat::Text, paths };
    assert!(status::run_status(args, LogLevel::Quiet).is_ok());
}

#[test]
fn test_run_command_dispatch() {
    let dir = TempDir::new().unwrap();
    let paths = test_paths(&dir);
    let cli = Cli {
        command: Command::Status(StatusArgs { format: OutputFormat::Text, paths }),
        verbose: false,
        quiet: true,
    };
    assert!(run_command(cli).is_ok());
}

#[test]
fn test_parse_values() {
    assert_eq!(setup::parse_values("[1, 2.5]").unwrap(), vec![1.0, 2.5]);
    assert_eq!(setup::parse_values("y\n1\n\n2\n").unwrap(), vec![1.0, 2.0]);
    assert!(setup::parse_values("1\nx\n").is_err());
    assert!(setup::parse_values("").unwrap().is_empty());
}
