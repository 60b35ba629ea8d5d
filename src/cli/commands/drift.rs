//! Drift command implementation

use super::setup::{load_config, read_frame};
use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{DriftArgs, OutputFormat};
use crate::eval::DriftDetector;

pub fn run_drift(args: DriftArgs, level: LogLevel) -> Result<(), String> {
    let level = level.for_output(args.format);
    log(level, LogLevel::Normal, &format!("Checking drift: {}", args.data.display()));

    let batch = read_frame(&args.data)?;
    let threshold = match args.threshold {
        Some(threshold) => threshold,
        None => load_config(&args.paths, level).drift_threshold,
    };
    log(level, LogLevel::Verbose, &format!("  Reference: {}", args.paths.reference.display()));
    log(level, LogLevel::Verbose, &format!("  KS threshold: {threshold}"));

    let detector = DriftDetector::from_csv(&args.paths.reference);
    let report = detector.detect_drift(&batch, threshold).map_err(|e| e.to_string())?;

    if args.format == OutputFormat::Json {
        let json = serde_json::to_string_pretty(&report).map_err(|e| e.to_string())?;
        println!("{json}");
    } else {
        log(level, LogLevel::Normal, "Drift Results:");
        log(
            level,
            LogLevel::Normal,
            &format!(
                "  Drifted features: {}/{} ({:.0}%)",
                report.drifted_features.len(),
                report.compared_features,
                report.drift_fraction() * 100.0
            ),
        );
        for (name, score) in &report.drift_scores {
            log(
                level,
                LogLevel::Verbose,
                &format!(
                    "  {name}: D={:.4} p={:.4} psi={:.4}{}",
                    score.ks_statistic,
                    score.p_value,
                    score.psi,
                    if score.drifted { " DRIFT" } else { "" }
                ),
            );
        }
        if !report.skipped_features.is_empty() {
            log(
                level,
                LogLevel::Normal,
                &format!("  Skipped: {}", report.skipped_features.join(", ")),
            );
        }
        log(level, LogLevel::Normal, &format!("  Overall drift: {}", report.overall_drift));
    }

    if report.overall_drift {
        return Err(format!(
            "Drift detected in {} of {} features",
            report.drifted_features.len(),
            report.compared_features
        ));
    }

    Ok(())
}
