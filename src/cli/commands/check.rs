//! Check command implementation

use super::setup::{build, read_frame, read_values};
use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{CheckArgs, OutputFormat};
use crate::eval::retrain::Analysis;
use crate::eval::TriggerResult;
use crate::FeatureFrame;

pub fn run_check(args: CheckArgs, level: LogLevel) -> Result<(), String> {
    let level = level.for_output(args.format);
    let components = build(&args.paths, level)?;

    let batch = match &args.data {
        Some(path) => read_frame(path)?,
        None => FeatureFrame::new(),
    };
    let predictions = args.predictions.as_deref().map(read_values).transpose()?;
    let actuals = args.actuals.as_deref().map(read_values).transpose()?;

    let decision =
        components.policy.should_retrain(&batch, predictions.as_deref(), actuals.as_deref());

    let trigger = if args.trigger && decision.should_retrain {
        Some(components.triggers.trigger_retraining())
    } else {
        None
    };

    if args.format == OutputFormat::Json {
        let output = serde_json::json!({ "decision": decision, "trigger": trigger });
        let json = serde_json::to_string_pretty(&output).map_err(|e| e.to_string())?;
        println!("{json}");
    } else {
        log(level, LogLevel::Normal, "Retraining Decision:");
        log(level, LogLevel::Normal, &format!("  Should retrain: {}", decision.should_retrain));
        for reason in &decision.reasons {
            log(level, LogLevel::Normal, &format!("  - {reason}"));
        }
        if let Some(Analysis::Completed(report)) = &decision.drift_analysis {
            log(
                level,
                LogLevel::Verbose,
                &format!(
                    "  Drift: {}/{} features",
                    report.drifted_features.len(),
                    report.compared_features
                ),
            );
        }
        if let Some(Analysis::Completed(report)) = &decision.performance_analysis {
            log(
                level,
                LogLevel::Verbose,
                &format!("  RMSE: {:.4}  MAE: {:.4}  R2: {:.4}", report.rmse, report.mae, report.r2),
            );
        }
        if let Some(days) = decision.days_since_training {
            log(level, LogLevel::Verbose, &format!("  Days since training: {days}"));
        }
        for warning in &decision.warnings {
            log(level, LogLevel::Normal, &format!("  Warning: {warning}"));
        }
        if let Some(error) = &decision.error {
            log(level, LogLevel::Normal, &format!("  Error: {error}"));
        }
        if let Some(TriggerResult::Success { trigger_file, .. }) = &trigger {
            log(level, LogLevel::Normal, &format!("  Trigger: {}", trigger_file.display()));
        }
    }

    match trigger {
        Some(TriggerResult::Error { error, .. }) => {
            Err(format!("Failed to trigger retraining: {error}"))
        }
        _ => Ok(()),
    }
}
