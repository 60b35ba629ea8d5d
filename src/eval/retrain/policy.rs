//! Retraining policy: fuses drift, performance, volume and staleness.

use std::path::Path;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::json;

use super::config::RetrainingConfig;
use super::decision::{Analysis, DataVolumeCheck, RetrainReason, RetrainingDecision};
use super::outcome::StepOutcome;
use crate::dataset::FeatureFrame;
use crate::eval::drift::{DriftDetector, DriftReport};
use crate::eval::performance::{
    BaselineSource, PerformanceError, PerformanceEvaluator, PerformanceReport,
};
use crate::monitor::storage::{LogEntry, LogSeverity, MonitoringSink};

/// Sink module tag for decision and trigger records
pub const DECISION_LOG_MODULE: &str = "retraining_trigger";

/// Decides whether the deployed model should be retrained.
///
/// Holds only read-only state loaded at construction, so one instance can
/// serve concurrent callers.
pub struct RetrainingPolicy {
    config: RetrainingConfig,
    detector: DriftDetector,
    evaluator: PerformanceEvaluator,
    sink: Arc<dyn MonitoringSink>,
}

impl RetrainingPolicy {
    /// Build a policy; the evaluator uses `config.performance_threshold`
    pub fn new(
        config: RetrainingConfig,
        detector: DriftDetector,
        baseline: impl Into<BaselineSource>,
        sink: Arc<dyn MonitoringSink>,
    ) -> Self {
        let evaluator =
            PerformanceEvaluator::new(baseline, config.performance_threshold, Arc::clone(&sink));
        Self { config, detector, evaluator, sink }
    }

    /// Build a policy from a reference CSV and a baseline metrics file
    pub fn from_paths(
        config: RetrainingConfig,
        reference_path: impl AsRef<Path>,
        baseline_path: impl AsRef<Path>,
        sink: Arc<dyn MonitoringSink>,
    ) -> Self {
        let detector = DriftDetector::from_csv(reference_path);
        let baseline = BaselineSource::load(baseline_path);
        Self::new(config, detector, baseline, sink)
    }

    pub fn config(&self) -> &RetrainingConfig {
        &self.config
    }

    pub fn detector(&self) -> &DriftDetector {
        &self.detector
    }

    pub fn evaluator(&self) -> &PerformanceEvaluator {
        &self.evaluator
    }

    /// Evaluate every check against the current time
    pub fn should_retrain(
        &self,
        new_data: &FeatureFrame,
        predictions: Option<&[f64]>,
        actuals: Option<&[f64]>,
    ) -> RetrainingDecision {
        self.should_retrain_at(Utc::now(), new_data, predictions, actuals)
    }

    /// Evaluate every check with `now` as the reference time.
    ///
    /// Steps run in a fixed order and none short-circuits: drift,
    /// performance, data volume, staleness, then the master switch. The
    /// decision is always logged to the sink.
    pub fn should_retrain_at(
        &self,
        now: DateTime<Utc>,
        new_data: &FeatureFrame,
        predictions: Option<&[f64]>,
        actuals: Option<&[f64]>,
    ) -> RetrainingDecision {
        let mut decision = RetrainingDecision {
            timestamp: now,
            should_retrain: false,
            reasons: Vec::new(),
            drift_analysis: None,
            performance_analysis: None,
            data_volume_check: self.check_data_volume(new_data),
            days_since_training: None,
            warnings: Vec::new(),
            error: None,
        };

        // 1. Data drift
        let (analysis, drift) = into_analysis(self.check_drift(new_data), &mut decision);
        decision.drift_analysis = analysis;
        if drift.is_some_and(|report| report.overall_drift) {
            decision.reasons.push(RetrainReason::DataDrift);
            decision.should_retrain = true;
        }

        // 2. Performance degradation
        let (analysis, performance) =
            into_analysis(self.check_performance(predictions, actuals), &mut decision);
        decision.performance_analysis = analysis;
        if performance.is_some_and(|report| report.is_degraded()) {
            decision.reasons.push(RetrainReason::PerformanceDegradation);
            decision.should_retrain = true;
        }

        // 3. Data volume (informational)
        if !decision.data_volume_check.sufficient_data {
            decision.reasons.push(RetrainReason::InsufficientData);
        }

        // 4. Model age
        match self.check_staleness(now) {
            StepOutcome::Success(days) => {
                decision.days_since_training = Some(days);
                if days > i64::from(self.config.max_days_since_last_training) {
                    decision.reasons.push(RetrainReason::StaleModel { days });
                    decision.should_retrain = true;
                }
            }
            StepOutcome::Warning(message) => decision.warnings.push(message),
            StepOutcome::Error(message) => push_error(&mut decision, message),
            StepOutcome::Skipped => {}
        }

        // 5. Master switch
        if decision.should_retrain && !self.config.enable_automatic_retraining {
            decision.should_retrain = false;
            decision.reasons.push(RetrainReason::AutomaticRetrainingDisabled);
        }

        self.record_decision(&mut decision);
        decision
    }

    fn check_drift(&self, new_data: &FeatureFrame) -> StepOutcome<DriftReport> {
        if new_data.is_empty() || !self.config.monitoring_config.enable_drift_detection {
            return StepOutcome::Skipped;
        }
        match self.detector.detect_drift(new_data, self.config.drift_threshold) {
            Ok(report) => StepOutcome::Success(report),
            Err(error) => StepOutcome::Warning(error.to_string()),
        }
    }

    fn check_performance(
        &self,
        predictions: Option<&[f64]>,
        actuals: Option<&[f64]>,
    ) -> StepOutcome<PerformanceReport> {
        if !self.config.monitoring_config.enable_performance_monitoring {
            return StepOutcome::Skipped;
        }
        let (Some(predictions), Some(actuals)) = (predictions, actuals) else {
            return StepOutcome::Skipped;
        };
        match self.evaluator.evaluate(predictions, actuals) {
            Ok(report) => StepOutcome::Success(report),
            Err(PerformanceError::LengthMismatch { .. } | PerformanceError::Empty) => {
                StepOutcome::Skipped
            }
            Err(error) => StepOutcome::Error(format!("performance evaluation failed: {error}")),
        }
    }

    fn check_data_volume(&self, new_data: &FeatureFrame) -> DataVolumeCheck {
        let min_required = self.config.min_samples_for_retraining;
        DataVolumeCheck {
            new_samples: new_data.n_rows(),
            min_required,
            sufficient_data: new_data.n_rows() >= min_required,
        }
    }

    fn check_staleness(&self, now: DateTime<Utc>) -> StepOutcome<i64> {
        let baseline = match self.evaluator.baseline_source() {
            BaselineSource::Loaded(baseline) => baseline,
            BaselineSource::Missing => return StepOutcome::Skipped,
            BaselineSource::Failed(message) => {
                return StepOutcome::Warning(format!(
                    "Could not check last training time: {message}"
                ))
            }
        };
        match baseline.trained_at() {
            None => StepOutcome::Skipped,
            Some(Ok(trained_at)) => StepOutcome::Success((now - trained_at).num_days()),
            Some(Err(error)) => StepOutcome::Warning(format!(
                "Could not check last training time: invalid training_timestamp: {error}"
            )),
        }
    }

    fn record_decision(&self, decision: &mut RetrainingDecision) {
        let reasons = decision.reason_strings();
        tracing::info!(
            should_retrain = decision.should_retrain,
            reasons = ?reasons,
            "retraining decision"
        );

        let level = if decision.error.is_some() { LogSeverity::Warning } else { LogSeverity::Info };
        let entry = LogEntry::new(
            level,
            DECISION_LOG_MODULE,
            format!("Retraining decision: {}", decision.should_retrain),
        )
        .with_extra(json!({
            "reasons": reasons,
            "config": self.config,
            "warnings": decision.warnings,
            "error": decision.error,
        }));

        if let Err(error) = self.sink.log_message(entry) {
            tracing::warn!(%error, "failed to record retraining decision");
            decision.warnings.push(format!("failed to record decision: {error}"));
        }
    }
}

/// Fold a drift/performance step into an analysis slot, collecting its
/// warning or error on the decision
fn into_analysis<T: Clone>(
    outcome: StepOutcome<T>,
    decision: &mut RetrainingDecision,
) -> (Option<Analysis<T>>, Option<T>) {
    match outcome {
        StepOutcome::Skipped => (None, None),
        StepOutcome::Success(report) => (Some(Analysis::Completed(report.clone())), Some(report)),
        StepOutcome::Warning(message) => {
            decision.warnings.push(message.clone());
            (Some(Analysis::Unavailable { error: message }), None)
        }
        StepOutcome::Error(message) => {
            push_error(decision, message.clone());
            (Some(Analysis::Unavailable { error: message }), None)
        }
    }
}

fn push_error(decision: &mut RetrainingDecision, message: String) {
    decision.error = Some(match decision.error.take() {
        Some(existing) => format!("{existing}; {message}"),
        None => message,
    });
}
