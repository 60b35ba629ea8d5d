//! Performance evaluator implementation.

use std::path::Path;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::baseline::{BaselineMetrics, BaselineSource};
use super::metrics::{regression_metrics, PerformanceError};
use crate::monitor::storage::{ModelMetricEntry, MonitoringSink};

/// Model type tag for monitoring records, distinct from training runs
pub const MONITORING_MODEL_TYPE: &str = "performance_monitoring";

const MONITORING_MODEL_NAME: &str = "current_model_performance";

/// Outcome of one performance evaluation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PerformanceReport {
    pub timestamp: DateTime<Utc>,
    pub rmse: f64,
    pub mae: f64,
    pub r2: f64,
    pub n_samples: usize,
    /// Relative RMSE increase over baseline
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rmse_degradation: Option<f64>,
    /// Relative R² decrease from baseline
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r2_degradation: Option<f64>,
    /// Present only when a baseline exists
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub performance_degraded: Option<bool>,
}

impl PerformanceReport {
    /// Whether degradation was detected (false without a baseline)
    pub fn is_degraded(&self) -> bool {
        self.performance_degraded.unwrap_or(false)
    }
}

/// Evaluates recent predictions against actuals and a training baseline
pub struct PerformanceEvaluator {
    baseline: BaselineSource,
    threshold: f64,
    sink: Arc<dyn MonitoringSink>,
}

impl PerformanceEvaluator {
    /// Create an evaluator with an already-loaded baseline
    pub fn new(
        baseline: impl Into<BaselineSource>,
        threshold: f64,
        sink: Arc<dyn MonitoringSink>,
    ) -> Self {
        Self { baseline: baseline.into(), threshold, sink }
    }

    /// Create an evaluator, loading the baseline artifact from disk
    pub fn from_path(
        path: impl AsRef<Path>,
        threshold: f64,
        sink: Arc<dyn MonitoringSink>,
    ) -> Self {
        Self::new(BaselineSource::load(path), threshold, sink)
    }

    /// Baseline metrics, if loaded
    pub fn baseline(&self) -> Option<&BaselineMetrics> {
        self.baseline.metrics()
    }

    /// How the baseline load went
    pub fn baseline_source(&self) -> &BaselineSource {
        &self.baseline
    }

    /// Relative degradation threshold
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Compute accuracy metrics and, with a baseline, the degradation flag.
    ///
    /// Writes a monitoring metric record to the sink; a sink failure is
    /// logged and does not fail the evaluation.
    pub fn evaluate(
        &self,
        predictions: &[f64],
        actuals: &[f64],
    ) -> Result<PerformanceReport, PerformanceError> {
        let metrics = regression_metrics(predictions, actuals)?;

        let mut report = PerformanceReport {
            timestamp: Utc::now(),
            rmse: metrics.rmse,
            mae: metrics.mae,
            r2: metrics.r2,
            n_samples: predictions.len(),
            rmse_degradation: None,
            r2_degradation: None,
            performance_degraded: None,
        };

        if let Some(baseline) = self.baseline.metrics() {
            let rmse_degradation = relative_change(metrics.rmse - baseline.rmse, baseline.rmse);
            let r2_degradation = relative_change(baseline.r2 - metrics.r2, baseline.r2);
            let exceeds = |d: Option<f64>| d.is_some_and(|d| d > self.threshold);

            report.rmse_degradation = rmse_degradation;
            report.r2_degradation = r2_degradation;
            report.performance_degraded =
                Some(exceeds(rmse_degradation) || exceeds(r2_degradation));
        }

        let entry = ModelMetricEntry {
            timestamp: report.timestamp,
            model_name: MONITORING_MODEL_NAME.to_string(),
            model_type: MONITORING_MODEL_TYPE.to_string(),
            rmse: report.rmse,
            mae: report.mae,
            r2_score: report.r2,
            training_time: 0.0,
            parameters: json!({ "monitoring": true, "n_samples": report.n_samples }),
        };
        if let Err(error) = self.sink.log_model_metric(entry) {
            tracing::warn!(%error, "failed to record performance metrics");
        }

        tracing::info!(rmse = report.rmse, r2 = report.r2, "performance evaluation");
        Ok(report)
    }
}

/// `delta / base`, undefined when the base is zero
fn relative_change(delta: f64, base: f64) -> Option<f64> {
    if base == 0.0 || !base.is_finite() {
        None
    } else {
        Some(delta / base)
    }
}
