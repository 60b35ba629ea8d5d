//! The fused retraining decision.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};

use crate::eval::drift::DriftReport;
use crate::eval::performance::PerformanceReport;

/// Why a decision came out the way it did
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RetrainReason {
    DataDrift,
    PerformanceDegradation,
    /// Informational; never flips the decision on its own
    InsufficientData,
    StaleModel { days: i64 },
    AutomaticRetrainingDisabled,
}

impl fmt::Display for RetrainReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RetrainReason::DataDrift => write!(f, "Data drift detected"),
            RetrainReason::PerformanceDegradation => write!(f, "Performance degradation detected"),
            RetrainReason::InsufficientData => write!(f, "Insufficient new data for retraining"),
            RetrainReason::StaleModel { days } => write!(f, "Model is {days} days old"),
            RetrainReason::AutomaticRetrainingDisabled => {
                write!(f, "Automatic retraining is disabled")
            }
        }
    }
}

impl Serialize for RetrainReason {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A check's report, or the reason it could not be produced
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Analysis<T> {
    Completed(T),
    Unavailable { error: String },
}

impl<T> Analysis<T> {
    /// The completed report, if any
    pub fn report(&self) -> Option<&T> {
        match self {
            Analysis::Completed(report) => Some(report),
            Analysis::Unavailable { .. } => None,
        }
    }
}

/// New-sample count against the configured minimum
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataVolumeCheck {
    pub new_samples: usize,
    pub min_required: usize,
    pub sufficient_data: bool,
}

/// Output of one policy evaluation
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RetrainingDecision {
    pub timestamp: DateTime<Utc>,
    pub should_retrain: bool,
    /// Reasons in the order the steps produced them
    pub reasons: Vec<RetrainReason>,
    /// `None` when drift detection did not run
    pub drift_analysis: Option<Analysis<DriftReport>>,
    /// `None` when no usable prediction/actual pairs were supplied
    pub performance_analysis: Option<Analysis<PerformanceReport>>,
    pub data_volume_check: DataVolumeCheck,
    /// Whole days since the baseline training timestamp, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_since_training: Option<i64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RetrainingDecision {
    /// Reasons rendered as text
    pub fn reason_strings(&self) -> Vec<String> {
        self.reasons.iter().map(ToString::to_string).collect()
    }

    /// Whether the given reason was recorded
    pub fn has_reason(&self, reason: &RetrainReason) -> bool {
        self.reasons.contains(reason)
    }
}
