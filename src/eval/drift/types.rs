//! Type definitions for drift detection.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fraction of compared features that must drift before the batch as a
/// whole is considered drifted. Strictly greater-than.
pub const OVERALL_DRIFT_FRACTION: f64 = 0.2;

/// Per-feature drift score
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeatureDrift {
    /// KS distance between reference and new empirical CDFs
    pub ks_statistic: f64,
    /// Two-sided KS p-value
    pub p_value: f64,
    /// `p_value < threshold`
    pub drifted: bool,
    /// Population stability index (informational)
    pub psi: f64,
}

/// Outcome of one drift check
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DriftReport {
    pub timestamp: DateTime<Utc>,
    /// Number of columns in the new batch
    pub total_features: usize,
    /// Number of columns actually tested against the reference
    pub compared_features: usize,
    /// Names of drifted columns, in batch column order
    pub drifted_features: Vec<String>,
    /// Columns present in the batch but not testable (absent from the
    /// reference, or no observed values on one side)
    pub skipped_features: Vec<String>,
    pub drift_scores: BTreeMap<String, FeatureDrift>,
    /// p-value threshold the check ran with
    pub threshold: f64,
    pub overall_drift: bool,
}

impl DriftReport {
    /// Fraction of compared features that drifted
    pub fn drift_fraction(&self) -> f64 {
        if self.compared_features == 0 {
            0.0
        } else {
            self.drifted_features.len() as f64 / self.compared_features as f64
        }
    }
}

/// Overall drift rule: strictly more than 20% of compared features drifted
pub fn is_overall_drift(drifted: usize, compared: usize) -> bool {
    drifted as f64 > OVERALL_DRIFT_FRACTION * compared as f64
}

/// Errors from drift detection
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DriftError {
    /// No training-time reference dataset was loaded
    #[error("Reference data not available")]
    ReferenceUnavailable,
}
