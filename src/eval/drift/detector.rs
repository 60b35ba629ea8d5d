//! Drift detector implementation.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::Utc;

use super::statistical::{ks_two_sample, population_stability_index};
use super::types::{is_overall_drift, DriftError, DriftReport, FeatureDrift};
use crate::dataset::FeatureFrame;

/// KS drift detector over a fixed training-time reference dataset
#[derive(Clone, Debug, Default)]
pub struct DriftDetector {
    reference: Option<FeatureFrame>,
}

impl DriftDetector {
    /// Create a detector with a reference dataset
    pub fn new(reference: FeatureFrame) -> Self {
        Self { reference: Some(reference) }
    }

    /// Create a detector with no reference; every check reports
    /// [`DriftError::ReferenceUnavailable`]
    pub fn without_reference() -> Self {
        Self { reference: None }
    }

    /// Load the reference dataset from CSV.
    ///
    /// A missing or unreadable file yields a detector without a reference
    /// rather than an error.
    pub fn from_csv(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            tracing::warn!(path = %path.display(), "reference data not found");
            return Self::without_reference();
        }
        match FeatureFrame::from_csv_path(path) {
            Ok(frame) => {
                tracing::info!(
                    path = %path.display(),
                    rows = frame.n_rows(),
                    columns = frame.n_columns(),
                    "reference data loaded"
                );
                Self::new(frame)
            }
            Err(error) => {
                tracing::error!(path = %path.display(), %error, "error loading reference data");
                Self::without_reference()
            }
        }
    }

    /// Whether a reference dataset is loaded
    pub fn has_reference(&self) -> bool {
        self.reference.is_some()
    }

    /// The reference dataset, if loaded
    pub fn reference(&self) -> Option<&FeatureFrame> {
        self.reference.as_ref()
    }

    /// Compare a new batch against the reference, column by column.
    ///
    /// Missing cells are dropped per column on each side before testing. A
    /// feature is drifted iff its p-value is strictly below `threshold`.
    pub fn detect_drift(
        &self,
        new_batch: &FeatureFrame,
        threshold: f64,
    ) -> Result<DriftReport, DriftError> {
        let reference = self.reference.as_ref().ok_or(DriftError::ReferenceUnavailable)?;

        let mut drift_scores = BTreeMap::new();
        let mut drifted_features = Vec::new();
        let mut skipped_features = Vec::new();

        for column in new_batch.columns() {
            let Some(reference_column) = reference.column(&column.name) else {
                skipped_features.push(column.name.clone());
                continue;
            };

            let reference_values = reference_column.observed();
            let new_values = column.observed();
            let Some(ks) = ks_two_sample(&reference_values, &new_values) else {
                skipped_features.push(column.name.clone());
                continue;
            };

            let drifted = ks.p_value < threshold;
            if drifted {
                drifted_features.push(column.name.clone());
            }
            drift_scores.insert(
                column.name.clone(),
                FeatureDrift {
                    ks_statistic: ks.statistic,
                    p_value: ks.p_value,
                    drifted,
                    psi: population_stability_index(&reference_values, &new_values),
                },
            );
        }

        let compared_features = drift_scores.len();
        let overall_drift = is_overall_drift(drifted_features.len(), compared_features);

        tracing::info!(
            compared = compared_features,
            drifted = drifted_features.len(),
            overall_drift,
            "drift detection completed"
        );

        Ok(DriftReport {
            timestamp: Utc::now(),
            total_features: new_batch.n_columns(),
            compared_features,
            drifted_features,
            skipped_features,
            drift_scores,
            threshold,
            overall_drift,
        })
    }
}
