//! Drift Detection Module
//!
//! Compares production feature batches against the training-time reference
//! dataset with a two-sample Kolmogorov-Smirnov test per feature. A batch is
//! drifted as a whole when more than a fifth of the compared features are.

mod detector;
mod statistical;
mod types;

#[cfg(test)]
mod tests;

pub use detector::DriftDetector;
pub use types::{
    is_overall_drift, DriftError, DriftReport, FeatureDrift, OVERALL_DRIFT_FRACTION,
};

// Re-export statistical functions for testing/advanced use
pub use statistical::{
    bin_counts, ks_exact_p_value, ks_p_value, ks_statistic, ks_two_sample,
    population_stability_index, KsOutcome, KS_EXACT_MAX_PRODUCT,
};
