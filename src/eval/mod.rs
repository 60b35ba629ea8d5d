//! Model Monitoring Framework
//!
//! Watches a deployed regression model and decides when it needs retraining.
//!
//! ## Architecture
//!
//! - `drift`: Per-feature two-sample KS drift against a reference dataset
//! - `performance`: RMSE/MAE/R² against a training-time baseline
//! - `retrain`: Fused retraining decision and file triggers
//!
//! ## Example
//!
//! ```ignore
//! use vigilar::eval::{DriftDetector, RetrainingConfig, RetrainingPolicy};
//!
//! let policy = RetrainingPolicy::from_paths(
//!     RetrainingConfig::default(),
//!     "data/processed/X_train.csv",
//!     "models/metrics.json",
//!     sink,
//! );
//! let decision = policy.should_retrain(&batch, Some(&predictions), Some(&actuals));
//! println!("retrain: {} ({:?})", decision.should_retrain, decision.reason_strings());
//! ```

pub mod drift;
pub mod performance;
pub mod retrain;

pub use drift::{DriftDetector, DriftError, DriftReport, FeatureDrift};
pub use performance::{
    BaselineMetrics, BaselineSource, PerformanceError, PerformanceEvaluator, PerformanceReport,
};
pub use retrain::{
    RetrainReason, RetrainingConfig, RetrainingDecision, RetrainingPolicy, TriggerResult,
    TriggerStore,
};
