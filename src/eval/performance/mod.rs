//! Performance Monitoring Module
//!
//! Regression accuracy (RMSE, MAE, R²) over recent predictions, compared
//! against the metrics recorded when the deployed model was trained.

mod baseline;
mod evaluator;
mod metrics;


pub use baseline::{parse_timestamp, BaselineMetrics, BaselineSource};
pub use evaluator::{PerformanceEvaluator, PerformanceReport, MONITORING_MODEL_TYPE};
pub use metrics::{regression_metrics, PerformanceError, RegressionMetrics};
