//! Vigilar: model monitoring and retraining decisions
//!
//! Watches production feature batches and model outputs, decides whether the
//! deployed model has degraded or its inputs have shifted, and writes a
//! durable trigger that an external retraining executor picks up.
//!
//! ## Architecture
//!
//! - `dataset`: Columnar feature tables loaded from CSV or JSON records
//! - `eval::drift`: Two-sample Kolmogorov-Smirnov drift detection
//! - `eval::performance`: RMSE / MAE / R² against a baseline
//! - `eval::retrain`: Policy fusion, decisions, and trigger files
//! - `monitor::storage`: Log and metric sinks
//! - `cli` / `server`: Thin shells that build the components once at startup
//!
//! ## Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use vigilar::eval::{BaselineSource, DriftDetector, RetrainingConfig, RetrainingPolicy};
//! use vigilar::monitor::storage::InMemorySink;
//! use vigilar::FeatureFrame;
//!
//! let sink = Arc::new(InMemorySink::new());
//! let config = RetrainingConfig::load("monitoring/retraining_config.json").config;
//! let detector = DriftDetector::from_csv("data/X_train.csv");
//! let baseline = BaselineSource::load("models/best_model_metrics.json");
//! let policy = RetrainingPolicy::new(config, detector, baseline, sink);
//!
//! let batch = FeatureFrame::from_columns(vec![("MedInc".into(), vec![Some(8.3)])]).unwrap();
//! let decision = policy.should_retrain(&batch, None, None);
//! println!("should retrain: {}", decision.should_retrain);
//! ```

pub mod cli;
pub mod config;
pub mod dataset;
pub mod error;
pub mod eval;
pub mod monitor;
#[cfg(feature = "server")]
pub mod server;

pub use dataset::FeatureFrame;
pub use error::{Error, Result};
