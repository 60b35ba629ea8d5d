//! Retraining Decision Module
//!
//! Fuses drift, performance degradation, data volume and model age into a
//! single retrain/no-retrain decision, and writes file triggers that an
//! external training job picks up.

mod config;
mod decision;
mod outcome;
mod policy;
mod trigger;


pub use config::{LoadedConfig, MonitoringToggles, RetrainingConfig};
pub use decision::{Analysis, DataVolumeCheck, RetrainReason, RetrainingDecision};
pub use outcome::StepOutcome;
pub use policy::{RetrainingPolicy, DECISION_LOG_MODULE};
pub use trigger::{
    TriggerRecord, TriggerResult, TriggerStatus, TriggerStore, DEFAULT_ORIGINATOR,
    TRIGGER_EXTENSION,
};
