//! Monitoring infrastructure
//!
//! Sinks that receive decision logs and monitoring metrics.

pub mod storage;

pub use storage::{
    InMemorySink, JsonLinesSink, LogEntry, LogSeverity, ModelMetricEntry, MonitoringSink,
};
