//! Monitoring Sink Module
//!
//! Append/query store for monitoring log messages and model metrics. The
//! decision path only writes here; querying exists for status reporting and
//! tests.

mod error;
mod in_memory;
mod json_lines;
mod record;
mod traits;

pub use error::{SinkError, SinkResult};
pub use in_memory::InMemorySink;
pub use json_lines::JsonLinesSink;
pub use record::{LogEntry, LogSeverity, ModelMetricEntry, SinkRecord};
pub use traits::MonitoringSink;
