//! CLI argument parsing
//!
//! # Usage
//!
//! ```bash
//! vigilar drift batch.csv --reference data/X_train.csv
//! vigilar check --data batch.csv --predictions preds.txt --actuals y.txt --trigger
//! vigilar trigger --triggers-dir triggers
//! vigilar status --format json
//! ```

mod core;
mod types;

pub use core::{
    parse_args, CheckArgs, Cli, Command, DriftArgs, PathArgs, StatusArgs, TriggerArgs,
};
#[cfg(feature = "server")]
pub use core::ServeArgs;
pub use types::OutputFormat;
