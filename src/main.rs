//! Vigilar CLI
//!
//! Model monitoring entry point.
//!
//! # Usage
//!
//! ```bash
//! # Check a batch for drift against the training features
//! vigilar drift batch.csv --reference data/X_train.csv
//!
//! # Decide on retraining and write a trigger if needed
//! vigilar check --data batch.csv --predictions preds.txt --actuals y.txt --trigger
//!
//! # Force a retraining trigger
//! vigilar trigger
//!
//! # Show configuration and pending triggers
//! vigilar status
//! ```

use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use vigilar::cli::{run_command, Cli, LogLevel};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = LogLevel::from_flags(cli.quiet, cli.verbose);
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.tracing_directive()));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
