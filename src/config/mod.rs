//! Configuration surface: command-line arguments.
//!
//! The retraining thresholds live in [`crate::eval::RetrainingConfig`]; this
//! module only covers how the binary is told where its files are.

pub mod cli;

pub use cli::{
    parse_args, CheckArgs, Cli, Command, DriftArgs, OutputFormat, PathArgs, StatusArgs,
    TriggerArgs,
};
#[cfg(feature = "server")]
pub use cli::ServeArgs;
