//! CLI module for vigilar
//!
//! Command handlers build the monitoring components once from the paths on
//! the command line, run a single operation and print the result.

mod commands;
mod logging;

pub use commands::run_command;
pub use logging::LogLevel;

// Re-export Cli from config for convenience
pub use crate::config::Cli;
