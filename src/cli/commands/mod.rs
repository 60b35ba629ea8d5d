//! CLI command implementations

mod check;
mod drift;
#[cfg(feature = "server")]
mod serve;
mod setup;
mod status;
mod trigger;

#[cfg(test)]
mod tests;

use crate::cli::LogLevel;
use crate::config::{Cli, Command};

/// Execute a CLI command based on the parsed arguments
pub fn run_command(cli: Cli) -> Result<(), String> {
    let log_level = LogLevel::from_flags(cli.quiet, cli.verbose);

    match cli.command {
        Command::Drift(args) => drift::run_drift(args, log_level),
        Command::Check(args) => check::run_check(args, log_level),
        Command::Trigger(args) => trigger::run_trigger(args, log_level),
        Command::Status(args) => status::run_status(args, log_level),
        #[cfg(feature = "server")]
        Command::Serve(args) => serve::run_serve(args, log_level),
    }
}
