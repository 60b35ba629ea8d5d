//! Output verbosity for CLI commands

use crate::config::OutputFormat;

/// Log level for CLI output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Errors only
    Quiet,
    Normal,
    /// Adds per-feature and per-step detail
    Verbose,
}

impl LogLevel {
    /// Resolve the global `--quiet` / `--verbose` flags; quiet wins
    pub fn from_flags(quiet: bool, verbose: bool) -> Self {
        if quiet {
            LogLevel::Quiet
        } else if verbose {
            LogLevel::Verbose
        } else {
            LogLevel::Normal
        }
    }

    /// Level for a command's stdout; JSON output carries no progress lines
    pub fn for_output(self, format: OutputFormat) -> Self {
        match format {
            OutputFormat::Json => LogLevel::Quiet,
            OutputFormat::Text => self,
        }
    }

    /// Default `tracing` filter when `RUST_LOG` is unset
    pub fn tracing_directive(self) -> &'static str {
        match self {
            LogLevel::Quiet => "warn",
            LogLevel::Normal => "info",
            LogLevel::Verbose => "debug",
        }
    }
}

/// Print `msg` when `level` admits messages at `required`
pub fn log(level: LogLevel, required: LogLevel, msg: &str) {
    if level != LogLevel::Quiet && (level == required || required == LogLevel::Normal) {
        println!("{msg}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_flags() {
        assert_eq!(LogLevel::from_flags(true, true), LogLevel::Quiet);
        assert_eq!(LogLevel::from_flags(false, true), LogLevel::Verbose);
        assert_eq!(LogLevel::from_flags(false, false), LogLevel::Normal);
    }

    #[test]
    fn test_json_output_is_quiet() {
        assert_eq!(LogLevel::Verbose.for_output(OutputFormat::Json), LogLevel::Quiet);
        assert_eq!(LogLevel::Verbose.for_output(OutputFormat::Text), LogLevel::Verbose);
        assert_eq!(LogLevel::Normal.for_output(OutputFormat::Text), LogLevel::Normal);
    }

    #[test]
    fn test_tracing_directive() {
        assert_eq!(LogLevel::Quiet.tracing_directive(), "warn");
        assert_eq!(LogLevel::Verbose.tracing_directive(), "debug");
    }
}
