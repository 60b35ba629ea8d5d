//! Core CLI types - Cli, Command, and argument structs

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use super::types::OutputFormat;

/// Vigilar: model monitoring and retraining decisions
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "vigilar")]
#[command(version)]
#[command(about = "Detect data drift and performance degradation, and trigger model retraining")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Compare a feature batch against the reference dataset
    Drift(DriftArgs),

    /// Decide whether the model should be retrained
    Check(CheckArgs),

    /// Write a retraining trigger file
    Trigger(TriggerArgs),

    /// Show monitoring configuration and pending triggers
    Status(StatusArgs),

    /// Serve the monitoring HTTP API
    #[cfg(feature = "server")]
    Serve(ServeArgs),
}

/// Locations of the files the monitoring components are built from
#[derive(Args, Debug, Clone, PartialEq)]
pub struct PathArgs {
    /// Retraining configuration (JSON)
    #[arg(long, default_value = "monitoring/retraining_config.json")]
    pub config: PathBuf,

    /// Reference feature dataset (CSV)
    #[arg(long, default_value = "data/X_train.csv")]
    pub reference: PathBuf,

    /// Baseline metrics recorded at training time (JSON)
    #[arg(long, default_value = "models/best_model_metrics.json")]
    pub baseline: PathBuf,

    /// Directory that receives trigger files
    #[arg(long, default_value = "triggers")]
    pub triggers_dir: PathBuf,

    /// Monitoring log (JSON lines)
    #[arg(long, default_value = "logs/monitoring.jsonl")]
    pub log_file: PathBuf,
}

/// Arguments for the drift command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct DriftArgs {
    /// Feature batch to check (CSV)
    #[arg(value_name = "DATA")]
    pub data: PathBuf,

    /// Override the KS p-value threshold from the config file
    #[arg(long)]
    pub threshold: Option<f64>,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    #[command(flatten)]
    pub paths: PathArgs,
}

/// Arguments for the check command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct CheckArgs {
    /// New feature batch (CSV); omit to check model age only
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// Model predictions, one value per line or a JSON array
    #[arg(long, requires = "actuals")]
    pub predictions: Option<PathBuf>,

    /// Observed targets, same format as predictions
    #[arg(long, requires = "predictions")]
    pub actuals: Option<PathBuf>,

    /// Write a trigger file when retraining is recommended
    #[arg(long)]
    pub trigger: bool,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    #[command(flatten)]
    pub paths: PathArgs,
}

/// Arguments for the trigger command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct TriggerArgs {
    /// Value recorded as `triggered_by`
    #[arg(long, default_value = crate::eval::retrain::DEFAULT_ORIGINATOR)]
    pub originator: String,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    #[command(flatten)]
    pub paths: PathArgs,
}

/// Arguments for the status command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct StatusArgs {
    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    #[command(flatten)]
    pub paths: PathArgs,
}

/// Arguments for the serve command
#[cfg(feature = "server")]
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ServeArgs {
    /// Address to bind
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, default_value = "8000")]
    pub port: u16,

    #[command(flatten)]
    pub paths: PathArgs,
}

/// Parse CLI arguments from a string slice (for testing)
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}
