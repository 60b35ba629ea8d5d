//! Trigger command implementation

use super::setup::open_sink;
use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{OutputFormat, TriggerArgs};
use crate::eval::{TriggerResult, TriggerStore};

pub fn run_trigger(args: TriggerArgs, level: LogLevel) -> Result<(), String> {
    let level = level.for_output(args.format);
    let store = TriggerStore::new(&args.paths.triggers_dir, open_sink(&args.paths)?)
        .with_originator(args.originator);

    let result = store.trigger_retraining();
    if args.format == OutputFormat::Json {
        let json = serde_json::to_string_pretty(&result).map_err(|e| e.to_string())?;
        println!("{json}");
    }

    match result {
        TriggerResult::Success { trigger_file, message, .. } => {
            log(level, LogLevel::Normal, &message);
            log(level, LogLevel::Normal, &format!("  Trigger file: {}", trigger_file.display()));
            Ok(())
        }
        TriggerResult::Error { error, .. } => Err(format!("Failed to trigger retraining: {error}")),
    }
}
