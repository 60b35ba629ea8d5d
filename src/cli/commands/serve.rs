//! Serve command implementation

use std::sync::Arc;

use super::setup::build;
use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::ServeArgs;
use crate::server::{AppState, ServerConfig};

pub fn run_serve(args: ServeArgs, level: LogLevel) -> Result<(), String> {
    let components = build(&args.paths, level)?;
    let config = ServerConfig { host: args.host, port: args.port };
    log(level, LogLevel::Normal, &format!("Serving on http://{}", config.addr()));

    let state = AppState::new(Arc::new(components.policy), Arc::new(components.triggers));
    let runtime = tokio::runtime::Runtime::new().map_err(|e| e.to_string())?;
    runtime.block_on(crate::server::run(config, state)).map_err(|e| e.to_string())
}
