//! Router and server loop

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{
    check_drift, check_retraining, get_config, get_status, health_check, trigger_retraining,
};
use super::{AppState, Result, ServerConfig, ServerError};

/// Build the monitoring router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/monitoring/drift", post(check_drift))
        .route("/monitoring/retraining-check", post(check_retraining))
        .route("/monitoring/trigger-retraining", post(trigger_retraining))
        .route("/monitoring/config", get(get_config))
        .route("/monitoring/status", get(get_status))
        .with_state(state)
}

/// Bind and serve until the process is stopped
pub async fn run(config: ServerConfig, state: AppState) -> Result<()> {
    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| ServerError::Bind(format!("{addr}: {e}")))?;
    tracing::info!(%addr, "monitoring server listening");
    axum::serve(listener, router(state)).await?;
    Ok(())
}
