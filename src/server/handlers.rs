//! HTTP request handlers
//!
//! Axum handlers for the monitoring API. Decisions run the synchronous core
//! directly; trigger-directory I/O runs on the blocking pool.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;

use crate::dataset::FeatureFrame;
use crate::eval::retrain::Analysis;
use crate::eval::{RetrainingDecision, TriggerResult};
use crate::server::{
    AppState, ConfigResponse, DriftRequest, DriftResponse, ErrorResponse, HealthResponse,
    RetrainingCheckRequest, StatusResponse,
};

type ApiError = (StatusCode, Json<ErrorResponse>);

fn bad_request(message: impl Into<String>) -> ApiError {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(message)))
}

fn internal_error(message: impl Into<String>) -> ApiError {
    (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorResponse::new(message)))
}

/// Health check handler
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let health = HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.uptime_secs(),
        reference_loaded: state.policy.detector().has_reference(),
        baseline_loaded: state.policy.evaluator().baseline().is_some(),
    };

    (StatusCode::OK, Json(health))
}

/// Compare a batch of feature records against the reference dataset
pub async fn check_drift(
    State(state): State<AppState>,
    Json(payload): Json<DriftRequest>,
) -> Result<Json<DriftResponse>, ApiError> {
    let records = match payload.data {
        Some(records) if !records.is_empty() => records,
        _ => return Err(bad_request("No data provided for drift detection")),
    };
    let frame = FeatureFrame::from_records(&records).map_err(|e| bad_request(e.to_string()))?;

    let threshold = state.policy.config().drift_threshold;
    let drift_analysis = match state.policy.detector().detect_drift(&frame, threshold) {
        Ok(report) => Analysis::Completed(report),
        Err(error) => {
            tracing::warn!(%error, "drift check unavailable");
            Analysis::Unavailable { error: error.to_string() }
        }
    };

    Ok(Json(DriftResponse { drift_analysis, timestamp: Utc::now() }))
}

/// Run the full retraining decision
pub async fn check_retraining(
    State(state): State<AppState>,
    Json(payload): Json<RetrainingCheckRequest>,
) -> Result<Json<RetrainingDecision>, ApiError> {
    let frame =
        FeatureFrame::from_records(&payload.new_data).map_err(|e| bad_request(e.to_string()))?;
    let predictions = payload.predictions.filter(|p| !p.is_empty());
    let actuals = payload.actuals.filter(|a| !a.is_empty());

    let decision =
        state.policy.should_retrain(&frame, predictions.as_deref(), actuals.as_deref());
    Ok(Json(decision))
}

/// Write a retraining trigger file
pub async fn trigger_retraining(
    State(state): State<AppState>,
) -> (StatusCode, Json<TriggerResult>) {
    let triggers = state.triggers;
    let result = match tokio::task::spawn_blocking(move || triggers.trigger_retraining()).await {
        Ok(result) => result,
        Err(error) => {
            tracing::error!(%error, "trigger task failed");
            TriggerResult::Error {
                error: format!("Trigger task failed: {error}"),
                timestamp: Utc::now(),
            }
        }
    };
    let status =
        if result.is_success() { StatusCode::OK } else { StatusCode::INTERNAL_SERVER_ERROR };
    (status, Json(result))
}

/// Active retraining configuration
pub async fn get_config(State(state): State<AppState>) -> Json<ConfigResponse> {
    Json(ConfigResponse { config: state.policy.config().clone(), timestamp: Utc::now() })
}

/// Monitoring toggles and pending triggers
pub async fn get_status(State(state): State<AppState>) -> Result<Json<StatusResponse>, ApiError> {
    let triggers = Arc::clone(&state.triggers);
    let pending = tokio::task::spawn_blocking(move || triggers.pending_triggers())
        .await
        .map_err(|e| internal_error(format!("Status task failed: {e}")))?
        .map_err(|e| {
            tracing::error!(error = %e, "cannot list trigger directory");
            internal_error(e.to_string())
        })?;
    let trigger_files = pending
        .iter()
        .filter_map(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        .collect();

    let config = state.policy.config();
    Ok(Json(StatusResponse {
        monitoring_active: true,
        drift_detection_enabled: config.monitoring_config.enable_drift_detection,
        performance_monitoring_enabled: config.monitoring_config.enable_performance_monitoring,
        automatic_retraining_enabled: config.enable_automatic_retraining,
        pending_retraining_triggers: pending.len(),
        trigger_files,
        timestamp: Utc::now(),
    }))
}
