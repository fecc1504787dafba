use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::errors::{ApiError, RelayError};
use crate::services::{RelayService, RelaySnapshot};

#[derive(Clone, Serialize, Deserialize)]
pub struct RelayCommandBody {
    pub command: String,
}

#[derive(Clone)]
pub struct RelayControlState {
    pub relay_service: Arc<RelayService>,
}

/// Dashboard override: sets the command and flips the coordinator to manual.
pub async fn control_relay(
    State(state): State<RelayControlState>,
    body: Result<Json<RelayCommandBody>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(body) = body
        .map_err(|rejection| RelayError::MalformedBody(rejection.body_text()))?;

    let snapshot = state.relay_service.set_command(&body.command).await.map_err(|e| {
        tracing::warn!(command = %body.command, "rejected relay command");
        e
    })?;

    tracing::info!(command = snapshot.command.as_str(), "relay command received");

    Ok(Json(json!({
        "status": "success",
        "command": snapshot.command,
        "mode": snapshot.mode,
        "message": format!("Relay turned {}", snapshot.command.as_str()),
        "timestamp": snapshot.updated_at
    })))
}

/// Device-facing poll. The firmware parses a bare two-token line, e.g.
/// `"manual on"`; this shape is fixed and deliberately not JSON.
pub async fn get_relay_status(State(state): State<RelayControlState>) -> String {
    let snapshot = state.relay_service.current().await;
    let response = snapshot.status_line();

    tracing::debug!(%response, "device polled relay status");

    response
}

/// Raw snapshot, kept for older firmware revisions.
pub async fn get_relay_command(State(state): State<RelayControlState>) -> Json<RelaySnapshot> {
    Json(state.relay_service.current().await)
}

pub async fn set_auto_mode(State(state): State<RelayControlState>) -> impl IntoResponse {
    let snapshot = state.relay_service.force_auto().await;

    tracing::info!(command = snapshot.command.as_str(), "switched to auto mode");

    Json(json!({
        "status": "success",
        "mode": snapshot.mode,
        "message": "Switched to automatic irrigation mode"
    }))
}

pub async fn get_current_mode(State(state): State<RelayControlState>) -> impl IntoResponse {
    let snapshot = state.relay_service.current().await;

    Json(json!({
        "mode": snapshot.mode,
        "command": snapshot.command,
        "timestamp": snapshot.updated_at
    }))
}
