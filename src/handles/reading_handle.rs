use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::errors::{ApiError, ReadingError};
use crate::models::NewSoilReading;
use crate::repositories::SoilReadingRepository;
use crate::services::{RelayCommand, RelayService};

#[derive(Clone, Serialize, Deserialize)]
pub struct SoilReadingBody {
    pub nitrogen: i64,
    pub phosphorus: i64,
    pub potassium: i64,
    pub ph: f64,
    pub ec: i64,
    pub humidity: f64,
    pub temperature: f64,
    pub relay: String,
    /// Server-side time is assigned when the device omits this.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

#[derive(Clone)]
pub struct ReadingState {
    pub readings: Arc<SoilReadingRepository>,
    pub relay_service: Arc<RelayService>,
}

pub async fn receive_soil_data(
    State(state): State<ReadingState>,
    body: Result<Json<SoilReadingBody>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(body) = body.map_err(|rejection| {
        tracing::warn!("rejected soil reading: {}", rejection.body_text());
        ReadingError::MalformedBody(rejection.body_text())
    })?;

    // The device reports the relay state its pin is actually driving; junk
    // values are rejected before anything reaches the table.
    let relay = RelayCommand::parse(&body.relay).map_err(|_| {
        tracing::warn!(relay = %body.relay, "rejected soil reading: bad relay value");
        ReadingError::InvalidRelayValue(body.relay.clone())
    })?;

    let reading = NewSoilReading {
        nitrogen: body.nitrogen,
        phosphorus: body.phosphorus,
        potassium: body.potassium,
        ph: body.ph,
        ec: body.ec,
        humidity: body.humidity,
        temperature: body.temperature,
        relay: relay.as_str().to_string(),
        timestamp: body.timestamp.unwrap_or_else(Utc::now),
    };

    let id = state.readings.create(&reading).await?;

    tracing::info!(
        id,
        nitrogen = reading.nitrogen,
        phosphorus = reading.phosphorus,
        potassium = reading.potassium,
        ph = reading.ph,
        ec = reading.ec,
        humidity = reading.humidity,
        temperature = reading.temperature,
        relay = %reading.relay,
        "soil reading saved"
    );

    Ok(Json(json!({
        "status": "success",
        "id": id,
        "message": "Data saved successfully"
    })))
}

/// The only place reading data and relay state are combined. The two sources
/// are independent: an empty store is a normal "no data" response and the
/// coordinator read cannot fail.
pub async fn get_latest_data(
    State(state): State<ReadingState>,
) -> Result<impl IntoResponse, ApiError> {
    let relay_state = state.relay_service.current().await;

    match state.readings.find_latest().await? {
        Some(reading) => Ok(Json(json!({
            "id": reading.id,
            "nitrogen": reading.nitrogen,
            "phosphorus": reading.phosphorus,
            "potassium": reading.potassium,
            "ph": reading.ph,
            "ec": reading.ec,
            "humidity": reading.humidity,
            "temperature": reading.temperature,
            "relay": reading.relay,
            "timestamp": reading.timestamp,
            "mode": relay_state.mode,
            "last_command": relay_state.command
        }))),
        None => Ok(Json(json!({ "message": "No data found" }))),
    }
}
