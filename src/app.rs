use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::configs::{SchemaManager, Settings, Storage};
use crate::handles::*;
use crate::repositories::SoilReadingRepository;
use crate::services::RelayService;

pub async fn create_app(settings: &Arc<Settings>) -> Router {
    let storage = Arc::new(
        Storage::new(settings.database.clone(), SchemaManager::default())
            .await
            .unwrap(),
    );

    let readings = Arc::new(SoilReadingRepository::new(storage.clone()));

    // The one shared mutable resource; every relay route goes through it.
    let relay_service = Arc::new(RelayService::new());

    let reading_routes = Router::new()
        .route("/soil-data", post(receive_soil_data))
        .route("/latest-data", get(get_latest_data))
        .with_state(ReadingState {
            readings: readings.clone(),
            relay_service: relay_service.clone(),
        });

    let relay_routes = Router::new()
        .route("/control-relay", post(control_relay))
        .route("/relay-status", get(get_relay_status))
        .route("/relay-command", get(get_relay_command))
        .route("/set-auto-mode", post(set_auto_mode))
        .route("/current-mode", get(get_current_mode))
        .with_state(RelayControlState {
            relay_service: relay_service.clone(),
        });

    Router::new()
        .merge(reading_routes)
        .merge(relay_routes)
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
