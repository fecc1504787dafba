use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use terrasync_server::configs::schema::SchemaManager;
use terrasync_server::configs::settings::Database;
use terrasync_server::configs::storage::Storage;
use terrasync_server::handles::health_handle::health_check;
use terrasync_server::handles::reading_handle::{get_latest_data, receive_soil_data, ReadingState};
use terrasync_server::handles::relay_handle::{
    control_relay, get_current_mode, get_relay_command, get_relay_status, set_auto_mode,
    RelayControlState,
};
use terrasync_server::repositories::SoilReadingRepository;
use terrasync_server::services::RelayService;

pub struct MockApp {
    pub router: Router,
    pub storage: Arc<Storage>,
    pub relay_service: Arc<RelayService>,
}

impl MockApp {
    pub async fn new() -> Self {
        let storage = Arc::new(
            Storage::new(
                Database {
                    migration_path: None,
                    clean_start: true,
                    url: String::from("sqlite::memory:"),
                },
                SchemaManager::default(),
            )
            .await
            .unwrap(),
        );

        let readings = Arc::new(SoilReadingRepository::new(storage.clone()));
        let relay_service = Arc::new(RelayService::new());

        let reading_routes = Router::new()
            .route("/soil-data", post(receive_soil_data))
            .route("/latest-data", get(get_latest_data))
            .with_state(ReadingState {
                readings,
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

        let router = Router::new()
            .merge(reading_routes)
            .merge(relay_routes)
            .route("/health", get(health_check));

        Self {
            router,
            storage,
            relay_service,
        }
    }
}
