//! Shared server state and router assembly.

use std::sync::Arc;

use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use salesdash_core::dashboard::{build_snapshot, prepare_records, DashboardSnapshot};
use salesdash_core::sales::{SalesRecordSet, DEFAULT_DATA_PATH};

use crate::api;

/// Environment-driven settings with local-use defaults.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub data_path: String,
    pub assets_dir: String,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        ServerConfig {
            bind_addr: std::env::var("SALESDASH_ADDR")
                .unwrap_or_else(|_| "127.0.0.1:8050".to_string()),
            data_path: std::env::var("SALESDASH_DATA")
                .unwrap_or_else(|_| DEFAULT_DATA_PATH.to_string()),
            assets_dir: std::env::var("SALESDASH_ASSETS")
                .unwrap_or_else(|_| "src-server/assets".to_string()),
        }
    }
}

/// Read-only application state: the record set loaded at startup and the
/// snapshot computed from it. Nothing mutates after bootstrap.
pub struct AppState {
    pub record_set: SalesRecordSet,
    pub snapshot: DashboardSnapshot,
}

impl AppState {
    /// One-shot load-and-aggregate pass. A missing data file is recovered in
    /// the loader, so bootstrap itself cannot fail.
    pub fn bootstrap(config: &ServerConfig) -> Arc<Self> {
        let record_set = prepare_records(&config.data_path);
        let snapshot = build_snapshot(&record_set);
        Arc::new(AppState {
            record_set,
            snapshot,
        })
    }
}

/// Assemble the application router: the JSON API under `/api` and the static
/// dashboard page for everything else.
pub fn router(state: Arc<AppState>, config: &ServerConfig) -> Router {
    let assets = ServeDir::new(&config.assets_dir).append_index_html_on_directories(true);

    Router::new()
        .nest("/api", api::router())
        .with_state(state)
        .fallback_service(assets)
        .layer(TraceLayer::new_for_http())
}
