//! Process entry point: load the dataset once, build the snapshot, and host
//! the dashboard page plus its JSON API.

mod api;
mod error;
mod main_lib;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use crate::main_lib::{AppState, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("salesdash_server=info,tower_http=info")),
        )
        .init();

    let config = ServerConfig::from_env();
    let state = AppState::bootstrap(&config);
    tracing::info!(
        records = state.record_set.len(),
        "sales data loaded from '{}'",
        config.data_path
    );

    let app = main_lib::router(state, &config);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    tracing::info!("dashboard available at http://{}", config.bind_addr);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
