use std::sync::Arc;

use axum::Router;

use crate::main_lib::AppState;

pub mod dashboard;

pub fn router() -> Router<Arc<AppState>> {
    Router::new().merge(dashboard::router())
}
