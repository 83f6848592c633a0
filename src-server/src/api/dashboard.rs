use std::sync::Arc;

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use salesdash_core::dashboard::{DashboardSnapshot, KpiValue};
use salesdash_core::sales::{aggregate_over_time, AggregateRow, TimeGranularity};

use crate::error::ApiResult;
use crate::main_lib::AppState;

/// The full results bundle the page renders from.
async fn get_dashboard(State(state): State<Arc<AppState>>) -> Json<DashboardSnapshot> {
    Json(state.snapshot.clone())
}

async fn get_category_sales(State(state): State<Arc<AppState>>) -> Json<Vec<AggregateRow>> {
    Json(state.snapshot.category_sales.clone())
}

#[derive(Deserialize)]
struct TrendQuery {
    granularity: Option<String>,
}

/// Sales totals bucketed over time, recomputed from the loaded record set.
/// Query params:
///   granularity: month | quarter | year (optional, defaults to month)
async fn get_sales_trend(
    Query(query): Query<TrendQuery>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<AggregateRow>>> {
    let granularity = match query.granularity.as_deref() {
        Some(raw) => raw.parse::<TimeGranularity>()?,
        None => TimeGranularity::Month,
    };

    Ok(Json(aggregate_over_time(&state.record_set, granularity)))
}

async fn get_quarterly_sales(State(state): State<Arc<AppState>>) -> Json<Vec<AggregateRow>> {
    Json(state.snapshot.quarterly_sales.clone())
}

async fn get_kpis(State(state): State<Arc<AppState>>) -> Json<Vec<KpiValue>> {
    Json(vec![
        state.snapshot.total_sales.clone(),
        state.snapshot.current_quarter.clone(),
    ])
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/dashboard", get(get_dashboard))
        .route("/sales/categories", get(get_category_sales))
        .route("/sales/trend", get(get_sales_trend))
        .route("/sales/quarterly", get(get_quarterly_sales))
        .route("/kpis", get(get_kpis))
}
