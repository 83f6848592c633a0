//! Dashboard results bundle: KPI derivation and the one-shot snapshot build.

pub mod dashboard_service;
pub mod kpi_model;
pub mod snapshot_model;

pub use dashboard_service::{build_snapshot, prepare_records};
pub use kpi_model::KpiValue;
pub use snapshot_model::DashboardSnapshot;
