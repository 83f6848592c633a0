//! The results bundle handed to the presentation layer.

use serde::Serialize;

use crate::dashboard::kpi_model::KpiValue;
use crate::sales::sales_model::AggregateRow;

/// Everything one load-aggregate pass produces: the summary tables behind
/// the three charts and the two KPI cards. Built once at startup and served
/// unchanged for the process lifetime.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub record_count: usize,
    /// Monthly sales totals, chronological.
    pub monthly_trend: Vec<AggregateRow>,
    /// Sales totals per product category.
    pub category_sales: Vec<AggregateRow>,
    /// Quarterly sales totals, chronological.
    pub quarterly_sales: Vec<AggregateRow>,
    /// Grand total of sales across all records.
    pub total_sales: KpiValue,
    /// Latest quarter's sales with the quarter-over-quarter change.
    pub current_quarter: KpiValue,
}
