//! One-shot assembly of the dashboard results bundle.

use std::path::Path;

use crate::dashboard::kpi_model::KpiValue;
use crate::dashboard::snapshot_model::DashboardSnapshot;
use crate::sales::analytics::{
    aggregate_by_category, aggregate_by_quarter, aggregate_over_time, grand_total,
    with_total_sales,
};
use crate::sales::loader::load_sales_data;
use crate::sales::sales_model::{SalesRecordSet, TimeGranularity};

/// Load the dataset from `path` and derive per-record totals. The returned
/// set is ready for any of the aggregation functions.
pub fn prepare_records<P: AsRef<Path>>(path: P) -> SalesRecordSet {
    with_total_sales(load_sales_data(path))
}

/// Run the full aggregation pass over an already-prepared record set.
///
/// This is the explicit initialization step the hosting entry point invokes
/// once; nothing here touches global state.
pub fn build_snapshot(set: &SalesRecordSet) -> DashboardSnapshot {
    let monthly_trend = aggregate_over_time(set, TimeGranularity::Month);
    let category_sales = aggregate_by_category(set);
    let quarterly_sales = aggregate_by_quarter(set);

    let total_sales = KpiValue::plain("Total Sales", grand_total(set));
    let current_quarter = KpiValue::from_series("Current Quarter Sales", &quarterly_sales);

    DashboardSnapshot {
        record_count: set.len(),
        monthly_trend,
        category_sales,
        quarterly_sales,
        total_sales,
        current_quarter,
    }
}
