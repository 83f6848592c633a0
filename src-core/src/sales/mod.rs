//! Sales dataset: record models, CSV loader, and aggregation functions.

pub mod analytics;
pub mod loader;
pub mod sales_model;

pub use analytics::{
    aggregate_by_category, aggregate_by_quarter, aggregate_over_time, grand_total,
    with_total_sales,
};
pub use loader::{load_sales_data, DEFAULT_DATA_PATH};
pub use sales_model::{
    quarter_label, quarter_of, AggregateRow, SalesColumns, SalesRecord, SalesRecordSet,
    TimeGranularity,
};
