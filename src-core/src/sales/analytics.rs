//! The aggregation functions behind the dashboard tables.
//!
//! All functions here are stateless and pure: they read a `SalesRecordSet`
//! and produce fresh result rows on every call. When a required column is
//! missing from the input they return an empty result instead of failing,
//! so a malformed dataset degrades to blank charts.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::sales::sales_model::{
    quarter_label, AggregateRow, SalesRecordSet, TimeGranularity,
};

/// Derive the total sale amount for every record: quantity × unit price when
/// both are present, absent otherwise.
///
/// The total-sale column is only considered present when both source columns
/// exist in the file. Reapplying recomputes the same values.
pub fn with_total_sales(mut set: SalesRecordSet) -> SalesRecordSet {
    if !(set.columns.quantity && set.columns.unit_price) {
        return set;
    }

    for record in &mut set.records {
        record.total_sale = match (record.quantity, record.unit_price) {
            (Some(quantity), Some(unit_price)) => Some(Decimal::from(quantity) * unit_price),
            _ => None,
        };
    }
    set.columns.total_sale = true;
    set
}

/// Group records by product category and sum the total sale per group.
///
/// Rows come back in a deterministic (alphabetical) category order. Empty
/// when the category or total-sale column is absent.
pub fn aggregate_by_category(set: &SalesRecordSet) -> Vec<AggregateRow> {
    if !(set.columns.product_category && set.columns.total_sale) {
        return Vec::new();
    }

    let mut totals: BTreeMap<String, Decimal> = BTreeMap::new();
    for record in &set.records {
        if let (Some(category), Some(total)) = (record.product_category.as_deref(), record.total_sale) {
            *totals.entry(category.to_string()).or_insert(Decimal::ZERO) += total;
        }
    }

    totals
        .into_iter()
        .map(|(bucket, total_sale)| AggregateRow { bucket, total_sale })
        .collect()
}

/// Group records into time buckets of the given width and sum the total sale
/// per bucket.
///
/// Each order date is truncated to the start of its bucket; the bucket key is
/// that start date rendered `YYYY-MM-DD`. Rows are returned in chronological
/// order; callers may rely on the most recent bucket being last. Empty when
/// the order-date or total-sale column is absent; records with a missing date
/// or total are skipped.
pub fn aggregate_over_time(set: &SalesRecordSet, granularity: TimeGranularity) -> Vec<AggregateRow> {
    if !(set.columns.order_date && set.columns.total_sale) {
        return Vec::new();
    }

    let mut totals: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
    for record in &set.records {
        if let (Some(date), Some(total)) = (record.order_date, record.total_sale) {
            *totals.entry(granularity.truncate(date)).or_insert(Decimal::ZERO) += total;
        }
    }

    totals
        .into_iter()
        .map(|(start, total_sale)| AggregateRow {
            bucket: start.format("%Y-%m-%d").to_string(),
            total_sale,
        })
        .collect()
}

/// Group records by calendar quarter and sum the total sale per quarter.
///
/// The bucket key is the `<year>Q<quarter>` label, e.g. "2024Q1". Rows are
/// returned in chronological quarter order; callers may rely on the most
/// recent quarter being last. Empty when the order-date or total-sale column
/// is absent.
pub fn aggregate_by_quarter(set: &SalesRecordSet) -> Vec<AggregateRow> {
    if !(set.columns.order_date && set.columns.total_sale) {
        return Vec::new();
    }

    let mut totals: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
    for record in &set.records {
        if let (Some(date), Some(total)) = (record.order_date, record.total_sale) {
            *totals
                .entry(TimeGranularity::Quarter.truncate(date))
                .or_insert(Decimal::ZERO) += total;
        }
    }

    totals
        .into_iter()
        .map(|(start, total_sale)| AggregateRow {
            bucket: quarter_label(start),
            total_sale,
        })
        .collect()
}

/// Sum of the total sale across all records. Records without a derived total
/// contribute nothing.
pub fn grand_total(set: &SalesRecordSet) -> Decimal {
    set.records
        .iter()
        .filter_map(|record| record.total_sale)
        .sum()
}
