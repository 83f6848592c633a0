//! Sales dataset models shared by the loader and the aggregation functions.

use std::collections::BTreeMap;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// One row of the input dataset.
///
/// Every field is optional: a column can be absent from the file entirely, or
/// a cell can be empty or unparseable. `total_sale` is derived (quantity ×
/// unit price), never read from the file.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesRecord {
    pub order_date: Option<NaiveDate>,
    pub quantity: Option<i64>,
    pub unit_price: Option<Decimal>,
    pub product_category: Option<String>,
    /// Derived total amount for the row, set by `with_total_sales`.
    pub total_sale: Option<Decimal>,
    /// Columns the loader does not recognize, passed through untouched.
    pub extra: BTreeMap<String, String>,
}

/// Which columns were present in the loaded file.
///
/// Captured from the CSV header once at load time so each aggregation can
/// check for its required columns explicitly instead of probing rows.
/// `total_sale` is flipped on by `with_total_sales` when both of its source
/// columns exist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesColumns {
    pub order_date: bool,
    pub quantity: bool,
    pub unit_price: bool,
    pub product_category: bool,
    pub total_sale: bool,
}

/// The full dataset: an ordered sequence of records plus the column-presence
/// flags. Loaded once and read-only afterwards (apart from the derived-total
/// pass).
#[derive(Debug, Clone, Default)]
pub struct SalesRecordSet {
    pub columns: SalesColumns,
    pub records: Vec<SalesRecord>,
}

impl SalesRecordSet {
    /// The "no data" value substituted when the input file cannot be read.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// One output row of a grouping pass: a bucket key (category label, period
/// start date, or quarter label) and the summed total for that bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateRow {
    pub bucket: String,
    pub total_sale: Decimal,
}

/// Time bucket width for `aggregate_over_time`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeGranularity {
    Month,
    Quarter,
    Year,
}

impl TimeGranularity {
    /// Truncate a date down to the start of its bucket.
    pub fn truncate(&self, date: NaiveDate) -> NaiveDate {
        let (year, month) = match self {
            TimeGranularity::Month => (date.year(), date.month()),
            TimeGranularity::Quarter => (date.year(), quarter_start_month(date.month())),
            TimeGranularity::Year => (date.year(), 1),
        };
        // The first of any month is always a valid date.
        NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(date)
    }
}

impl FromStr for TimeGranularity {
    type Err = ValidationError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.to_ascii_lowercase().as_str() {
            "month" => Ok(TimeGranularity::Month),
            "quarter" => Ok(TimeGranularity::Quarter),
            "year" => Ok(TimeGranularity::Year),
            other => Err(ValidationError::InvalidInput(format!(
                "Unknown time granularity '{}', expected month, quarter, or year",
                other
            ))),
        }
    }
}

/// Quarter number (1-4) for a date.
pub fn quarter_of(date: NaiveDate) -> u32 {
    (date.month() - 1) / 3 + 1
}

/// Quarter label in the `<year>Q<quarter>` form, e.g. "2024Q1".
pub fn quarter_label(date: NaiveDate) -> String {
    format!("{}Q{}", date.year(), quarter_of(date))
}

fn quarter_start_month(month: u32) -> u32 {
    (month - 1) / 3 * 3 + 1
}
