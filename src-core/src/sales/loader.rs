//! CSV loading for the sales dataset.
//!
//! The public entry point never fails: a missing or unreadable file logs a
//! diagnostic and yields an empty record set, so the dashboard renders "no
//! data" instead of crashing. Row-level problems (bad cells, unparseable
//! dates) degrade per row and are logged.

use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use csv::StringRecord;
use rust_decimal::Decimal;

use crate::errors::Result;
use crate::sales::sales_model::{SalesColumns, SalesRecord, SalesRecordSet};

/// Default input location, relative to the process working directory.
pub const DEFAULT_DATA_PATH: &str = "data/sample_sales_data.csv";

// Recognized column names, matched case-insensitively.
const ORDER_DATE: &str = "orderdate";
const QUANTITY: &str = "quantity";
const UNIT_PRICE: &str = "unitprice";
const PRODUCT_CATEGORY: &str = "productcategory";

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%d-%m-%Y"];
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// Load the sales dataset from `path`.
///
/// Returns the full row set with the order-date column parsed into a date
/// type. If the file cannot be opened or its header cannot be read, the
/// condition is logged and an empty record set is returned; callers treat an
/// empty set the same as an empty file.
pub fn load_sales_data<P: AsRef<Path>>(path: P) -> SalesRecordSet {
    let path = path.as_ref();
    match read_records(path) {
        Ok(set) => {
            log::info!("loaded {} sales records from '{}'", set.len(), path.display());
            set
        }
        Err(e) => {
            log::error!("failed to load sales data from '{}': {}", path.display(), e);
            SalesRecordSet::empty()
        }
    }
}

fn read_records(path: &Path) -> Result<SalesRecordSet> {
    let file = File::open(path)?;
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(file);

    let headers = reader.headers()?.clone();
    let header_map = build_header_map(&headers);

    let columns = SalesColumns {
        order_date: header_map.contains_key(ORDER_DATE),
        quantity: header_map.contains_key(QUANTITY),
        unit_price: header_map.contains_key(UNIT_PRICE),
        product_category: header_map.contains_key(PRODUCT_CATEGORY),
        total_sale: false,
    };

    let mut records = Vec::new();
    for (idx, row) in reader.records().enumerate() {
        // Header is line 1, so data rows start at line 2.
        let line = idx + 2;
        match row {
            Ok(row) => records.push(parse_row(&headers, &header_map, &row, line)),
            Err(e) => log::warn!("skipping malformed row at line {}: {}", line, e),
        }
    }

    Ok(SalesRecordSet { columns, records })
}

/// Map lowercased header name -> column index.
fn build_header_map(headers: &StringRecord) -> HashMap<String, usize> {
    headers
        .iter()
        .enumerate()
        .map(|(idx, name)| (name.trim().to_lowercase(), idx))
        .collect()
}

fn parse_row(
    headers: &StringRecord,
    header_map: &HashMap<String, usize>,
    row: &StringRecord,
    line: usize,
) -> SalesRecord {
    let mut record = SalesRecord::default();

    if let Some(raw) = cell(header_map, row, ORDER_DATE) {
        record.order_date = parse_order_date(raw);
        if record.order_date.is_none() {
            log::warn!("unparseable order date '{}' at line {}", raw, line);
        }
    }

    if let Some(raw) = cell(header_map, row, QUANTITY) {
        record.quantity = raw.parse::<i64>().ok();
        if record.quantity.is_none() {
            log::warn!("unparseable quantity '{}' at line {}", raw, line);
        }
    }

    if let Some(raw) = cell(header_map, row, UNIT_PRICE) {
        record.unit_price = raw.parse::<Decimal>().ok();
        if record.unit_price.is_none() {
            log::warn!("unparseable unit price '{}' at line {}", raw, line);
        }
    }

    if let Some(raw) = cell(header_map, row, PRODUCT_CATEGORY) {
        record.product_category = Some(raw.to_string());
    }

    // Everything else passes through untouched.
    for (idx, value) in row.iter().enumerate() {
        let name = match headers.get(idx) {
            Some(name) => name.trim(),
            None => continue,
        };
        if is_recognized(name) || value.is_empty() {
            continue;
        }
        record.extra.insert(name.to_string(), value.to_string());
    }

    record
}

/// Non-empty cell value for a recognized column, if the column exists.
fn cell<'r>(
    header_map: &HashMap<String, usize>,
    row: &'r StringRecord,
    column: &str,
) -> Option<&'r str> {
    let idx = *header_map.get(column)?;
    row.get(idx).filter(|value| !value.is_empty())
}

fn is_recognized(header: &str) -> bool {
    matches!(
        header.to_lowercase().as_str(),
        ORDER_DATE | QUANTITY | UNIT_PRICE | PRODUCT_CATEGORY
    )
}

fn parse_order_date(raw: &str) -> Option<NaiveDate> {
    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(raw, fmt) {
            return Some(date);
        }
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt.date());
        }
    }
    None
}
