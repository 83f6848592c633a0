//! Headline KPI values shown as cards on the dashboard.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::sales::sales_model::AggregateRow;

/// A single headline metric: the current value, the prior-period value when
/// one exists, and the period-over-period percentage change when it can be
/// computed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiValue {
    pub label: String,
    pub value: Decimal,
    pub previous: Option<Decimal>,
    /// (value − previous) / previous × 100. Absent when there is no prior
    /// period or the prior value is zero.
    pub delta_pct: Option<Decimal>,
}

impl KpiValue {
    /// A KPI with no prior-period comparison.
    pub fn plain(label: &str, value: Decimal) -> Self {
        KpiValue {
            label: label.to_string(),
            value,
            previous: None,
            delta_pct: None,
        }
    }

    /// Derive a KPI from a chronologically ordered aggregate series: the
    /// current value is the last row's total, the prior value the
    /// second-to-last row's when at least two rows exist.
    pub fn from_series(label: &str, rows: &[AggregateRow]) -> Self {
        let value = rows.last().map(|row| row.total_sale).unwrap_or(Decimal::ZERO);
        let previous = if rows.len() > 1 {
            Some(rows[rows.len() - 2].total_sale)
        } else {
            None
        };
        let delta_pct = match previous {
            Some(prev) if !prev.is_zero() => Some((value - prev) / prev * Decimal::ONE_HUNDRED),
            _ => None,
        };

        KpiValue {
            label: label.to_string(),
            value,
            previous,
            delta_pct,
        }
    }
}
