// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Monthly carbon-saved trend for the dashboard chart.

use crate::models::stats::{add_carbon, round_to};
use crate::models::{ActivityRecord, MonthlyPoint};
use chrono::Datelike;
use std::collections::BTreeMap;

/// Maximum number of months in the series.
pub const TREND_MONTHS: usize = 6;

const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Total carbon saved per calendar month (UTC), for the most recent months
/// that have at least one record, oldest first.
///
/// Months without records are not filled in. Records without a timestamp are
/// skipped.
pub fn monthly_trend(records: &[ActivityRecord]) -> Vec<MonthlyPoint> {
    let mut totals: BTreeMap<(i32, u32), f64> = BTreeMap::new();

    for record in records {
        let Some(created_at) = record.created_at else {
            continue;
        };
        let total = totals
            .entry((created_at.year(), created_at.month0()))
            .or_insert(0.0);
        *total = add_carbon(*total, record.carbon_saved);
    }

    let skip = totals.len().saturating_sub(TREND_MONTHS);
    totals
        .into_iter()
        .skip(skip)
        .map(|((_, month0), total)| MonthlyPoint {
            label: MONTH_LABELS[month0 as usize].to_string(),
            value: round_to(total, 1),
        })
        .collect()
}
