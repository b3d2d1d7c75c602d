// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Per-category totals over a trailing window.

use crate::models::{ActivityCategory, ActivityRecord, CategoryBreakdown};
use chrono::{DateTime, Duration, Utc};

pub const DEFAULT_BREAKDOWN_DAYS: u32 = 30;

/// Count and sum records created within `days` before `now` into the fixed
/// category buckets. Records without a timestamp are skipped.
pub fn category_breakdown(
    records: &[ActivityRecord],
    now: DateTime<Utc>,
    days: u32,
) -> CategoryBreakdown {
    let window_start = now - Duration::days(i64::from(days));
    let mut breakdown = CategoryBreakdown::empty(days);

    for record in records
        .iter()
        .filter(|r| r.created_at.is_some_and(|t| t >= window_start))
    {
        breakdown
            .categories
            .entry(ActivityCategory::from_label(&record.category))
            .or_default()
            .add(record.carbon_saved);
    }

    breakdown
}
