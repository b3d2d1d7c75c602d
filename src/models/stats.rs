// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Aggregate shapes produced from a user's activity records.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::ActivityCategory;

/// One point of the monthly carbon-saved series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct MonthlyPoint {
    /// Three-letter month abbreviation ("Jan")
    pub label: String,
    /// Total kg CO2 saved that month, rounded to one decimal
    pub value: f64,
}

/// Count and carbon total for one weekday or category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct BucketStats {
    pub count: u32,
    pub total_carbon: f64,
}

impl BucketStats {
    pub fn add(&mut self, carbon: f64) {
        self.count += 1;
        self.total_carbon = add_carbon(self.total_carbon, carbon);
    }
}

/// Statistics for the trailing seven days.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct WeeklyStats {
    /// Weekday name ("Monday") -> stats, only weekdays that had activity
    pub daily_stats: HashMap<String, BucketStats>,
    /// Rounded to two decimals
    pub total_carbon_saved: f64,
    pub total_activities: u32,
    pub period: String,
}

/// Per-category totals over a trailing window. Every bucket is always present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct CategoryBreakdown {
    pub days: u32,
    pub categories: BTreeMap<ActivityCategory, BucketStats>,
}

impl CategoryBreakdown {
    pub fn empty(days: u32) -> Self {
        Self {
            days,
            categories: ActivityCategory::ALL
                .into_iter()
                .map(|c| (c, BucketStats::default()))
                .collect(),
        }
    }
}

/// Add two carbon amounts, saturating at `f64::MAX` so totals stay finite.
pub fn add_carbon(total: f64, carbon: f64) -> f64 {
    (total + carbon).min(f64::MAX)
}

/// Sum carbon amounts with [`add_carbon`].
pub fn sum_carbon(values: impl IntoIterator<Item = f64>) -> f64 {
    values.into_iter().fold(0.0, add_carbon)
}

/// Round to a fixed number of decimal places.
///
/// Values too large to scale are already integral and are returned as is.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}
