// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity record model for storage, aggregation and API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// A single logged eco-friendly activity.
///
/// `carbon_saved` is the only field the aggregators score on; it is never
/// recomputed from `quantity` and `unit` once the record exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ActivityRecord {
    /// Opaque identifier, unique within one user's records
    pub id: String,
    /// Activity label (Cycling, Recycling, ...)
    pub activity_type: String,
    /// Display category (Transport, Food, Purchases, ...)
    pub category: String,
    /// Measured amount, never negative
    pub quantity: f64,
    /// Unit paired with `quantity` (km, kg, meals, ...)
    pub unit: String,
    /// kg CO2 avoided, never negative
    pub carbon_saved: f64,
    /// Creation time. `None` when the source timestamp was unparseable.
    #[cfg_attr(feature = "binding-generation", ts(type = "string | null"))]
    pub created_at: Option<DateTime<Utc>>,
    /// Optional free text
    pub notes: Option<String>,
}

/// Fixed buckets used by the category breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum ActivityCategory {
    Transport,
    Food,
    Purchases,
    Other,
}

impl ActivityCategory {
    pub const ALL: [ActivityCategory; 4] = [
        ActivityCategory::Transport,
        ActivityCategory::Food,
        ActivityCategory::Purchases,
        ActivityCategory::Other,
    ];

    /// Map a free-text category onto a bucket. Unknown labels land in `Other`.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "transport" | "transportation" => ActivityCategory::Transport,
            "food" => ActivityCategory::Food,
            "purchases" | "purchase" => ActivityCategory::Purchases,
            _ => ActivityCategory::Other,
        }
    }
}
