// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time parsing and formatting.
//!
//! All timestamps are handled in UTC. Weekday and month bucketing downstream
//! relies on that.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Milliseconds in one day.
pub const MS_PER_DAY: f64 = 24.0 * 60.0 * 60.0 * 1000.0;

/// Parse a timestamp string in any of the encodings activity records arrive in.
///
/// Accepts RFC3339 with an offset, ISO 8601 without an offset (taken as UTC),
/// and a bare `YYYY-MM-DD` date (midnight UTC).
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Convert epoch milliseconds into a UTC timestamp.
pub fn from_epoch_millis(millis: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis)
}
