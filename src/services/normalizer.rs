// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Coerce loosely-typed activity records into [`ActivityRecord`] values.
//!
//! Individual bad fields degrade to defaults. The only hard failure is an
//! input that is not a sequence at all.

use crate::models::ActivityRecord;
use crate::time_utils::{from_epoch_millis, parse_timestamp};
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

/// Field name variants observed across record producers, canonical name first.
const ID_FIELDS: &[&str] = &["id"];
const TYPE_FIELDS: &[&str] = &["activity_type", "activityType"];
const CATEGORY_FIELDS: &[&str] = &["category"];
const QUANTITY_FIELDS: &[&str] = &["quantity"];
const UNIT_FIELDS: &[&str] = &["unit"];
const CARBON_FIELDS: &[&str] = &["carbon_saved", "carbonSaved", "carbonFootprint"];
const CREATED_FIELDS: &[&str] = &["created_at", "createdAt", "date"];
const NOTES_FIELDS: &[&str] = &["notes"];

/// Errors from the aggregation core.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AggregationError {
    #[error("Expected a sequence of activity records, got {0}")]
    NotASequence(&'static str),
}

/// Normalize a raw JSON payload into activity records.
///
/// Output has the same length and order as the input array.
pub fn normalize(raw: &Value) -> Result<Vec<ActivityRecord>, AggregationError> {
    let items = raw
        .as_array()
        .ok_or_else(|| AggregationError::NotASequence(json_kind(raw)))?;

    let records: Vec<ActivityRecord> = items.iter().map(normalize_record).collect();

    let unplaced = records.iter().filter(|r| r.created_at.is_none()).count();
    if unplaced > 0 {
        tracing::debug!(
            total = records.len(),
            unplaced,
            "Normalized records with unparseable timestamps"
        );
    }

    Ok(records)
}

/// Normalize a single raw record. Non-object values yield a record of defaults.
pub fn normalize_record(raw: &Value) -> ActivityRecord {
    let empty = Map::new();
    let fields = raw.as_object().unwrap_or(&empty);

    ActivityRecord {
        id: lookup(fields, ID_FIELDS)
            .and_then(coerce_string)
            .unwrap_or_default(),
        activity_type: lookup(fields, TYPE_FIELDS)
            .and_then(coerce_string)
            .unwrap_or_default(),
        category: lookup(fields, CATEGORY_FIELDS)
            .and_then(coerce_string)
            .unwrap_or_default(),
        quantity: lookup(fields, QUANTITY_FIELDS)
            .map(coerce_non_negative)
            .unwrap_or(0.0),
        unit: lookup(fields, UNIT_FIELDS)
            .and_then(coerce_string)
            .unwrap_or_default(),
        carbon_saved: lookup(fields, CARBON_FIELDS)
            .map(coerce_non_negative)
            .unwrap_or(0.0),
        created_at: lookup(fields, CREATED_FIELDS).and_then(coerce_timestamp),
        notes: lookup(fields, NOTES_FIELDS)
            .and_then(coerce_string)
            .filter(|n| !n.is_empty()),
    }
}

/// First non-null value among the candidate field names.
fn lookup<'a>(fields: &'a Map<String, Value>, names: &[&str]) -> Option<&'a Value> {
    names
        .iter()
        .filter_map(|name| fields.get(*name))
        .find(|v| !v.is_null())
}

fn coerce_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Parse a number from a JSON number or numeric string. Anything unparseable,
/// negative or non-finite becomes 0.
fn coerce_non_negative(value: &Value) -> f64 {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    match parsed {
        Some(v) if v.is_finite() && v > 0.0 => v,
        _ => 0.0,
    }
}

/// Strings of digits and JSON numbers (integer or float) are epoch
/// milliseconds; other strings go through [`parse_timestamp`].
fn coerce_timestamp(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(s) => {
            let s = s.trim();
            if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
                s.parse().ok().and_then(from_epoch_millis)
            } else {
                parse_timestamp(s)
            }
        }
        Value::Number(n) => match n.as_i64() {
            Some(millis) => from_epoch_millis(millis),
            None => n
                .as_f64()
                .filter(|f| f.is_finite() && f.abs() < i64::MAX as f64)
                .and_then(|f| from_epoch_millis(f.trunc() as i64)),
        },
        _ => None,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
