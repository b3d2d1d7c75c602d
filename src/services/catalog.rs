// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Supported activity types and their carbon conversion factors.

use serde::Serialize;

/// Conversion data for one activity type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ActivityConversion {
    pub activity_type: &'static str,
    pub unit: &'static str,
    /// kg CO2 saved per unit
    pub carbon_per_unit: f64,
}

pub const ACTIVITY_CONVERSIONS: [ActivityConversion; 7] = [
    ActivityConversion {
        activity_type: "Cycling",
        unit: "km",
        carbon_per_unit: 0.21,
    },
    ActivityConversion {
        activity_type: "Public Transit",
        unit: "km",
        carbon_per_unit: 0.089,
    },
    ActivityConversion {
        activity_type: "Walking",
        unit: "km",
        carbon_per_unit: 0.0,
    },
    ActivityConversion {
        activity_type: "Vegetarian Meal",
        unit: "meals",
        carbon_per_unit: 2.5,
    },
    ActivityConversion {
        activity_type: "Recycling",
        unit: "kg",
        carbon_per_unit: 1.5,
    },
    ActivityConversion {
        activity_type: "Energy Conservation",
        unit: "kWh",
        carbon_per_unit: 0.92,
    },
    ActivityConversion {
        activity_type: "Water Conservation",
        unit: "liters",
        carbon_per_unit: 0.0002,
    },
];

/// Errors from converting a logged quantity into carbon saved.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum CatalogError {
    #[error("Invalid activity type: {0} (valid types: {valid})", valid = activity_types().join(", "))]
    UnknownType(String),

    #[error("Invalid unit for {activity_type}. Expected {expected}, got {got}")]
    UnitMismatch {
        activity_type: String,
        expected: &'static str,
        got: String,
    },

    #[error("Quantity {quantity} of {activity_type} is too large")]
    QuantityTooLarge { activity_type: String, quantity: f64 },
}

pub fn lookup(activity_type: &str) -> Option<&'static ActivityConversion> {
    ACTIVITY_CONVERSIONS
        .iter()
        .find(|c| c.activity_type == activity_type)
}

pub fn activity_types() -> Vec<&'static str> {
    ACTIVITY_CONVERSIONS.iter().map(|c| c.activity_type).collect()
}

/// kg CO2 saved by `quantity` of `activity_type` measured in `unit`.
pub fn carbon_saved(activity_type: &str, quantity: f64, unit: &str) -> Result<f64, CatalogError> {
    let conversion =
        lookup(activity_type).ok_or_else(|| CatalogError::UnknownType(activity_type.to_string()))?;

    if unit != conversion.unit {
        return Err(CatalogError::UnitMismatch {
            activity_type: activity_type.to_string(),
            expected: conversion.unit,
            got: unit.to_string(),
        });
    }

    let carbon = quantity * conversion.carbon_per_unit;
    if !carbon.is_finite() {
        return Err(CatalogError::QuantityTooLarge {
            activity_type: activity_type.to_string(),
            quantity,
        });
    }

    Ok(carbon)
}
