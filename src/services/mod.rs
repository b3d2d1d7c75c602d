// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.
//!
//! The aggregators (`score`, `trend`, `weekly`, `breakdown`) are pure
//! functions over normalized records and take `now` explicitly.

pub mod activity;
pub mod breakdown;
pub mod catalog;
pub mod normalizer;
pub mod score;
pub mod trend;
pub mod weekly;

pub use activity::{summarize, ActivityService, AggregateSummary, DashboardSummary};
pub use normalizer::{normalize, AggregationError};
