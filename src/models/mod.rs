// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Data models for the application.

pub mod activity;
pub mod session;
pub mod stats;

pub use activity::{ActivityCategory, ActivityRecord};
pub use session::Session;
pub use stats::{BucketStats, CategoryBreakdown, MonthlyPoint, WeeklyStats};
