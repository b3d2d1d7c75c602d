// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity logging and aggregation service.
//!
//! Handles the core workflow:
//! 1. Validate the logged activity against the catalog
//! 2. Compute carbon saved from quantity and conversion factor
//! 3. Store the record
//! 4. Serve aggregates (green score, trends, weekly and category stats)

use crate::db::memory::sort_key;
use crate::db::MemoryDb;
use crate::error::{AppError, Result};
use crate::models::stats::{round_to, sum_carbon};
use crate::models::{ActivityRecord, CategoryBreakdown, MonthlyPoint, WeeklyStats};
use crate::services::{breakdown, catalog, score, trend, weekly};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::Validate;

/// Number of recent activities shown on the dashboard.
const RECENT_ACTIVITIES: usize = 5;

/// Request body for logging a new activity.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LogActivityRequest {
    #[validate(length(min = 1, max = 50))]
    pub activity_type: String,
    #[validate(length(min = 1, max = 20))]
    pub category: String,
    #[validate(range(min = 0.0))]
    pub quantity: f64,
    #[validate(length(min = 1, max = 20))]
    pub unit: String,
    #[validate(length(max = 500))]
    pub notes: Option<String>,
}

/// Everything the dashboard renders, computed from one read of the store.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct DashboardSummary {
    pub green_score: u8,
    pub total_carbon_saved: f64,
    pub total_activities: u32,
    pub monthly_trend: Vec<MonthlyPoint>,
    pub recent_activities: Vec<ActivityRecord>,
}

/// Aggregates computed from an arbitrary batch of records.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct AggregateSummary {
    pub green_score: u8,
    pub monthly_trend: Vec<MonthlyPoint>,
    pub weekly_stats: WeeklyStats,
}

/// Run all three aggregators over the same records.
pub fn summarize(records: &[ActivityRecord], now: DateTime<Utc>) -> AggregateSummary {
    AggregateSummary {
        green_score: score::green_score(records, now),
        monthly_trend: trend::monthly_trend(records),
        weekly_stats: weekly::weekly_stats(records, now),
    }
}

/// Logs activities and computes per-user aggregates.
#[derive(Clone)]
pub struct ActivityService {
    db: MemoryDb,
}

impl ActivityService {
    pub fn new(db: MemoryDb) -> Self {
        Self { db }
    }

    /// Validate, convert and store a new activity created at `now`.
    pub async fn log_activity(
        &self,
        user_id: u64,
        request: LogActivityRequest,
        now: DateTime<Utc>,
    ) -> Result<ActivityRecord> {
        request.validate()?;
        if !request.quantity.is_finite() {
            return Err(AppError::BadRequest("quantity must be finite".to_string()));
        }

        let carbon_saved =
            catalog::carbon_saved(&request.activity_type, request.quantity, &request.unit)?;

        let activity = ActivityRecord {
            id: self.db.next_activity_id().to_string(),
            activity_type: request.activity_type,
            category: request.category,
            quantity: request.quantity,
            unit: request.unit,
            carbon_saved,
            created_at: Some(now),
            notes: request.notes.filter(|n| !n.trim().is_empty()),
        };

        self.db.insert_activity(user_id, activity.clone()).await?;

        tracing::info!(
            user_id,
            activity_id = %activity.id,
            activity_type = %activity.activity_type,
            carbon_saved = activity.carbon_saved,
            "Activity logged"
        );

        Ok(activity)
    }

    /// Remove one of the user's activities.
    pub async fn delete_activity(&self, user_id: u64, activity_id: &str) -> Result<ActivityRecord> {
        let removed = self
            .db
            .delete_activity(user_id, activity_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Activity {} not found", activity_id)))?;

        tracing::info!(user_id, activity_id, "Activity deleted");
        Ok(removed)
    }

    pub async fn dashboard(&self, user_id: u64, now: DateTime<Utc>) -> Result<DashboardSummary> {
        let records = self.db.get_activities_for_user(user_id).await?;

        let mut recent = records.clone();
        recent.sort_by_key(|r| Reverse(sort_key(r)));
        recent.truncate(RECENT_ACTIVITIES);

        let summary = DashboardSummary {
            green_score: score::green_score(&records, now),
            total_carbon_saved: round_to(sum_carbon(records.iter().map(|r| r.carbon_saved)), 2),
            total_activities: records.len() as u32,
            monthly_trend: trend::monthly_trend(&records),
            recent_activities: recent,
        };

        tracing::debug!(
            user_id,
            green_score = summary.green_score,
            months = summary.monthly_trend.len(),
            "Dashboard computed"
        );

        Ok(summary)
    }

    pub async fn weekly_stats(&self, user_id: u64, now: DateTime<Utc>) -> Result<WeeklyStats> {
        let records = self.db.get_activities_for_user(user_id).await?;
        Ok(weekly::weekly_stats(&records, now))
    }

    pub async fn category_breakdown(
        &self,
        user_id: u64,
        now: DateTime<Utc>,
        days: u32,
    ) -> Result<CategoryBreakdown> {
        let records = self.db.get_activities_for_user(user_id).await?;
        Ok(breakdown::category_breakdown(&records, now, days))
    }
}
