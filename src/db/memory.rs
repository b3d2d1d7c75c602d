// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory activity store with typed operations.
//!
//! Records are kept per user in insertion order. Ids come from a single
//! counter shared by all users, so they are unique store-wide and increase
//! with insertion time.

use crate::error::AppError;
use crate::models::{ActivityCategory, ActivityRecord};
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use std::cmp::Reverse;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Position of the last item of a page in newest-first order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityQueryCursor {
    pub created_at: DateTime<Utc>,
    pub activity_id: u64,
}

/// Activity store shared across handlers.
#[derive(Clone, Default)]
pub struct MemoryDb {
    activities: Arc<DashMap<u64, Vec<ActivityRecord>>>,
    next_id: Arc<AtomicU64>,
}

impl MemoryDb {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve a fresh activity id.
    pub fn next_activity_id(&self) -> u64 {
        self.next_id.fetch_add(1, Ordering::Relaxed) + 1
    }

    // ─── Activity Operations ─────────────────────────────────────

    /// Store a new activity for a user.
    pub async fn insert_activity(
        &self,
        user_id: u64,
        activity: ActivityRecord,
    ) -> Result<(), AppError> {
        let mut records = self.activities.entry(user_id).or_default();
        if records.iter().any(|r| r.id == activity.id) {
            return Err(AppError::Database(format!(
                "Duplicate activity id {} for user {}",
                activity.id, user_id
            )));
        }
        records.push(activity);
        Ok(())
    }

    /// All activities for a user, in insertion order.
    pub async fn get_activities_for_user(
        &self,
        user_id: u64,
    ) -> Result<Vec<ActivityRecord>, AppError> {
        Ok(self
            .activities
            .get(&user_id)
            .map(|records| records.clone())
            .unwrap_or_default())
    }

    /// Page through a user's activities, newest first.
    ///
    /// Returns at most `limit` records strictly after `cursor`.
    pub async fn query_activities(
        &self,
        user_id: u64,
        category: Option<ActivityCategory>,
        cursor: Option<ActivityQueryCursor>,
        limit: u32,
    ) -> Result<Vec<ActivityRecord>, AppError> {
        let mut results: Vec<ActivityRecord> = self
            .get_activities_for_user(user_id)
            .await?
            .into_iter()
            .filter(|r| category.is_none_or(|c| ActivityCategory::from_label(&r.category) == c))
            .collect();

        results.sort_by_key(|r| Reverse(sort_key(r)));

        if let Some(cursor) = cursor {
            let boundary = (Some(cursor.created_at), cursor.activity_id);
            results.retain(|r| sort_key(r) < boundary);
        }

        results.truncate(limit as usize);
        Ok(results)
    }

    /// Delete one of a user's activities. Returns the removed record, if any.
    pub async fn delete_activity(
        &self,
        user_id: u64,
        activity_id: &str,
    ) -> Result<Option<ActivityRecord>, AppError> {
        let Some(mut records) = self.activities.get_mut(&user_id) else {
            return Ok(None);
        };

        let removed = records
            .iter()
            .position(|r| r.id == activity_id)
            .map(|index| records.remove(index));
        Ok(removed)
    }
}

/// Ordering key: creation time, then numeric id. Untimed records sort oldest.
pub fn sort_key(record: &ActivityRecord) -> (Option<DateTime<Utc>>, u64) {
    (record.created_at, record.id.parse().unwrap_or(0))
}
