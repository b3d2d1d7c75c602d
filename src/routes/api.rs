// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity routes for authenticated users.

use crate::db::ActivityQueryCursor;
use crate::error::{AppError, Result};
use crate::models::{ActivityCategory, ActivityRecord, Session};
use crate::services::activity::LogActivityRequest;
use crate::services::catalog::{self, ActivityConversion};
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get},
    Extension, Json, Router,
};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// API routes (require authentication via JWT).
/// The auth middleware is applied in routes/mod.rs for these routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/me", get(get_me))
        .route("/api/activities", get(get_activities).post(log_activity))
        .route("/api/activities/{id}", delete(delete_activity))
}

/// Routes that need no session.
pub fn public_routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/activities/types", get(get_activity_types))
}

// ─── Session ─────────────────────────────────────────────────

/// Current session.
async fn get_me(Extension(session): Extension<Session>) -> Json<Session> {
    Json(session)
}

// ─── Activity Types ──────────────────────────────────────────

#[derive(Serialize)]
pub struct ActivityTypesResponse {
    pub activity_types: Vec<&'static str>,
    pub conversions: &'static [ActivityConversion],
}

async fn get_activity_types() -> Json<ActivityTypesResponse> {
    Json(ActivityTypesResponse {
        activity_types: catalog::activity_types(),
        conversions: &catalog::ACTIVITY_CONVERSIONS,
    })
}

// ─── Activities ──────────────────────────────────────────────

#[derive(Deserialize)]
struct ActivitiesQuery {
    /// Filter by category (Transport, Food, Purchases, Other)
    category: Option<String>,
    /// Cursor for forward pagination (opaque token).
    cursor: Option<String>,
    /// Items per page
    #[serde(default = "default_limit")]
    limit: u32,
}

fn default_limit() -> u32 {
    10
}

const MAX_LIMIT: u32 = 100;
const MAX_CATEGORY_LEN: usize = 20;
const CURSOR_PARTS: usize = 3;

fn parse_cursor(cursor: Option<&str>) -> Result<Option<ActivityQueryCursor>> {
    cursor
        .map(|raw| {
            let invalid_cursor = || AppError::BadRequest("Invalid 'cursor' parameter".to_string());

            let decoded = URL_SAFE_NO_PAD.decode(raw).map_err(|_| invalid_cursor())?;
            let decoded_str = std::str::from_utf8(&decoded).map_err(|_| invalid_cursor())?;

            let parts: Vec<&str> = decoded_str.split(':').collect();
            if parts.len() != CURSOR_PARTS {
                return Err(invalid_cursor());
            }

            let seconds = parts[0].parse::<i64>().map_err(|_| invalid_cursor())?;
            let nanos = parts[1].parse::<u32>().map_err(|_| invalid_cursor())?;
            let activity_id = parts[2].parse::<u64>().map_err(|_| invalid_cursor())?;
            let created_at =
                chrono::DateTime::from_timestamp(seconds, nanos).ok_or_else(invalid_cursor)?;

            Ok(ActivityQueryCursor {
                created_at,
                activity_id,
            })
        })
        .transpose()
}

fn encode_cursor(cursor: ActivityQueryCursor) -> String {
    let payload = format!(
        "{}:{}:{}",
        cursor.created_at.timestamp(),
        cursor.created_at.timestamp_subsec_nanos(),
        cursor.activity_id
    );
    URL_SAFE_NO_PAD.encode(payload)
}

fn cursor_after(activity: &ActivityRecord) -> Option<ActivityQueryCursor> {
    Some(ActivityQueryCursor {
        created_at: activity.created_at?,
        activity_id: activity.id.parse().ok()?,
    })
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ActivitiesResponse {
    pub activities: Vec<ActivityRecord>,
    pub limit: u32,
    pub next_cursor: Option<String>,
}

/// Get user's activities, newest first, with optional category filter.
async fn get_activities(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<Session>,
    Query(params): Query<ActivitiesQuery>,
) -> Result<Json<ActivitiesResponse>> {
    tracing::debug!(
        user_id = session.user_id,
        category = ?params.category,
        cursor = ?params.cursor,
        limit = params.limit,
        "Fetching activities"
    );

    if params.limit == 0 {
        return Err(AppError::BadRequest(
            "'limit' must be greater than 0".to_string(),
        ));
    }
    let limit = params.limit.min(MAX_LIMIT);

    let category = match params.category.as_deref() {
        Some(c) if c.len() > MAX_CATEGORY_LEN => {
            return Err(AppError::BadRequest("Invalid 'category' parameter".to_string()))
        }
        Some(c) => Some(ActivityCategory::from_label(c)),
        None => None,
    };
    let cursor = parse_cursor(params.cursor.as_deref())?;

    // Fetch one extra item to determine if another page is available.
    let mut activities = state
        .db
        .query_activities(session.user_id, category, cursor, limit.saturating_add(1))
        .await?;

    let has_more = activities.len() > limit as usize;
    if has_more {
        activities.truncate(limit as usize);
    }

    let next_cursor = if has_more {
        activities.last().and_then(cursor_after).map(encode_cursor)
    } else {
        None
    };

    Ok(Json(ActivitiesResponse {
        activities,
        limit,
        next_cursor,
    }))
}

/// Log a new activity. Carbon saved is computed from the catalog.
async fn log_activity(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<Session>,
    Json(request): Json<LogActivityRequest>,
) -> Result<(StatusCode, Json<ActivityRecord>)> {
    let activity = state
        .activity_service
        .log_activity(session.user_id, request, chrono::Utc::now())
        .await?;

    Ok((StatusCode::CREATED, Json(activity)))
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct DeleteActivityResponse {
    pub success: bool,
    pub message: String,
}

async fn delete_activity(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<Session>,
    Path(activity_id): Path<String>,
) -> Result<Json<DeleteActivityResponse>> {
    state
        .activity_service
        .delete_activity(session.user_id, &activity_id)
        .await?;

    Ok(Json(DeleteActivityResponse {
        success: true,
        message: "Activity deleted successfully".to_string(),
    }))
}
