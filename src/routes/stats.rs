// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Statistics routes: dashboard, weekly, category and ad-hoc aggregation.

use crate::error::{AppError, Result};
use crate::models::{CategoryBreakdown, Session, WeeklyStats};
use crate::services::{normalize, summarize, AggregateSummary, DashboardSummary};
use crate::AppState;
use axum::{
    extract::{Query, State},
    routing::{get, post},
    Extension, Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

const MAX_WINDOW_DAYS: u32 = 365;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/stats/dashboard", get(get_dashboard))
        .route("/api/stats/weekly", get(get_weekly_stats))
        .route("/api/stats/categories", get(get_category_breakdown))
        .route("/api/stats/aggregate", post(aggregate_records))
}

/// Green score, monthly trend and recent activities for the current user.
async fn get_dashboard(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<Session>,
) -> Result<Json<DashboardSummary>> {
    let summary = state
        .activity_service
        .dashboard(session.user_id, chrono::Utc::now())
        .await?;
    Ok(Json(summary))
}

async fn get_weekly_stats(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<Session>,
) -> Result<Json<WeeklyStats>> {
    let stats = state
        .activity_service
        .weekly_stats(session.user_id, chrono::Utc::now())
        .await?;
    Ok(Json(stats))
}

#[derive(Deserialize)]
struct CategoryQuery {
    /// Trailing window in days; defaults to the configured window
    days: Option<u32>,
}

async fn get_category_breakdown(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<Session>,
    Query(params): Query<CategoryQuery>,
) -> Result<Json<CategoryBreakdown>> {
    let days = params.days.unwrap_or(state.config.category_window_days);
    if days == 0 || days > MAX_WINDOW_DAYS {
        return Err(AppError::BadRequest(format!(
            "'days' must be between 1 and {}",
            MAX_WINDOW_DAYS
        )));
    }

    let breakdown = state
        .activity_service
        .category_breakdown(session.user_id, chrono::Utc::now(), days)
        .await?;
    Ok(Json(breakdown))
}

/// Aggregate a caller-supplied batch of raw records without storing them.
async fn aggregate_records(
    Extension(session): Extension<Session>,
    Json(raw): Json<serde_json::Value>,
) -> Result<Json<AggregateSummary>> {
    let records = normalize(&raw)?;

    tracing::debug!(
        user_id = session.user_id,
        records = records.len(),
        "Aggregating submitted records"
    );

    Ok(Json(summarize(&records, chrono::Utc::now())))
}
