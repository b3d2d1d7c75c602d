// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::http::StatusCode;
use axum::response::IntoResponse;
use green_nexus::error::AppError;
use green_nexus::services::catalog::{carbon_saved, CatalogError};
use green_nexus::services::AggregationError;

#[test]
fn test_status_codes() {
    let cases = [
        (AppError::Unauthorized, StatusCode::UNAUTHORIZED),
        (AppError::InvalidToken, StatusCode::UNAUTHORIZED),
        (AppError::NotFound("x".to_string()), StatusCode::NOT_FOUND),
        (AppError::BadRequest("x".to_string()), StatusCode::BAD_REQUEST),
        (
            AppError::Database("x".to_string()),
            StatusCode::INTERNAL_SERVER_ERROR,
        ),
        (
            AppError::Internal(anyhow::anyhow!("boom")),
            StatusCode::INTERNAL_SERVER_ERROR,
        ),
    ];

    for (err, expected) in cases {
        assert_eq!(err.into_response().status(), expected);
    }
}

#[test]
fn test_aggregation_error_is_bad_request() {
    let err: AppError = AggregationError::NotASequence("object").into();
    assert!(matches!(err, AppError::BadRequest(ref msg) if msg.contains("object")));
}

#[test]
fn test_catalog_error_is_bad_request() {
    let catalog_err = carbon_saved("Cycling", 1.0, "miles").unwrap_err();
    assert!(matches!(catalog_err, CatalogError::UnitMismatch { .. }));

    let err: AppError = catalog_err.into();
    assert!(matches!(err, AppError::BadRequest(ref msg) if msg.contains("Expected km")));
}
