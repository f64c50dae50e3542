// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types with consistent API responses.
//!
//! Logical outcomes (bad input, conflicts, lookup misses) are answered with
//! HTTP 200 and `{"result": false, "error": ...}`; the frontend only looks
//! at `result`. Infrastructure faults get a real error status.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Application error type that converts to HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Missing or empty fields")]
    MissingFields,

    #[error("User already exists")]
    UserAlreadyExists,

    #[error("User not found")]
    UserNotFound,

    #[error("City not found")]
    CityNotFound,

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Weather provider error: {0}")]
    WeatherProvider(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Whether this error is a normal API outcome rather than a fault.
    pub fn is_logical(&self) -> bool {
        matches!(
            self,
            AppError::MissingFields
                | AppError::UserAlreadyExists
                | AppError::UserNotFound
                | AppError::CityNotFound
        )
    }
}

/// JSON error response body
#[derive(Serialize)]
struct ErrorResponse {
    result: bool,
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match &self {
            AppError::MissingFields
            | AppError::UserAlreadyExists
            | AppError::UserNotFound
            | AppError::CityNotFound => (StatusCode::OK, self.to_string()),
            AppError::StoreUnavailable(msg) => {
                tracing::error!(error = %msg, "Store unavailable");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "store_unavailable".to_string(),
                )
            }
            AppError::WeatherProvider(msg) => {
                tracing::error!(error = %msg, "Weather provider error");
                (StatusCode::BAD_GATEWAY, "weather_provider_error".to_string())
            }
            AppError::Internal(err) => {
                tracing::error!(error = %err, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error".to_string(),
                )
            }
        };

        let body = ErrorResponse {
            result: false,
            error,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for handlers
pub type Result<T> = std::result::Result<T, AppError>;
