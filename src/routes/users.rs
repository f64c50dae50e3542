// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Account routes.

use crate::error::Result;
use crate::routes::{json_body, OkResponse};
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use serde_json::Value;
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/users/signup", post(signup))
        .route("/users/signin", post(signin))
}

/// Register a new account.
async fn signup(
    State(state): State<Arc<AppState>>,
    body: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<Json<OkResponse>> {
    state.auth_service.signup(&json_body(body)).await?;
    Ok(Json(OkResponse::default()))
}

/// Check credentials.
async fn signin(
    State(state): State<Arc<AppState>>,
    body: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<Json<OkResponse>> {
    state.auth_service.signin(&json_body(body)).await?;
    Ok(Json(OkResponse::default()))
}
