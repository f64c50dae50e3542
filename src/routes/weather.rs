// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Weather cache routes.

use crate::error::Result;
use crate::models::City;
use crate::routes::json_body;
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/weather", get(list_cities).post(add_city))
        .route("/weather/{city_name}", get(get_city).delete(delete_city))
}

/// Successful weather response; `weather` is one city or a list.
#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct WeatherResponse<T> {
    pub result: bool,
    pub weather: T,
}

impl<T> WeatherResponse<T> {
    fn ok(weather: T) -> Json<Self> {
        Json(Self {
            result: true,
            weather,
        })
    }
}

/// Add a city to the cache, fetching its weather if it is new.
async fn add_city(
    State(state): State<Arc<AppState>>,
    body: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<Json<WeatherResponse<City>>> {
    let city = state.weather_service.add_city(&json_body(body)).await?;
    Ok(WeatherResponse::ok(city))
}

/// List all cached cities.
async fn list_cities(
    State(state): State<Arc<AppState>>,
) -> Result<Json<WeatherResponse<Vec<City>>>> {
    let cities = state.weather_service.list_cities().await?;
    Ok(WeatherResponse::ok(cities))
}

/// Get one cached city.
async fn get_city(
    State(state): State<Arc<AppState>>,
    Path(city_name): Path<String>,
) -> Result<Json<WeatherResponse<City>>> {
    let city = state.weather_service.get_city(&city_name).await?;
    Ok(WeatherResponse::ok(city))
}

/// Delete a cached city; responds with the cities that remain.
async fn delete_city(
    State(state): State<Arc<AppState>>,
    Path(city_name): Path<String>,
) -> Result<Json<WeatherResponse<Vec<City>>>> {
    let remaining = state.weather_service.delete_city(&city_name).await?;
    Ok(WeatherResponse::ok(remaining))
}
