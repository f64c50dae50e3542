// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Weather cache: look up a city once, then serve it from the store.

use crate::db::CityStore;
use crate::error::{AppError, Result};
use crate::models::{city_key, City};
use crate::validation::{check_body, field_text};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

/// Source of current weather for a city.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Fetch current conditions. Unknown cities give `CityNotFound`.
    async fn current_weather(&self, city_name: &str) -> Result<City>;
}

/// Cached weather records keyed by city name (case-insensitive).
#[derive(Clone)]
pub struct WeatherService {
    store: Arc<dyn CityStore>,
    provider: Arc<dyn WeatherProvider>,
}

impl WeatherService {
    pub fn new(store: Arc<dyn CityStore>, provider: Arc<dyn WeatherProvider>) -> Self {
        Self { store, provider }
    }

    /// Add a city from a `{cityName}` body, fetching on a cache miss.
    ///
    /// A city that is already cached is returned as stored.
    pub async fn add_city(&self, body: &Value) -> Result<City> {
        if !check_body(body, &["cityName"]) {
            return Err(AppError::MissingFields);
        }
        let city_name = field_text(body, "cityName");
        let key = city_key(&city_name);

        if let Some(cached) = self.store.get_city(&key).await? {
            tracing::debug!(city = %city_name, "Weather cache hit");
            return Ok(cached);
        }

        let city = self.provider.current_weather(&city_name).await?;
        self.store.upsert_city(&city).await?;
        tracing::info!(city = %city.city_name, "Weather cached");
        Ok(city)
    }

    /// All cached cities.
    pub async fn list_cities(&self) -> Result<Vec<City>> {
        self.store.list_cities().await
    }

    /// A cached city. Never calls the provider.
    pub async fn get_city(&self, city_name: &str) -> Result<City> {
        self.store
            .get_city(&city_key(city_name))
            .await?
            .ok_or(AppError::CityNotFound)
    }

    /// Remove a cached city and return what is left.
    pub async fn delete_city(&self, city_name: &str) -> Result<Vec<City>> {
        if !self.store.delete_city(&city_key(city_name)).await? {
            return Err(AppError::CityNotFound);
        }
        tracing::info!(city = city_name, "Weather cache entry deleted");
        self.store.list_cities().await
    }
}
