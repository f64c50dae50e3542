// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Weatherapp backend: cached city weather and basic user accounts.
//!
//! This crate provides the JSON API behind the weather frontend. Weather
//! lookups are fetched from OpenWeatherMap once per city and served from
//! the store afterwards.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;
pub mod validation;

use config::Config;
use db::{CityStore, UserStore};
use services::{AuthService, WeatherProvider, WeatherService};
use std::sync::Arc;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub auth_service: AuthService,
    pub weather_service: WeatherService,
}

impl AppState {
    /// Wire services to the given store and weather provider.
    pub fn new<S>(config: Config, store: Arc<S>, provider: Arc<dyn WeatherProvider>) -> Self
    where
        S: UserStore + CityStore + 'static,
    {
        let users: Arc<dyn UserStore> = store.clone();
        let cities: Arc<dyn CityStore> = store;

        Self {
            config,
            auth_service: AuthService::new(users),
            weather_service: WeatherService::new(cities, provider),
        }
    }
}
