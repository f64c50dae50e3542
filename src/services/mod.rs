// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod auth;
pub mod openweather;
pub mod weather;

pub use auth::AuthService;
pub use openweather::OpenWeatherClient;
pub use weather::{WeatherProvider, WeatherService};
