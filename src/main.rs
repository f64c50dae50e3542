// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Weatherapp API Server
//!
//! Serves the weather cache and user account endpoints.

use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use weatherapp_backend::{
    config::{Config, StoreBackend},
    db::{FirestoreDb, MemoryDb},
    services::{OpenWeatherClient, WeatherProvider},
    AppState,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging()?;

    // Load configuration from environment
    let config = Config::from_env()?;
    tracing::info!(port = config.port, backend = ?config.store_backend, "Starting Weatherapp API");

    if config.owm_api_key.is_none() {
        tracing::warn!("OWM_API_KEY not set, weather lookups for new cities will fail");
    }
    let provider: Arc<dyn WeatherProvider> = Arc::new(OpenWeatherClient::new(
        &config.owm_base_url,
        config.owm_api_key.clone(),
    ));

    // Build shared state on the configured store
    let state = match (config.store_backend, config.gcp_project_id.as_deref()) {
        (StoreBackend::Firestore, Some(project_id)) => {
            let db = FirestoreDb::new(project_id).await?;
            AppState::new(config.clone(), Arc::new(db), provider)
        }
        (StoreBackend::Firestore, None) => {
            return Err("GCP_PROJECT_ID is required for the Firestore backend".into());
        }
        (StoreBackend::Memory, _) => {
            tracing::warn!("Using in-memory store, data is lost on restart");
            AppState::new(config.clone(), Arc::new(MemoryDb::new()), provider)
        }
    };

    // Build router
    let app = weatherapp_backend::routes::create_router(Arc::new(state));

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() -> Result<(), Box<dyn std::error::Error>> {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("weatherapp_backend=debug".parse()?)
                .add_directive("info".parse()?),
        )
        .with(format)
        .init();
    Ok(())
}
