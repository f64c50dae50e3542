// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request};
use axum::response::Response;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tower::ServiceExt;
use weatherapp_backend::config::Config;
use weatherapp_backend::db::{FirestoreDb, MemoryDb};
use weatherapp_backend::error::AppError;
use weatherapp_backend::models::City;
use weatherapp_backend::routes::create_router;
use weatherapp_backend::services::WeatherProvider;
use weatherapp_backend::AppState;

/// Check if emulator is available via environment variable.
#[allow(dead_code)]
pub fn emulator_available() -> bool {
    std::env::var("FIRESTORE_EMULATOR_HOST").is_ok()
}

/// Skip test with message if emulator not available.
#[macro_export]
macro_rules! require_emulator {
    () => {
        if !crate::common::emulator_available() {
            eprintln!("⚠️  Skipping: FIRESTORE_EMULATOR_HOST not set");
            return;
        }
    };
}

/// Create a test database connection.
#[allow(dead_code)]
pub async fn test_db() -> FirestoreDb {
    FirestoreDb::new("test-project")
        .await
        .expect("Failed to connect to Firestore emulator")
}

/// Weather provider that answers every city except "Atlantis" and counts calls.
#[derive(Default)]
pub struct FakeProvider {
    pub calls: AtomicUsize,
}

#[allow(dead_code)]
impl FakeProvider {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WeatherProvider for FakeProvider {
    async fn current_weather(&self, city_name: &str) -> Result<City, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if city_name.eq_ignore_ascii_case("atlantis") {
            return Err(AppError::CityNotFound);
        }
        Ok(City {
            city_name: city_name.to_string(),
            main: "Clear".to_string(),
            description: "clear sky".to_string(),
            temp_min: 18.0,
            temp_max: 27.5,
        })
    }
}

/// Test app over an in-memory store and a fake weather provider.
#[allow(dead_code)]
pub struct TestApp {
    pub router: axum::Router,
    pub db: MemoryDb,
    pub provider: Arc<FakeProvider>,
}

/// Create a test app with in-memory dependencies.
#[allow(dead_code)]
pub fn create_test_app() -> TestApp {
    let db = MemoryDb::new();
    let provider = Arc::new(FakeProvider::default());
    let state = AppState::new(
        Config::test_default(),
        Arc::new(db.clone()),
        provider.clone(),
    );

    TestApp {
        router: create_router(Arc::new(state)),
        db,
        provider,
    }
}

/// Create a test app whose store is offline.
#[allow(dead_code)]
pub fn create_offline_app() -> axum::Router {
    let state = AppState::new(
        Config::test_default(),
        Arc::new(FirestoreDb::new_mock()),
        Arc::new(FakeProvider::default()),
    );
    create_router(Arc::new(state))
}

/// Send a JSON request and return the response.
#[allow(dead_code)]
pub async fn send_json(
    app: &axum::Router,
    method: &str,
    uri: &str,
    body: serde_json::Value,
) -> Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

/// Send a request without a body.
#[allow(dead_code)]
pub async fn send_empty(app: &axum::Router, method: &str, uri: &str) -> Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
}

/// Read a response body as JSON.
#[allow(dead_code)]
pub async fn body_json(response: Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}
