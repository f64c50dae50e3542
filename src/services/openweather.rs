// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! OpenWeatherMap client for current conditions.

use crate::error::AppError;
use crate::models::City;
use crate::services::weather::WeatherProvider;
use async_trait::async_trait;
use serde::Deserialize;

/// OpenWeatherMap current-weather API client.
#[derive(Clone)]
pub struct OpenWeatherClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl OpenWeatherClient {
    /// Create a client. Without an API key every lookup fails with a
    /// provider error.
    pub fn new(base_url: &str, api_key: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    /// Check response status and parse the JSON body.
    async fn check_response_json<T: for<'de> Deserialize<'de>>(
        &self,
        city_name: &str,
        response: reqwest::Response,
    ) -> Result<T, AppError> {
        let status = response.status();

        if status.as_u16() == 404 {
            tracing::debug!(city = city_name, "OpenWeatherMap has no such city");
            return Err(AppError::CityNotFound);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::WeatherProvider(format!(
                "HTTP {}: {}",
                status,
                truncate_body(&body)
            )));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::WeatherProvider(format!("Invalid response body: {}", e)))
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
    async fn current_weather(&self, city_name: &str) -> Result<City, AppError> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            AppError::WeatherProvider("OWM_API_KEY is not configured".to_string())
        })?;

        let url = format!("{}/data/2.5/weather", self.base_url);
        let response = self
            .http
            .get(&url)
            .query(&[("q", city_name), ("appid", api_key), ("units", "metric")])
            .send()
            .await
            .map_err(|e| AppError::WeatherProvider(e.to_string()))?;

        let parsed: OwmCurrentResponse = self.check_response_json(city_name, response).await?;

        let (main, description) = parsed
            .weather
            .into_iter()
            .next()
            .map(|w| (w.main, w.description))
            .unwrap_or_else(|| ("Unknown".to_string(), "unknown".to_string()));

        Ok(City {
            city_name: city_name.to_string(),
            main,
            description,
            temp_min: parsed.main.temp_min,
            temp_max: parsed.main.temp_max,
        })
    }
}

#[derive(Debug, Deserialize)]
struct OwmMain {
    temp_min: f64,
    temp_max: f64,
}

#[derive(Debug, Deserialize)]
struct OwmWeather {
    main: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwmCurrentResponse {
    main: OwmMain,
    #[serde(default)]
    weather: Vec<OwmWeather>,
}

fn truncate_body(body: &str) -> &str {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_current_weather_maps_fields() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/data/2.5/weather"))
            .and(query_param("q", "Las Vegas"))
            .and(query_param("appid", "key"))
            .and(query_param("units", "metric"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "name": "Las Vegas",
                "weather": [{ "main": "Clear", "description": "clear sky" }],
                "main": { "temp": 30.1, "temp_min": 28.5, "temp_max": 32.0 }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = OpenWeatherClient::new(&server.uri(), Some("key".to_string()));
        let city = client.current_weather("Las Vegas").await.unwrap();

        assert_eq!(city.city_name, "Las Vegas");
        assert_eq!(city.main, "Clear");
        assert_eq!(city.description, "clear sky");
        assert_eq!(city.temp_min, 28.5);
        assert_eq!(city.temp_max, 32.0);
    }

    #[tokio::test]
    async fn test_unknown_city_is_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/data/2.5/weather"))
            .respond_with(
                ResponseTemplate::new(404)
                    .set_body_json(json!({ "cod": "404", "message": "city not found" })),
            )
            .mount(&server)
            .await;

        let client = OpenWeatherClient::new(&server.uri(), Some("key".to_string()));
        let err = client.current_weather("Atlantis").await.unwrap_err();

        assert!(matches!(err, AppError::CityNotFound));
    }

    #[tokio::test]
    async fn test_server_error_is_provider_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401).set_body_string("Invalid API key"))
            .mount(&server)
            .await;

        let client = OpenWeatherClient::new(&server.uri(), Some("bad".to_string()));
        let err = client.current_weather("Paris").await.unwrap_err();

        match err {
            AppError::WeatherProvider(msg) => assert!(msg.contains("Invalid API key")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_missing_api_key() {
        let client = OpenWeatherClient::new("http://127.0.0.1:9", None);
        let err = client.current_weather("Paris").await.unwrap_err();

        assert!(matches!(err, AppError::WeatherProvider(_)));
    }

    #[test]
    fn test_truncate_body() {
        assert_eq!(truncate_body("short"), "short");
        assert_eq!(truncate_body(&"é".repeat(300)).chars().count(), 200);
    }
}
