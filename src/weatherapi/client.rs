use reqwest::Client;
use std::time::Duration;

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::weatherapi::models::{CurrentResponse, ErrorResponse};

pub struct WeatherApiClient {
    http_client: Client,
    base_url: String,
    api_key: String,
}

impl WeatherApiClient {
    /// # Errors
    ///
    /// Returns `AppError::Internal` if the HTTP client cannot be built.
    pub fn new(config: &Config) -> AppResult<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.weatherapi_timeout_seconds))
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            http_client,
            base_url: config.weatherapi_base_url.trim_end_matches('/').to_string(),
            api_key: config.weatherapi_key.clone(),
        })
    }

    /// Get current conditions for a free-form location query.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` if the API reports an error for the query
    /// (e.g. unknown city), and `AppError::WeatherApi` if the request fails,
    /// returns an error status, or the body cannot be parsed. `WeatherApi`
    /// messages are client-facing; upstream detail is only logged.
    pub async fn get_current(&self, city: &str) -> AppResult<CurrentResponse> {
        let url = format!("{}/current.json", self.base_url);

        tracing::debug!(city = %city, "Fetching current weather");

        let response = self
            .http_client
            .get(&url)
            .query(&[("key", self.api_key.as_str()), ("q", city), ("aqi", "no")])
            .send()
            .await
            .map_err(|e| {
                // The request URL carries the API key
                tracing::error!(error = %e.without_url(), "Weather API request failed");
                AppError::WeatherApi("Failed to connect to weather service".to_string())
            })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            tracing::error!(error = %e.without_url(), "Failed to read weather API response");
            AppError::WeatherApi("Failed to connect to weather service".to_string())
        })?;

        // weatherapi.com reports lookup failures as an error envelope (HTTP 400)
        if let Ok(err) = serde_json::from_str::<ErrorResponse>(&text) {
            tracing::debug!(city = %city, code = ?err.error.code, "Weather API rejected query");
            return Err(AppError::NotFound(
                err.error
                    .message
                    .unwrap_or_else(|| "City not found".to_string()),
            ));
        }

        if !status.is_success() {
            tracing::error!(
                status = %status,
                body_preview = %text.chars().take(500).collect::<String>(),
                "Weather API returned an error status"
            );
            return Err(AppError::WeatherApi(
                "Weather service returned an error".to_string(),
            ));
        }

        serde_json::from_str(&text).map_err(|e| {
            tracing::error!(
                error = %e,
                body_preview = %text.chars().take(500).collect::<String>(),
                "Failed to parse current weather response"
            );
            AppError::WeatherApi("Failed to parse weather data".to_string())
        })
    }
}
