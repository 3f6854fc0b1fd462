use axum::{
    extract::{Query, State},
    response::Response,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::common::AppState;
use crate::error::{AppError, AppResult};
use crate::routes::cache;
use crate::services::normalize_city;
use crate::weatherapi::WeatherReport;

#[derive(Debug, Deserialize, IntoParams)]
pub struct WeatherQuery {
    /// City name or any location query accepted by weatherapi.com
    pub city: Option<String>,
}

/// Current weather for a city
///
/// Every request is recorded in the search history before the lookup,
/// whether or not it succeeds. Responses are cached per normalized city.
#[utoipa::path(
    get,
    path = "/api/weather",
    params(WeatherQuery),
    responses(
        (status = 200, description = "Current weather", body = WeatherReport,
            headers(("X-Cache" = String, description = "HIT or MISS"))),
        (status = 400, description = "City parameter missing"),
        (status = 404, description = "City not found"),
        (status = 502, description = "Weather service unavailable"),
    ),
    tag = "weather"
)]
pub async fn get_weather(
    State(state): State<AppState>,
    Query(query): Query<WeatherQuery>,
) -> AppResult<Response> {
    let city = query
        .city
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .ok_or_else(|| AppError::BadRequest("City parameter is required".to_string()))?;

    state.history.add_search(city, None);

    let cache_key = normalize_city(city);
    if let Some(cached) = state.response_cache.get(&cache_key) {
        return cache::json_response(cached, true);
    }

    let current = state.weather_client.get_current(city).await?;
    let report = WeatherReport::from(current);

    tracing::info!(city = %cache_key, location = %report.name, "Fetched current weather");

    cache::cache_and_respond(&state, cache_key, &report)
}
