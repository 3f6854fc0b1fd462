//! Response caching helpers and cache administration endpoints.
//!
//! Weather responses are cached as serialized JSON so a hit can be written
//! straight back to the client:
//!
//! ```text
//! let key = normalize_city(&city);
//! if let Some(cached) = state.response_cache.get(&key) {
//!     return cache::json_response(cached, true);
//! }
//! // ... fetch and transform ...
//! cache::cache_and_respond(&state, key, &report)
//! ```

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderValue, StatusCode},
    response::Response,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::common::AppState;
use crate::error::{AppError, AppResult};
use crate::services::{CacheStats, HistoryStats};

#[derive(Debug, Serialize, ToSchema)]
pub struct StatsResponse {
    pub cache: CacheStats,
    pub history: HistoryStats,
}

/// Build a JSON response with X-Cache header indicating hit/miss status.
///
/// # Headers
///
/// - `Content-Type: application/json`
/// - `X-Cache: HIT` or `X-Cache: MISS`
pub fn json_response(data: Bytes, cache_hit: bool) -> AppResult<Response> {
    let cache_header = if cache_hit { "HIT" } else { "MISS" };
    Response::builder()
        .header(header::CONTENT_TYPE, HeaderValue::from_static("application/json"))
        .header("X-Cache", HeaderValue::from_static(cache_header))
        .body(axum::body::Body::from(data))
        .map_err(|e| AppError::Internal(e.to_string()))
}

/// Serialize a response, store it under `cache_key`, and return it with
/// `X-Cache: MISS`.
pub fn cache_and_respond<T: Serialize>(
    state: &AppState,
    cache_key: String,
    response: &T,
) -> AppResult<Response> {
    let json_bytes = Bytes::from(
        serde_json::to_vec(response).map_err(|e| AppError::Internal(e.to_string()))?,
    );

    state.response_cache.set(cache_key, json_bytes.clone());

    json_response(json_bytes, false)
}

/// Cache and history statistics
#[utoipa::path(
    get,
    path = "/api/stats",
    responses(
        (status = 200, description = "Current store statistics", body = StatsResponse),
    ),
    tag = "admin"
)]
pub async fn get_stats(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse {
        cache: state.response_cache.stats(),
        history: state.history.stats(),
    })
}

/// Drop every cached weather response
#[utoipa::path(
    delete,
    path = "/api/cache",
    responses(
        (status = 204, description = "Cache cleared"),
    ),
    tag = "admin"
)]
pub async fn clear_cache(State(state): State<AppState>) -> StatusCode {
    state.response_cache.clear();
    tracing::info!("cache_cleared");
    StatusCode::NO_CONTENT
}
