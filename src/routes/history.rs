use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::common::AppState;
use crate::services::history::{DEFAULT_HISTORY_LIMIT, DEFAULT_RECENT_LIMIT};
use crate::services::SearchRecord;

#[derive(Debug, Deserialize, IntoParams)]
pub struct LimitQuery {
    /// Maximum number of items to return
    pub limit: Option<usize>,
}

/// Recent searches, most recent first
#[utoipa::path(
    get,
    path = "/api/history",
    params(LimitQuery),
    responses(
        (status = 200, description = "Search history (default limit 10)", body = Vec<SearchRecord>),
    ),
    tag = "history"
)]
pub async fn get_history(
    State(state): State<AppState>,
    Query(query): Query<LimitQuery>,
) -> Json<Vec<SearchRecord>> {
    let limit = query.limit.unwrap_or(DEFAULT_HISTORY_LIMIT);
    Json(state.history.get_history(limit))
}

/// Distinct recently searched cities, most recent first
#[utoipa::path(
    get,
    path = "/api/recent",
    params(LimitQuery),
    responses(
        (status = 200, description = "Recent cities (default limit 5)", body = Vec<String>),
    ),
    tag = "history"
)]
pub async fn get_recent_cities(
    State(state): State<AppState>,
    Query(query): Query<LimitQuery>,
) -> Json<Vec<String>> {
    let limit = query.limit.unwrap_or(DEFAULT_RECENT_LIMIT);
    Json(state.history.get_recent_cities(limit))
}

/// Clear the search history
#[utoipa::path(
    delete,
    path = "/api/history",
    responses(
        (status = 204, description = "History cleared"),
    ),
    tag = "history"
)]
pub async fn clear_history(State(state): State<AppState>) -> StatusCode {
    state.history.clear();
    tracing::info!("history_cleared");
    StatusCode::NO_CONTENT
}
