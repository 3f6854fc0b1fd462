pub mod cache;
pub mod health;
pub mod history;
pub mod weather;

use axum::{
    handler::HandlerWithoutStateExt,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{delete, get},
    Router,
};
use std::path::PathBuf;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    services::ServeDir,
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::common::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthz,
        weather::get_weather,
        history::get_history,
        history::get_recent_cities,
        history::clear_history,
        cache::get_stats,
        cache::clear_cache,
    ),
    components(
        schemas(
            crate::weatherapi::WeatherReport,
            crate::services::SearchRecord,
            crate::services::CacheStats,
            crate::services::HistoryStats,
            cache::StatsResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "weather", description = "Current weather lookup"),
        (name = "history", description = "Search history"),
        (name = "admin", description = "Cache and history administration"),
    ),
    info(
        title = "Weather Proxy API",
        description = "Caching proxy for the weatherapi.com current-conditions API",
        version = "0.1.0"
    )
)]
struct ApiDoc;

/// Serve the site's `404.html`, or a plain-text notice if it has none.
async fn not_found_page(page: PathBuf) -> Response {
    match tokio::fs::read(&page).await {
        Ok(html) => (
            StatusCode::NOT_FOUND,
            [(header::CONTENT_TYPE, "text/html")],
            html,
        )
            .into_response(),
        Err(_) => (
            StatusCode::NOT_FOUND,
            [(header::CONTENT_TYPE, "text/plain")],
            "404 Not Found",
        )
            .into_response(),
    }
}

pub fn build_router(state: AppState) -> Router {
    let config = &state.config;

    tracing::info!(
        static_dir = %config.static_dir.display(),
        cache_max_entries = config.cache_max_entries,
        cache_ttl_seconds = config.cache_ttl_seconds,
        history_max_entries = config.history_max_entries,
        "Router configured"
    );

    let api_routes = Router::new()
        .route("/weather", get(weather::get_weather))
        .route(
            "/history",
            get(history::get_history).delete(history::clear_history),
        )
        .route("/recent", get(history::get_recent_cities))
        .route("/stats", get(cache::get_stats))
        .route("/cache", delete(cache::clear_cache))
        .layer(RequestBodyLimitLayer::new(1024 * 1024)); // 1MB body limit

    let health_routes = Router::new().route("/healthz", get(health::healthz));

    let docs_routes = Router::new().merge(Scalar::with_url("/docs", ApiDoc::openapi()));

    // Frontend assets. `/` maps to index.html
    let page = config.static_dir.join("404.html");
    let not_found = move || not_found_page(page.clone());
    let static_service = ServeDir::new(&config.static_dir)
        .append_index_html_on_directories(true)
        .not_found_service(not_found.into_service());

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .merge(docs_routes)
        .fallback_service(static_service)
        .layer(CompressionLayer::new())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
