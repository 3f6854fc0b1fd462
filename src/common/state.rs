use axum::body::Bytes;
use std::sync::Arc;

use crate::common::{Clock, SystemClock};
use crate::config::Config;
use crate::services::{ResponseCache, SearchHistory};
use crate::weatherapi::WeatherApiClient;

/// Cache for transformed weather responses. Key is the normalized city,
/// value is the serialized JSON body.
pub type WeatherCache = ResponseCache<Bytes>;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub weather_client: Arc<WeatherApiClient>,
    pub response_cache: Arc<WeatherCache>,
    pub history: Arc<SearchHistory>,
}

impl AppState {
    pub fn new(config: Config, weather_client: WeatherApiClient) -> Self {
        Self::with_clock(config, weather_client, Arc::new(SystemClock))
    }

    /// Build state whose stores read time from `clock`.
    pub fn with_clock(
        config: Config,
        weather_client: WeatherApiClient,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let response_cache = ResponseCache::new(
            config.cache_max_entries,
            config.cache_ttl_seconds,
            Arc::clone(&clock),
        );
        let history = SearchHistory::new(config.history_max_entries, clock);

        Self {
            config: Arc::new(config),
            weather_client: Arc::new(weather_client),
            response_cache: Arc::new(response_cache),
            history: Arc::new(history),
        }
    }
}
