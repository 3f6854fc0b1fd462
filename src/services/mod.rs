pub mod cache;
pub mod history;

pub use cache::{CacheStats, ResponseCache};
pub use history::{HistoryStats, SearchHistory, SearchRecord};

/// Canonical form of a city query, used as the cache key and history entry.
#[must_use]
pub fn normalize_city(city: &str) -> String {
    city.trim().to_lowercase()
}
