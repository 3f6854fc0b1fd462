//! Bounded, most-recent-first log of city searches.
//!
//! Every weather query is recorded here before the upstream fetch resolves,
//! so the log reflects what users asked for, not what succeeded.

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::Serialize;
use std::collections::{HashSet, VecDeque};
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

use super::normalize_city;
use crate::common::Clock;

pub const DEFAULT_MAX_HISTORY: usize = 50;
pub const DEFAULT_HISTORY_LIMIT: usize = 10;
pub const DEFAULT_RECENT_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct SearchRecord {
    /// Time-ordered UUID (v7)
    pub id: Uuid,
    /// Normalized city name
    pub city: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct HistoryStats {
    pub total_searches: usize,
    pub unique_cities: usize,
    /// Timestamp of the most recent search, if any
    pub last_search: Option<DateTime<Utc>>,
}

pub struct SearchHistory {
    records: Mutex<VecDeque<SearchRecord>>,
    max_history: usize,
    clock: Arc<dyn Clock>,
}

impl SearchHistory {
    pub fn new(max_history: usize, clock: Arc<dyn Clock>) -> Self {
        Self {
            records: Mutex::new(VecDeque::with_capacity(max_history.saturating_add(1))),
            max_history,
            clock,
        }
    }

    /// Record a search at the head of the log, dropping the oldest records
    /// beyond capacity. `timestamp` defaults to the current time.
    pub fn add_search(&self, city: &str, timestamp: Option<DateTime<Utc>>) -> SearchRecord {
        let record = SearchRecord {
            id: Uuid::now_v7(),
            city: normalize_city(city),
            timestamp: timestamp.unwrap_or_else(|| self.clock.now()),
        };

        let mut records = self.records.lock();
        records.push_front(record.clone());
        records.truncate(self.max_history);

        tracing::debug!(city = %record.city, total = records.len(), "search_recorded");
        record
    }

    /// Up to `limit` records, most recent first.
    pub fn get_history(&self, limit: usize) -> Vec<SearchRecord> {
        self.records.lock().iter().take(limit).cloned().collect()
    }

    /// Up to `limit` distinct cities in order of their most recent search.
    pub fn get_recent_cities(&self, limit: usize) -> Vec<String> {
        let records = self.records.lock();
        let mut seen = HashSet::new();
        let mut cities = Vec::with_capacity(limit.min(records.len()));

        for record in records.iter() {
            if cities.len() >= limit {
                break;
            }
            if seen.insert(record.city.as_str()) {
                cities.push(record.city.clone());
            }
        }

        cities
    }

    pub fn clear(&self) {
        self.records.lock().clear();
    }

    pub fn stats(&self) -> HistoryStats {
        let records = self.records.lock();
        let unique_cities = records
            .iter()
            .map(|r| r.city.as_str())
            .collect::<HashSet<_>>()
            .len();

        HistoryStats {
            total_searches: records.len(),
            unique_cities,
            last_search: records.front().map(|r| r.timestamp),
        }
    }
}
