//! Bounded, time-expiring response cache.
//!
//! Entries are keyed by an already-normalized string (see
//! [`normalize_city`](super::normalize_city)) and hold an opaque payload.
//!
//! # Expiry
//!
//! An entry is fresh while `now - stored_at <= ttl`. There is no background
//! sweep: expiry is only checked by [`ResponseCache::get`], which treats a
//! stale entry as a miss and drops it.
//!
//! # Eviction
//!
//! When a new key is inserted into a full cache, the oldest-*inserted*
//! surviving key is evicted. Reads never change eviction order, and
//! overwriting a key keeps its original position, so this is FIFO rather
//! than LRU.
//!
//! | Operation | Side effects |
//! |-----------|--------------|
//! | `get` hit | none |
//! | `get` on expired entry | entry removed |
//! | `set` new key at capacity | oldest key evicted |
//! | `set` existing key | value replaced, timestamp reset |

use chrono::{DateTime, Duration, Utc};
use parking_lot::Mutex;
use serde::Serialize;
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use utoipa::ToSchema;

use crate::common::Clock;

pub const DEFAULT_MAX_ENTRIES: usize = 100;
pub const DEFAULT_TTL_SECONDS: u64 = 300;

struct CacheEntry<V> {
    value: V,
    stored_at: DateTime<Utc>,
}

struct Inner<V> {
    entries: HashMap<String, CacheEntry<V>>,
    /// Keys in insertion order, front is the next eviction victim.
    order: VecDeque<String>,
}

impl<V> Inner<V> {
    fn remove(&mut self, key: &str) {
        if self.entries.remove(key).is_some() {
            if let Some(pos) = self.order.iter().position(|k| k == key) {
                self.order.remove(pos);
            }
        }
    }
}

/// Snapshot of cache occupancy and configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct CacheStats {
    pub entries: usize,
    pub max_entries: usize,
    pub ttl_seconds: u64,
}

pub struct ResponseCache<V> {
    inner: Mutex<Inner<V>>,
    max_entries: usize,
    ttl: Duration,
    ttl_seconds: u64,
    clock: Arc<dyn Clock>,
}

impl<V: Clone> ResponseCache<V> {
    /// Create a cache holding at most `max_entries` entries, each fresh for
    /// `ttl_seconds`. A capacity of zero is treated as one.
    pub fn new(max_entries: usize, ttl_seconds: u64, clock: Arc<dyn Clock>) -> Self {
        let max_entries = max_entries.max(1);
        let ttl = i64::try_from(ttl_seconds)
            .ok()
            .and_then(Duration::try_seconds)
            .unwrap_or(Duration::MAX);

        Self {
            inner: Mutex::new(Inner {
                entries: HashMap::with_capacity(max_entries),
                order: VecDeque::with_capacity(max_entries),
            }),
            max_entries,
            ttl,
            ttl_seconds,
            clock,
        }
    }

    /// Look up a fresh entry. Expired entries are removed and reported as a miss.
    pub fn get(&self, key: &str) -> Option<V> {
        let mut inner = self.inner.lock();
        let stored_at = inner.entries.get(key)?.stored_at;

        if self.clock.now() - stored_at > self.ttl {
            inner.remove(key);
            tracing::debug!(cache_key = %key, "cache_expired");
            return None;
        }

        tracing::debug!(cache_key = %key, "cache_hit");
        inner.entries.get(key).map(|entry| entry.value.clone())
    }

    /// Insert or overwrite `key`, resetting its timestamp.
    pub fn set(&self, key: impl Into<String>, value: V) {
        let key = key.into();
        let now = self.clock.now();
        let mut inner = self.inner.lock();

        if let Some(entry) = inner.entries.get_mut(&key) {
            entry.value = value;
            entry.stored_at = now;
            tracing::debug!(cache_key = %key, "cache_refreshed");
            return;
        }

        if inner.entries.len() >= self.max_entries {
            if let Some(victim) = inner.order.pop_front() {
                inner.entries.remove(&victim);
                tracing::debug!(cache_key = %victim, "cache_evicted");
            }
        }

        inner.order.push_back(key.clone());
        inner.entries.insert(
            key.clone(),
            CacheEntry {
                value,
                stored_at: now,
            },
        );
        tracing::debug!(cache_key = %key, "cache_stored");
    }

    pub fn clear(&self) {
        let mut inner = self.inner.lock();
        inner.entries.clear();
        inner.order.clear();
    }

    /// Entry count includes stale entries that have not been read since expiring.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.inner.lock().entries.len(),
            max_entries: self.max_entries,
            ttl_seconds: self.ttl_seconds,
        }
    }
}
