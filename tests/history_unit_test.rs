//! Unit tests for search history.
//!
//! Run with: cargo test --test history_unit_test

use chrono::{Duration, TimeZone, Utc};
use std::collections::HashSet;
use std::sync::Arc;

use weather_proxy::common::{Clock, ManualClock};
use weather_proxy::services::history::{DEFAULT_HISTORY_LIMIT, DEFAULT_RECENT_LIMIT};
use weather_proxy::services::SearchHistory;

fn history_with_clock(max_history: usize) -> (SearchHistory, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(
        Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap(),
    ));
    let history = SearchHistory::new(max_history, clock.clone());
    (history, clock)
}

fn cities(history: &SearchHistory, limit: usize) -> Vec<String> {
    history
        .get_history(limit)
        .into_iter()
        .map(|r| r.city)
        .collect()
}

#[test]
fn history_is_most_recent_first() {
    let (history, _clock) = history_with_clock(50);
    history.add_search("Paris", None);
    history.add_search("London", None);
    history.add_search("Paris", None);

    assert_eq!(cities(&history, 3), vec!["paris", "london", "paris"]);
}

#[test]
fn recent_cities_deduplicate_by_latest_search() {
    let (history, _clock) = history_with_clock(50);
    history.add_search("Paris", None);
    history.add_search("London", None);
    history.add_search("Paris", None);

    assert_eq!(history.get_recent_cities(2), vec!["paris", "london"]);
    assert_eq!(history.get_recent_cities(1), vec!["paris"]);
}

#[test]
fn recent_cities_stop_at_limit() {
    let (history, _clock) = history_with_clock(50);
    for city in ["Tokyo", "Oslo", "Lima", "Oslo", "Cairo", "Rome", "Tokyo"] {
        history.add_search(city, None);
    }

    assert_eq!(
        history.get_recent_cities(DEFAULT_RECENT_LIMIT),
        vec!["tokyo", "rome", "cairo", "oslo", "lima"]
    );
    assert_eq!(history.get_recent_cities(10).len(), 5);
    assert!(history.get_recent_cities(0).is_empty());
}

#[test]
fn capacity_drops_oldest_records() {
    let (history, _clock) = history_with_clock(50);
    for i in 0..55 {
        history.add_search(&format!("city{i}"), None);
    }

    let all = cities(&history, 100);
    assert_eq!(all.len(), 50);
    assert_eq!(all.first().map(String::as_str), Some("city54"));
    assert_eq!(all.last().map(String::as_str), Some("city5"));
    assert!(!all.contains(&"city4".to_string()));
    assert_eq!(history.stats().total_searches, 50);
}

#[test]
fn get_history_limits_and_defaults() {
    let (history, _clock) = history_with_clock(50);
    for i in 0..12 {
        history.add_search(&format!("city{i}"), None);
    }

    assert_eq!(history.get_history(DEFAULT_HISTORY_LIMIT).len(), 10);
    assert_eq!(history.get_history(3).len(), 3);
    assert_eq!(history.get_history(100).len(), 12);
    assert!(history.get_history(0).is_empty());
}

#[test]
fn cities_are_normalized() {
    let (history, _clock) = history_with_clock(50);
    let record = history.add_search("PARIS", None);
    history.add_search(" Paris ", None);

    assert_eq!(record.city, "paris");
    assert_eq!(history.get_recent_cities(DEFAULT_RECENT_LIMIT), vec!["paris"]);
    assert_eq!(history.stats().unique_cities, 1);
}

#[test]
fn timestamps_default_to_clock_and_accept_override() {
    let (history, clock) = history_with_clock(50);
    let start = clock.now();

    let first = history.add_search("Paris", None);
    assert_eq!(first.timestamp, start);

    clock.advance(Duration::minutes(5));
    let explicit = Utc.with_ymd_and_hms(2024, 6, 1, 8, 30, 0).unwrap();
    let second = history.add_search("London", Some(explicit));
    assert_eq!(second.timestamp, explicit);

    let records = history.get_history(2);
    assert_eq!(records[0].timestamp, explicit);
    assert_eq!(records[1].timestamp, start);
}

#[test]
fn ids_are_unique() {
    let (history, _clock) = history_with_clock(50);
    for _ in 0..50 {
        history.add_search("Paris", None);
    }

    let ids: HashSet<_> = history.get_history(50).into_iter().map(|r| r.id).collect();
    assert_eq!(ids.len(), 50);
}

#[test]
fn get_history_does_not_mutate() {
    let (history, _clock) = history_with_clock(50);
    history.add_search("Paris", None);
    history.add_search("London", None);

    let first = history.get_history(10);
    let _ = history.get_recent_cities(10);
    let second = history.get_history(10);

    assert_eq!(first, second);
}

#[test]
fn stats_track_totals_and_last_search() {
    let (history, clock) = history_with_clock(50);
    let empty = history.stats();
    assert_eq!(empty.total_searches, 0);
    assert_eq!(empty.unique_cities, 0);
    assert_eq!(empty.last_search, None);

    history.add_search("Paris", None);
    clock.advance(Duration::seconds(30));
    history.add_search("London", None);
    history.add_search("paris", None);

    let stats = history.stats();
    assert_eq!(stats.total_searches, 3);
    assert_eq!(stats.unique_cities, 2);
    assert_eq!(stats.last_search, Some(clock.now()));
}

#[test]
fn clear_is_idempotent() {
    let (history, _clock) = history_with_clock(50);
    history.add_search("Paris", None);

    history.clear();
    assert_eq!(history.stats().total_searches, 0);
    history.clear();
    assert_eq!(history.stats().total_searches, 0);
    assert!(history.get_history(10).is_empty());
    assert!(history.get_recent_cities(5).is_empty());
}
