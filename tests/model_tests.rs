//! History and configuration properties.
//!
//! Note: We intentionally use `Default::default()` then field reassignment
//! to test individual field validation.
#![allow(clippy::field_reassign_with_default)]

use clipshelf::model::constants::*;
use clipshelf::{AppConfig, ClipboardItem, History};

fn texts(history: &History) -> Vec<&str> {
    history.items().iter().filter_map(|i| i.text_value()).collect()
}

// === History ===

#[test]
fn duplicate_moves_to_front_once() {
    let mut h = History::new(10);
    h.insert(ClipboardItem::text("a"));
    h.insert(ClipboardItem::text("b"));
    h.insert(ClipboardItem::text("c"));
    let outcome = h.insert(ClipboardItem::text("a"));

    assert!(outcome.was_present);
    assert_eq!(texts(&h), vec!["a", "c", "b"]);
}

#[test]
fn default_cap_evicts_oldest_on_101st_item() {
    let mut h = History::new(DEFAULT_HISTORY_LIMIT);
    for i in 0..DEFAULT_HISTORY_LIMIT {
        h.insert(ClipboardItem::text(format!("item {}", i)));
    }
    assert_eq!(h.len(), DEFAULT_HISTORY_LIMIT);

    let outcome = h.insert(ClipboardItem::text("one more"));
    assert_eq!(h.len(), DEFAULT_HISTORY_LIMIT);
    assert_eq!(outcome.evicted.len(), 1);
    assert_eq!(outcome.evicted[0].text_value(), Some("item 0"));
    assert!(!h.contains(&ClipboardItem::text("item 0")));
}

#[test]
fn length_never_exceeds_cap() {
    let mut h = History::new(5);
    for i in 0..50 {
        h.insert(ClipboardItem::text(format!("{}", i % 13)));
        assert!(h.len() <= 5);
    }
}

#[test]
fn toggling_pin_keeps_order_and_membership() {
    let mut h = History::new(10);
    for t in ["a", "b", "c"] {
        h.insert(ClipboardItem::text(t));
    }
    let before = texts(&h).into_iter().map(String::from).collect::<Vec<_>>();

    assert_eq!(h.toggle_pin(&ClipboardItem::text("b")), Some(true));
    assert!(h.is_pinned(&ClipboardItem::text("b")));
    assert_eq!(texts(&h), before);

    assert_eq!(h.toggle_pin(&ClipboardItem::text("b")), Some(false));
    assert!(!h.is_pinned(&ClipboardItem::text("b")));
    assert_eq!(texts(&h), before);
}

#[test]
fn remove_clears_history_and_pin() {
    let mut h = History::new(10);
    h.insert(ClipboardItem::text("keep"));
    h.insert(ClipboardItem::text("drop"));
    h.toggle_pin(&ClipboardItem::text("drop"));

    assert!(h.remove(&ClipboardItem::text("drop")));
    assert!(!h.contains(&ClipboardItem::text("drop")));
    assert!(!h.is_pinned(&ClipboardItem::text("drop")));
    assert_eq!(texts(&h), vec!["keep"]);
}

#[test]
fn equality_ignores_timestamp() {
    let a = ClipboardItem::text("same");
    let mut b = ClipboardItem::text("same");
    b.timestamp = a.timestamp - chrono::Duration::hours(3);
    assert_eq!(a, b);
}

// === AppConfig ===

#[test]
fn config_defaults() {
    let c = AppConfig::default();
    assert_eq!(c.history_limit, DEFAULT_HISTORY_LIMIT);
    assert_eq!(c.poll_interval_secs, DEFAULT_POLL_INTERVAL_SECS);
    assert_eq!(c.permission_poll_secs, DEFAULT_PERMISSION_POLL_SECS);
    assert!(c.show_popup_on_copy);
}

#[test]
fn config_clamps_history_limit() {
    let mut c = AppConfig::default();
    c.history_limit = 0;
    assert_eq!(c.validated().history_limit, MIN_HISTORY_LIMIT);

    let mut c = AppConfig::default();
    c.history_limit = 100_000;
    assert_eq!(c.validated().history_limit, MAX_HISTORY_LIMIT);
}

#[test]
fn config_clamps_intervals() {
    let mut c = AppConfig::default();
    c.poll_interval_secs = 0.0;
    c.permission_poll_secs = 99.0;
    c.paste_delay_secs = -1.0;
    let c = c.validated();
    assert_eq!(c.poll_interval_secs, MIN_POLL_INTERVAL_SECS);
    assert_eq!(c.permission_poll_secs, MAX_PERMISSION_POLL_SECS);
    assert_eq!(c.paste_delay_secs, MIN_PASTE_DELAY_SECS);
}
