// Host-side tests for the view counter payloads and local fallback.

use folio_core::views::{parse_views, LocalCounter, ViewsError, VIEWS_KEY};
use std::collections::HashMap;

#[test]
fn parses_count() {
    assert_eq!(parse_views(r#"{"views": 42}"#).unwrap(), 42);
    assert_eq!(
        parse_views(r#"{"views": 7, "message": "View recorded successfully"}"#).unwrap(),
        7
    );
}

#[test]
fn service_error_is_surfaced() {
    match parse_views(r#"{"error": "Failed to record view"}"#) {
        Err(ViewsError::Service(msg)) => assert_eq!(msg, "Failed to record view"),
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn malformed_and_empty_bodies_fail() {
    assert!(matches!(parse_views("<html>"), Err(ViewsError::Malformed(_))));
    assert!(matches!(parse_views("{}"), Err(ViewsError::Empty)));
    assert!(matches!(parse_views(r#"{"views": -3}"#), Err(ViewsError::Malformed(_))));
}

#[test]
fn local_counter_increments() {
    let mut counter = LocalCounter::new(HashMap::new());
    assert_eq!(counter.current(), 0);
    assert_eq!(counter.bump(), 1);
    assert_eq!(counter.bump(), 2);
    let store = counter.into_inner();
    assert_eq!(store.get(VIEWS_KEY).map(String::as_str), Some("2"));
}

#[test]
fn local_counter_recovers_from_garbage() {
    let mut store = HashMap::new();
    store.insert(VIEWS_KEY.to_owned(), "not a number".to_owned());
    let mut counter = LocalCounter::new(store);
    assert_eq!(counter.current(), 0);
    assert_eq!(counter.bump(), 1);
}
