#![allow(clippy::clone_on_copy, clippy::float_cmp)]

use serde_json::json;

use super::*;

const QUIET: f64 = 1500.0;

fn saver() -> PersistenceSync {
    PersistenceSync::with_quiet_ms("doc-1", QUIET)
}

// =============================================================
// Construction
// =============================================================

#[test]
fn new_uses_default_quiet_interval() {
    let mut s = PersistenceSync::new("doc-1");
    s.record(json!(1), 0.0);
    assert_eq!(s.next_deadline(), Some(crate::consts::SAVE_QUIET_MS));
}

#[test]
fn starts_saved_with_nothing_pending() {
    let s = saver();
    assert_eq!(s.save_state(), SaveState::Saved);
    assert!(!s.has_pending());
    assert!(s.next_deadline().is_none());
    assert_eq!(s.document_id(), "doc-1");
}

// =============================================================
// record / next_deadline
// =============================================================

#[test]
fn record_schedules_after_quiet_interval() {
    let mut s = saver();
    s.record(json!({"v": 1}), 1000.0);
    assert!(s.has_pending());
    assert_eq!(s.next_deadline(), Some(1000.0 + QUIET));
}

#[test]
fn record_reschedules_from_latest_call() {
    let mut s = saver();
    s.record(json!({"v": 1}), 1000.0);
    s.record(json!({"v": 2}), 1900.0);
    // The earlier slot is gone; only the newest deadline exists.
    assert_eq!(s.next_deadline(), Some(1900.0 + QUIET));
}

// =============================================================
// poll — trailing-edge debounce
// =============================================================

#[test]
fn poll_before_deadline_is_none() {
    let mut s = saver();
    s.record(json!({"v": 1}), 0.0);
    assert!(s.poll(QUIET - 1.0).is_none());
    assert_eq!(s.save_state(), SaveState::Saved);
}

#[test]
fn poll_at_deadline_yields_snapshot() {
    let mut s = saver();
    s.record(json!({"v": 1}), 0.0);
    let snap = s.poll(QUIET).unwrap();
    assert_eq!(snap.document_id, "doc-1");
    assert_eq!(snap.content, json!({"v": 1}));
    assert_eq!(snap.timestamp_ms, QUIET);
}

#[test]
fn poll_moves_state_to_saving_and_empties_slot() {
    let mut s = saver();
    s.record(json!({"v": 1}), 0.0);
    assert!(s.poll(QUIET).is_some());
    assert_eq!(s.save_state(), SaveState::Saving);
    assert!(!s.has_pending());
    assert!(s.poll(QUIET + 1.0).is_none());
}

#[test]
fn twenty_records_in_quiet_interval_yield_one_write_with_last() {
    let mut s = saver();
    for i in 0..20 {
        // All twenty arrive within one quiet interval of each other.
        s.record(json!({"v": i}), f64::from(i) * 10.0);
    }
    let last_record_at = 19.0 * 10.0;

    // Nothing is due until the final record's quiet interval elapses.
    assert!(s.poll(last_record_at + QUIET - 1.0).is_none());

    let snap = s.poll(last_record_at + QUIET).unwrap();
    assert_eq!(snap.content, json!({"v": 19}));

    // And that was the only write.
    s.complete(Ok(()));
    assert!(s.poll(last_record_at + QUIET * 10.0).is_none());
}

#[test]
fn poll_with_nothing_recorded_is_none() {
    let mut s = saver();
    assert!(s.poll(1e9).is_none());
}

#[test]
fn spaced_records_each_write() {
    let mut s = saver();
    s.record(json!({"v": 1}), 0.0);
    let first = s.poll(QUIET).unwrap();
    s.complete(Ok(()));

    s.record(json!({"v": 2}), QUIET * 2.0);
    let second = s.poll(QUIET * 3.0).unwrap();
    assert_eq!(first.content, json!({"v": 1}));
    assert_eq!(second.content, json!({"v": 2}));
}

// =============================================================
// complete — save state transitions
// =============================================================

#[test]
fn success_returns_to_saved() {
    let mut s = saver();
    s.record(json!(1), 0.0);
    assert!(s.poll(QUIET).is_some());
    s.complete(Ok(()));
    assert_eq!(s.save_state(), SaveState::Saved);
}

#[test]
fn failure_moves_to_error() {
    let mut s = saver();
    s.record(json!(1), 0.0);
    assert!(s.poll(QUIET).is_some());
    s.complete(Err(SinkError::Rejected("boom".to_owned())));
    assert_eq!(s.save_state(), SaveState::Error);
}

#[test]
fn error_is_not_retried_automatically() {
    let mut s = saver();
    s.record(json!(1), 0.0);
    assert!(s.poll(QUIET).is_some());
    s.complete(Err(SinkError::Rejected("boom".to_owned())));
    // No pending write reappears on its own.
    assert!(!s.has_pending());
    assert!(s.poll(QUIET * 100.0).is_none());
    assert_eq!(s.save_state(), SaveState::Error);
}

#[test]
fn record_after_error_recovers_through_saving_to_saved() {
    let mut s = saver();
    s.record(json!(1), 0.0);
    assert!(s.poll(QUIET).is_some());
    s.complete(Err(SinkError::Rejected("offline".to_owned())));

    let retry_at = QUIET * 2.0;
    s.record(json!(2), retry_at);
    assert_eq!(s.save_state(), SaveState::Error); // until the write begins

    let snap = s.poll(retry_at + QUIET).unwrap();
    assert_eq!(s.save_state(), SaveState::Saving);
    assert_eq!(snap.content, json!(2));

    s.complete(Ok(()));
    assert_eq!(s.save_state(), SaveState::Saved);
}

// =============================================================
// record while a write is in flight
// =============================================================

#[test]
fn record_mid_write_schedules_followup() {
    let mut s = saver();
    s.record(json!(1), 0.0);
    let first = s.poll(QUIET).unwrap();
    assert_eq!(first.content, json!(1));

    // A newer snapshot lands while the first write is still in flight.
    s.record(json!(2), QUIET + 100.0);
    s.complete(Ok(()));

    // The newer write is simply issued after; last write wins.
    let second = s.poll(QUIET * 2.0 + 100.0).unwrap();
    assert_eq!(second.content, json!(2));
}

#[test]
fn sink_error_message_mentions_cause() {
    let err = SinkError::Rejected("status 500".to_owned());
    assert!(err.to_string().contains("status 500"));
}
