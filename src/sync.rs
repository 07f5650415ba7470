//! Debounced snapshot persistence and the tri-state save status.
//!
//! High-frequency local edits (every committed mutation, every keystroke in
//! a label) are decoupled from the cost of writing to the document sink by
//! a trailing-edge debounce: each [`PersistenceSync::record`] cancels the
//! pending scheduled write and schedules the latest snapshot after a fixed
//! quiet interval. Only the last snapshot before the interval elapses is
//! ever written.
//!
//! The writer is two-phase so an in-flight write is modeled without a
//! browser runtime: [`PersistenceSync::poll`] hands the due snapshot to the
//! host (status becomes `Saving`) and [`PersistenceSync::complete`] reports
//! the sink's verdict. Time is injected as a millisecond clock value, which
//! keeps the whole component testable with a hand-rolled clock.

#[cfg(test)]
#[path = "sync_test.rs"]
mod sync_test;

use serde_json::Value;
use thiserror::Error;

use crate::consts::SAVE_QUIET_MS;

/// Save status for one editing session. Reset to `Saved` on every
/// successful write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SaveState {
    #[default]
    Saved,
    Saving,
    Error,
}

/// A rejected or failed sink write.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("persistence sink rejected write: {0}")]
    Rejected(String),
}

/// What the persistence sink receives: the whole document content tree with
/// the image node embedded, plus identity and wall-clock stamp.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentSnapshot {
    pub document_id: String,
    pub content: Value,
    pub timestamp_ms: f64,
}

#[derive(Debug, Clone)]
struct Pending {
    content: Value,
    due_at_ms: f64,
}

/// Single-slot debounced snapshot writer.
///
/// There is never more than one scheduled write per session: recording a
/// new edit replaces the slot atomically. Errors are not retried — the next
/// `record` re-enters the cycle with the latest state, so nothing is lost
/// beyond visibility of the `Error` status.
#[derive(Debug)]
pub struct PersistenceSync {
    document_id: String,
    quiet_ms: f64,
    state: SaveState,
    pending: Option<Pending>,
}

impl PersistenceSync {
    /// Writer for one document with the default quiet interval.
    #[must_use]
    pub fn new(document_id: impl Into<String>) -> Self {
        Self::with_quiet_ms(document_id, SAVE_QUIET_MS)
    }

    /// Writer with an explicit quiet interval (tests shrink it).
    #[must_use]
    pub fn with_quiet_ms(document_id: impl Into<String>, quiet_ms: f64) -> Self {
        Self {
            document_id: document_id.into(),
            quiet_ms,
            state: SaveState::default(),
            pending: None,
        }
    }

    /// Record a committed mutation: cancel the pending write, schedule the
    /// latest snapshot for `now + quiet`. Trailing-edge — never throttling.
    pub fn record(&mut self, content: Value, now_ms: f64) {
        self.pending = Some(Pending { content, due_at_ms: now_ms + self.quiet_ms });
    }

    /// When the next scheduled write is due, if any. Hosts arm exactly one
    /// timer against this.
    #[must_use]
    pub fn next_deadline(&self) -> Option<f64> {
        self.pending.as_ref().map(|p| p.due_at_ms)
    }

    /// Take the due snapshot, if the quiet interval has elapsed.
    ///
    /// Returns `None` while the slot is empty or not yet due. On `Some` the
    /// status moves to `Saving` and the slot empties; the host must follow
    /// up with [`Self::complete`]. A newer `record` arriving while that
    /// write is in flight simply refills the slot — the newer write is
    /// issued after, last write wins.
    pub fn poll(&mut self, now_ms: f64) -> Option<DocumentSnapshot> {
        let due = self.pending.as_ref().is_some_and(|p| now_ms >= p.due_at_ms);
        if !due {
            return None;
        }
        let pending = self.pending.take()?;
        self.state = SaveState::Saving;
        Some(DocumentSnapshot {
            document_id: self.document_id.clone(),
            content: pending.content,
            timestamp_ms: now_ms,
        })
    }

    /// Report the sink's verdict for the snapshot last taken via `poll`.
    pub fn complete(&mut self, result: Result<(), SinkError>) {
        self.state = match result {
            Ok(()) => SaveState::Saved,
            Err(err) => {
                log::warn!("snapshot write failed: {err}");
                SaveState::Error
            }
        };
    }

    #[must_use]
    pub fn save_state(&self) -> SaveState {
        self.state
    }

    /// Whether a write is scheduled but not yet taken.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    #[must_use]
    pub fn document_id(&self) -> &str {
        &self.document_id
    }
}
