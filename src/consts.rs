//! Shared numeric constants for the occlusion engine.

// ── Gestures ────────────────────────────────────────────────────

/// Minimum committed size for an occlusion box, percent units per axis.
///
/// Drags below this on either axis are treated as accidental taps and
/// discarded on release.
pub const MIN_COMMIT_PCT: f64 = 2.0;

/// Minimum start-to-end displacement for a committed arrow, percent units.
/// The arrow commits when either axis exceeds this.
pub const MIN_ARROW_DISPLACEMENT_PCT: f64 = 2.0;

// ── Hit-testing ─────────────────────────────────────────────────

/// Slop around arrow lines and text labels, percent units.
pub const HIT_SLOP_PCT: f64 = 2.0;

// ── Resize ──────────────────────────────────────────────────────

/// Floor for the container width during a resize drag, CSS pixels.
pub const MIN_CONTAINER_WIDTH_PX: f64 = 300.0;

// ── Persistence ─────────────────────────────────────────────────

/// Trailing-edge quiet interval before a snapshot write, milliseconds.
pub const SAVE_QUIET_MS: f64 = 1500.0;
