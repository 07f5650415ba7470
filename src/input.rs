//! Input model: edit mode, tools, the session context, and the gesture
//! state machine.
//!
//! `Session` carries the mode and tool explicitly — handlers read it as
//! plain data, there is no hidden global UI state. `GestureState` is the
//! exclusive gesture session: at most one variant other than `Idle` is ever
//! active, which is what makes drawing and resizing mutually exclusive, and
//! the active gesture owns every subsequent move/up event until release.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::coords::Point;

/// Authoring vs. reveal mode. Switched only by explicit user action, never
/// inferred, and never mid-gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    /// Reveal-only: drawing disabled, clicking an occlusion toggles it.
    #[default]
    Study,
    /// Authoring: drawing, resizing and deleting enabled, reveal disabled.
    Edit,
}

/// Which annotation tool is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    /// Drag out a masking box.
    #[default]
    Occlusion,
    /// Drag out a directed arrow.
    Arrow,
    /// Place a text label with a single click.
    Text,
}

/// Session context passed through every handler: the mode and tool as plain
/// enum fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct Session {
    pub mode: EditMode,
    pub tool: Tool,
}

/// Geometry of the shape being dragged out, updated on every pointer move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LiveShape {
    /// Provisional occlusion box, already normalized (top-left + extent).
    Box { x: f64, y: f64, w: f64, h: f64 },
    /// Provisional arrow endpoint; the start point lives on the gesture.
    Line { end: Point },
}

/// The active gesture, if any.
///
/// Each variant carries the context needed to update the live shape on move
/// and decide commit-or-discard on release.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The user is dragging out a new occlusion box or arrow.
    Drawing {
        /// Percent-space position of the initial pointer-down.
        start: Point,
        /// The in-progress shape mirroring the active tool.
        shape: LiveShape,
    },
    /// The user is dragging the resize affordance.
    Resizing {
        /// Ephemeral width tracking the pointer; committed only on release.
        live_width_px: f64,
    },
}

impl GestureState {
    /// Whether any gesture currently holds the session.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Idle)
    }
}
