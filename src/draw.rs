//! Drawing gesture geometry: live-shape growth and the commit thresholds.
//!
//! Pure functions over [`LiveShape`]; the engine owns the surrounding state
//! machine and calls these from its pointer handlers.

#[cfg(test)]
#[path = "draw_test.rs"]
mod draw_test;

use crate::consts::{MIN_ARROW_DISPLACEMENT_PCT, MIN_COMMIT_PCT};
use crate::coords::Point;
use crate::doc::Annotation;
use crate::input::{LiveShape, Tool};

/// Start a drag gesture for the given tool at `start` (percent space).
///
/// Returns `None` for [`Tool::Text`] — text labels are a direct commit on
/// pointer-down, not a drag.
#[must_use]
pub fn begin(tool: Tool, start: Point) -> Option<LiveShape> {
    match tool {
        Tool::Occlusion => Some(LiveShape::Box { x: start.x, y: start.y, w: 0.0, h: 0.0 }),
        Tool::Arrow => Some(LiveShape::Line { end: start }),
        Tool::Text => None,
    }
}

/// Update the live shape for the current pointer position.
///
/// A box keeps its top-left at the per-axis minimum of start and current and
/// its size at the per-axis absolute difference, so the drag direction never
/// produces a negative extent. An arrow's endpoint simply tracks the
/// pointer; the start point is fixed.
pub fn update(shape: &mut LiveShape, start: Point, current: Point) {
    match shape {
        LiveShape::Box { x, y, w, h } => {
            *x = start.x.min(current.x);
            *y = start.y.min(current.y);
            *w = (current.x - start.x).abs();
            *h = (current.y - start.y).abs();
        }
        LiveShape::Line { end } => *end = current,
    }
}

/// Validity check and commit on release.
///
/// An occlusion commits only when both extents exceed the threshold; an
/// arrow commits when either axis of the start-to-end displacement does.
/// Sub-threshold shapes are accidental taps and yield `None` — a silent
/// discard, not an error. Committed annotations get a fresh id and, for
/// occlusions, start hidden.
#[must_use]
pub fn commit(shape: &LiveShape, start: Point) -> Option<Annotation> {
    match *shape {
        LiveShape::Box { x, y, w, h } => {
            if w > MIN_COMMIT_PCT && h > MIN_COMMIT_PCT {
                Some(Annotation::Occlusion { id: Annotation::fresh_id(), x, y, w, h, revealed: false })
            } else {
                None
            }
        }
        LiveShape::Line { end } => {
            let moved = (end.x - start.x).abs() > MIN_ARROW_DISPLACEMENT_PCT
                || (end.y - start.y).abs() > MIN_ARROW_DISPLACEMENT_PCT;
            if moved {
                Some(Annotation::Arrow {
                    id: Annotation::fresh_id(),
                    x: start.x,
                    y: start.y,
                    end_x: end.x,
                    end_y: end.y,
                })
            } else {
                None
            }
        }
    }
}

/// Build the zero-size text label committed directly on pointer-down.
#[must_use]
pub fn text_label(at: Point) -> Annotation {
    Annotation::Text { id: Annotation::fresh_id(), x: at.x, y: at.y, content: String::new() }
}
