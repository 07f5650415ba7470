//! Scene construction: the display list a host renders from.
//!
//! The engine does not own a drawing surface; it resolves the store plus
//! the live gesture into plain percent-space primitives, and the host maps
//! those onto whatever it renders with (absolutely positioned elements, an
//! SVG overlay, a canvas). Serialization is derived so the WASM host can
//! pass a scene across the boundary as JSON.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use serde::Serialize;

use crate::doc::{Annotation, ImageNode};
use crate::input::{GestureState, LiveShape};
use crate::resize;

/// One drawable primitive, percent coordinates throughout.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum Shape {
    /// Committed occlusion box.
    Mask { id: String, x: f64, y: f64, w: f64, h: f64, revealed: bool },
    /// Committed arrow.
    Arrow { id: String, x1: f64, y1: f64, x2: f64, y2: f64 },
    /// Committed text label, anchored at its center.
    Label { id: String, x: f64, y: f64, content: String },
    /// In-progress occlusion preview.
    Preview { x: f64, y: f64, w: f64, h: f64 },
    /// In-progress arrow preview.
    PreviewArrow { x1: f64, y1: f64, x2: f64, y2: f64 },
}

/// Everything the host needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    /// Container width to apply: the live drag value while resizing,
    /// otherwise the committed node width.
    pub width: String,
    pub shapes: Vec<Shape>,
}

/// Resolve the node and the active gesture into a display list. Committed
/// annotations come first in creation order; the preview, when present,
/// draws last (on top).
#[must_use]
pub fn build(node: &ImageNode, gesture: &GestureState) -> Scene {
    let mut shapes: Vec<Shape> = node.annotations.iter().map(committed).collect();

    let width = match *gesture {
        GestureState::Resizing { live_width_px } => resize::width_string(live_width_px),
        _ => node.width.clone(),
    };

    if let GestureState::Drawing { start, shape } = *gesture {
        shapes.push(match shape {
            LiveShape::Box { x, y, w, h } => Shape::Preview { x, y, w, h },
            LiveShape::Line { end } => {
                Shape::PreviewArrow { x1: start.x, y1: start.y, x2: end.x, y2: end.y }
            }
        });
    }

    Scene { width, shapes }
}

fn committed(ann: &Annotation) -> Shape {
    match ann {
        Annotation::Occlusion { id, x, y, w, h, revealed } => {
            Shape::Mask { id: id.clone(), x: *x, y: *y, w: *w, h: *h, revealed: *revealed }
        }
        Annotation::Arrow { id, x, y, end_x, end_y } => {
            Shape::Arrow { id: id.clone(), x1: *x, y1: *y, x2: *end_x, y2: *end_y }
        }
        Annotation::Text { id, x, y, content } => {
            Shape::Label { id: id.clone(), x: *x, y: *y, content: content.clone() }
        }
    }
}
