//! Container width computation for the resize gesture.
//!
//! The resize controller owns only `ImageNode.width`. Intermediate widths
//! are ephemeral gesture state; a single committed string is written on
//! release. Annotation geometry is percentage-based and never touched here.

#[cfg(test)]
#[path = "resize_test.rs"]
mod resize_test;

use crate::consts::MIN_CONTAINER_WIDTH_PX;
use crate::coords::ContainerRect;

/// Width tracking the pointer during a resize drag: the distance from the
/// container's left edge, floored at [`MIN_CONTAINER_WIDTH_PX`] to keep the
/// container usable.
#[must_use]
pub fn live_width(pointer_client_x: f64, rect: &ContainerRect) -> f64 {
    (pointer_client_x - rect.left).max(MIN_CONTAINER_WIDTH_PX)
}

/// Format a committed width as the stored `"<int>px"` string.
#[must_use]
pub fn width_string(width_px: f64) -> String {
    #[allow(clippy::cast_possible_truncation)]
    let px = width_px.round() as i64;
    format!("{px}px")
}
