#[cfg(test)]
#[path = "coords_test.rs"]
mod coords_test;

/// A point in either client (CSS pixel) or percent space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Bounding rectangle of the annotation container, CSS pixels.
///
/// Captured by the host from the DOM at event time and passed into every
/// pointer handler, so the engine never holds a stale rect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ContainerRect {
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    /// Convert a client-space point to container-relative percent coordinates.
    ///
    /// Both axes are clamped to `[0, 100]`, so a drag that leaves the
    /// container still yields in-range geometry. A degenerate rect (zero or
    /// negative extent) maps everything to `0.0` on that axis.
    #[must_use]
    pub fn to_percent(&self, client: Point) -> Point {
        Point {
            x: axis_percent(client.x, self.left, self.width),
            y: axis_percent(client.y, self.top, self.height),
        }
    }
}

fn axis_percent(client: f64, origin: f64, extent: f64) -> f64 {
    if extent <= 0.0 {
        return 0.0;
    }
    (100.0 * (client - origin) / extent).clamp(0.0, 100.0)
}
