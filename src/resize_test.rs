#![allow(clippy::clone_on_copy, clippy::float_cmp)]

use super::*;

fn rect_at(left: f64) -> ContainerRect {
    ContainerRect::new(left, 0.0, 500.0, 400.0)
}

// --- live_width ---

#[test]
fn width_is_distance_from_left_edge() {
    assert_eq!(live_width(740.0, &rect_at(100.0)), 640.0);
}

#[test]
fn width_floors_at_minimum() {
    assert_eq!(live_width(150.0, &rect_at(100.0)), MIN_CONTAINER_WIDTH_PX);
}

#[test]
fn width_floors_when_pointer_left_of_container() {
    assert_eq!(live_width(-900.0, &rect_at(100.0)), MIN_CONTAINER_WIDTH_PX);
}

#[test]
fn width_exactly_at_floor() {
    assert_eq!(live_width(400.0, &rect_at(100.0)), 300.0);
}

#[test]
fn width_ignores_container_size() {
    // Only the left edge matters; the rect's current extent does not.
    let narrow = ContainerRect::new(100.0, 0.0, 10.0, 10.0);
    let wide = ContainerRect::new(100.0, 0.0, 5000.0, 10.0);
    assert_eq!(live_width(800.0, &narrow), live_width(800.0, &wide));
}

// --- width_string ---

#[test]
fn width_string_formats_px() {
    assert_eq!(width_string(640.0), "640px");
}

#[test]
fn width_string_rounds_to_int() {
    assert_eq!(width_string(639.6), "640px");
    assert_eq!(width_string(639.4), "639px");
}
