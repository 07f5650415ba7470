#![allow(clippy::clone_on_copy, clippy::float_cmp)]

use super::*;

fn occ(id: &str, x: f64, y: f64, w: f64, h: f64) -> Annotation {
    Annotation::Occlusion { id: id.to_owned(), x, y, w, h, revealed: false }
}

fn arrow(id: &str, x: f64, y: f64, end_x: f64, end_y: f64) -> Annotation {
    Annotation::Arrow { id: id.to_owned(), x, y, end_x, end_y }
}

fn text(id: &str, x: f64, y: f64) -> Annotation {
    Annotation::Text { id: id.to_owned(), x, y, content: "label".to_owned() }
}

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

// --- Occlusion containment ---

#[test]
fn inside_box_hits() {
    let anns = vec![occ("a", 10.0, 10.0, 20.0, 20.0)];
    assert_eq!(hit_test(pt(20.0, 20.0), &anns).unwrap().id(), "a");
}

#[test]
fn box_edges_are_inclusive() {
    let anns = vec![occ("a", 10.0, 10.0, 20.0, 20.0)];
    assert!(hit_test(pt(10.0, 10.0), &anns).is_some());
    assert!(hit_test(pt(30.0, 30.0), &anns).is_some());
}

#[test]
fn outside_box_misses() {
    let anns = vec![occ("a", 10.0, 10.0, 20.0, 20.0)];
    assert!(hit_test(pt(31.0, 20.0), &anns).is_none());
    assert!(hit_test(pt(20.0, 9.0), &anns).is_none());
}

#[test]
fn empty_list_misses() {
    assert!(hit_test(pt(50.0, 50.0), &[]).is_none());
}

// --- Arrow slop ---

#[test]
fn on_arrow_line_hits() {
    let anns = vec![arrow("a", 0.0, 0.0, 40.0, 0.0)];
    assert_eq!(hit_test(pt(20.0, 0.0), &anns).unwrap().id(), "a");
}

#[test]
fn near_arrow_line_within_slop_hits() {
    let anns = vec![arrow("a", 0.0, 0.0, 40.0, 0.0)];
    assert!(hit_test(pt(20.0, 1.9), &anns).is_some());
}

#[test]
fn far_from_arrow_line_misses() {
    let anns = vec![arrow("a", 0.0, 0.0, 40.0, 0.0)];
    assert!(hit_test(pt(20.0, 5.0), &anns).is_none());
}

#[test]
fn beyond_arrow_endpoint_uses_endpoint_distance() {
    let anns = vec![arrow("a", 0.0, 0.0, 40.0, 0.0)];
    // Just past the tip, within slop of the endpoint itself.
    assert!(hit_test(pt(41.5, 0.0), &anns).is_some());
    assert!(hit_test(pt(45.0, 0.0), &anns).is_none());
}

#[test]
fn degenerate_arrow_hits_like_a_point() {
    let anns = vec![arrow("a", 30.0, 30.0, 30.0, 30.0)];
    assert!(hit_test(pt(31.0, 30.0), &anns).is_some());
    assert!(hit_test(pt(35.0, 30.0), &anns).is_none());
}

// --- Text anchor radius ---

#[test]
fn near_label_anchor_hits() {
    let anns = vec![text("a", 50.0, 50.0)];
    assert!(hit_test(pt(51.0, 51.0), &anns).is_some());
}

#[test]
fn far_from_label_anchor_misses() {
    let anns = vec![text("a", 50.0, 50.0)];
    assert!(hit_test(pt(54.0, 50.0), &anns).is_none());
}

// --- Stacking: topmost wins ---

#[test]
fn overlapping_boxes_latest_wins() {
    let anns = vec![occ("under", 10.0, 10.0, 20.0, 20.0), occ("over", 15.0, 15.0, 20.0, 20.0)];
    assert_eq!(hit_test(pt(20.0, 20.0), &anns).unwrap().id(), "over");
}

#[test]
fn non_overlapping_regions_resolve_independently() {
    let anns = vec![occ("left", 0.0, 0.0, 10.0, 10.0), occ("right", 50.0, 0.0, 10.0, 10.0)];
    assert_eq!(hit_test(pt(5.0, 5.0), &anns).unwrap().id(), "left");
    assert_eq!(hit_test(pt(55.0, 5.0), &anns).unwrap().id(), "right");
}
