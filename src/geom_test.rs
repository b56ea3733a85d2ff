#![allow(clippy::float_cmp)]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::*;

fn random_rect(rng: &mut StdRng) -> Rect {
    Rect::new(
        rng.random_range(-200.0..800.0),
        rng.random_range(-200.0..800.0),
        rng.random_range(1.0..300.0),
        rng.random_range(1.0..300.0),
    )
}

// =============================================================
// Point / Rect / CanvasSize
// =============================================================

#[test]
fn point_offset_adds_both_axes() {
    let p = Point::new(10.0, 20.0).offset(Point::new(-5.0, 7.5));
    assert_eq!(p, Point::new(5.0, 27.5));
}

#[test]
fn rect_edges_and_area() {
    let r = Rect::new(10.0, 20.0, 30.0, 40.0);
    assert_eq!(r.right(), 40.0);
    assert_eq!(r.bottom(), 60.0);
    assert_eq!(r.area(), 1200.0);
    assert_eq!(r.origin(), Point::new(10.0, 20.0));
}

#[test]
fn rect_at_keeps_size() {
    let r = Rect::new(10.0, 20.0, 30.0, 40.0).at(Point::new(0.0, 5.0));
    assert_eq!(r, Rect::new(0.0, 5.0, 30.0, 40.0));
}

#[test]
fn canvas_max_origin_subtracts_size() {
    let canvas = CanvasSize::new(800.0, 600.0);
    assert_eq!(canvas.max_origin(200.0, 150.0), Point::new(600.0, 450.0));
}

#[test]
fn canvas_max_origin_never_negative() {
    let canvas = CanvasSize::new(100.0, 100.0);
    assert_eq!(canvas.max_origin(300.0, 250.0), Point::new(0.0, 0.0));
}

#[test]
fn canvas_longest_side() {
    assert_eq!(CanvasSize::new(800.0, 600.0).longest_side(), 800.0);
    assert_eq!(CanvasSize::new(300.0, 900.0).longest_side(), 900.0);
}

#[test]
fn rect_serde_field_names() {
    let json = serde_json::to_value(Rect::new(1.0, 2.0, 3.0, 4.0)).unwrap();
    assert_eq!(json, serde_json::json!({"x": 1.0, "y": 2.0, "width": 3.0, "height": 4.0}));
}

// =============================================================
// rectangles_overlap
// =============================================================

#[test]
fn overlap_partial() {
    let a = Rect::new(0.0, 0.0, 100.0, 100.0);
    let b = Rect::new(50.0, 50.0, 100.0, 100.0);
    assert!(rectangles_overlap(&a, &b));
}

#[test]
fn overlap_contained() {
    let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
    let inner = Rect::new(25.0, 25.0, 10.0, 10.0);
    assert!(rectangles_overlap(&outer, &inner));
    assert!(rectangles_overlap(&inner, &outer));
}

#[test]
fn edge_touch_is_not_overlap() {
    let a = Rect::new(0.0, 0.0, 100.0, 100.0);
    let b = Rect::new(100.0, 0.0, 100.0, 100.0);
    assert!(!rectangles_overlap(&a, &b));
}

#[test]
fn vertical_edge_touch_is_not_overlap() {
    let a = Rect::new(0.0, 0.0, 100.0, 100.0);
    let b = Rect::new(0.0, 100.0, 100.0, 100.0);
    assert!(!rectangles_overlap(&a, &b));
}

#[test]
fn corner_touch_is_not_overlap() {
    let a = Rect::new(0.0, 0.0, 100.0, 100.0);
    let b = Rect::new(100.0, 100.0, 50.0, 50.0);
    assert!(!rectangles_overlap(&a, &b));
}

#[test]
fn separated_rects_do_not_overlap() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    let b = Rect::new(500.0, 500.0, 10.0, 10.0);
    assert!(!rectangles_overlap(&a, &b));
}

#[test]
fn overlap_is_symmetric() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..2000 {
        let a = random_rect(&mut rng);
        let b = random_rect(&mut rng);
        assert_eq!(rectangles_overlap(&a, &b), rectangles_overlap(&b, &a), "a={a:?} b={b:?}");
    }
}

#[test]
fn non_degenerate_rect_overlaps_itself() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..500 {
        let r = random_rect(&mut rng);
        assert!(rectangles_overlap(&r, &r), "r={r:?}");
    }
}

// =============================================================
// overlap_area
// =============================================================

#[test]
fn overlap_area_of_quarter() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    let b = Rect::new(5.0, 5.0, 10.0, 10.0);
    assert_eq!(overlap_area(&a, &b), 25.0);
}

#[test]
fn overlap_area_zero_when_touching() {
    let a = Rect::new(0.0, 0.0, 100.0, 100.0);
    let b = Rect::new(100.0, 0.0, 100.0, 100.0);
    assert_eq!(overlap_area(&a, &b), 0.0);
}

#[test]
fn overlap_area_of_contained_is_inner_area() {
    let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
    let inner = Rect::new(10.0, 20.0, 30.0, 40.0);
    assert_eq!(overlap_area(&outer, &inner), 1200.0);
}

#[test]
fn overlap_area_positive_iff_overlap() {
    let mut rng = StdRng::seed_from_u64(23);
    for _ in 0..2000 {
        let a = random_rect(&mut rng);
        let b = random_rect(&mut rng);
        let area = overlap_area(&a, &b);
        assert!(area >= 0.0);
        assert_eq!(area > 0.0, rectangles_overlap(&a, &b), "a={a:?} b={b:?}");
        assert!(area <= a.area().min(b.area()) + 1e-6);
    }
}

// =============================================================
// is_within_bounds
// =============================================================

#[test]
fn within_bounds_inside() {
    let canvas = CanvasSize::new(800.0, 600.0);
    assert!(is_within_bounds(&Rect::new(0.0, 0.0, 800.0, 600.0), canvas));
    assert!(is_within_bounds(&Rect::new(100.0, 100.0, 50.0, 50.0), canvas));
}

#[test]
fn within_bounds_rejects_negative_origin() {
    let canvas = CanvasSize::new(800.0, 600.0);
    assert!(!is_within_bounds(&Rect::new(-1.0, 0.0, 50.0, 50.0), canvas));
    assert!(!is_within_bounds(&Rect::new(0.0, -1.0, 50.0, 50.0), canvas));
}

#[test]
fn within_bounds_rejects_overflow() {
    let canvas = CanvasSize::new(800.0, 600.0);
    assert!(!is_within_bounds(&Rect::new(760.0, 0.0, 50.0, 50.0), canvas));
    assert!(!is_within_bounds(&Rect::new(0.0, 560.0, 50.0, 50.0), canvas));
}
