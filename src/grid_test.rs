#![allow(clippy::float_cmp)]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::*;

// --- snap_to_grid ---

#[test]
fn snap_rounds_to_nearest_multiple() {
    assert_eq!(snap_to_grid(0.0, 20.0), 0.0);
    assert_eq!(snap_to_grid(9.0, 20.0), 0.0);
    assert_eq!(snap_to_grid(11.0, 20.0), 20.0);
    assert_eq!(snap_to_grid(29.0, 20.0), 20.0);
    assert_eq!(snap_to_grid(31.0, 20.0), 40.0);
}

#[test]
fn snap_tie_rounds_up_in_positive_domain() {
    assert_eq!(snap_to_grid(15.0, 30.0), 30.0);
    assert_eq!(snap_to_grid(10.0, 20.0), 20.0);
}

#[test]
fn snap_tie_rounds_away_from_zero_when_negative() {
    assert_eq!(snap_to_grid(-10.0, 20.0), -20.0);
}

#[test]
fn snap_handles_negative_values() {
    assert_eq!(snap_to_grid(-29.0, 20.0), -20.0);
    assert_eq!(snap_to_grid(-31.0, 20.0), -40.0);
}

#[test]
fn snap_zero_grid_is_noop() {
    assert_eq!(snap_to_grid(13.7, 0.0), 13.7);
    assert_eq!(snap_to_grid(-4.2, 0.0), -4.2);
}

#[test]
fn snap_fractional_pitch() {
    assert_eq!(snap_to_grid(1.3, 0.5), 1.5);
}

#[test]
fn snap_is_idempotent() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..2000 {
        let v: f64 = rng.random_range(-5000.0..5000.0);
        let g = f64::from(rng.random_range(1_u32..64));
        let once = snap_to_grid(v, g);
        assert_eq!(snap_to_grid(once, g), once, "v={v} g={g}");
    }
}

// --- clamp_to_grid ---

#[test]
fn clamp_floors_negative_at_zero() {
    assert_eq!(clamp_to_grid(-35.0, 20.0, 0.0), 0.0);
}

#[test]
fn clamp_passes_through_above_min() {
    assert_eq!(clamp_to_grid(47.0, 20.0, 0.0), 40.0);
}

#[test]
fn clamp_respects_custom_min() {
    assert_eq!(clamp_to_grid(30.0, 20.0, 100.0), 100.0);
    assert_eq!(clamp_to_grid(150.0, 20.0, 100.0), 160.0);
}

#[test]
fn clamp_never_below_min() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..2000 {
        let v: f64 = rng.random_range(-5000.0..5000.0);
        let g = f64::from(rng.random_range(1_u32..64));
        let m: f64 = rng.random_range(-500.0..500.0);
        assert!(clamp_to_grid(v, g, m) >= m, "v={v} g={g} m={m}");
    }
}

// --- snap_point / snap_size ---

#[test]
fn snap_point_snaps_both_axes() {
    let p = snap_point(Point::new(33.0, 71.0), 20.0);
    assert_eq!(p, Point::new(40.0, 80.0));
}

#[test]
fn snap_size_applies_minimums() {
    assert_eq!(snap_size(40.0, 30.0, 20.0, 100.0, 80.0), (100.0, 80.0));
}

#[test]
fn snap_size_snaps_large_sizes() {
    assert_eq!(snap_size(247.0, 133.0, 20.0, 100.0, 80.0), (240.0, 140.0));
}
