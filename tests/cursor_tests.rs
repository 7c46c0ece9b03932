// Host-side tests for pointer normalisation and smoothing.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod cursor {
        include!("../src/core/cursor.rs");
    }
}

use self::core::cursor::Cursor;

const DT_60HZ: f32 = 1.0 / 60.0;

#[test]
fn pointer_is_centred_on_viewport() {
    let mut c = Cursor::default();
    c.point_at(400.0, 300.0, 800.0, 600.0);
    assert_eq!((c.x, c.y), (0.0, 0.0));
    c.point_at(0.0, 0.0, 800.0, 600.0);
    assert_eq!((c.x, c.y), (-0.5, -0.5));
    c.point_at(600.0, 150.0, 800.0, 600.0);
    assert!((c.x - 0.25).abs() < 1e-6);
    assert!((c.y + 0.25).abs() < 1e-6);
}

#[test]
fn zero_sized_viewport_is_ignored() {
    let mut c = Cursor::default();
    c.point_at(10.0, 10.0, 100.0, 100.0);
    let before = c;
    c.point_at(50.0, 50.0, 0.0, 100.0);
    assert_eq!(c, before);
}

#[test]
fn target_halves_and_inverts_y() {
    let mut c = Cursor::default();
    c.point_at(600.0, 150.0, 800.0, 600.0);
    let t = c.parallax_target();
    assert!((t.x - 0.125).abs() < 1e-6);
    assert!((t.y - 0.125).abs() < 1e-6);
}

#[test]
fn single_step_is_rate_times_dt() {
    let mut c = Cursor {
        x: 0.4,
        y: -0.2,
        ..Default::default()
    };
    let out = c.step(0.1);
    // target = (0.2, 0.1); k = 5 * 0.1
    assert!((out.x - 0.1).abs() < 1e-6);
    assert!((out.y - 0.05).abs() < 1e-6);
}

#[test]
fn smoothing_converges_monotonically() {
    let mut c = Cursor::default();
    c.point_at(800.0, 0.0, 800.0, 600.0);
    let target = c.parallax_target();
    let mut prev = c.offset();
    for _ in 0..600 {
        let next = c.step(DT_60HZ);
        assert!(next.x >= prev.x && next.x <= target.x);
        assert!(next.y >= prev.y && next.y <= target.y);
        prev = next;
    }
    assert!((prev - target).length() < 1e-6, "{prev:?} vs {target:?}");
}

#[test]
fn larger_dt_takes_larger_step() {
    let mut a = Cursor {
        x: 0.5,
        ..Default::default()
    };
    let mut b = a;
    let small = a.step(DT_60HZ).x;
    let big = b.step(0.1).x;
    assert!(big > small);
}

#[test]
fn reset_zeroes_raw_position_only() {
    let mut c = Cursor::default();
    c.point_at(700.0, 100.0, 800.0, 600.0);
    for _ in 0..30 {
        c.step(DT_60HZ);
    }
    let lerp_before = c.offset();
    c.reset();
    assert_eq!(c.x, 0.0);
    assert_eq!(c.y, 0.0);
    assert_eq!(c.offset(), lerp_before);

    let after = c.step(DT_60HZ);
    assert!(after.length() < lerp_before.length());
    assert!(after.length() > 0.0);
}

#[test]
fn zero_dt_leaves_lerp_unchanged() {
    let mut c = Cursor {
        x: 0.3,
        y: 0.3,
        lerp_x: 0.01,
        lerp_y: -0.02,
    };
    let out = c.step(0.0);
    assert_eq!((out.x, out.y), (0.01, -0.02));
}
