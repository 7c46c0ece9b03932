// Host-side tests for the mirrored wrap and the parallax lookup.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod wrap {
    include!("../src/core/wrap.rs");
}

use glam::Vec2;
use wrap::*;

fn sweep() -> impl Iterator<Item = f32> {
    (-400..=400).map(|i| i as f32 * 0.0137)
}

#[test]
fn mirrored_is_identity_inside_unit_range() {
    for c in [0.0_f32, 0.1, 0.25, 0.5, 0.75, 0.999] {
        assert!((mirrored(c) - c).abs() < 1e-6, "c={c}");
    }
}

#[test]
fn mirrored_reflects_at_boundaries() {
    assert!((mirrored(1.25) - 0.75).abs() < 1e-6);
    assert!((mirrored(1.0) - 1.0).abs() < 1e-6);
    assert!((mirrored(2.0) - 0.0).abs() < 1e-6);
    assert!((mirrored(-0.25) - 0.25).abs() < 1e-6);
    assert!((mirrored(-1.5) - 0.5).abs() < 1e-6);
}

#[test]
fn mirrored_stays_in_unit_range() {
    for c in sweep() {
        let m = mirrored(c);
        assert!((0.0..=1.0).contains(&m), "mirrored({c}) = {m}");
    }
    for c in [-1e6_f32, -123.456, 1e-9, -1e-9, 77.7, 1e6] {
        let m = mirrored(c);
        assert!((0.0..=1.0).contains(&m), "mirrored({c}) = {m}");
    }
}

#[test]
fn mirrored_has_period_two() {
    for c in sweep() {
        let a = mirrored(c);
        let b = mirrored(c + 2.0);
        assert!((a - b).abs() < 1e-4, "c={c}: {a} vs {b}");
    }
}

#[test]
fn mirrored_uv_applies_per_axis() {
    let m = mirrored_uv(Vec2::new(1.2, -0.3));
    assert!((m.x - 0.8).abs() < 1e-6);
    assert!((m.y - 0.3).abs() < 1e-6);
}

#[test]
fn neutral_depth_does_not_displace() {
    let uv = Vec2::new(0.3, 0.7);
    let out = displaced_uv(uv, 0.5, Vec2::new(0.25, -0.25), Vec2::new(20.0, 35.0));
    assert!((out - uv).length() < 1e-7);
}

#[test]
fn displacement_scales_with_depth_and_inverse_threshold() {
    let uv = Vec2::new(0.5, 0.5);
    let mouse = Vec2::new(0.2, 0.2);
    let threshold = Vec2::new(20.0, 35.0);
    let near = displaced_uv(uv, 1.0, mouse, threshold) - uv;
    let far = displaced_uv(uv, 0.0, mouse, threshold) - uv;
    // Opposite depths shift in opposite directions by the same amount
    assert!((near + far).length() < 1e-7);
    assert!((near.x - 0.5 * 0.2 / 20.0).abs() < 1e-7);
    assert!((near.y - 0.5 * 0.2 / 35.0).abs() < 1e-7);
    // The larger threshold makes the vertical shift smaller
    assert!(near.y < near.x);
}

#[test]
fn lookup_samples_depth_at_mirrored_uv() {
    let sampled = std::cell::Cell::new(Vec2::ZERO);
    let out = parallax_lookup(
        Vec2::new(1.1, -0.2),
        Vec2::ZERO,
        Vec2::new(20.0, 35.0),
        |at| {
            sampled.set(at);
            1.0
        },
    );
    let at = sampled.get();
    assert!((at.x - 0.9).abs() < 1e-6);
    assert!((at.y - 0.2).abs() < 1e-6);
    // Zero mouse: lookup equals the mirrored UV
    assert!((out - at).length() < 1e-6);
}

#[test]
fn lookup_result_is_always_in_texture_range() {
    let threshold = Vec2::new(20.0, 35.0);
    for i in 0..50 {
        let t = i as f32 / 49.0;
        let uv = Vec2::new(t, 1.0 - t);
        let mouse = Vec2::new(30.0 * (t - 0.5), -30.0 * (t - 0.5));
        let out = parallax_lookup(uv, mouse, threshold, |p| p.x);
        assert!((0.0..=1.0).contains(&out.x) && (0.0..=1.0).contains(&out.y));
    }
}
