// Host-side tests for constants and their mathematical relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core_constants {
    include!("../src/core/constants.rs");
}

use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn thresholds_are_positive_and_y_is_subtler() {
    assert!(X_THRESHOLD > 0.0);
    assert!(Y_THRESHOLD > 0.0);
    // Vertical displacement is divided by the larger threshold
    assert!(Y_THRESHOLD > X_THRESHOLD);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_clip_range_is_valid() {
    assert!(CAMERA_NEAR > 0.0);
    assert!(CAMERA_FAR > CAMERA_NEAR);
    // Image plane sits at the origin, inside the clip range
    assert!(CAMERA_Z > CAMERA_NEAR && CAMERA_Z < CAMERA_FAR);
    assert!(CAMERA_FOV_DEG > 0.0 && CAMERA_FOV_DEG < 180.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn smoothing_is_stable_at_display_rates() {
    // lerp += (t - lerp) * rate * dt must not overshoot at 30 Hz or faster
    assert!(LERP_RATE_PER_SEC / 30.0 < 1.0);
    assert!(PARALLAX_GAIN > 0.0 && PARALLAX_GAIN <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn pixel_ratio_cap_is_above_one() {
    assert!(MAX_PIXEL_RATIO >= 1.0);
}

#[test]
fn placeholders_are_opaque_and_depth_is_neutral() {
    assert_eq!(PLACEHOLDER_COLOR_RGBA[3], 255);
    assert_eq!(PLACEHOLDER_DEPTH_RGBA[3], 255);
    let depth = PLACEHOLDER_DEPTH_RGBA[0] as f32 / 255.0;
    assert!((depth - 0.5).abs() < 0.01);
}

#[test]
fn asset_paths_are_absolute() {
    assert!(COLOR_IMAGE_PATH.starts_with('/'));
    assert!(DEPTH_IMAGE_PATH.starts_with('/'));
    assert_ne!(COLOR_IMAGE_PATH, DEPTH_IMAGE_PATH);
}
