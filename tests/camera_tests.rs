// Host-side tests for the effect camera.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod camera {
        include!("../src/core/camera.rs");
    }
}

use self::core::camera::PerspectiveCamera;
use glam::{Vec3, Vec4};

#[test]
fn effect_camera_matches_setup() {
    let cam = PerspectiveCamera::for_effect(800.0 / 600.0);
    assert_eq!(cam.fov_deg, 75.0);
    assert_eq!(cam.near, 0.1);
    assert_eq!(cam.far, 100.0);
    assert_eq!(cam.position, Vec3::new(0.0, 0.0, 0.7));
    assert!((cam.aspect - 1.333_333).abs() < 1e-5);
}

#[test]
fn fov_y_is_visible_height_at_plane() {
    let cam = PerspectiveCamera::for_effect(1.5);
    let expected = 2.0 * 0.7 * (37.5_f32).to_radians().tan();
    assert!((cam.fov_y() - expected).abs() < 1e-5, "{}", cam.fov_y());
    assert!((cam.fov_y() - 1.074_258).abs() < 1e-4);
}

#[test]
fn fov_y_is_independent_of_aspect() {
    // film height cancels against focal length
    let wide = PerspectiveCamera::for_effect(2.4);
    let tall = PerspectiveCamera::for_effect(0.5);
    assert!((wide.fov_y() - tall.fov_y()).abs() < 1e-5);
}

#[test]
fn film_height_uses_larger_side() {
    let wide = PerspectiveCamera::for_effect(2.0);
    let tall = PerspectiveCamera::for_effect(0.5);
    assert!((wide.film_height() - 17.5).abs() < 1e-4);
    assert!((tall.film_height() - 35.0).abs() < 1e-4);
    assert!(tall.focal_length() > wide.focal_length());
}

#[test]
fn origin_projects_to_screen_centre() {
    let cam = PerspectiveCamera::for_effect(16.0 / 9.0);
    let clip = cam.view_projection() * Vec4::new(0.0, 0.0, 0.0, 1.0);
    assert!(clip.w > 0.0);
    let ndc = clip.truncate() / clip.w;
    assert!(ndc.x.abs() < 1e-6 && ndc.y.abs() < 1e-6);
    assert!(ndc.z > 0.0 && ndc.z < 1.0);
}

#[test]
fn half_fov_y_reaches_top_edge() {
    let cam = PerspectiveCamera::for_effect(1.0);
    let top = Vec4::new(0.0, cam.fov_y() * 0.5, 0.0, 1.0);
    let clip = cam.view_projection() * top;
    assert!((clip.y / clip.w - 1.0).abs() < 1e-4);
}

#[test]
fn frustum_bounds_do_not_affect_projection() {
    let mut cam = PerspectiveCamera::for_effect(1.25);
    let before = cam.projection_matrix();
    cam.left = -9.0;
    cam.right = 9.0;
    assert_eq!(before, cam.projection_matrix());
}
