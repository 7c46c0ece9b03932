use super::constants::{CAMERA_FAR, CAMERA_FOV_DEG, CAMERA_NEAR, CAMERA_Z, FILM_GAUGE_MM};
use glam::{Mat4, Vec3};

/// Right-handed perspective camera looking down -Z at the image plane.
///
/// `left`/`right` are carried for parity with the frustum bounds the effect
/// sets on resize; the perspective projection never reads them.
#[derive(Clone, Debug)]
pub struct PerspectiveCamera {
    pub fov_deg: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub position: Vec3,
    pub left: f32,
    pub right: f32,
    pub film_gauge: f32,
}

impl PerspectiveCamera {
    pub fn new(fov_deg: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            fov_deg,
            aspect,
            near,
            far,
            position: Vec3::ZERO,
            left: -1.0,
            right: 1.0,
            film_gauge: FILM_GAUGE_MM,
        }
    }

    /// The effect's camera: 75° fov, 0.1..100 clip range, placed at `CAMERA_Z`.
    pub fn for_effect(aspect: f32) -> Self {
        let mut camera = Self::new(CAMERA_FOV_DEG, aspect, CAMERA_NEAR, CAMERA_FAR);
        camera.position = Vec3::new(0.0, 0.0, CAMERA_Z);
        camera
    }

    /// Height of the virtual sensor; the gauge applies to the larger side.
    pub fn film_height(&self) -> f32 {
        self.film_gauge / self.aspect.max(1.0)
    }

    pub fn focal_length(&self) -> f32 {
        let v_extent = (0.5 * self.fov_deg.to_radians()).tan();
        0.5 * self.film_height() / v_extent
    }

    /// World-space height visible at the origin plane from the current position.
    pub fn fov_y(&self) -> f32 {
        self.position.z * self.film_height() / self.focal_length()
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_deg.to_radians(), self.aspect, self.near, self.far)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_translation(-self.position)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}
