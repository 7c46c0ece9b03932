use super::constants::MAX_PIXEL_RATIO;
use glam::Vec3;

/// Window inner size in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Width over height, the camera aspect.
    #[inline]
    pub fn aspect(&self) -> f32 {
        self.width / self.height.max(1.0)
    }

    /// Height over width, compared against the image aspect ratio.
    #[inline]
    pub fn inverse_aspect(&self) -> f32 {
        self.height / self.width.max(1.0)
    }
}

/// Native size of the color image. All zero until it has loaded.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ImageDetails {
    pub width: u32,
    pub height: u32,
    /// height / width
    pub aspect_ratio: f32,
}

impl ImageDetails {
    pub fn from_size(width: u32, height: u32) -> Self {
        let aspect_ratio = if width == 0 {
            0.0
        } else {
            height as f32 / width as f32
        };
        Self {
            width,
            height,
            aspect_ratio,
        }
    }

    #[inline]
    pub fn is_known(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CoverBranch {
    /// Viewport is relatively wider than the image (`h / w < image aspect`).
    Wide,
    /// Viewport is relatively taller than (or as tall as) the image.
    Tall,
}

pub fn cover_branch(viewport: Viewport, image: ImageDetails) -> CoverBranch {
    if viewport.inverse_aspect() < image.aspect_ratio {
        CoverBranch::Wide
    } else {
        CoverBranch::Tall
    }
}

/// Plane scale so the image covers the viewport without letterboxing.
///
/// With an unknown image (aspect 0) the tall branch divides by zero and the
/// x scale is infinite; callers skip drawing until it is finite.
pub fn cover_scale(viewport: Viewport, image: ImageDetails, fov_y: f32, camera_aspect: f32) -> Vec3 {
    let ar = image.aspect_ratio;
    match cover_branch(viewport, image) {
        CoverBranch::Wide => Vec3::new(fov_y * camera_aspect, viewport.aspect() * ar, 1.0),
        CoverBranch::Tall => Vec3::new(fov_y / ar, fov_y, 1.0),
    }
}

#[inline]
pub fn effective_pixel_ratio(device_pixel_ratio: f64) -> f64 {
    if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
        device_pixel_ratio.min(MAX_PIXEL_RATIO)
    } else {
        1.0
    }
}

/// Backing-store size in physical pixels for a CSS-sized viewport.
pub fn backing_size(viewport: Viewport, pixel_ratio: f64) -> (u32, u32) {
    let w = (viewport.width as f64 * pixel_ratio).floor() as u32;
    let h = (viewport.height as f64 * pixel_ratio).floor() as u32;
    (w.max(1), h.max(1))
}
