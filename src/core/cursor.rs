use super::constants::{LERP_RATE_PER_SEC, PARALLAX_GAIN};
use glam::Vec2;

/// Pointer position relative to the viewport centre plus its smoothed follower.
///
/// `x`/`y` lie roughly in `[-0.5, 0.5]`; `lerp_x`/`lerp_y` chase the parallax
/// target derived from them once per frame.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct Cursor {
    pub x: f32,
    pub y: f32,
    pub lerp_x: f32,
    pub lerp_y: f32,
}

impl Cursor {
    /// Record a pointer position given in the same units as the viewport size.
    pub fn point_at(&mut self, px: f32, py: f32, viewport_w: f32, viewport_h: f32) {
        if viewport_w <= 0.0 || viewport_h <= 0.0 {
            return;
        }
        self.x = px / viewport_w - 0.5;
        self.y = py / viewport_h - 0.5;
    }

    /// Pointer left the window or the touch ended. Smoothing continues.
    pub fn reset(&mut self) {
        self.x = 0.0;
        self.y = 0.0;
    }

    /// Target offset; Y is inverted so moving up tilts the scene up.
    #[inline]
    pub fn parallax_target(&self) -> Vec2 {
        Vec2::new(self.x * PARALLAX_GAIN, -self.y * PARALLAX_GAIN)
    }

    /// Advance the first-order smoothing by `dt_sec` and return the new offset.
    pub fn step(&mut self, dt_sec: f32) -> Vec2 {
        let target = self.parallax_target();
        let k = LERP_RATE_PER_SEC * dt_sec.max(0.0);
        self.lerp_x += (target.x - self.lerp_x) * k;
        self.lerp_y += (target.y - self.lerp_y) * k;
        self.offset()
    }

    #[inline]
    pub fn offset(&self) -> Vec2 {
        Vec2::new(self.lerp_x, self.lerp_y)
    }
}
