use glam::Vec2;

/// Fold a texture coordinate back into `[0, 1]` by reflecting at every
/// integer boundary (ping-pong), instead of clamping or tiling.
///
/// `mirrored(c) == mirrored(c + 2)` for every finite `c`.
#[inline]
pub fn mirrored(c: f32) -> f32 {
    let m = c.rem_euclid(2.0);
    if m < 1.0 {
        m
    } else {
        2.0 - m
    }
}

/// Per-axis [`mirrored`]; mirrors the `mirrored()` helper in `parallax.wgsl`.
#[inline]
pub fn mirrored_uv(uv: Vec2) -> Vec2 {
    Vec2::new(mirrored(uv.x), mirrored(uv.y))
}

/// Lookup position for the color texture: the plane UV shifted by the centred
/// depth sample scaled by `mouse / threshold`. Not yet wrapped.
#[inline]
pub fn displaced_uv(uv: Vec2, depth: f32, mouse: Vec2, threshold: Vec2) -> Vec2 {
    uv + (depth - 0.5) * mouse / threshold
}

/// CPU reference of the whole fragment stage: sample depth at the mirrored UV,
/// displace, and return the mirrored color lookup position.
pub fn parallax_lookup(
    uv: Vec2,
    mouse: Vec2,
    threshold: Vec2,
    depth_at: impl Fn(Vec2) -> f32,
) -> Vec2 {
    let depth = depth_at(mirrored_uv(uv));
    mirrored_uv(displaced_uv(uv, depth, mouse, threshold))
}
