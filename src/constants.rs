// Host page contract for the browser front-end.

// Canvas the effect mounts on automatically at start-up
pub const CANVAS_SELECTOR: &str = "canvas.webgl";

// Optional per-canvas asset overrides (`data-color-src`, `data-depth-src`)
pub const COLOR_SRC_DATA_KEY: &str = "colorSrc";
pub const DEPTH_SRC_DATA_KEY: &str = "depthSrc";

// Cleared behind the plane (visible before the first draw and while the
// plane scale is not yet finite)
pub const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};
