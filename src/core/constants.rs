// Effect tuning constants shared by the state machine, the renderer and tests.

// Parallax displacement divisor per axis (larger = subtler shift)
pub const X_THRESHOLD: f32 = 20.0;
pub const Y_THRESHOLD: f32 = 35.0;

// Default asset locations, relative to the page origin
pub const COLOR_IMAGE_PATH: &str = "/office.png";
pub const DEPTH_IMAGE_PATH: &str = "/office-depth-map.png";

// Camera
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 100.0;
pub const CAMERA_Z: f32 = 0.7; // distance from the image plane
pub const FILM_GAUGE_MM: f32 = 35.0; // sensor size used for film height / focal length

// Renderer
pub const MAX_PIXEL_RATIO: f64 = 1.5; // ceiling on devicePixelRatio for the backing store

// Pointer smoothing
pub const PARALLAX_GAIN: f32 = 0.5; // cursor offset -> target parallax offset
pub const LERP_RATE_PER_SEC: f32 = 5.0;

// Placeholder texels bound until the real images arrive
pub const PLACEHOLDER_COLOR_RGBA: [u8; 4] = [0, 0, 0, 255];
pub const PLACEHOLDER_DEPTH_RGBA: [u8; 4] = [128, 128, 128, 255]; // ~0.5 depth, no displacement
