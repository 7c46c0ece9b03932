pub mod camera;
pub mod clock;
pub mod constants;
pub mod cursor;
pub mod layout;
pub mod lifecycle;
pub mod scene;
pub mod state;
pub mod texture_data;
pub mod wrap;

pub use camera::*;
pub use clock::*;
pub use constants::*;
pub use cursor::*;
pub use layout::*;
pub use lifecycle::*;
pub use scene::*;
pub use state::*;
pub use texture_data::*;
pub use wrap::*;

// Shaders bundled as string constants
pub static PARALLAX_WGSL: &str = include_str!("../../shaders/parallax.wgsl");
