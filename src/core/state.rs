use super::camera::PerspectiveCamera;
use super::constants::{COLOR_IMAGE_PATH, DEPTH_IMAGE_PATH, X_THRESHOLD, Y_THRESHOLD};
use super::cursor::Cursor;
use super::layout::{
    backing_size, cover_branch, cover_scale, effective_pixel_ratio, CoverBranch, ImageDetails,
    Viewport,
};
use super::texture_data::{AssetError, AssetKind, DecodedImage};
use glam::{Mat4, Vec2, Vec3};

/// Immutable effect configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub threshold: Vec2,
    pub color_image_path: String,
    pub depth_image_path: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            threshold: Vec2::new(X_THRESHOLD, Y_THRESHOLD),
            color_image_path: COLOR_IMAGE_PATH.to_string(),
            depth_image_path: DEPTH_IMAGE_PATH.to_string(),
        }
    }
}

impl Settings {
    /// Defaults with optional asset path overrides; blank overrides are ignored.
    pub fn with_paths(color: Option<String>, depth: Option<String>) -> Self {
        let mut settings = Self::default();
        if let Some(p) = color.filter(|p| !p.trim().is_empty()) {
            settings.color_image_path = p;
        }
        if let Some(p) = depth.filter(|p| !p.trim().is_empty()) {
            settings.depth_image_path = p;
        }
        settings
    }

    pub fn path_for(&self, kind: AssetKind) -> &str {
        match kind {
            AssetKind::Color => &self.color_image_path,
            AssetKind::Depth => &self.depth_image_path,
        }
    }
}

/// Host input, posted by listeners and applied at the start of a frame.
///
/// `Resize` carries the window size read when the event fired, so moves
/// queued after it normalise against the new viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    PointerMove { x: f32, y: f32 },
    PointerLeave,
    TouchMove { x: f32, y: f32 },
    TouchEnd,
    Resize {
        viewport: Viewport,
        device_pixel_ratio: f64,
    },
}

#[derive(Debug)]
pub enum EffectMessage {
    Input(InputEvent),
    AssetReady { kind: AssetKind, image: DecodedImage },
    AssetFailed { kind: AssetKind, error: AssetError },
}

/// Renderer-side work produced by [`EffectState::apply_messages`], in the
/// order it must be carried out.
#[derive(Debug)]
pub enum EffectAction {
    Upload { kind: AssetKind, image: DecodedImage },
    RebuildMesh,
    Resize(ResizePlan),
    AssetUnavailable { kind: AssetKind, error: AssetError },
}

/// Everything the renderer needs to apply after a resize.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResizePlan {
    pub viewport: Viewport,
    pub pixel_ratio: f64,
    pub backing_width: u32,
    pub backing_height: u32,
    pub branch: CoverBranch,
    pub mesh_scale: Vec3,
}

/// The controller's mutable state, owned by the frame context.
#[derive(Clone, Debug)]
pub struct EffectState {
    pub settings: Settings,
    pub viewport: Viewport,
    pub image: ImageDetails,
    pub cursor: Cursor,
    pub camera: PerspectiveCamera,
    fov_y: f32,
    construction_aspect: f32,
    device_pixel_ratio: f64,
}

impl EffectState {
    pub fn new(viewport: Viewport, settings: Settings) -> Self {
        let construction_aspect = viewport.aspect();
        let camera = PerspectiveCamera::for_effect(construction_aspect);
        let fov_y = camera.fov_y();
        Self {
            settings,
            viewport,
            image: ImageDetails::default(),
            cursor: Cursor::default(),
            camera,
            fov_y,
            construction_aspect,
            device_pixel_ratio: 1.0,
        }
    }

    pub fn fov_y(&self) -> f32 {
        self.fov_y
    }

    pub fn construction_aspect(&self) -> f32 {
        self.construction_aspect
    }

    /// Apply one input event. A resize takes effect immediately and returns
    /// the plan the renderer must apply.
    pub fn apply_input(&mut self, event: InputEvent) -> Option<ResizePlan> {
        let Viewport { width, height } = self.viewport;
        match event {
            InputEvent::PointerMove { x, y } | InputEvent::TouchMove { x, y } => {
                self.cursor.point_at(x, y, width, height);
                None
            }
            InputEvent::PointerLeave | InputEvent::TouchEnd => {
                self.cursor.reset();
                None
            }
            InputEvent::Resize {
                viewport,
                device_pixel_ratio,
            } => Some(self.resize(viewport, device_pixel_ratio)),
        }
    }

    /// Apply a drained batch in arrival order and return the renderer work
    /// it implies.
    ///
    /// A color image records its size, then asks for an upload, a mesh
    /// rebuild and a resize against the current viewport.
    pub fn apply_messages(
        &mut self,
        messages: impl IntoIterator<Item = EffectMessage>,
    ) -> Vec<EffectAction> {
        let mut actions = Vec::new();
        for msg in messages {
            match msg {
                EffectMessage::Input(event) => {
                    if let Some(plan) = self.apply_input(event) {
                        actions.push(EffectAction::Resize(plan));
                    }
                }
                EffectMessage::AssetReady { kind, image } => {
                    let details = image.details();
                    actions.push(EffectAction::Upload { kind, image });
                    if kind == AssetKind::Color {
                        self.record_color_image(details);
                        actions.push(EffectAction::RebuildMesh);
                        let plan = self.resize(self.viewport, self.device_pixel_ratio);
                        actions.push(EffectAction::Resize(plan));
                    }
                }
                EffectMessage::AssetFailed { kind, error } => {
                    actions.push(EffectAction::AssetUnavailable { kind, error });
                }
            }
        }
        actions
    }

    pub fn record_color_image(&mut self, details: ImageDetails) {
        self.image = details;
    }

    /// Recompute camera and mesh sizing for a new viewport.
    ///
    /// The frustum bounds keep the aspect captured at construction; only
    /// `camera.aspect` tracks the viewport.
    pub fn resize(&mut self, viewport: Viewport, device_pixel_ratio: f64) -> ResizePlan {
        self.viewport = viewport;
        self.device_pixel_ratio = device_pixel_ratio;
        self.camera.aspect = viewport.aspect();
        self.camera.left = -self.construction_aspect;
        self.camera.right = self.construction_aspect;

        let pixel_ratio = effective_pixel_ratio(device_pixel_ratio);
        let (backing_width, backing_height) = backing_size(viewport, pixel_ratio);
        ResizePlan {
            viewport,
            pixel_ratio,
            backing_width,
            backing_height,
            branch: cover_branch(viewport, self.image),
            mesh_scale: cover_scale(viewport, self.image, self.fov_y, self.camera.aspect),
        }
    }

    /// Smooth the cursor by `dt_sec` and return the mouse uniform value.
    pub fn tick(&mut self, dt_sec: f32) -> Vec2 {
        self.cursor.step(dt_sec)
    }

    /// Clip-space transform for the plane at `scale`.
    pub fn model_view_projection(&self, scale: Vec3) -> Mat4 {
        self.camera.view_projection() * Mat4::from_scale(scale)
    }
}
