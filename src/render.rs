use crate::constants::CLEAR_COLOR;
use crate::core::{
    AssetKind, DecodedImage, Scene, PARALLAX_WGSL, PLACEHOLDER_COLOR_RGBA, PLACEHOLDER_DEPTH_RGBA,
};
use glam::{Mat4, Vec2, Vec3};
use web_sys as web;

mod helpers;
mod mesh;
mod textures;

use mesh::{MaterialInputs, PlaneMesh, PlaneVertex};
use textures::TextureSlot;

/// WebGPU renderer bound to one canvas: device, surface, the parallax
/// pipeline, both source textures and the scene holding the plane.
pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    pipeline: wgpu::RenderPipeline,
    bind_group_layout: wgpu::BindGroupLayout,
    sampler: wgpu::Sampler,
    color: TextureSlot,
    depth: TextureSlot,
    scene: Scene<PlaneMesh>,
    width: u32,
    height: u32,
}

impl GpuState {
    pub async fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        log::info!("[gpu] surface {}x{} format={:?}", width, height, format);

        // Browsers usually expose only non-sRGB canvas formats; sampling the
        // color image raw then writes the stored sRGB values straight through.
        let color_format = if format.is_srgb() {
            wgpu::TextureFormat::Rgba8UnormSrgb
        } else {
            wgpu::TextureFormat::Rgba8Unorm
        };
        let color = TextureSlot::new(
            &device,
            &queue,
            "color_tex",
            color_format,
            &DecodedImage::solid(PLACEHOLDER_COLOR_RGBA),
        );
        let depth = TextureSlot::new(
            &device,
            &queue,
            "depth_tex",
            wgpu::TextureFormat::Rgba8Unorm,
            &DecodedImage::solid(PLACEHOLDER_DEPTH_RGBA),
        );

        // Out-of-range lookups are folded by the shader's mirrored() already
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("parallax_sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("parallax_shader"),
            source: wgpu::ShaderSource::Wgsl(PARALLAX_WGSL.into()),
        });
        let bind_group_layout = mesh::create_bind_group_layout(&device);
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("parallax_pl"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });
        let pipeline = helpers::make_plane_pipeline(
            &device,
            &pipeline_layout,
            &shader,
            PlaneVertex::layout(),
            format,
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            pipeline,
            bind_group_layout,
            sampler,
            color,
            depth,
            scene: Scene::new(),
            width,
            height,
        })
    }

    /// Drop the current plane (releasing its buffers) and build a new one
    /// bound to the textures as they are right now.
    pub fn rebuild_mesh(&mut self, threshold: Vec2) {
        let device = &self.device;
        let inputs = MaterialInputs {
            layout: &self.bind_group_layout,
            color_view: &self.color.view,
            depth_view: &self.depth.view,
            sampler: &self.sampler,
        };
        self.scene
            .rebuild_mesh(|| PlaneMesh::new(device, &inputs, threshold));
        log::info!(
            "[gpu] plane rebuilt (build #{}, {} mesh in scene)",
            self.scene.builds(),
            self.scene.mesh_count()
        );
    }

    /// Replace the color or depth texture with a decoded image.
    pub fn upload_image(&mut self, kind: AssetKind, image: &DecodedImage) {
        let slot = match kind {
            AssetKind::Color => &mut self.color,
            AssetKind::Depth => &mut self.depth,
        };
        slot.replace(&self.device, &self.queue, image);
        let (w, h) = slot.size();
        log::info!("[gpu] {} texture now {}x{}", kind.label(), w, h);

        // The plane's bind group still references the destroyed view.
        let inputs = MaterialInputs {
            layout: &self.bind_group_layout,
            color_view: &self.color.view,
            depth_view: &self.depth.view,
            sampler: &self.sampler,
        };
        if let Some(mesh) = self.scene.mesh_mut() {
            mesh.rebind(&self.device, &inputs);
        }
    }

    pub fn set_mesh_scale(&mut self, scale: Vec3) {
        self.scene.set_scale(scale);
    }

    pub fn mesh_scale(&self) -> Vec3 {
        self.scene.scale()
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    /// Re-apply the current configuration after a lost/outdated surface.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    pub fn write_uniforms(&self, mvp: Mat4, mouse: Vec2) {
        if let Some(mesh) = self.scene.mesh() {
            mesh.write_uniforms(&self.queue, mvp, mouse);
        }
    }

    pub fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("parallax_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            // Until the color image reports its size the cover scale is infinite.
            if let Some(mesh) = self.scene.mesh() {
                if self.scene.scale().is_finite() {
                    rpass.set_pipeline(&self.pipeline);
                    mesh.draw(&mut rpass);
                }
            }
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }

    /// Release the plane and both textures.
    pub fn destroy(&mut self) {
        self.scene.clear();
        self.color.destroy();
        self.depth.destroy();
    }
}
