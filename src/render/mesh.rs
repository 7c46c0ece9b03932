use crate::core::Dispose;
use glam::{Mat4, Vec2};
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct PlaneVertex {
    position: [f32; 3],
    uv: [f32; 2],
}

impl PlaneVertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x2];

    pub(crate) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<PlaneVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

// Unit plane centred on the origin, UV (0,0) at the bottom-left corner
const PLANE_VERTICES: [PlaneVertex; 4] = [
    PlaneVertex {
        position: [-0.5, -0.5, 0.0],
        uv: [0.0, 0.0],
    },
    PlaneVertex {
        position: [0.5, -0.5, 0.0],
        uv: [1.0, 0.0],
    },
    PlaneVertex {
        position: [0.5, 0.5, 0.0],
        uv: [1.0, 1.0],
    },
    PlaneVertex {
        position: [-0.5, 0.5, 0.0],
        uv: [0.0, 1.0],
    },
];
const PLANE_INDICES: [u16; 6] = [0, 1, 2, 0, 2, 3];

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct ParallaxUniforms {
    pub(crate) mvp: [[f32; 4]; 4],
    pub(crate) mouse: [f32; 2],
    pub(crate) threshold: [f32; 2],
}

pub(crate) fn create_bind_group_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    let texture_entry = |binding| wgpu::BindGroupLayoutEntry {
        binding,
        visibility: wgpu::ShaderStages::FRAGMENT,
        ty: wgpu::BindingType::Texture {
            multisampled: false,
            view_dimension: wgpu::TextureViewDimension::D2,
            sample_type: wgpu::TextureSampleType::Float { filterable: true },
        },
        count: None,
    };
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("parallax_bgl"),
        entries: &[
            wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            },
            texture_entry(1),
            texture_entry(2),
            wgpu::BindGroupLayoutEntry {
                binding: 3,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                count: None,
            },
        ],
    })
}

/// Textures and sampler a material binds besides its own uniform buffer.
pub(crate) struct MaterialInputs<'a> {
    pub(crate) layout: &'a wgpu::BindGroupLayout,
    pub(crate) color_view: &'a wgpu::TextureView,
    pub(crate) depth_view: &'a wgpu::TextureView,
    pub(crate) sampler: &'a wgpu::Sampler,
}

/// Plane geometry plus its parallax material.
pub(crate) struct PlaneMesh {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    threshold: Vec2,
}

impl PlaneMesh {
    pub(crate) fn new(device: &wgpu::Device, inputs: &MaterialInputs<'_>, threshold: Vec2) -> Self {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("plane_vb"),
            contents: bytemuck::cast_slice(&PLANE_VERTICES),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("plane_ib"),
            contents: bytemuck::cast_slice(&PLANE_INDICES),
            usage: wgpu::BufferUsages::INDEX,
        });
        let initial = ParallaxUniforms {
            mvp: Mat4::IDENTITY.to_cols_array_2d(),
            mouse: [0.0, 0.0],
            threshold: threshold.to_array(),
        };
        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("parallax_uniforms"),
            contents: bytemuck::bytes_of(&initial),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let bind_group = create_bind_group(device, inputs, &uniform_buffer);
        Self {
            vertex_buffer,
            index_buffer,
            uniform_buffer,
            bind_group,
            threshold,
        }
    }

    /// Point the material at new texture views (after a texture was replaced).
    pub(crate) fn rebind(&mut self, device: &wgpu::Device, inputs: &MaterialInputs<'_>) {
        self.bind_group = create_bind_group(device, inputs, &self.uniform_buffer);
    }

    pub(crate) fn write_uniforms(&self, queue: &wgpu::Queue, mvp: Mat4, mouse: Vec2) {
        let u = ParallaxUniforms {
            mvp: mvp.to_cols_array_2d(),
            mouse: mouse.to_array(),
            threshold: self.threshold.to_array(),
        };
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&u));
    }

    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        rpass.set_bind_group(0, &self.bind_group, &[]);
        rpass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        rpass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint16);
        rpass.draw_indexed(0..PLANE_INDICES.len() as u32, 0, 0..1);
    }
}

impl Dispose for PlaneMesh {
    fn dispose(self) {
        self.vertex_buffer.destroy();
        self.index_buffer.destroy();
        self.uniform_buffer.destroy();
    }
}

fn create_bind_group(
    device: &wgpu::Device,
    inputs: &MaterialInputs<'_>,
    uniform_buffer: &wgpu::Buffer,
) -> wgpu::BindGroup {
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("parallax_bg"),
        layout: inputs.layout,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::TextureView(inputs.color_view),
            },
            wgpu::BindGroupEntry {
                binding: 2,
                resource: wgpu::BindingResource::TextureView(inputs.depth_view),
            },
            wgpu::BindGroupEntry {
                binding: 3,
                resource: wgpu::BindingResource::Sampler(inputs.sampler),
            },
        ],
    })
}
