use crate::grid::CubeGrid;
use crate::shaders;
use bytemuck::{Pod, Zeroable};
use cubefield_camera::FlyCamera;
use wgpu::util::DeviceExt;

/// Byte distance between per-cube uniform entries. Matches the default
/// `min_uniform_buffer_offset_alignment` limit, so dynamic offsets are
/// valid on every adapter.
pub const CUBE_UNIFORM_STRIDE: u64 = 256;

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct Globals {
    proj: [[f32; 4]; 4],
    view: [[f32; 4]; 4],
    tint: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct CubeUniform {
    offset: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct Vertex {
    position: [f32; 3],
    normal: [f32; 3],
}

/// Generate unit cube vertices and indices; the cube spans 0..1 so its
/// origin corner lands exactly on a lattice coordinate.
fn cube_mesh() -> (Vec<Vertex>, Vec<u16>) {
    let (lo, hi) = (0.0_f32, 1.0_f32);
    #[rustfmt::skip]
    let vertices = vec![
        // +Z face
        Vertex { position: [lo, lo, hi], normal: [0.0, 0.0, 1.0] },
        Vertex { position: [hi, lo, hi], normal: [0.0, 0.0, 1.0] },
        Vertex { position: [hi, hi, hi], normal: [0.0, 0.0, 1.0] },
        Vertex { position: [lo, hi, hi], normal: [0.0, 0.0, 1.0] },
        // -Z face
        Vertex { position: [hi, lo, lo], normal: [0.0, 0.0, -1.0] },
        Vertex { position: [lo, lo, lo], normal: [0.0, 0.0, -1.0] },
        Vertex { position: [lo, hi, lo], normal: [0.0, 0.0, -1.0] },
        Vertex { position: [hi, hi, lo], normal: [0.0, 0.0, -1.0] },
        // +X face
        Vertex { position: [hi, lo, hi], normal: [1.0, 0.0, 0.0] },
        Vertex { position: [hi, lo, lo], normal: [1.0, 0.0, 0.0] },
        Vertex { position: [hi, hi, lo], normal: [1.0, 0.0, 0.0] },
        Vertex { position: [hi, hi, hi], normal: [1.0, 0.0, 0.0] },
        // -X face
        Vertex { position: [lo, lo, lo], normal: [-1.0, 0.0, 0.0] },
        Vertex { position: [lo, lo, hi], normal: [-1.0, 0.0, 0.0] },
        Vertex { position: [lo, hi, hi], normal: [-1.0, 0.0, 0.0] },
        Vertex { position: [lo, hi, lo], normal: [-1.0, 0.0, 0.0] },
        // +Y face
        Vertex { position: [lo, hi, hi], normal: [0.0, 1.0, 0.0] },
        Vertex { position: [hi, hi, hi], normal: [0.0, 1.0, 0.0] },
        Vertex { position: [hi, hi, lo], normal: [0.0, 1.0, 0.0] },
        Vertex { position: [lo, hi, lo], normal: [0.0, 1.0, 0.0] },
        // -Y face
        Vertex { position: [lo, lo, lo], normal: [0.0, -1.0, 0.0] },
        Vertex { position: [hi, lo, lo], normal: [0.0, -1.0, 0.0] },
        Vertex { position: [hi, lo, hi], normal: [0.0, -1.0, 0.0] },
        Vertex { position: [lo, lo, hi], normal: [0.0, -1.0, 0.0] },
    ];
    #[rustfmt::skip]
    let indices: Vec<u16> = vec![
        0,1,2, 2,3,0,       // +Z
        4,5,6, 6,7,4,       // -Z
        8,9,10, 10,11,8,    // +X
        12,13,14, 14,15,12, // -X
        16,17,18, 18,19,16, // +Y
        20,21,22, 22,23,20, // -Y
    ];
    (vertices, indices)
}

/// wgpu-based cube-field renderer.
///
/// One pipeline, one shared cube mesh, one uniform buffer holding all cube
/// offsets at [`CUBE_UNIFORM_STRIDE`] spacing. The offsets are written once
/// at construction; per frame only the globals change.
pub struct CubeRenderer {
    pipeline: wgpu::RenderPipeline,
    globals_buffer: wgpu::Buffer,
    globals_bind_group: wgpu::BindGroup,
    cube_bind_group: wgpu::BindGroup,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    cube_count: u32,
    depth_texture: wgpu::TextureView,
    surface_format: wgpu::TextureFormat,
}

impl CubeRenderer {
    pub fn new(
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        grid: CubeGrid,
        width: u32,
        height: u32,
    ) -> Self {
        // Frame globals
        let globals_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("globals_buffer"),
            contents: bytemuck::bytes_of(&Globals {
                proj: glam::Mat4::IDENTITY.to_cols_array_2d(),
                view: glam::Mat4::IDENTITY.to_cols_array_2d(),
                tint: [1.0; 4],
            }),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let globals_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("globals_bind_group_layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let globals_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("globals_bind_group"),
            layout: &globals_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: globals_buffer.as_entire_binding(),
            }],
        });

        // Per-cube position uniforms, one aligned slot per cube, written once.
        let offsets = grid.offsets();
        let cube_count = grid.cube_count();
        let mut cube_uniforms = vec![0u8; cube_count as usize * CUBE_UNIFORM_STRIDE as usize];
        for (slot, offset) in cube_uniforms
            .chunks_exact_mut(CUBE_UNIFORM_STRIDE as usize)
            .zip(&offsets)
        {
            let entry = CubeUniform {
                offset: [offset.x, offset.y, offset.z, 0.0],
            };
            slot[..std::mem::size_of::<CubeUniform>()]
                .copy_from_slice(bytemuck::bytes_of(&entry));
        }
        let cube_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("cube_uniform_buffer"),
            contents: &cube_uniforms,
            usage: wgpu::BufferUsages::UNIFORM,
        });

        let cube_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("cube_bind_group_layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: true,
                    min_binding_size: wgpu::BufferSize::new(
                        std::mem::size_of::<CubeUniform>() as u64
                    ),
                },
                count: None,
            }],
        });

        let cube_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("cube_bind_group"),
            layout: &cube_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                    buffer: &cube_buffer,
                    offset: 0,
                    size: wgpu::BufferSize::new(std::mem::size_of::<CubeUniform>() as u64),
                }),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pipeline_layout"),
            bind_group_layouts: &[&globals_layout, &cube_layout],
            push_constant_ranges: &[],
        });

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("cube_shader"),
            source: wgpu::ShaderSource::Wgsl(shaders::CUBE_SHADER.into()),
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("cube_pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<Vertex>() as u64,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &wgpu::vertex_attr_array![
                        0 => Float32x3,
                        1 => Float32x3,
                    ],
                }],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                cull_mode: Some(wgpu::Face::Back),
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: wgpu::TextureFormat::Depth32Float,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: Default::default(),
                bias: Default::default(),
            }),
            multisample: Default::default(),
            multiview: None,
            cache: None,
        });

        let (cube_verts, cube_indices) = cube_mesh();
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("cube_vertex_buffer"),
            contents: bytemuck::cast_slice(&cube_verts),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("cube_index_buffer"),
            contents: bytemuck::cast_slice(&cube_indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        let index_count = cube_indices.len() as u32;

        let depth_texture = Self::create_depth_texture(device, width, height);

        tracing::debug!(cubes = cube_count, "cube renderer ready");

        Self {
            pipeline,
            globals_buffer,
            globals_bind_group,
            cube_bind_group,
            vertex_buffer,
            index_buffer,
            index_count,
            cube_count,
            depth_texture,
            surface_format,
        }
    }

    pub fn resize(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        self.depth_texture = Self::create_depth_texture(device, width, height);
    }

    pub fn surface_format(&self) -> wgpu::TextureFormat {
        self.surface_format
    }

    pub fn cube_count(&self) -> u32 {
        self.cube_count
    }

    /// Render one frame: clear color and depth, upload the frame globals
    /// once, then issue one indexed draw per cube at its dynamic offset.
    pub fn render(
        &self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        view: &wgpu::TextureView,
        camera: &FlyCamera,
        tint: [f32; 4],
    ) {
        queue.write_buffer(
            &self.globals_buffer,
            0,
            bytemuck::bytes_of(&Globals {
                proj: camera.projection_matrix().to_cols_array_2d(),
                view: camera.view_matrix().to_cols_array_2d(),
                tint,
            }),
        );

        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("render_encoder"),
        });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("cube_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: 0.05,
                            g: 0.06,
                            b: 0.1,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_texture,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                ..Default::default()
            });

            pass.set_pipeline(&self.pipeline);
            pass.set_bind_group(0, &self.globals_bind_group, &[]);
            pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
            pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint16);

            for cube in 0..self.cube_count {
                let offset = (cube as u64 * CUBE_UNIFORM_STRIDE) as wgpu::DynamicOffset;
                pass.set_bind_group(1, &self.cube_bind_group, &[offset]);
                pass.draw_indexed(0..self.index_count, 0, 0..1);
            }
        }

        queue.submit(std::iter::once(encoder.finish()));
    }

    fn create_depth_texture(
        device: &wgpu::Device,
        width: u32,
        height: u32,
    ) -> wgpu::TextureView {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("depth_texture"),
            size: wgpu::Extent3d {
                width: width.max(1),
                height: height.max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Depth32Float,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        texture.create_view(&Default::default())
    }
}
