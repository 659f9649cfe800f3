//! Render pipeline and uniform plumbing for the tilemap shader.
//!
//! One [`TilemapPipeline`] serves any number of [`Tilemap`](crate::Tilemap)
//! instances. Group 0 carries the caller's world transform, group 1 the
//! per-tilemap frame state (atlas texture, sampler, scroll/animation
//! params), so several tilemaps can share one pass with one transform.

use bytemuck::{Pod, Zeroable};
use tessera_core::Point;

// ---------------------------------------------------------------------------
// GPU types (must match tilemap.wgsl)
// ---------------------------------------------------------------------------

/// One corner of a composed quad.
#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
pub(crate) struct Vertex {
    pub position: [f32; 4],
    pub texcoord: [f32; 2], // atlas texels, normalized in the shader
    pub color: [f32; 4],
}

/// Per-frame tilemap uniform.
#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
pub(crate) struct FrameParams {
    /// Render offset in pixels, then the reciprocal atlas extent.
    pub offset_and_tex_size: [f32; 4],
    /// Animation offset in pixels, then the tile size twice.
    pub animation_and_tile_size: [f32; 4],
}

/// World transform uniform: an orthographic projection followed by a model
/// matrix, both column-major as WGSL consumes them.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub struct WorldTransform {
    pub projection: [f32; 16],
    pub model: [f32; 16],
}

impl WorldTransform {
    const IDENTITY: [f32; 16] = [
        1.0, 0.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    ];

    /// Projects pixel coordinates with the origin at the top-left of a
    /// `view_size` target onto clip space, y pointing down. The model
    /// matrix starts as identity.
    pub fn ortho(view_size: Point) -> Self {
        let w = view_size.x.max(1) as f32;
        let h = view_size.y.max(1) as f32;

        let mut projection = [0.0f32; 16];
        projection[0] = 2.0 / w;
        projection[5] = -2.0 / h;
        projection[10] = 1.0;
        projection[12] = -1.0;
        projection[13] = 1.0;
        projection[15] = 1.0;

        Self {
            projection,
            model: Self::IDENTITY,
        }
    }
}

// ---------------------------------------------------------------------------
// TilemapPipeline
// ---------------------------------------------------------------------------

/// Shader module, bind-group layouts and the alpha-blended render pipeline.
pub struct TilemapPipeline {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) world_layout: wgpu::BindGroupLayout,
    pub(crate) frame_layout: wgpu::BindGroupLayout,
    pub(crate) sampler: wgpu::Sampler,
}

impl TilemapPipeline {
    /// Builds the pipeline for the given render target format.
    pub fn new(device: &wgpu::Device, target_format: wgpu::TextureFormat) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("tilemap shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("tilemap.wgsl").into()),
        });

        let world_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("world bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let frame_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("frame bgl"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 2,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
            ],
        });

        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("atlas sampler"),
            mag_filter: wgpu::FilterMode::Nearest,
            min_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("tilemap pipeline layout"),
            bind_group_layouts: &[&world_layout, &frame_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("tilemap pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<Vertex>() as u64,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &[
                        // position
                        wgpu::VertexAttribute {
                            format: wgpu::VertexFormat::Float32x4,
                            offset: 0,
                            shader_location: 0,
                        },
                        // texcoord
                        wgpu::VertexAttribute {
                            format: wgpu::VertexFormat::Float32x2,
                            offset: 16,
                            shader_location: 1,
                        },
                        // color
                        wgpu::VertexAttribute {
                            format: wgpu::VertexFormat::Float32x4,
                            offset: 24,
                            shader_location: 2,
                        },
                    ],
                }],
                compilation_options: Default::default(),
            },
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: target_format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            multiview: None,
            cache: None,
        });

        Self {
            pipeline,
            world_layout,
            frame_layout,
            sampler,
        }
    }

    /// Creates a world-transform binding the caller owns and passes into
    /// the render calls.
    pub fn create_world_binding(
        &self,
        device: &wgpu::Device,
        transform: &WorldTransform,
    ) -> WorldBinding {
        use wgpu::util::DeviceExt;

        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("world uniform"),
            contents: bytemuck::bytes_of(transform),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("world bg"),
            layout: &self.world_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: buffer.as_entire_binding(),
            }],
        });

        WorldBinding { buffer, bind_group }
    }

    pub(crate) fn create_frame_bind_group(
        &self,
        device: &wgpu::Device,
        params_buffer: &wgpu::Buffer,
        atlas_view: &wgpu::TextureView,
    ) -> wgpu::BindGroup {
        device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("frame bg"),
            layout: &self.frame_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(atlas_view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&self.sampler),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: params_buffer.as_entire_binding(),
                },
            ],
        })
    }
}

// ---------------------------------------------------------------------------
// WorldBinding
// ---------------------------------------------------------------------------

/// Uniform buffer plus bind group for one [`WorldTransform`].
pub struct WorldBinding {
    buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

impl WorldBinding {
    /// Replaces the transform.
    pub fn write(&self, queue: &wgpu::Queue, transform: &WorldTransform) {
        queue.write_buffer(&self.buffer, 0, bytemuck::bytes_of(transform));
    }

    #[inline]
    pub(crate) fn bind_group(&self) -> &wgpu::BindGroup {
        &self.bind_group
    }
}
