//! Shadow-map resources, the depth-only pipeline, and light-space math.
//!
//! The light gets a camera of its own: a look-at view from the light position
//! toward its target, combined with either an orthographic volume
//! (directional light) or a perspective frustum (spot light). The main pass
//! re-projects world positions into that camera's clip space via the texture
//! matrix to compare depths against the shadow map.

use cgmath::{EuclideanSpace, InnerSpace, SquareMatrix};
use wgpu::util::DeviceExt;

use crate::{
    camera::OPENGL_TO_WGPU_MATRIX,
    data_structures::{
        instance::InstanceRaw,
        model::{ModelVertex, Vertex},
        texture::Texture,
    },
    settings::ShadowSettings,
};

/// Edge length of the square shadow map, in texels.
pub const SHADOW_MAP_SIZE: u32 = 512;
/// Near plane of the light's projection.
pub const LIGHT_NEAR: f32 = 0.5;
/// Far plane of the light's projection.
pub const LIGHT_FAR: f32 = 10.0;

/// The light's view matrix (world-to-light).
pub fn light_view_matrix(settings: &ShadowSettings) -> cgmath::Matrix4<f32> {
    cgmath::Matrix4::look_at_rh(
        settings.light_pos,
        settings.light_target,
        cgmath::Vector3::unit_y(),
    )
}

/// The light's world matrix (light-to-world), built from the look-at basis
/// instead of inverting the view matrix.
pub fn light_world_matrix(settings: &ShadowSettings) -> cgmath::Matrix4<f32> {
    let z = reverse_light_direction(settings);
    let x = cgmath::Vector3::unit_y().cross(z).normalize();
    let y = z.cross(x);
    cgmath::Matrix4::from_cols(
        x.extend(0.0),
        y.extend(0.0),
        z.extend(0.0),
        settings.light_pos.to_homogeneous(),
    )
}

/// Unit vector from the light target toward the light position. Surfaces
/// facing this direction receive full diffuse light.
pub fn reverse_light_direction(settings: &ShadowSettings) -> cgmath::Vector3<f32> {
    (settings.light_pos - settings.light_target).normalize()
}

/// The light's projection: orthographic by default, perspective when the
/// spot-light toggle is on. Depth is mapped to wgpu's 0..1 clip range.
pub fn light_projection_matrix(settings: &ShadowSettings) -> cgmath::Matrix4<f32> {
    let projection = if settings.perspective {
        cgmath::perspective(
            cgmath::Deg(settings.fov_deg),
            settings.proj_width / settings.proj_height,
            LIGHT_NEAR,
            LIGHT_FAR,
        )
    } else {
        cgmath::ortho(
            -settings.proj_width / 2.0,
            settings.proj_width / 2.0,
            -settings.proj_height / 2.0,
            settings.proj_height / 2.0,
            LIGHT_NEAR,
            LIGHT_FAR,
        )
    };
    OPENGL_TO_WGPU_MATRIX * projection
}

/// View-projection used to render the shadow pass.
pub fn light_view_proj(settings: &ShadowSettings) -> cgmath::Matrix4<f32> {
    light_projection_matrix(settings) * light_view_matrix(settings)
}

/// World space to shadow-map space: clip x/y are remapped to texture uv
/// (v pointing down), clip z is already the 0..1 reference depth.
pub fn texture_matrix(settings: &ShadowSettings) -> cgmath::Matrix4<f32> {
    cgmath::Matrix4::from_translation(cgmath::Vector3::new(0.5, 0.5, 0.0))
        * cgmath::Matrix4::from_nonuniform_scale(0.5, -0.5, 1.0)
        * light_view_proj(settings)
}

/// Places the unit clip cube (x/y in -1..1, z in 0..1) over the light's
/// frustum in world space, for the wireframe overlay.
pub fn frustum_world_matrix(settings: &ShadowSettings) -> cgmath::Matrix4<f32> {
    let inverse_projection = light_projection_matrix(settings)
        .invert()
        .unwrap_or_else(cgmath::Matrix4::identity);
    light_world_matrix(settings) * inverse_projection
}

/// The light's camera as seen by the depth-only shadow pass.
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightCameraUniform {
    view_proj: [[f32; 4]; 4],
}

impl LightCameraUniform {
    pub fn new(settings: &ShadowSettings) -> Self {
        Self {
            view_proj: light_view_proj(settings).into(),
        }
    }
}

/// Shadow sampling parameters for the main pass.
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ShadowUniform {
    texture_matrix: [[f32; 4]; 4],
    bias: f32,
    pcf_radius: i32,
    texel_size: f32,
    _padding: u32,
}

impl ShadowUniform {
    pub fn new(settings: &ShadowSettings) -> Self {
        Self {
            texture_matrix: texture_matrix(settings).into(),
            bias: settings.bias,
            pcf_radius: settings.pcf_radius as i32,
            texel_size: 1.0 / SHADOW_MAP_SIZE as f32,
            _padding: 0,
        }
    }
}

/// Everything the two passes need for shadowing: the map itself, the light's
/// camera (shadow pass), the sampling uniform + bind group (main pass), and
/// the depth-only pipeline.
#[derive(Debug)]
pub struct ShadowResources {
    pub map: Texture,
    pub light_uniform: LightCameraUniform,
    pub light_buffer: wgpu::Buffer,
    pub light_bind_group: wgpu::BindGroup,
    pub light_bind_group_layout: wgpu::BindGroupLayout,
    pub uniform: ShadowUniform,
    pub buffer: wgpu::Buffer,
    pub bind_group: wgpu::BindGroup,
    pub bind_group_layout: wgpu::BindGroupLayout,
    pub pipeline: wgpu::RenderPipeline,
}

impl ShadowResources {
    pub fn new(device: &wgpu::Device, settings: &ShadowSettings) -> Self {
        let map = Texture::create_shadow_map(device, SHADOW_MAP_SIZE, "shadow_map");

        let light_uniform = LightCameraUniform::new(settings);
        let light_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Light Camera Buffer"),
            contents: bytemuck::cast_slice(&[light_uniform]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let light_bind_group_layout = mk_light_camera_bind_group_layout(device);
        let light_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &light_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: light_buffer.as_entire_binding(),
            }],
            label: Some("light_camera_bind_group"),
        });

        let uniform = ShadowUniform::new(settings);
        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Shadow Buffer"),
            contents: bytemuck::cast_slice(&[uniform]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let bind_group_layout = mk_shadow_bind_group_layout(device);
        let sampler = map
            .sampler
            .as_ref()
            .expect("shadow maps are created with a comparison sampler");
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(&map.view),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::Sampler(sampler),
                },
            ],
            label: Some("shadow_bind_group"),
        });

        let pipeline = mk_shadow_pipeline(device, &light_bind_group_layout);

        Self {
            map,
            light_uniform,
            light_buffer,
            light_bind_group,
            light_bind_group_layout,
            uniform,
            buffer,
            bind_group,
            bind_group_layout,
            pipeline,
        }
    }

    /// Rebuild both uniforms from the settings and push them to the GPU.
    pub fn update(&mut self, queue: &wgpu::Queue, settings: &ShadowSettings) {
        self.light_uniform = LightCameraUniform::new(settings);
        queue.write_buffer(
            &self.light_buffer,
            0,
            bytemuck::cast_slice(&[self.light_uniform]),
        );
        self.uniform = ShadowUniform::new(settings);
        queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(&[self.uniform]));
    }
}

pub fn mk_light_camera_bind_group_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
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
        label: Some("light_camera_bind_group_layout"),
    })
}

pub fn mk_shadow_bind_group_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        entries: &[
            // The texture matrix is applied in the vertex stage, the
            // filtering parameters in the fragment stage.
            wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: 1,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Texture {
                    sample_type: wgpu::TextureSampleType::Depth,
                    view_dimension: wgpu::TextureViewDimension::D2,
                    multisampled: false,
                },
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: 2,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Comparison),
                count: None,
            },
        ],
        label: Some("shadow_bind_group_layout"),
    })
}

/// Depth-only pipeline: no fragment stage, depth written straight into the
/// shadow map.
pub fn mk_shadow_pipeline(
    device: &wgpu::Device,
    light_camera_bind_group_layout: &wgpu::BindGroupLayout,
) -> wgpu::RenderPipeline {
    let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("Shadow Pipeline Layout"),
        bind_group_layouts: &[light_camera_bind_group_layout],
        push_constant_ranges: &[],
    });
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("Shadow Shader"),
        source: wgpu::ShaderSource::Wgsl(include_str!("shadow.wgsl").into()),
    });

    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        cache: None,
        label: Some("Shadow Pipeline"),
        layout: Some(&layout),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            buffers: &[ModelVertex::desc(), InstanceRaw::desc()],
            compilation_options: Default::default(),
        },
        fragment: None,
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: Some(wgpu::Face::Back),
            polygon_mode: wgpu::PolygonMode::Fill,
            unclipped_depth: false,
            conservative: false,
        },
        depth_stencil: Some(wgpu::DepthStencilState {
            format: Texture::DEPTH_FORMAT,
            depth_write_enabled: true,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState {
            count: 1,
            mask: !0,
            alpha_to_coverage_enabled: false,
        },
        multiview: None,
    })
}
