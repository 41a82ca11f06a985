use wgpu::util::DeviceExt;

use crate::data_structures::{model, texture::Texture};

/**
 * This module contains the logic for creating models and GPU resources from
 * procedurally generated geometry.
 */
pub mod mesh;

/// Bind group layout shared by all scene materials: diffuse texture, its
/// sampler, and the per-object color multiplier.
pub fn diffuse_color_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        entries: &[
            wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Texture {
                    multisampled: false,
                    view_dimension: wgpu::TextureViewDimension::D2,
                    sample_type: wgpu::TextureSampleType::Float { filterable: true },
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
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            },
        ],
        label: Some("Model texture_bind_group_layout"),
    })
}

fn create_model(
    name: &str,
    vertices: &[model::ModelVertex],
    indices: &[u32],
    color_mult: [f32; 4],
    device: &wgpu::Device,
    queue: &wgpu::Queue,
) -> model::Model {
    let diffuse_texture = Texture::create_checkerboard(device, queue);
    let layout = diffuse_color_layout(device);
    let material = model::Material::new(device, name, diffuse_texture, color_mult, &layout);
    let mesh = mesh::upload(name, vertices, indices, device);

    model::Model {
        meshes: vec![mesh],
        materials: vec![material],
    }
}

/// A checkerboard-textured sphere model.
pub fn create_sphere_model(
    radius: f32,
    sectors: u32,
    stacks: u32,
    color_mult: [f32; 4],
    device: &wgpu::Device,
    queue: &wgpu::Queue,
) -> model::Model {
    let (vertices, indices) = mesh::sphere(radius, sectors, stacks);
    create_model("sphere", &vertices, &indices, color_mult, device, queue)
}

/// A checkerboard-textured cube model.
pub fn create_cube_model(
    size: f32,
    color_mult: [f32; 4],
    device: &wgpu::Device,
    queue: &wgpu::Queue,
) -> model::Model {
    let (vertices, indices) = mesh::cube(size);
    create_model("cube", &vertices, &indices, color_mult, device, queue)
}

/// A checkerboard-textured ground plane model.
pub fn create_plane_model(
    width: f32,
    depth: f32,
    color_mult: [f32; 4],
    device: &wgpu::Device,
    queue: &wgpu::Queue,
) -> model::Model {
    let (vertices, indices) = mesh::plane(width, depth);
    create_model("plane", &vertices, &indices, color_mult, device, queue)
}

/// Vertex and index buffers for the clip-cube line frame, plus the index
/// count. Drawn with the wire pipeline.
pub fn create_frustum_lines(device: &wgpu::Device) -> (wgpu::Buffer, wgpu::Buffer, usize) {
    let (vertices, indices) = mesh::frustum_lines();

    let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("Frustum Vertex Buffer"),
        contents: bytemuck::cast_slice(&vertices),
        usage: wgpu::BufferUsages::VERTEX,
    });
    let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("Frustum Index Buffer"),
        contents: bytemuck::cast_slice(&indices),
        usage: wgpu::BufferUsages::INDEX,
    });

    (vertex_buffer, index_buffer, indices.len())
}
