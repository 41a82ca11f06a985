//! Line-list pipeline for wireframe overlays.
//!
//! The demo uses it to draw the light's frustum: the unit clip cube rendered
//! with a per-wire world matrix that stretches it over the light's view
//! volume (see [`crate::pipelines::shadow::frustum_world_matrix`]).

use crate::{
    data_structures::{
        model::{LineVertex, Vertex},
        texture::Texture,
    },
    pipelines::scene::mk_render_pipeline,
};

/// World matrix and flat color of one wireframe object.
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct WireUniform {
    pub world: [[f32; 4]; 4],
    pub color: [f32; 4],
}

pub fn mk_wire_bind_group_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
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
        label: Some("wire_bind_group_layout"),
    })
}

pub fn mk_wire_pipeline(
    device: &wgpu::Device,
    config: &wgpu::SurfaceConfiguration,
    camera_bind_group_layout: &wgpu::BindGroupLayout,
) -> wgpu::RenderPipeline {
    let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("Wire Pipeline Layout"),
        bind_group_layouts: &[&mk_wire_bind_group_layout(device), camera_bind_group_layout],
        push_constant_ranges: &[],
    });
    let shader = wgpu::ShaderModuleDescriptor {
        label: Some("Wire Shader"),
        source: wgpu::ShaderSource::Wgsl(include_str!("wire.wgsl").into()),
    };
    mk_render_pipeline(
        device,
        &layout,
        config.format,
        Some(wgpu::BlendState {
            alpha: wgpu::BlendComponent::REPLACE,
            color: wgpu::BlendComponent::REPLACE,
        }),
        Some(Texture::DEPTH_FORMAT),
        &[LineVertex::desc()],
        wgpu::PrimitiveTopology::LineList,
        shader,
    )
}
