//! Instanced scene props.

use wgpu::util::DeviceExt;

use crate::{
    context::{BufferWriter, Context},
    data_structures::{
        instance::Instance,
        model::Model,
    },
    render::{Instanced, Render},
};

/// A `Prop` is a model plus the instances it is drawn at.
///
/// The instance transforms live on the CPU side; after mutating them call
/// [`BufferWriter::write_to_buffer`] to push the raw data to the GPU.
pub struct Prop {
    pub model: Model,
    pub instances: Vec<Instance>,
    pub instance_buffer: wgpu::Buffer,
}

impl Prop {
    pub fn new(device: &wgpu::Device, model: Model, instances: Vec<Instance>) -> Self {
        let instance_data = instances.iter().map(Instance::to_raw).collect::<Vec<_>>();
        let instance_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Instance Buffer"),
            contents: bytemuck::cast_slice(&instance_data),
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        });

        Self {
            model,
            instances,
            instance_buffer,
        }
    }
}

impl BufferWriter for Prop {
    fn write_to_buffer(&mut self, ctx: &Context) {
        let instance_data = self.instances.iter().map(Instance::to_raw).collect::<Vec<_>>();
        ctx.queue
            .write_buffer(&self.instance_buffer, 0, bytemuck::cast_slice(&instance_data));
    }
}

impl<'a, 'pass> From<&'a Prop> for Render<'a, 'pass> {
    fn from(prop: &'a Prop) -> Self {
        Render::Default(Instanced {
            instance: &prop.instance_buffer,
            model: &prop.model,
            amount: prop.instances.len(),
        })
    }
}
