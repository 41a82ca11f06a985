//! Render composition and pipeline batching.
//!
//! This module defines the [`Render`] enum, which is used by flows to specify
//! how their objects should be rendered. The engine uses `Render` to sort
//! objects into batches: shadow-casting instanced models are drawn in both
//! the shadow pass and the main pass, wireframes and custom closures only in
//! the main pass.
//!
//! # Key types
//!
//! - [`Render<'a, 'pass>`] is the primary enum describing render operations
//! - [`Instanced<'a>`] contains data for instanced rendering (model + instance buffer)
//! - [`Wire<'a>`] contains data for line rendering (vertex + index buffers)
//!

use wgpu::RenderPass;

use crate::{context::Context, data_structures::model::Model};

/// Data for instanced object rendering: a model and its instance buffer.
///
/// Used for 3D objects rendered with GPU instancing. The instance buffer
/// contains per-instance transformation data. Everything drawn this way
/// casts and receives shadows.
#[derive(Clone)]
pub struct Instanced<'a> {
    pub instance: &'a wgpu::Buffer,
    pub model: &'a Model,
    pub amount: usize,
}

/// Data for wireframe rendering: vertex and index buffers with a bind group.
///
/// The bind group carries the wire's world matrix and color. Wireframes are
/// drawn in the main pass only; they neither cast nor receive shadows.
#[derive(Clone)]
pub struct Wire<'a> {
    pub vertex: &'a wgpu::Buffer,
    pub index: &'a wgpu::Buffer,
    pub group: &'a wgpu::BindGroup,
    pub amount: usize,
}

/// Specifies how a flow's objects should be rendered.
///
/// # Variants
///
/// - `None` renders nothing
/// - `Default(Instanced)` renders a single shadowed instanced object
/// - `Defaults(Vec<Instanced>)` renders a batch of shadowed instanced objects
/// - `Wire(Wire)` renders line geometry (e.g. the light-frustum overlay)
/// - `Composed(Vec<Render>)` recursively renders a composition of renders
/// - `Custom(...)` invokes a user-defined closure inside the main pass
///
pub enum Render<'a, 'pass>
where
    'pass: 'a,
{
    None,
    Default(Instanced<'a>),
    Defaults(Vec<Instanced<'a>>),
    Wire(Wire<'a>),
    Composed(Vec<Render<'a, 'pass>>),
    Custom(Box<dyn 'a + FnOnce(&Context, &mut RenderPass<'pass>) -> ()>),
}

impl<'a, 'pass> Render<'a, 'pass> {
    /// Flatten the render tree into per-pipeline batches.
    ///
    /// `casters` are drawn in both the shadow pass and the main pass,
    /// `wires` and `customs` in the main pass only.
    pub(crate) fn split(
        self,
        casters: &mut Vec<Instanced<'a>>,
        wires: &mut Vec<Wire<'a>>,
        customs: &mut Vec<Box<dyn 'a + FnOnce(&Context, &mut RenderPass<'pass>) -> ()>>,
    ) {
        match self {
            Render::Default(instanced) => casters.push(instanced),
            Render::Defaults(mut vec) => casters.append(&mut vec),
            Render::Wire(wire) => wires.push(wire),
            Render::Composed(renders) => renders
                .into_iter()
                .for_each(|render| render.split(casters, wires, customs)),
            Render::Custom(f) => customs.push(f),
            Render::None => (),
        }
    }
}
