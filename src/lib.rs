//! umbra-ngin
//!
//! A lightweight, cross-platform shadow-mapping renderer focused on native
//! and WASM compatibility. Each frame a small scene is drawn twice: once from
//! the light's point of view into a depth texture, and once from the camera's
//! point of view, projecting the depth texture back onto the geometry to
//! darken occluded surfaces. Percentage-closer filtering softens the shadow
//! edges.
//!
//! High-level modules
//! - `camera`: camera types, controller and uniforms for view/projection
//! - `context`: central GPU and window context that owns device/queue/pipelines
//! - `data_structures`: engine data models (meshes, instances, props, textures)
//! - `flow`: high level flow control (scenes / update loops)
//! - `pipelines`: definitions for the render pipelines (scene, shadow, wire)
//! - `resources`: procedural mesh generation and GPU resource creation
//! - `render`: render composition for efficient pipeline reuse
//! - `settings`: the per-frame demo settings object and its clamped mutators
//!

pub mod camera;
pub mod context;
pub mod data_structures;
pub mod flow;
pub mod pipelines;
pub mod render;
pub mod resources;
pub mod settings;

// Re-exports commonly used types for convenience in downstream code.
pub use winit::dpi::PhysicalPosition;
pub use cgmath::*;
pub use winit::event::DeviceEvent;
pub use winit::event::WindowEvent;
pub use wgpu::*;
