//! Render pipeline definitions.
//!
//! - `scene`: the textured + shadowed main pass pipeline
//! - `shadow`: the depth-only light's-point-of-view pipeline and resources
//! - `light`: the light uniform shared by the scene shader
//! - `wire`: the line-list pipeline for the light-frustum overlay

pub mod light;
pub mod scene;
pub mod shadow;
pub mod wire;
