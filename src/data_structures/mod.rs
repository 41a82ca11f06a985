//! Engine data structures: models, textures, props, and instances.
//!
//! This module contains the core data types for scene representation:
//!
//! - `model` contains mesh and material definitions, GPU resources for 3D models
//! - `texture` contains GPU texture wrapper and creation utilities
//! - `prop` is an instanced scene object (pre-configured model + instance data)
//! - `instance` holds per-instance transformation data

pub mod instance;
pub mod model;
pub mod prop;
pub mod texture;
