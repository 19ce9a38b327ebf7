// src/gfx/resources/mod.rs
//! GPU resource management
//!
//! Handles depth textures, global uniforms and per-node GPU buffers.

pub mod global_bindings;
pub mod node_resources;
pub mod texture_resource;

// Re-export main types
pub use global_bindings::{GlobalBindings, GlobalUBO, GlobalUniform};
pub use node_resources::{NodeGpuResources, ObjectUniform};
pub use texture_resource::TextureResource;
