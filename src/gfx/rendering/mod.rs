//! Core rendering functionality
//!
//! Forward render pipeline, vertex layout and the engine that turns a
//! [`SceneContext`](crate::gfx::scene::SceneContext) into frames.

pub mod render_engine;
pub mod vertex;

// Re-export main types
pub use render_engine::{RenderEngine, RenderError};
pub use vertex::Vertex3D;
