//! # Graphics Module
//!
//! Everything between the scene graph and the screen.
//!
//! - **Camera System** ([`camera`]) - Orbit camera with mouse controls
//! - **Geometry** ([`geometry`]) - Procedural primitive meshes
//! - **Rendering Pipeline** ([`rendering`]) - Forward pass with one positional light and fog
//! - **Scene Management** ([`scene`]) - Node hierarchy, appearances and lighting settings
//! - **Resource Management** ([`resources`]) - Uniforms and per-node GPU buffers
//!
//! The render engine is created by [`OrreryApp`](crate::app::OrreryApp) once a
//! window exists; scenes themselves never touch the GPU.

pub mod camera;
pub mod geometry;
pub mod rendering;
pub mod resources;
pub mod scene;

// Re-export commonly used types
pub use camera::orbit_camera::OrbitCamera;
pub use rendering::render_engine::RenderEngine;
