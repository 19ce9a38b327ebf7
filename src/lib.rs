//! Orrery
//!
//! Hierarchical orbit animation on wgpu and winit. Bodies revolve inside
//! rotating pivot nodes and spin on their own axis, both as pure functions
//! of the frame time.

pub mod animation;
pub mod app;
pub mod assets;
pub mod demos;
pub mod gfx;
pub mod performance;
pub mod prelude;
pub mod wgpu_utils;

// Re-export main types for convenience
pub use app::{AppConfig, OrreryApp};

/// Open a window showing `scene` and run until it is closed
pub fn run(config: AppConfig, scene: demos::DemoScene) -> anyhow::Result<()> {
    OrreryApp::new(config, scene).run()
}
