//! Demo scenes
//!
//! Each builder returns a ready [`DemoScene`]: the populated scene context and
//! the updates that animate it. Nothing here touches the GPU, so scenes can
//! be stepped and inspected in tests.

pub mod model_viewer;
pub mod showground;
pub mod solar_system;

use crate::animation::UpdateRegistry;
use crate::gfx::scene::SceneContext;

pub use model_viewer::{build_model_viewer, ModelViewerConfig};
pub use showground::build_showground;
pub use solar_system::build_solar_system;

/// A scene plus the per-frame updates that belong to it
pub struct DemoScene {
    pub context: SceneContext,
    pub registry: UpdateRegistry,
}

impl DemoScene {
    pub fn new(context: SceneContext) -> Self {
        Self {
            context,
            registry: UpdateRegistry::new(),
        }
    }

    /// Run every update at `time` and refresh world transforms
    pub fn step(&mut self, time: f64) {
        self.registry.run(time, &mut self.context.graph);
        self.context.graph.update_world_transforms();
    }
}
