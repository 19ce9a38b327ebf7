//! Frame driver
//!
//! Ties the clock, the update registry and the renderer together. One call
//! to [`FrameDriver::run_frame`] is one displayed frame: sample time once,
//! run every update with that time, refresh world transforms, submit.

use super::registry::UpdateRegistry;
use super::traits::{AnimationClock, FrameInfo, FrameSink, FrameUpdate};
use crate::gfx::scene::SceneContext;

pub struct FrameDriver<C: AnimationClock> {
    clock: C,
    registry: UpdateRegistry,
    frame_count: u64,
}

impl<C: AnimationClock> FrameDriver<C> {
    pub fn new(clock: C, registry: UpdateRegistry) -> Self {
        Self {
            clock,
            registry,
            frame_count: 0,
        }
    }

    /// Register another per-frame update
    pub fn register<U>(&mut self, update: U)
    where
        U: FrameUpdate + 'static,
    {
        self.registry.register(update);
    }

    /// Run one frame at the clock's current time
    pub fn run_frame(&mut self, context: &mut SceneContext, sink: &mut dyn FrameSink) -> FrameInfo {
        let time = self.clock.now();
        self.run_frame_at(time, context, sink)
    }

    /// Run one frame at an explicit time, bypassing the clock
    ///
    /// Every update completes before the sink sees the scene.
    pub fn run_frame_at(
        &mut self,
        time: f64,
        context: &mut SceneContext,
        sink: &mut dyn FrameSink,
    ) -> FrameInfo {
        let frame = FrameInfo {
            index: self.frame_count,
            time,
        };
        self.frame_count += 1;

        self.registry.run(time, &mut context.graph);
        context.graph.update_world_transforms();
        sink.submit(context, &frame);

        frame
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    pub fn registry(&self) -> &UpdateRegistry {
        &self.registry
    }
}
