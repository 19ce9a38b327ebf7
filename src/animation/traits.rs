//! Core animation traits
//!
//! Defines the per-frame callback interface and the seams to the clock and
//! the renderer, so animation logic can be driven and tested without a GPU.

use crate::gfx::scene::{SceneContext, SceneGraph};

/// A per-frame update registered with the [`UpdateRegistry`](super::UpdateRegistry)
///
/// Implementations receive the frame time in milliseconds and mutate the
/// nodes they own. Closures of the form `FnMut(f64, &mut SceneGraph)` are
/// accepted directly.
pub trait FrameUpdate {
    /// Apply this update for the frame at `time`
    ///
    /// # Arguments
    /// * `time` - Monotonic frame time in milliseconds
    /// * `scene` - Scene graph holding the nodes this update writes
    fn update(&mut self, time: f64, scene: &mut SceneGraph);

    /// Label used in logs
    fn name(&self) -> &str {
        "update"
    }
}

impl<F> FrameUpdate for F
where
    F: FnMut(f64, &mut SceneGraph),
{
    fn update(&mut self, time: f64, scene: &mut SceneGraph) {
        self(time, scene)
    }
}

/// Source of monotonically increasing time, sampled once per frame
pub trait AnimationClock {
    /// Current time in milliseconds; never less than a previous reading
    fn now(&mut self) -> f64;
}

/// Frame bookkeeping passed to the render submission
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInfo {
    /// Zero-based frame counter
    pub index: u64,
    /// The time every update of this frame saw, in milliseconds
    pub time: f64,
}

/// Receives a fully updated scene once per frame
///
/// The render engine implements this; tests use recording sinks.
pub trait FrameSink {
    fn submit(&mut self, context: &SceneContext, frame: &FrameInfo);
}
