//! Animation system
//!
//! Per-frame mutation of the scene graph: a clock supplies time, an ordered
//! registry of updates writes node transforms, and the frame driver submits
//! the result for rendering. The orbit module builds bodies that revolve and
//! spin as pure functions of that time.

pub mod clock;
pub mod driver;
pub mod orbit;
pub mod registry;
pub mod traits;

// Re-export main types
pub use clock::{ManualClock, SystemClock};
pub use driver::FrameDriver;
pub use orbit::{
    create_orbiting_body, wrap_angle, OrbitDescriptor, OrbitSettings, OrbitalBody,
    TIME_COEFFICIENT,
};
pub use registry::UpdateRegistry;
pub use traits::{AnimationClock, FrameInfo, FrameSink, FrameUpdate};
