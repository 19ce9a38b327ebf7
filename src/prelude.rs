//! # Orrery Prelude
//!
//! Commonly used types for building and animating scenes.
//!
//! ```rust
//! use orrery::prelude::*;
//!
//! let mut graph = SceneGraph::new();
//! let earth = create_orbiting_body(
//!     &mut graph,
//!     &OrbitSettings::default(),
//!     OrbitDescriptor::new(
//!         "Earth",
//!         Appearance::new(generate_sphere(1.0, 16, 16), Material::default()),
//!         1.0,
//!         20.0,
//!     ),
//! );
//!
//! let mut registry = UpdateRegistry::new();
//! registry.register(earth);
//! registry.run(1000.0, &mut graph);
//! graph.update_world_transforms();
//! ```

// Re-export core application types
pub use crate::app::{AppConfig, OrreryApp};
pub use crate::demos::DemoScene;

// Re-export animation types
pub use crate::animation::{
    create_orbiting_body, AnimationClock, FrameDriver, FrameInfo, FrameSink, FrameUpdate,
    ManualClock, OrbitDescriptor, OrbitSettings, OrbitalBody, SystemClock, UpdateRegistry,
    TIME_COEFFICIENT,
};

// Re-export graphics and scene types
pub use crate::gfx::geometry::{
    generate_box, generate_plane, generate_ring, generate_sphere, GeometryData,
};
pub use crate::gfx::scene::{
    AmbientLight, Appearance, FogConfig, LightConfig, LightKind, Material, NodeId,
    SceneContext, SceneError, SceneGraph, TransformNode,
};

// Re-export asset loading and performance monitoring
pub use crate::assets::{load_obj, load_obj_or_empty, AssetError};
pub use crate::performance::{PerformanceMetrics, PerformanceMonitor};

// Re-export common external dependencies
pub use cgmath::{InnerSpace, Vector3, Zero};
