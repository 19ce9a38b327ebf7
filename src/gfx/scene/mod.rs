//! # Scene Management Module
//!
//! The retained-mode half of the engine: a hierarchy of transform nodes,
//! the appearances drawn at those nodes, and the per-scene context that
//! bundles the graph with its camera and lights.
//!
//! ## Key Components
//!
//! - [`SceneGraph`] - Arena of [`TransformNode`]s addressed by [`NodeId`]
//! - [`Appearance`] - Geometry plus [`Material`] bound to a node
//! - [`SceneContext`] - Graph, camera, lights and resize handling
//!
//! ## Usage
//!
//! ```rust
//! use orrery::gfx::scene::SceneGraph;
//!
//! let mut graph = SceneGraph::new();
//! let pivot = graph.add_node("pivot");
//! let body = graph.add_child(pivot, "body").unwrap();
//! graph.node_mut(body).set_position(20.0, 0.0, 0.0);
//! graph.node_mut(pivot).rotation.y = 1.0;
//! graph.update_world_transforms();
//! ```

pub mod appearance;
pub mod context;
pub mod graph;
pub mod lighting;
pub mod node;

// Re-export main types
pub use appearance::{Appearance, Material};
pub use context::SceneContext;
pub use graph::{SceneError, SceneGraph};
pub use lighting::{AmbientLight, FogConfig, LightConfig, LightKind};
pub use node::{NodeId, TransformNode};
