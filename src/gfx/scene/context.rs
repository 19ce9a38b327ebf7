//! # Scene Context
//!
//! Everything one demo scene needs besides its update callbacks: the node
//! graph, the camera and the lighting environment. Constructed once at setup
//! and handed to the frame driver, so independent scenes never share state.

use cgmath::Vector3;

use super::graph::SceneGraph;
use super::lighting::{AmbientLight, FogConfig, LightConfig};
use super::node::NodeId;
use crate::gfx::camera::OrbitCamera;

pub struct SceneContext {
    pub graph: SceneGraph,
    pub camera: OrbitCamera,
    pub ambient: AmbientLight,
    pub light: Option<LightConfig>,
    pub fog: Option<FogConfig>,
    /// Background color (RGBA)
    pub clear_color: [f64; 4],
}

impl SceneContext {
    /// Empty scene viewed from `eye` towards the origin
    pub fn new(eye: Vector3<f32>, fovy_degrees: f32, aspect: f32) -> Self {
        Self {
            graph: SceneGraph::new(),
            camera: OrbitCamera::looking_at(eye, Vector3::new(0.0, 0.0, 0.0), fovy_degrees, aspect),
            ambient: AmbientLight::default(),
            light: None,
            fog: None,
            clear_color: [0.0, 0.0, 0.0, 1.0],
        }
    }

    pub fn root(&self) -> NodeId {
        self.graph.root()
    }

    /// Track a new drawable surface size
    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.resize_projection(width, height);
    }
}
