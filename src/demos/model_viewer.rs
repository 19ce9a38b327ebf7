//! Model viewer: one OBJ model on display under soft ambient light

use std::path::PathBuf;

use cgmath::Vector3;

use super::DemoScene;
use crate::assets::load_obj_or_empty;
use crate::gfx::scene::{AmbientLight, SceneContext};

#[derive(Debug, Clone, PartialEq)]
pub struct ModelViewerConfig {
    pub model: PathBuf,
    /// Uniform scale applied to the model node
    pub scale: f32,
    pub position: [f32; 3],
}

impl Default for ModelViewerConfig {
    fn default() -> Self {
        Self {
            model: PathBuf::from("assets/model.obj"),
            scale: 4.0,
            position: [0.0, 4.0, 0.0],
        }
    }
}

/// Build the viewer scene; a model that fails to load leaves the node empty
pub fn build_model_viewer(config: &ModelViewerConfig, aspect: f32) -> DemoScene {
    let mut context = SceneContext::new(Vector3::new(5.0, 10.0, 10.0), 75.0, aspect);
    context.ambient = AmbientLight {
        intensity: 0.4,
        ..Default::default()
    };

    let appearance = load_obj_or_empty(&config.model);
    let model = context.graph.add_mesh("model", appearance);
    let node = context.graph.node_mut(model);
    let [x, y, z] = config.position;
    node.set_position(x, y, z);
    node.set_uniform_scale(config.scale);

    DemoScene::new(context)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_model_keeps_empty_node() {
        let config = ModelViewerConfig {
            model: PathBuf::from("/no/such/model.obj"),
            ..Default::default()
        };
        let mut scene = build_model_viewer(&config, 1.0);
        scene.step(0.0);

        let graph = &scene.context.graph;
        let model = graph.find("model").unwrap();
        let node = graph.node(model);
        assert!(node.appearance.as_ref().unwrap().geometry().is_empty());
        assert!((graph.world_position(model).y - 4.0).abs() < 1e-6);
        assert_eq!(node.scale, Vector3::new(4.0, 4.0, 4.0));
        assert!(scene.registry.is_empty());
    }
}
