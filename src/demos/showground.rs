//! Primitives showground
//!
//! A spinning cube, a bouncing sphere and a plane whose vertices ripple over
//! time, lit by a spot light and faded by distance fog.

use std::f32::consts::{FRAC_PI_2, FRAC_PI_8};

use cgmath::Vector3;

use super::DemoScene;
use crate::animation::{wrap_angle, FrameUpdate};
use crate::gfx::geometry::{generate_box, generate_plane, generate_sphere};
use crate::gfx::scene::{
    AmbientLight, Appearance, FogConfig, LightConfig, Material, NodeId, SceneContext, SceneGraph,
};

/// Sphere bounce phase advance per frame
pub const BOUNCE_SPEED: f64 = 0.01;

/// Bounces a node as `y = height * |sin(step)| + floor`
///
/// The phase advances by a fixed amount per frame, so bounce speed follows
/// the frame rate rather than the clock. Frames that repeat the previous
/// time (a paused clock) leave the phase where it is.
pub struct Bounce {
    node: NodeId,
    step: f64,
    last_time: Option<f64>,
    pub speed: f64,
    pub height: f32,
    pub floor: f32,
}

impl Bounce {
    pub fn new(node: NodeId, speed: f64) -> Self {
        Self {
            node,
            step: 0.0,
            last_time: None,
            speed,
            height: 10.0,
            floor: 4.0,
        }
    }

    pub fn step(&self) -> f64 {
        self.step
    }
}

impl FrameUpdate for Bounce {
    fn update(&mut self, time: f64, scene: &mut SceneGraph) {
        if self.last_time.is_some_and(|last| time <= last) {
            return;
        }
        self.last_time = Some(time);
        self.step += self.speed;
        scene.node_mut(self.node).position.y = self.height * (self.step.sin().abs() as f32) + self.floor;
    }

    fn name(&self) -> &str {
        "bounce"
    }
}

/// Displaces every vertex of a plane along its normal with a travelling wave
pub struct Wave {
    node: NodeId,
}

impl Wave {
    pub fn new(node: NodeId) -> Self {
        Self { node }
    }

    /// Displacement of vertex `index` at `time`
    pub fn offset(time: f64, index: usize) -> f32 {
        let phase = time * 0.001 + index as f64 * 0.02;
        (phase.sin() + phase.cos()) as f32
    }
}

impl FrameUpdate for Wave {
    fn update(&mut self, time: f64, scene: &mut SceneGraph) {
        let Some(appearance) = scene.node_mut(self.node).appearance.as_mut() else {
            return;
        };
        let geometry = appearance.geometry_mut();
        for (index, vertex) in geometry.vertices.iter_mut().enumerate() {
            vertex[2] = Wave::offset(time, index);
        }
        geometry.compute_vertex_normals();
    }

    fn name(&self) -> &str {
        "wave"
    }
}

pub fn build_showground(aspect: f32) -> DemoScene {
    let mut context = SceneContext::new(Vector3::new(-10.0, 30.0, 30.0), 45.0, aspect);
    context.ambient = AmbientLight {
        intensity: 0.2,
        ..Default::default()
    };
    context.light = Some(LightConfig::spot(
        [-50.0, 50.0, 0.0],
        [0.0, 0.0, 0.0],
        FRAC_PI_8,
        0.8,
    ));
    context.fog = Some(FogConfig {
        color: [0.0, 0.0, 0.0],
        density: 0.005,
    });

    let mut scene = DemoScene::new(context);
    let graph = &mut scene.context.graph;

    let cube = graph.add_mesh(
        "box",
        Appearance::new(generate_box(1.0, 1.0, 1.0), Material::from_hex("green", 0x00ff00)),
    );

    let ground = graph.add_mesh(
        "ground",
        Appearance::new(
            generate_plane(30.0, 30.0, 1, 1),
            Material::from_hex("white", 0xffffff),
        ),
    );
    graph.node_mut(ground).rotation.x = -FRAC_PI_2;

    let sphere = graph.add_mesh(
        "sphere",
        Appearance::new(generate_sphere(4.0, 24, 24), Material::from_hex("blue", 0x0000ff)),
    );
    graph.node_mut(sphere).set_position(-10.0, 10.0, 0.0);

    let crate_box = graph.add_mesh(
        "crate",
        Appearance::new(
            generate_box(3.0, 3.0, 3.0),
            Material::from_hex("crate", 0xb07040).unlit(),
        ),
    );
    graph.node_mut(crate_box).set_position(10.0, 3.0, 0.0);

    let wave = graph.add_mesh(
        "wave",
        Appearance::new(
            generate_plane(10.0, 10.0, 10, 10),
            Material::from_hex("red", 0xff0000).unlit(),
        ),
    );
    graph.node_mut(wave).set_position(0.0, 10.0, 10.0);

    scene
        .registry
        .register(move |time: f64, graph: &mut SceneGraph| {
            let node = graph.node_mut(cube);
            node.rotation.x = wrap_angle(time / 2000.0);
            node.rotation.y = wrap_angle(time / 1000.0);
        });
    scene.registry.register(Bounce::new(sphere, BOUNCE_SPEED));
    scene.registry.register(Wave::new(wave));

    log::info!("Built showground with {} nodes", scene.context.graph.len());
    scene
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(scene: &DemoScene, name: &str) -> NodeId {
        scene.context.graph.find(name).unwrap()
    }

    #[test]
    fn test_cube_rotation_follows_time() {
        let mut scene = build_showground(1.0);
        scene.step(4000.0);
        let cube = scene.context.graph.node(node(&scene, "box"));
        assert!((cube.rotation.x - 2.0).abs() < 1e-6);
        assert!((cube.rotation.y - 4.0).abs() < 1e-6);
    }

    #[test]
    fn test_cube_rotation_stays_smooth_after_a_day() {
        let mut scene = build_showground(1.0);
        let cube = node(&scene, "box");
        let day = 86_400_000.0;
        let frame = 1000.0 / 60.0;

        scene.step(day);
        let before = scene.context.graph.node(cube).rotation.y;
        scene.step(day + frame);
        let after = scene.context.graph.node(cube).rotation.y;

        let delta = (after - before).rem_euclid(std::f32::consts::TAU);
        assert!((delta as f64 - frame / 1000.0).abs() < 1e-4);
    }

    #[test]
    fn test_bounce_advances_per_frame() {
        let mut scene = build_showground(1.0);
        let sphere = node(&scene, "sphere");
        scene.step(0.0);
        scene.step(16.0);
        let expected = 10.0 * (0.02f64.sin() as f32) + 4.0;
        assert!((scene.context.graph.node(sphere).position.y - expected).abs() < 1e-5);
    }

    #[test]
    fn test_bounce_holds_while_clock_is_paused() {
        let mut graph = SceneGraph::new();
        let ball = graph.add_node("ball");
        let mut bounce = Bounce::new(ball, BOUNCE_SPEED);

        bounce.update(100.0, &mut graph);
        let height = graph.node(ball).position.y;
        for _ in 0..10 {
            bounce.update(100.0, &mut graph);
        }
        assert_eq!(graph.node(ball).position.y, height);
        assert!((bounce.step() - BOUNCE_SPEED).abs() < 1e-12);

        bounce.update(116.0, &mut graph);
        assert!((bounce.step() - 2.0 * BOUNCE_SPEED).abs() < 1e-12);
    }

    #[test]
    fn test_bounce_stays_above_floor() {
        let mut graph = SceneGraph::new();
        let ball = graph.add_node("ball");
        let mut bounce = Bounce::new(ball, 0.3);
        for frame in 0..100 {
            bounce.update(frame as f64 * 16.0, &mut graph);
            let y = graph.node(ball).position.y;
            assert!((4.0..=14.0 + 1e-5).contains(&y));
        }
        assert!((bounce.step() - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_wave_displaces_every_vertex() {
        let mut scene = build_showground(1.0);
        let wave = node(&scene, "wave");
        let before = scene.context.graph.node(wave).appearance.as_ref().unwrap().revision();

        scene.step(2500.0);

        let appearance = scene.context.graph.node(wave).appearance.as_ref().unwrap();
        assert!(appearance.revision() > before);
        let geometry = appearance.geometry();
        assert_eq!(geometry.vertex_count(), 121);
        for (index, vertex) in geometry.vertices.iter().enumerate() {
            assert!((vertex[2] - Wave::offset(2500.0, index)).abs() < 1e-6);
        }
        assert_eq!(geometry.normals.len(), 121);
    }

    #[test]
    fn test_ground_lies_flat() {
        let mut scene = build_showground(1.0);
        scene.step(0.0);
        let world = scene.context.graph.world_transform(node(&scene, "ground"));
        // plane normal (+Z) now points up
        assert!((world.z.y - 1.0).abs() < 1e-6);
        assert!(scene.context.fog.is_some());
    }
}
