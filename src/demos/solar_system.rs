//! Solar system: a self-lit star, eight planets and a moon
//!
//! Every planet orbits the origin with the shared [`OrbitSettings`], so their
//! relative speeds follow the distance rule. Saturn carries a tilted ring and
//! Earth a nested moon orbit.

use std::f32::consts::FRAC_PI_2;

use cgmath::Vector3;

use super::DemoScene;
use crate::animation::{
    create_orbiting_body, wrap_angle, OrbitDescriptor, OrbitSettings, OrbitalBody,
    TIME_COEFFICIENT,
};
use crate::gfx::geometry::{generate_ring, generate_sphere};
use crate::gfx::scene::{AmbientLight, Appearance, LightConfig, Material, SceneContext, SceneGraph};

pub const SUN_RADIUS: f32 = 4.0;
const SPHERE_SEGMENTS: u32 = 32;

/// `(name, radius, distance, colour)`; distances are multiples of Earth's 20
const PLANETS: [(&str, f32, f32, u32); 8] = [
    ("Mercury", 0.5, 10.0, 0x8c8680),
    ("Venus", 1.0, 40.0, 0xe3bb76),
    ("Earth", 1.0, 20.0, 0x2f6fd0),
    ("Mars", 1.0, 30.0, 0xc1440e),
    ("Jupiter", 2.0, 100.0, 0xd8ca9d),
    ("Saturn", 2.0, 180.0, 0xe0c68f),
    ("Uranus", 1.5, 160.0, 0x9fd8e3),
    ("Neptune", 1.5, 140.0, 0x3e54e8),
];

const RING_INNER: f32 = 2.5;
const RING_OUTER: f32 = 3.5;
const MOON_RADIUS: f32 = 0.27;
const MOON_DISTANCE: f32 = 2.5;

pub fn build_solar_system(aspect: f32) -> DemoScene {
    let mut context = SceneContext::new(Vector3::new(0.0, 10.0, 100.0), 75.0, aspect);
    context.ambient = AmbientLight {
        intensity: 0.05,
        ..Default::default()
    };
    context.light = Some(LightConfig::point([0.0, 0.0, 0.0], 2.0));

    let mut scene = DemoScene::new(context);
    let graph = &mut scene.context.graph;

    let sun = graph.add_mesh(
        "Sun",
        Appearance::new(
            generate_sphere(SUN_RADIUS, SPHERE_SEGMENTS, SPHERE_SEGMENTS),
            Material::from_hex("sun", 0xffcc33).unlit(),
        ),
    );
    scene
        .registry
        .register(move |time: f64, graph: &mut SceneGraph| {
            graph.node_mut(sun).rotation.y = wrap_angle(time * TIME_COEFFICIENT);
        });

    let settings = OrbitSettings::default();
    for (name, radius, distance, colour) in PLANETS {
        let planet = create_orbiting_body(graph, &settings, descriptor(name, radius, distance, colour));

        match name {
            "Saturn" => add_ring(graph, &planet),
            "Earth" => {
                let moon = create_orbiting_body(
                    graph,
                    &settings,
                    descriptor("Moon", MOON_RADIUS, MOON_DISTANCE, 0xb0b0b0).orbiting(planet.body()),
                );
                scene.registry.register(moon);
            }
            _ => {}
        }
        scene.registry.register(planet);
    }

    log::info!(
        "Built solar system with {} bodies",
        scene.registry.len() - 1
    );
    scene
}

fn descriptor(name: &str, radius: f32, distance: f32, colour: u32) -> OrbitDescriptor {
    OrbitDescriptor::new(
        name,
        Appearance::new(
            generate_sphere(1.0, SPHERE_SEGMENTS, SPHERE_SEGMENTS),
            Material::from_hex(name, colour),
        ),
        radius,
        distance,
    )
}

/// Flat ring around the equator of `planet`, spinning with it
fn add_ring(graph: &mut SceneGraph, planet: &OrbitalBody) {
    let ring = match graph.add_child(planet.body(), format!("{} ring", planet.name())) {
        Ok(ring) => ring,
        Err(err) => {
            log::error!("Cannot attach ring: {err}");
            return;
        }
    };
    let node = graph.node_mut(ring);
    node.rotation.x = FRAC_PI_2;
    // Undo the body's radius scale so ring radii stay in world units
    node.set_uniform_scale(1.0 / planet.radius());
    node.appearance = Some(Appearance::new(
        generate_ring(RING_INNER, RING_OUTER, SPHERE_SEGMENTS),
        Material::from_hex("ring", 0xc9b48a),
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::InnerSpace;

    fn horizontal_distance(scene: &DemoScene, name: &str) -> f32 {
        let graph = &scene.context.graph;
        let id = graph.find(name).unwrap();
        let p = graph.world_position(id);
        Vector3::new(p.x, 0.0, p.z).magnitude()
    }

    #[test]
    fn test_scene_contents() {
        let scene = build_solar_system(1.0);
        // star + eight planets + moon
        assert_eq!(scene.registry.len(), 10);
        assert_eq!(scene.context.graph.drawables().count(), 11);
        assert!(scene.context.light.is_some());
        assert!((scene.context.ambient.intensity - 0.05).abs() < 1e-6);
    }

    #[test]
    fn test_planets_keep_their_orbit_radius() {
        let mut scene = build_solar_system(1.0);
        for time in [0.0, 1234.0, 98765.0] {
            scene.step(time);
            for (name, _, distance, _) in PLANETS {
                assert!((horizontal_distance(&scene, name) - distance).abs() < 1e-3);
            }
        }
    }

    #[test]
    fn test_sun_spins_with_time() {
        let mut scene = build_solar_system(1.0);
        scene.step(1500.0);
        let graph = &scene.context.graph;
        let sun = graph.find("Sun").unwrap();
        assert!((graph.node(sun).rotation.y - 1.5).abs() < 1e-6);
    }

    #[test]
    fn test_sun_angle_stays_in_one_turn() {
        let mut scene = build_solar_system(1.0);
        scene.step(86_400_000.0);
        let graph = &scene.context.graph;
        let angle = graph.node(graph.find("Sun").unwrap()).rotation.y;
        assert!((0.0..std::f32::consts::TAU).contains(&angle));
        // 86400 rad reduced by whole turns
        let expected = 86_400.0f64.rem_euclid(std::f64::consts::TAU) as f32;
        assert!((angle - expected).abs() < 1e-4);
    }

    #[test]
    fn test_moon_follows_earth() {
        let mut scene = build_solar_system(1.0);
        scene.step(4321.0);
        let graph = &scene.context.graph;
        let earth = graph.world_position(graph.find("Earth").unwrap());
        let moon = graph.world_position(graph.find("Moon").unwrap());
        assert!(((moon - earth).magnitude() - MOON_DISTANCE).abs() < 1e-3);
    }

    #[test]
    fn test_ring_has_world_sized_radii() {
        let mut scene = build_solar_system(1.0);
        scene.step(0.0);
        let graph = &scene.context.graph;
        let ring = graph.find("Saturn ring").unwrap();
        let world = graph.world_transform(ring);
        // x column length is the effective scale
        let scale = Vector3::new(world.x.x, world.x.y, world.x.z).magnitude();
        assert!((scale - 1.0).abs() < 1e-5);
        // ring lies in the orbital plane
        assert!(world.z.y.abs() > 0.999);
    }
}
