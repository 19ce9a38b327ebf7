//! # Orbiting Bodies
//!
//! A body revolves around a reference point by sitting at a fixed offset
//! inside a pivot node that rotates about the vertical axis. The body's own
//! node rotates independently for spin. Both angles are computed absolutely
//! from the frame time, never accumulated, so replaying a time reproduces the
//! exact same transforms.
//!
//! ```text
//! reference (root or parent body)
//!   └── pivot        rotation.y = revolution angle
//!         └── body   position = (distance, 0, 0), rotation.y = spin angle
//! ```
//!
//! Revolution speed is scaled by `reference_distance / distance`, so nearer
//! bodies orbit visibly faster. This is a cosmetic rule, not Kepler's third
//! law.

use std::f64::consts::TAU;

use super::traits::FrameUpdate;
use crate::gfx::scene::{Appearance, NodeId, SceneGraph};

/// Global speed knob: radians per millisecond at unit rate
pub const TIME_COEFFICIENT: f64 = 0.001;

/// Distance whose bodies revolve at exactly [`TIME_COEFFICIENT`] rad/ms
pub const DEFAULT_REFERENCE_DISTANCE: f32 = 20.0;

/// One full turn per 1000 ms at the default coefficient
pub const DEFAULT_SPIN_CONSTANT: f64 = TAU;

/// Reduce `angle` to `[0, 2π)` before narrowing to `f32`
///
/// Large angles lose sub-frame resolution as `f32`, so the reduction has to
/// happen in `f64`.
pub fn wrap_angle(angle: f64) -> f32 {
    angle.rem_euclid(TAU) as f32
}

/// Settings shared by every body of one system
///
/// Sharing one value keeps relative speeds consistent across bodies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitSettings {
    pub time_coefficient: f64,
    pub reference_distance: f32,
}

impl Default for OrbitSettings {
    fn default() -> Self {
        Self {
            time_coefficient: TIME_COEFFICIENT,
            reference_distance: DEFAULT_REFERENCE_DISTANCE,
        }
    }
}

/// Everything needed to build one orbiting body
#[derive(Debug, Clone)]
pub struct OrbitDescriptor {
    pub name: String,
    /// `None` leaves the body as an invisible, still-animated node
    pub appearance: Option<Appearance>,
    /// Visual scale of the body
    pub radius: f32,
    /// Orbit radius around the reference
    pub distance: f32,
    pub spin_constant: f64,
    /// Body to orbit instead of the scene root
    pub parent: Option<NodeId>,
}

impl OrbitDescriptor {
    pub fn new(name: impl Into<String>, appearance: Appearance, radius: f32, distance: f32) -> Self {
        Self {
            name: name.into(),
            appearance: Some(appearance),
            radius,
            distance,
            spin_constant: DEFAULT_SPIN_CONSTANT,
            parent: None,
        }
    }

    pub fn with_spin_constant(mut self, spin_constant: f64) -> Self {
        self.spin_constant = spin_constant;
        self
    }

    /// Orbit the given body node (a moon around a planet)
    pub fn orbiting(mut self, parent_body: NodeId) -> Self {
        self.parent = Some(parent_body);
        self
    }

    pub fn without_appearance(mut self) -> Self {
        self.appearance = None;
        self
    }
}

/// A body placed in the scene together with its orbit parameters
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitalBody {
    name: String,
    radius: f32,
    distance: f32,
    time_coefficient: f64,
    /// Multiplier on the time coefficient for self-rotation
    spin_factor: f64,
    /// `reference_distance / distance`
    orbit_factor: f64,
    pivot: NodeId,
    body: NodeId,
}

/// Build the pivot/body pair for `descriptor` and attach it to the scene
///
/// The returned body must be registered with an
/// [`UpdateRegistry`](super::UpdateRegistry) to move; this function only
/// touches the scene graph.
///
/// # Panics
/// Panics if the radius, the orbit distance or the reference distance is not
/// strictly positive, or if the parent node does not belong to `scene`. These
/// are programming errors in scene setup.
pub fn create_orbiting_body(
    scene: &mut SceneGraph,
    settings: &OrbitSettings,
    descriptor: OrbitDescriptor,
) -> OrbitalBody {
    let OrbitDescriptor {
        name,
        appearance,
        radius,
        distance,
        spin_constant,
        parent,
    } = descriptor;

    assert!(radius > 0.0, "body '{name}' needs a positive radius, got {radius}");
    assert!(distance > 0.0, "body '{name}' needs a positive orbit distance, got {distance}");
    assert!(
        settings.reference_distance > 0.0,
        "reference distance must be positive, got {}",
        settings.reference_distance
    );

    let reference = parent.unwrap_or_else(|| scene.root());
    let pivot = match scene.add_child(reference, format!("{name} orbit")) {
        Ok(pivot) => pivot,
        Err(err) => panic!("cannot attach orbit of '{name}': {err}"),
    };
    let body = match scene.add_child(pivot, name.clone()) {
        Ok(body) => body,
        Err(err) => panic!("cannot attach body '{name}': {err}"),
    };

    let node = scene.node_mut(body);
    node.set_position(distance, 0.0, 0.0);
    node.set_uniform_scale(radius);
    node.appearance = appearance;

    let orbit_factor = settings.reference_distance as f64 / distance as f64;
    log::debug!(
        "Created orbiting body '{}' (radius {}, distance {}, orbit factor {:.3})",
        name,
        radius,
        distance,
        orbit_factor
    );

    OrbitalBody {
        name,
        radius,
        distance,
        time_coefficient: settings.time_coefficient,
        spin_factor: spin_constant,
        orbit_factor,
        pivot,
        body,
    }
}

impl OrbitalBody {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn pivot(&self) -> NodeId {
        self.pivot
    }

    pub fn body(&self) -> NodeId {
        self.body
    }

    pub fn spin_factor(&self) -> f64 {
        self.spin_factor
    }

    pub fn orbit_factor(&self) -> f64 {
        self.orbit_factor
    }

    /// Revolution angular speed in radians per millisecond
    pub fn revolution_rate(&self) -> f64 {
        self.time_coefficient * self.orbit_factor
    }

    /// Pivot angle about the vertical axis at `time`
    pub fn revolution_angle(&self, time: f64) -> f64 {
        time * self.revolution_rate()
    }

    /// Body angle about its own vertical axis at `time`
    pub fn spin_angle(&self, time: f64) -> f64 {
        time * self.time_coefficient * self.spin_factor
    }

    /// Write both rotation angles for `time`
    ///
    /// Only the pivot's and the body's Y rotations are touched.
    pub fn apply(&self, time: f64, scene: &mut SceneGraph) {
        scene.node_mut(self.pivot).rotation.y = wrap_angle(self.revolution_angle(time));
        scene.node_mut(self.body).rotation.y = wrap_angle(self.spin_angle(time));
    }
}

impl FrameUpdate for OrbitalBody {
    fn update(&mut self, time: f64, scene: &mut SceneGraph) {
        self.apply(time, scene);
    }

    fn name(&self) -> &str {
        &self.name
    }
}
