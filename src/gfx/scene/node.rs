//! # Transform Nodes
//!
//! A node carries a local transform (position, Euler rotation, scale), its
//! place in the hierarchy and, optionally, an [`Appearance`] to draw.

use cgmath::{Matrix4, Rad, SquareMatrix, Vector3};

use super::appearance::Appearance;

/// Handle to a node stored in a [`SceneGraph`](super::SceneGraph).
///
/// Handles are indices into the graph's arena and stay valid for the
/// lifetime of the graph, since nodes are never removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Arena index of this node
    pub fn index(self) -> usize {
        self.0
    }
}

/// A single node of the scene hierarchy
#[derive(Debug, Clone)]
pub struct TransformNode {
    pub name: String,
    /// Offset from the parent's origin
    pub position: Vector3<f32>,
    /// Euler angles in radians, applied X then Y then Z
    pub rotation: Vector3<f32>,
    pub scale: Vector3<f32>,
    pub appearance: Option<Appearance>,
    pub visible: bool,

    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) world: Matrix4<f32>,
}

impl TransformNode {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            position: Vector3::new(0.0, 0.0, 0.0),
            rotation: Vector3::new(0.0, 0.0, 0.0),
            scale: Vector3::new(1.0, 1.0, 1.0),
            appearance: None,
            visible: true,
            parent: None,
            children: Vec::new(),
            world: Matrix4::identity(),
        }
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// World matrix as of the last [`SceneGraph::update_world_transforms`](super::SceneGraph::update_world_transforms)
    pub fn world_transform(&self) -> Matrix4<f32> {
        self.world
    }

    pub fn set_position(&mut self, x: f32, y: f32, z: f32) {
        self.position = Vector3::new(x, y, z);
    }

    pub fn set_uniform_scale(&mut self, scale: f32) {
        self.scale = Vector3::new(scale, scale, scale);
    }

    /// Compose the local matrix: `T * Rx * Ry * Rz * S`
    pub fn local_transform(&self) -> Matrix4<f32> {
        let t = Matrix4::from_translation(self.position);
        let r = Matrix4::from_angle_x(Rad(self.rotation.x))
            * Matrix4::from_angle_y(Rad(self.rotation.y))
            * Matrix4::from_angle_z(Rad(self.rotation.z));
        let s = Matrix4::from_nonuniform_scale(self.scale.x, self.scale.y, self.scale.z);
        t * r * s // Order matters: T * R * S
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::{Point3, Transform};

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn test_new_node_is_identity() {
        let node = TransformNode::new("pivot");
        assert_eq!(node.local_transform(), Matrix4::identity());
        assert!(node.appearance.is_none());
        assert!(node.parent().is_none());
    }

    #[test]
    fn test_scale_applies_before_translation() {
        let mut node = TransformNode::new("body");
        node.set_position(20.0, 0.0, 0.0);
        node.set_uniform_scale(2.0);

        let p = node.local_transform().transform_point(Point3::new(1.0, 0.0, 0.0));
        assert!(close(p.x, 22.0));
        assert!(close(p.y, 0.0));
    }

    #[test]
    fn test_rotation_about_vertical_axis() {
        let mut node = TransformNode::new("pivot");
        node.rotation.y = std::f32::consts::FRAC_PI_2;

        // +X swings round to -Z under a right-handed quarter turn about +Y
        let p = node.local_transform().transform_point(Point3::new(1.0, 0.0, 0.0));
        assert!(close(p.x, 0.0));
        assert!(close(p.z, -1.0));
    }
}
