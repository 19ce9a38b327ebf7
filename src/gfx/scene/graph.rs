//! # Scene Graph
//!
//! Arena-backed node hierarchy. The root node is created with the graph and
//! every other node hangs beneath it, directly or through pivots.

use cgmath::{Matrix4, SquareMatrix, Vector3, Vector4};
use thiserror::Error;

use super::appearance::Appearance;
use super::node::{NodeId, TransformNode};

/// Errors raised by misuse of the scene hierarchy
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SceneError {
    #[error("node {0:?} does not exist in this scene")]
    UnknownNode(NodeId),
    #[error("the root node cannot be reparented")]
    RootReparent,
    #[error("attaching {child:?} under {parent:?} would create a cycle")]
    Cycle { parent: NodeId, child: NodeId },
}

/// Hierarchical spatial graph of transform nodes
#[derive(Debug, Clone)]
pub struct SceneGraph {
    nodes: Vec<TransformNode>,
}

impl SceneGraph {
    /// Creates a graph holding only the root node
    pub fn new() -> Self {
        Self {
            nodes: vec![TransformNode::new("root")],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Adds a transformless node directly under the root
    pub fn add_node(&mut self, name: impl Into<String>) -> NodeId {
        self.push_node(self.root(), name.into())
    }

    /// Adds a transformless node under `parent`
    pub fn add_child(
        &mut self,
        parent: NodeId,
        name: impl Into<String>,
    ) -> Result<NodeId, SceneError> {
        self.check(parent)?;
        Ok(self.push_node(parent, name.into()))
    }

    /// Adds a drawable node under the root
    pub fn add_mesh(&mut self, name: impl Into<String>, appearance: Appearance) -> NodeId {
        let id = self.add_node(name);
        self.nodes[id.0].appearance = Some(appearance);
        id
    }

    fn push_node(&mut self, parent: NodeId, name: String) -> NodeId {
        let id = NodeId(self.nodes.len());
        let mut node = TransformNode::new(name);
        node.parent = Some(parent);
        self.nodes.push(node);
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Moves `child` (and its subtree) beneath `parent`
    ///
    /// The child's local transform is kept as-is, so its world placement
    /// becomes relative to the new parent.
    pub fn attach(&mut self, parent: NodeId, child: NodeId) -> Result<(), SceneError> {
        self.check(parent)?;
        self.check(child)?;
        if child == self.root() {
            return Err(SceneError::RootReparent);
        }
        if self.is_ancestor_or_self(child, parent) {
            return Err(SceneError::Cycle { parent, child });
        }

        if let Some(old_parent) = self.nodes[child.0].parent {
            self.nodes[old_parent.0].children.retain(|&c| c != child);
        }
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
        Ok(())
    }

    /// True if `ancestor` is `node` or lies on the path from `node` to the root
    fn is_ancestor_or_self(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.nodes[id.0].parent;
        }
        false
    }

    fn check(&self, id: NodeId) -> Result<(), SceneError> {
        if id.0 < self.nodes.len() {
            Ok(())
        } else {
            Err(SceneError::UnknownNode(id))
        }
    }

    pub fn get(&self, id: NodeId) -> Option<&TransformNode> {
        self.nodes.get(id.0)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut TransformNode> {
        self.nodes.get_mut(id.0)
    }

    /// Node accessor for handles issued by this graph
    ///
    /// # Panics
    /// Panics if `id` was issued by a different graph.
    pub fn node(&self, id: NodeId) -> &TransformNode {
        &self.nodes[id.0]
    }

    /// Mutable node accessor for handles issued by this graph
    ///
    /// # Panics
    /// Panics if `id` was issued by a different graph.
    pub fn node_mut(&mut self, id: NodeId) -> &mut TransformNode {
        &mut self.nodes[id.0]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        // The root always exists
        false
    }

    pub fn find(&self, name: &str) -> Option<NodeId> {
        self.nodes
            .iter()
            .position(|node| node.name == name)
            .map(NodeId)
    }

    /// Recomputes every world matrix, parents before children
    pub fn update_world_transforms(&mut self) {
        let mut stack = vec![(self.root(), Matrix4::identity())];
        while let Some((id, parent_world)) = stack.pop() {
            let node = &mut self.nodes[id.0];
            node.world = parent_world * node.local_transform();
            let world = node.world;
            for &child in node.children.iter().rev() {
                stack.push((child, world));
            }
        }
    }

    pub fn world_transform(&self, id: NodeId) -> Matrix4<f32> {
        self.nodes[id.0].world
    }

    /// Origin of the node in world space
    pub fn world_position(&self, id: NodeId) -> Vector3<f32> {
        let origin = self.nodes[id.0].world * Vector4::new(0.0, 0.0, 0.0, 1.0);
        origin.truncate()
    }

    /// Nodes with an appearance whose whole ancestor chain is visible
    pub fn drawables(&self) -> impl Iterator<Item = (NodeId, &TransformNode, &Appearance)> + '_ {
        self.nodes.iter().enumerate().filter_map(move |(index, node)| {
            let appearance = node.appearance.as_ref()?;
            let id = NodeId(index);
            self.is_visible(id).then_some((id, node, appearance))
        })
    }

    fn is_visible(&self, id: NodeId) -> bool {
        let mut current = Some(id);
        while let Some(node_id) = current {
            let node = &self.nodes[node_id.0];
            if !node.visible {
                return false;
            }
            current = node.parent;
        }
        true
    }
}

impl Default for SceneGraph {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::geometry::generate_box;
    use crate::gfx::scene::appearance::Material;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_new_graph_has_only_root() {
        let graph = SceneGraph::new();
        assert_eq!(graph.len(), 1);
        assert_eq!(graph.node(graph.root()).name, "root");
        assert!(graph.node(graph.root()).parent().is_none());
    }

    #[test]
    fn test_add_node_attaches_to_root() {
        let mut graph = SceneGraph::new();
        let a = graph.add_node("a");
        let b = graph.add_node("b");
        assert_eq!(graph.node(graph.root()).children(), &[a, b]);
        assert_eq!(graph.node(a).parent(), Some(graph.root()));
        assert_eq!(graph.find("b"), Some(b));
    }

    #[test]
    fn test_attach_reparents_subtree() {
        let mut graph = SceneGraph::new();
        let pivot = graph.add_node("pivot");
        let body = graph.add_node("body");
        graph.attach(pivot, body).unwrap();

        assert_eq!(graph.node(graph.root()).children(), &[pivot]);
        assert_eq!(graph.node(pivot).children(), &[body]);
        assert_eq!(graph.node(body).parent(), Some(pivot));
    }

    #[test]
    fn test_attach_rejects_cycles_and_root() {
        let mut graph = SceneGraph::new();
        let a = graph.add_node("a");
        let b = graph.add_child(a, "b").unwrap();

        assert_eq!(graph.attach(b, a), Err(SceneError::Cycle { parent: b, child: a }));
        assert_eq!(graph.attach(a, a), Err(SceneError::Cycle { parent: a, child: a }));
        assert_eq!(graph.attach(a, graph.root()), Err(SceneError::RootReparent));
        assert_eq!(
            graph.add_child(NodeId(42), "ghost"),
            Err(SceneError::UnknownNode(NodeId(42)))
        );
    }

    #[test]
    fn test_world_transform_composes_parent_rotation() {
        let mut graph = SceneGraph::new();
        let pivot = graph.add_node("pivot");
        let body = graph.add_child(pivot, "body").unwrap();
        graph.node_mut(body).set_position(10.0, 0.0, 0.0);
        graph.node_mut(pivot).rotation.y = std::f32::consts::PI;
        graph.update_world_transforms();

        let p = graph.world_position(body);
        assert!(close(p.x, -10.0));
        assert!(close(p.y, 0.0));
        assert!(close(p.z, 0.0));
    }

    #[test]
    fn test_drawables_skip_pivots_and_hidden_subtrees() {
        let mut graph = SceneGraph::new();
        let appearance = Appearance::new(generate_box(1.0, 1.0, 1.0), Material::default());
        let pivot = graph.add_node("pivot");
        let shown = graph.add_mesh("shown", appearance.clone());
        let hidden = graph.add_child(pivot, "hidden").unwrap();
        graph.node_mut(hidden).appearance = Some(appearance);
        graph.node_mut(pivot).visible = false;

        let ids: Vec<NodeId> = graph.drawables().map(|(id, _, _)| id).collect();
        assert_eq!(ids, vec![shown]);
    }
}
