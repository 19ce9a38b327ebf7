//! # Procedural Geometry Generation
//!
//! Functions that build the primitive shapes the demo scenes are made of,
//! so no external model files are needed for basic shapes.
//!
//! ## Supported Primitives
//!
//! - **Sphere**: UV sphere with configurable radius and resolution
//! - **Box**: axis-aligned box with per-face normals
//! - **Plane**: subdivided plane in the XY plane facing +Z
//! - **Ring**: flat annulus in the XY plane facing +Z
//!
//! ## Usage
//!
//! ```rust
//! use orrery::gfx::geometry::{generate_box, generate_plane, generate_sphere};
//!
//! let sphere = generate_sphere(4.0, 32, 32);
//! let cube = generate_box(1.0, 1.0, 1.0);
//! let ground = generate_plane(30.0, 30.0, 1, 1);
//! assert!(sphere.triangle_count() > cube.triangle_count());
//! assert_eq!(ground.vertex_count(), 4);
//! ```

pub mod primitives;

pub use primitives::*;

use crate::gfx::rendering::vertex::Vertex3D;

/// Generated geometry ready for GPU upload
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryData {
    /// Vertex positions (x, y, z)
    pub vertices: Vec<[f32; 3]>,
    /// Normal vectors (x, y, z)
    pub normals: Vec<[f32; 3]>,
    /// Triangle indices (counter-clockwise winding)
    pub indices: Vec<u32>,
}

impl GeometryData {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            normals: Vec::new(),
            indices: Vec::new(),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Interleave positions and normals into the renderer's vertex format
    pub fn to_vertices(&self) -> Vec<Vertex3D> {
        self.vertices
            .iter()
            .enumerate()
            .map(|(i, position)| Vertex3D {
                position: *position,
                normal: self.normals.get(i).copied().unwrap_or([0.0, 1.0, 0.0]),
            })
            .collect()
    }

    /// Recompute smooth vertex normals from the triangle list
    ///
    /// Each vertex gets the normalized sum of its adjacent face normals.
    /// Used after vertex displacement and for models shipped without normals.
    pub fn compute_vertex_normals(&mut self) {
        let mut normals = vec![[0.0f32; 3]; self.vertices.len()];

        for triangle in self.indices.chunks_exact(3) {
            let [i0, i1, i2] = [triangle[0] as usize, triangle[1] as usize, triangle[2] as usize];
            let (v0, v1, v2) = (self.vertices[i0], self.vertices[i1], self.vertices[i2]);

            let edge1 = [v1[0] - v0[0], v1[1] - v0[1], v1[2] - v0[2]];
            let edge2 = [v2[0] - v0[0], v2[1] - v0[1], v2[2] - v0[2]];
            let face_normal = [
                edge1[1] * edge2[2] - edge1[2] * edge2[1],
                edge1[2] * edge2[0] - edge1[0] * edge2[2],
                edge1[0] * edge2[1] - edge1[1] * edge2[0],
            ];

            for index in [i0, i1, i2] {
                for axis in 0..3 {
                    normals[index][axis] += face_normal[axis];
                }
            }
        }

        for normal in normals.iter_mut() {
            let length = (normal[0].powi(2) + normal[1].powi(2) + normal[2].powi(2)).sqrt();
            if length > 0.0 {
                normal.iter_mut().for_each(|c| *c /= length);
            }
        }

        self.normals = normals;
    }
}

impl Default for GeometryData {
    fn default() -> Self {
        Self::new()
    }
}
