//! # Primitive Shape Generation
//!
//! All shapes are centered on the origin and generated with outward normals.

use super::GeometryData;
use std::f32::consts::PI;

/// Generate an axis-aligned box centered at the origin
///
/// Each face has its own four vertices so normals stay flat per face.
pub fn generate_box(width: f32, height: f32, depth: f32) -> GeometryData {
    let mut data = GeometryData::new();
    let (hx, hy, hz) = (width * 0.5, height * 0.5, depth * 0.5);

    // (normal, four corners counter-clockwise when viewed from outside)
    let faces: [([f32; 3], [[f32; 3]; 4]); 6] = [
        ([0.0, 0.0, 1.0], [[-hx, -hy, hz], [hx, -hy, hz], [hx, hy, hz], [-hx, hy, hz]]),
        ([0.0, 0.0, -1.0], [[hx, -hy, -hz], [-hx, -hy, -hz], [-hx, hy, -hz], [hx, hy, -hz]]),
        ([-1.0, 0.0, 0.0], [[-hx, -hy, -hz], [-hx, -hy, hz], [-hx, hy, hz], [-hx, hy, -hz]]),
        ([1.0, 0.0, 0.0], [[hx, -hy, hz], [hx, -hy, -hz], [hx, hy, -hz], [hx, hy, hz]]),
        ([0.0, 1.0, 0.0], [[-hx, hy, hz], [hx, hy, hz], [hx, hy, -hz], [-hx, hy, -hz]]),
        ([0.0, -1.0, 0.0], [[-hx, -hy, -hz], [hx, -hy, -hz], [hx, -hy, hz], [-hx, -hy, hz]]),
    ];

    for (normal, corners) in faces {
        let base = data.vertices.len() as u32;
        for corner in corners {
            data.vertices.push(corner);
            data.normals.push(normal);
        }
        data.indices
            .extend_from_slice(&[base, base + 1, base + 2, base + 2, base + 3, base]);
    }

    data
}

/// Generate a UV sphere
///
/// # Arguments
/// * `radius` - Sphere radius
/// * `longitude_segments` - Number of vertical segments (longitude lines)
/// * `latitude_segments` - Number of horizontal segments (latitude lines)
pub fn generate_sphere(radius: f32, longitude_segments: u32, latitude_segments: u32) -> GeometryData {
    let mut data = GeometryData::new();

    let long_segs = longitude_segments.max(3);
    let lat_segs = latitude_segments.max(2);

    for lat in 0..=lat_segs {
        let theta = lat as f32 * PI / lat_segs as f32; // 0 to PI
        let (sin_theta, cos_theta) = theta.sin_cos();

        for long in 0..=long_segs {
            let phi = long as f32 * 2.0 * PI / long_segs as f32; // 0 to 2*PI
            let (sin_phi, cos_phi) = phi.sin_cos();

            // Y-up
            let normal = [sin_theta * cos_phi, cos_theta, sin_theta * sin_phi];
            data.vertices
                .push([normal[0] * radius, normal[1] * radius, normal[2] * radius]);
            data.normals.push(normal);
        }
    }

    for lat in 0..lat_segs {
        for long in 0..long_segs {
            let first = lat * (long_segs + 1) + long;
            let second = first + long_segs + 1;

            data.indices.extend_from_slice(&[first, first + 1, second]);
            data.indices.extend_from_slice(&[second, first + 1, second + 1]);
        }
    }

    data
}

/// Generate a plane in the XY plane
///
/// # Arguments
/// * `width` - Width of the plane (X direction)
/// * `height` - Height of the plane (Y direction)
/// * `width_segments` - Number of subdivisions along width
/// * `height_segments` - Number of subdivisions along height
///
/// The normal points along +Z. Rotate the owning node by `-PI/2` about X to
/// lay it flat as a floor. Vertices are emitted row by row, starting at the
/// top edge (`+Y`) and moving left to right.
pub fn generate_plane(width: f32, height: f32, width_segments: u32, height_segments: u32) -> GeometryData {
    let mut data = GeometryData::new();

    let w_segs = width_segments.max(1);
    let h_segs = height_segments.max(1);

    for y in 0..=h_segs {
        let pos_y = (0.5 - y as f32 / h_segs as f32) * height;
        for x in 0..=w_segs {
            let pos_x = (x as f32 / w_segs as f32 - 0.5) * width;
            data.vertices.push([pos_x, pos_y, 0.0]);
            data.normals.push([0.0, 0.0, 1.0]);
        }
    }

    for y in 0..h_segs {
        for x in 0..w_segs {
            let a = y * (w_segs + 1) + x;
            let b = a + w_segs + 1;

            data.indices.extend_from_slice(&[a, b, a + 1]);
            data.indices.extend_from_slice(&[b, b + 1, a + 1]);
        }
    }

    data
}

/// Generate a flat ring (annulus) in the XY plane facing +Z
pub fn generate_ring(inner_radius: f32, outer_radius: f32, segments: u32) -> GeometryData {
    let mut data = GeometryData::new();
    let segs = segments.max(3);

    for i in 0..=segs {
        let angle = i as f32 * 2.0 * PI / segs as f32;
        let (sin_a, cos_a) = angle.sin_cos();

        data.vertices.push([inner_radius * cos_a, inner_radius * sin_a, 0.0]);
        data.vertices.push([outer_radius * cos_a, outer_radius * sin_a, 0.0]);
        data.normals.push([0.0, 0.0, 1.0]);
        data.normals.push([0.0, 0.0, 1.0]);
    }

    for i in 0..segs {
        let inner = i * 2;
        let outer = inner + 1;
        let next_inner = inner + 2;
        let next_outer = inner + 3;

        data.indices.extend_from_slice(&[inner, outer, next_outer]);
        data.indices.extend_from_slice(&[inner, next_outer, next_inner]);
    }

    data
}

#[cfg(test)]
mod tests {
    use super::*;

    fn length(v: [f32; 3]) -> f32 {
        (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt()
    }

    #[test]
    fn test_box_generation() {
        let cube = generate_box(3.0, 3.0, 3.0);
        assert_eq!(cube.vertex_count(), 24); // 6 faces * 4 vertices
        assert_eq!(cube.triangle_count(), 12);
        assert!(cube.vertices.iter().all(|v| v.iter().all(|c| c.abs() == 1.5)));
    }

    #[test]
    fn test_sphere_vertices_lie_on_radius() {
        let sphere = generate_sphere(4.0, 24, 24);
        assert_eq!(sphere.vertex_count(), 25 * 25);
        assert_eq!(sphere.triangle_count(), 24 * 24 * 2);
        for v in &sphere.vertices {
            assert!((length(*v) - 4.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_plane_generation() {
        let plane = generate_plane(10.0, 10.0, 10, 10);
        assert_eq!(plane.vertex_count(), 121); // 11x11 grid
        assert_eq!(plane.triangle_count(), 200);
        assert_eq!(plane.vertices[0], [-5.0, 5.0, 0.0]);
        assert_eq!(plane.vertices[120], [5.0, -5.0, 0.0]);
    }

    #[test]
    fn test_plane_winding_faces_normal() {
        let plane = generate_plane(2.0, 2.0, 1, 1);
        let mut recomputed = plane.clone();
        recomputed.compute_vertex_normals();
        for normal in &recomputed.normals {
            assert!((normal[2] - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_ring_spans_inner_to_outer() {
        let ring = generate_ring(2.5, 3.5, 32);
        assert_eq!(ring.vertex_count(), 66);
        assert_eq!(ring.triangle_count(), 64);
        for v in &ring.vertices {
            let r = length(*v);
            assert!(r > 2.49 && r < 3.51);
        }
    }
}
