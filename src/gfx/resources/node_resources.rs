//! Per-node GPU resources
//!
//! Every drawable node owns a vertex/index buffer pair and a small uniform
//! with its world matrix and material. Geometry is re-uploaded only when the
//! appearance revision changes.

use cgmath::Matrix4;
use wgpu::util::DeviceExt;

use crate::gfx::scene::Appearance;
use crate::wgpu_utils::uniform_buffer::UniformBuffer;

/// Per-draw uniform. MUST match the `Object` struct in `shader.wgsl`.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ObjectUniform {
    pub model: [[f32; 4]; 4],
    pub base_color: [f32; 4],
    /// x: 1.0 for unlit materials
    pub flags: [f32; 4],
}

impl ObjectUniform {
    pub fn new(world: Matrix4<f32>, appearance: &Appearance) -> Self {
        let material = &appearance.material;
        Self {
            model: world.into(),
            base_color: material.base_color,
            flags: [if material.unlit { 1.0 } else { 0.0 }, 0.0, 0.0, 0.0],
        }
    }
}

pub struct NodeGpuResources {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    vertex_count: usize,
    index_count: u32,
    revision: u64,
    uniform: UniformBuffer<ObjectUniform>,
    bind_group: wgpu::BindGroup,
}

impl NodeGpuResources {
    pub fn new(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        appearance: &Appearance,
        content: &ObjectUniform,
    ) -> Self {
        let geometry = appearance.geometry();
        let vertices = geometry.to_vertices();

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Vertex Buffer"),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Index Buffer"),
            contents: bytemuck::cast_slice(&geometry.indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        let uniform = UniformBuffer::new_with_data(device, content);
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Object Bind Group"),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform.binding_resource(),
            }],
        });

        log::debug!(
            "Uploaded mesh '{}' ({} vertices, {} triangles)",
            appearance.material.name,
            vertices.len(),
            geometry.triangle_count()
        );

        Self {
            vertex_buffer,
            index_buffer,
            vertex_count: vertices.len(),
            index_count: geometry.indices.len() as u32,
            revision: appearance.revision(),
            uniform,
            bind_group,
        }
    }

    /// True when the GPU copy can be refreshed in place
    ///
    /// Topology changes need fresh buffers; pure vertex displacement does not.
    pub fn can_update_in_place(&self, appearance: &Appearance) -> bool {
        let geometry = appearance.geometry();
        geometry.vertex_count() == self.vertex_count
            && geometry.indices.len() as u32 == self.index_count
    }

    pub fn is_stale(&self, appearance: &Appearance) -> bool {
        appearance.revision() != self.revision
    }

    /// Rewrite vertex data after the geometry was displaced
    pub fn refresh_vertices(&mut self, queue: &wgpu::Queue, appearance: &Appearance) {
        let vertices = appearance.geometry().to_vertices();
        queue.write_buffer(&self.vertex_buffer, 0, bytemuck::cast_slice(&vertices));
        self.revision = appearance.revision();
    }

    pub fn update_uniform(&mut self, queue: &wgpu::Queue, content: ObjectUniform) {
        self.uniform.update_content(queue, content);
    }
}

/// Draw helpers for render passes
pub trait DrawNode<'a> {
    fn draw_node(&mut self, resources: &'a NodeGpuResources);
}

impl<'a, 'b> DrawNode<'b> for wgpu::RenderPass<'a>
where
    'b: 'a,
{
    fn draw_node(&mut self, resources: &'b NodeGpuResources) {
        if resources.index_count == 0 {
            return;
        }
        self.set_bind_group(1, &resources.bind_group, &[]);
        self.set_vertex_buffer(0, resources.vertex_buffer.slice(..));
        self.set_index_buffer(resources.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        self.draw_indexed(0..resources.index_count, 0, 0..1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::geometry::generate_sphere;
    use crate::gfx::scene::Material;
    use cgmath::SquareMatrix;

    #[test]
    fn test_object_uniform_flags_unlit_materials() {
        let sun = Appearance::new(
            generate_sphere(4.0, 8, 8),
            Material::from_hex("sun", 0xffcc33).unlit(),
        );
        let content = ObjectUniform::new(Matrix4::identity(), &sun);
        assert_eq!(content.flags[0], 1.0);
        assert_eq!(content.model[3], [0.0, 0.0, 0.0, 1.0]);
        assert_eq!(std::mem::size_of::<ObjectUniform>(), 96);
    }

    #[test]
    fn test_object_uniform_carries_translation() {
        let earth = Appearance::new(generate_sphere(1.0, 8, 8), Material::default());
        let world = Matrix4::from_translation(cgmath::Vector3::new(20.0, 0.0, 0.0));
        let content = ObjectUniform::new(world, &earth);
        assert_eq!(content.model[3], [20.0, 0.0, 0.0, 1.0]);
        assert_eq!(content.flags[0], 0.0);
    }
}
