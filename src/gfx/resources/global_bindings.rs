//! Global uniform bindings for camera and scene lighting
//!
//! One buffer per frame carries everything shared by all draws: the camera,
//! the ambient term, the single positional light and the fog settings.

use cgmath::{InnerSpace, Vector3};

use crate::gfx::{
    camera::camera_utils::CameraUniform,
    scene::{LightKind, SceneContext},
};
use crate::wgpu_utils::uniform_buffer::UniformBuffer;

/// Global uniform buffer content.
/// MUST match the `Globals` struct in `shader.wgsl` exactly.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GlobalUniform {
    pub view_proj: [[f32; 4]; 4],
    pub view_position: [f32; 4],
    /// xyz position, w kind (0 none, 1 point, 2 spot)
    pub light_position: [f32; 4],
    /// rgb color, w intensity
    pub light_color: [f32; 4],
    /// xyz spot direction, w cosine of the outer cone angle
    pub light_direction: [f32; 4],
    /// x cosine of the inner (fully lit) cone angle
    pub light_cone: [f32; 4],
    /// rgb color, w intensity
    pub ambient: [f32; 4],
    /// rgb color, w exp2 density (0 disables fog)
    pub fog: [f32; 4],
}

impl GlobalUniform {
    /// Pack the camera and lighting of `context` for the shaders
    pub fn from_context(context: &SceneContext) -> Self {
        let camera = context.camera.to_uniform();
        let mut content = Self::from_camera(camera);

        let ambient = context.ambient;
        content.ambient = [ambient.color[0], ambient.color[1], ambient.color[2], ambient.intensity];

        if let Some(light) = context.light {
            let [x, y, z] = light.position;
            let [r, g, b] = light.color;
            content.light_color = [r, g, b, light.intensity];

            match light.kind {
                LightKind::Point => {
                    content.light_position = [x, y, z, 1.0];
                }
                LightKind::Spot {
                    target,
                    angle,
                    penumbra,
                } => {
                    content.light_position = [x, y, z, 2.0];
                    let direction = Vector3::from(target) - Vector3::from(light.position);
                    let direction = if direction.magnitude2() > 0.0 {
                        direction.normalize()
                    } else {
                        -Vector3::unit_y()
                    };
                    let cos_outer = angle.cos();
                    let cos_inner = (angle * (1.0 - penumbra.clamp(0.0, 1.0)))
                        .cos()
                        .max(cos_outer + 1e-4);
                    content.light_direction = [direction.x, direction.y, direction.z, cos_outer];
                    content.light_cone = [cos_inner, 0.0, 0.0, 0.0];
                }
            }
        }

        if let Some(fog) = context.fog {
            content.fog = [fog.color[0], fog.color[1], fog.color[2], fog.density];
        }

        content
    }

    fn from_camera(camera: CameraUniform) -> Self {
        Self {
            view_proj: camera.view_proj,
            view_position: camera.view_position,
            light_position: [0.0; 4],
            light_color: [0.0; 4],
            light_direction: [0.0, -1.0, 0.0, 0.0],
            light_cone: [0.0; 4],
            ambient: [0.0; 4],
            fog: [0.0; 4],
        }
    }
}

/// Type alias for the global uniform buffer
pub type GlobalUBO = UniformBuffer<GlobalUniform>;

/// Bind group layout and bind group for the globals, bound to slot 0
pub struct GlobalBindings {
    layout: wgpu::BindGroupLayout,
    bind_group: wgpu::BindGroup,
}

impl GlobalBindings {
    pub fn new(device: &wgpu::Device, ubo: &GlobalUBO) -> Self {
        let layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Globals Bind Group Layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: crate::wgpu_utils::uniform_binding(),
                count: None,
            }],
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Global Bind Group"),
            layout: &layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: ubo.binding_resource(),
            }],
        });

        Self { layout, bind_group }
    }

    pub fn layout(&self) -> &wgpu::BindGroupLayout {
        &self.layout
    }

    pub fn bind_group(&self) -> &wgpu::BindGroup {
        &self.bind_group
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::scene::{FogConfig, LightConfig};

    fn context() -> SceneContext {
        SceneContext::new(Vector3::new(-10.0, 30.0, 30.0), 45.0, 1.0)
    }

    #[test]
    fn test_no_light_and_no_fog_by_default() {
        let content = GlobalUniform::from_context(&context());
        assert_eq!(content.light_position[3], 0.0);
        assert_eq!(content.fog[3], 0.0);
        assert_eq!(content.ambient[3], 0.1);
        assert_eq!(std::mem::size_of::<GlobalUniform>(), 64 + 16 * 7);
    }

    #[test]
    fn test_point_light_packing() {
        let mut context = context();
        context.light = Some(LightConfig::point([0.0, 0.0, 0.0], 2.0));
        let content = GlobalUniform::from_context(&context);
        assert_eq!(content.light_position, [0.0, 0.0, 0.0, 1.0]);
        assert_eq!(content.light_color, [1.0, 1.0, 1.0, 2.0]);
    }

    #[test]
    fn test_spot_light_cone() {
        let mut context = context();
        let angle = std::f32::consts::PI / 8.0;
        context.light = Some(LightConfig::spot([-50.0, 50.0, 0.0], [0.0, 0.0, 0.0], angle, 0.8));
        context.fog = Some(FogConfig {
            color: [0.0, 0.0, 0.0],
            density: 0.005,
        });
        let content = GlobalUniform::from_context(&context);

        assert_eq!(content.light_position[3], 2.0);
        let direction = Vector3::new(
            content.light_direction[0],
            content.light_direction[1],
            content.light_direction[2],
        );
        assert!((direction.magnitude() - 1.0).abs() < 1e-5);
        assert!(direction.x > 0.0 && direction.y < 0.0);
        assert!((content.light_direction[3] - angle.cos()).abs() < 1e-6);
        assert!(content.light_cone[0] > content.light_direction[3]);
        assert_eq!(content.fog[3], 0.005);
    }
}
