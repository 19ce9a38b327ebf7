//! WGPU-based rendering engine
//!
//! Draws every visible, drawable node of a [`SceneContext`] in a single
//! depth-tested forward pass. GPU copies of node geometry are created lazily
//! and kept in step with the scene graph each frame.

use std::collections::{HashMap, HashSet};
use std::iter;
use std::sync::Arc;

use bytemuck::Zeroable;
use thiserror::Error;
use wgpu::{DepthStencilState, TextureFormat};

use super::vertex::Vertex3D;
use crate::animation::traits::{FrameInfo, FrameSink};
use crate::gfx::resources::{
    global_bindings::{GlobalBindings, GlobalUBO, GlobalUniform},
    node_resources::{DrawNode, NodeGpuResources, ObjectUniform},
    texture_resource::TextureResource,
};
use crate::gfx::scene::{NodeId, SceneContext};
use crate::wgpu_utils::{uniform_binding, UniformBuffer};

/// Failures while creating or presenting to the GPU surface
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to create a window surface: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),
    #[error("no compatible GPU adapter: {0}")]
    RequestAdapter(#[from] wgpu::RequestAdapterError),
    #[error("failed to open the GPU device: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),
    #[error("surface reports no supported texture formats")]
    NoSurfaceFormat,
    #[error("failed to acquire the next frame: {0}")]
    Surface(#[from] wgpu::SurfaceError),
}

/// Core rendering engine managing GPU resources and draw calls
pub struct RenderEngine {
    surface: wgpu::Surface<'static>,
    device: Arc<wgpu::Device>,
    queue: Arc<wgpu::Queue>,
    config: wgpu::SurfaceConfiguration,
    depth_texture: TextureResource,

    pipeline: wgpu::RenderPipeline,
    global_ubo: GlobalUBO,
    global_bindings: GlobalBindings,
    object_layout: wgpu::BindGroupLayout,

    nodes: HashMap<NodeId, NodeGpuResources>,
    draw_order: Vec<NodeId>,
}

impl RenderEngine {
    pub async fn new(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        width: u32,
        height: u32,
    ) -> Result<RenderEngine, RenderError> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });
        let surface = instance.create_surface(window)?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await?;
        log::info!("Using GPU adapter: {}", adapter.get_info().name);

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("WGPU Device"),
                required_features: wgpu::Features::default(),
                required_limits: wgpu::Limits {
                    max_texture_dimension_2d: 4096,
                    ..wgpu::Limits::downlevel_defaults()
                },
                memory_hints: wgpu::MemoryHints::default(),
                trace: wgpu::Trace::Off,
            })
            .await?;

        let surface_capabilities = surface.get_capabilities(&adapter);
        let format = surface_capabilities
            .formats
            .iter()
            .copied()
            .find(|f| !f.is_srgb())
            .or_else(|| surface_capabilities.formats.first().copied())
            .ok_or(RenderError::NoSurfaceFormat)?;

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: width.max(1),
            height: height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: surface_capabilities
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        let depth_texture =
            TextureResource::create_depth_texture(&device, &config, "depth_texture");

        let global_ubo = UniformBuffer::new_with_data(&device, &GlobalUniform::zeroed());
        let global_bindings = GlobalBindings::new(&device, &global_ubo);

        let object_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Object Bind Group Layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: uniform_binding(),
                count: None,
            }],
        });

        let pipeline = create_forward_pipeline(
            &device,
            format,
            &[global_bindings.layout(), &object_layout],
        );

        Ok(RenderEngine {
            surface,
            device: device.into(),
            queue: queue.into(),
            config,
            depth_texture,
            pipeline,
            global_ubo,
            global_bindings,
            object_layout,
            nodes: HashMap::new(),
            draw_order: Vec::new(),
        })
    }

    /// Bring GPU buffers and uniforms in line with the scene
    ///
    /// Creates buffers for new drawables, re-uploads displaced geometry,
    /// writes world matrices, and drops resources of nodes no longer drawn.
    pub fn sync_scene(&mut self, context: &SceneContext) {
        self.global_ubo
            .update_content(&self.queue, GlobalUniform::from_context(context));

        self.draw_order.clear();
        for (id, node, appearance) in context.graph.drawables() {
            if appearance.geometry().is_empty() {
                continue;
            }
            let content = ObjectUniform::new(node.world_transform(), appearance);

            match self.nodes.get_mut(&id) {
                Some(resources) if !resources.is_stale(appearance) => {
                    resources.update_uniform(&self.queue, content);
                }
                Some(resources) if resources.can_update_in_place(appearance) => {
                    resources.refresh_vertices(&self.queue, appearance);
                    resources.update_uniform(&self.queue, content);
                }
                _ => {
                    let resources = NodeGpuResources::new(
                        &self.device,
                        &self.object_layout,
                        appearance,
                        &content,
                    );
                    self.nodes.insert(id, resources);
                }
            }
            self.draw_order.push(id);
        }

        let live: HashSet<NodeId> = self.draw_order.iter().copied().collect();
        self.nodes.retain(|id, _| live.contains(id));
    }

    /// Sync the scene and draw one frame to the window surface
    pub fn render_frame(&mut self, context: &SceneContext) -> Result<(), RenderError> {
        self.sync_scene(context);

        let surface_texture = self.surface.get_current_texture()?;
        let surface_view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        {
            let [r, g, b, a] = context.clear_color;
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Forward Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &surface_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color { r, g, b, a }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_texture.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            render_pass.set_pipeline(&self.pipeline);
            render_pass.set_bind_group(0, self.global_bindings.bind_group(), &[]);

            for id in &self.draw_order {
                if let Some(resources) = self.nodes.get(id) {
                    render_pass.draw_node(resources);
                }
            }
        }

        self.queue.submit(iter::once(encoder.finish()));
        surface_texture.present();
        Ok(())
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);

        self.depth_texture =
            TextureResource::create_depth_texture(&self.device, &self.config, "depth_texture");
    }

    fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    /// Number of nodes drawn by the last frame
    pub fn draw_calls(&self) -> usize {
        self.draw_order.len()
    }
}

impl FrameSink for RenderEngine {
    fn submit(&mut self, context: &SceneContext, frame: &FrameInfo) {
        match self.render_frame(context) {
            Ok(()) => {}
            Err(RenderError::Surface(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated)) => {
                log::warn!("Surface lost at frame {}, reconfiguring", frame.index);
                self.reconfigure();
            }
            Err(RenderError::Surface(wgpu::SurfaceError::Timeout)) => {
                log::warn!("Surface timed out at frame {}, skipping", frame.index);
            }
            Err(err) => {
                log::error!("Frame {} failed: {}", frame.index, err);
            }
        }
    }
}

fn create_forward_pipeline(
    device: &wgpu::Device,
    format: TextureFormat,
    bind_group_layouts: &[&wgpu::BindGroupLayout],
) -> wgpu::RenderPipeline {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("Forward Shader"),
        source: wgpu::ShaderSource::Wgsl(include_str!("shader.wgsl").into()),
    });

    let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("Forward Pipeline Layout"),
        bind_group_layouts,
        push_constant_ranges: &[],
    });

    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("Forward Pipeline"),
        layout: Some(&pipeline_layout),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            buffers: &[Vertex3D::desc()],
            compilation_options: Default::default(),
        },
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            // Planes and rings are visible from both sides
            cull_mode: None,
            polygon_mode: wgpu::PolygonMode::Fill,
            conservative: false,
            unclipped_depth: false,
        },
        depth_stencil: Some(DepthStencilState {
            format: TextureResource::DEPTH_FORMAT,
            depth_write_enabled: true,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState {
            count: 1,
            mask: !0,
            alpha_to_coverage_enabled: false,
        },
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format,
                blend: Some(wgpu::BlendState::REPLACE),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: Default::default(),
        }),
        multiview: None,
        cache: None,
    })
}
