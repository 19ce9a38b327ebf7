//! Windowed application shell
//!
//! Owns the winit event loop and wires a [`DemoScene`] to the frame driver,
//! the render engine and the mouse camera controls.

use std::sync::Arc;

use anyhow::Context as _;
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::{DeviceEvent, DeviceId, ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowAttributes, WindowId},
};

use crate::animation::{FrameDriver, SystemClock};
use crate::demos::DemoScene;
use crate::gfx::camera::CameraController;
use crate::gfx::rendering::render_engine::{RenderEngine, RenderError};
use crate::gfx::scene::SceneContext;
use crate::performance::PerformanceMonitor;

/// Window settings
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "orrery".to_string(),
            width: 1200,
            height: 800,
        }
    }
}

impl AppConfig {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }
}

pub struct OrreryApp {
    app_state: AppState,
}

struct AppState {
    config: AppConfig,
    window: Option<Arc<Window>>,
    render_engine: Option<RenderEngine>,
    context: SceneContext,
    driver: FrameDriver<SystemClock>,
    controller: CameraController,
    monitor: PerformanceMonitor,
    startup_error: Option<RenderError>,
}

impl OrreryApp {
    pub fn new(config: AppConfig, scene: DemoScene) -> Self {
        let DemoScene { context, registry } = scene;
        log::info!(
            "Scene ready: {} nodes, {} updates",
            context.graph.len(),
            registry.len()
        );

        Self {
            app_state: AppState {
                config,
                window: None,
                render_engine: None,
                context,
                driver: FrameDriver::new(SystemClock::new(), registry),
                controller: CameraController::new(0.005, 0.5),
                monitor: PerformanceMonitor::new(),
                startup_error: None,
            },
        }
    }

    /// Run the event loop until the window closes
    pub fn run(mut self) -> anyhow::Result<()> {
        let event_loop = EventLoop::new().context("failed to create event loop")?;
        event_loop.set_control_flow(ControlFlow::Poll);
        event_loop
            .run_app(&mut self.app_state)
            .context("event loop terminated abnormally")?;

        match self.app_state.startup_error.take() {
            Some(err) => Err(err).context("failed to initialise the renderer"),
            None => Ok(()),
        }
    }
}

impl AppState {
    fn handle_key(&mut self, event_loop: &ActiveEventLoop, event: &KeyEvent) {
        self.controller
            .process_keyed_events(event, &mut self.context.camera);

        if event.state != ElementState::Pressed || event.repeat {
            return;
        }
        match event.physical_key {
            PhysicalKey::Code(KeyCode::Escape) => event_loop.exit(),
            PhysicalKey::Code(KeyCode::Space) => {
                let clock = self.driver.clock_mut();
                if clock.is_paused() {
                    clock.resume();
                    log::info!("Animation resumed");
                } else {
                    clock.pause();
                    log::info!("Animation paused");
                }
            }
            _ => (),
        }
    }

    fn redraw(&mut self) {
        let Some(render_engine) = self.render_engine.as_mut() else {
            return;
        };

        self.monitor.begin_frame();
        self.driver.run_frame(&mut self.context, render_engine);
        self.monitor
            .update_render_stats(render_engine.draw_calls() as u32);
        self.monitor.end_frame();
    }
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attributes = WindowAttributes::default()
            .with_title(self.config.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.config.width,
                self.config.height,
            ));
        let window = match event_loop.create_window(attributes) {
            Ok(window) => Arc::new(window),
            Err(err) => {
                log::error!("Failed to create window: {err}");
                event_loop.exit();
                return;
            }
        };

        let PhysicalSize { width, height } = window.inner_size();
        match pollster::block_on(RenderEngine::new(window.clone(), width, height)) {
            Ok(engine) => {
                self.context.resize(width, height);
                self.render_engine = Some(engine);
                self.window = Some(window);
            }
            Err(err) => {
                log::error!("Renderer initialisation failed: {err}");
                self.startup_error = Some(err);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::KeyboardInput { event, .. } => self.handle_key(event_loop, &event),
            WindowEvent::Resized(PhysicalSize { width, height }) => {
                self.context.resize(width, height);
                if let Some(render_engine) = self.render_engine.as_mut() {
                    render_engine.resize(width, height);
                }
            }
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::RedrawRequested => self.redraw(),
            _ => (),
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        if !self.controller.process_events(&event, &mut self.context.camera) {
            return;
        }
        if let Some(window) = self.window.as_ref() {
            window.request_redraw();
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = self.window.as_ref() {
            window.request_redraw();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default().with_title("Solar system");
        assert_eq!(config.title, "Solar system");
        assert!((config.aspect() - 1.5).abs() < 1e-6);
    }
}
