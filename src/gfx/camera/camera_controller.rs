//! Mouse and keyboard camera input
//!
//! Device and key events are first reduced to a [`CameraGesture`], which is
//! then applied to an [`OrbitCamera`]. The reduction needs no window, so the
//! input mapping can be exercised without a display.

use winit::{
    dpi::PhysicalPosition,
    event::{DeviceEvent, ElementState, KeyEvent, MouseScrollDelta},
    keyboard::{KeyCode, PhysicalKey},
};

use super::orbit_camera::OrbitCamera;

/// Primary mouse button as reported by raw device events
const PRIMARY_BUTTON: u32 = 0;

/// A camera movement derived from user input
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraGesture {
    /// Yaw and pitch deltas in radians
    Orbit { yaw: f32, pitch: f32 },
    /// Screen-space pan, scaled by the camera distance when applied
    Pan { right: f32, up: f32 },
    /// Distance change before the camera's logarithmic correction
    Zoom(f32),
    Reset,
}

impl CameraGesture {
    pub fn apply(self, camera: &mut OrbitCamera) {
        match self {
            CameraGesture::Orbit { yaw, pitch } => {
                camera.add_yaw(yaw);
                camera.add_pitch(pitch);
            }
            CameraGesture::Pan { right, up } => camera.pan((right, up)),
            CameraGesture::Zoom(amount) => camera.add_distance(amount),
            CameraGesture::Reset => {
                log::debug!("Camera reset to its initial pose");
                camera.reset_to_default();
            }
        }
    }
}

/// What a mouse drag currently does
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DragMode {
    #[default]
    Idle,
    Orbit,
    Pan,
}

/// Drag to orbit, Shift-drag to pan, wheel to zoom, Shift+C to reset
pub struct CameraController {
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub pan_speed: f32,
    button_down: bool,
    shift_down: bool,
}

impl CameraController {
    pub fn new(rotate_speed: f32, zoom_speed: f32) -> Self {
        Self {
            rotate_speed,
            zoom_speed,
            pan_speed: 0.01,
            button_down: false,
            shift_down: false,
        }
    }

    pub fn drag_mode(&self) -> DragMode {
        match (self.button_down, self.shift_down) {
            (false, _) => DragMode::Idle,
            (true, false) => DragMode::Orbit,
            (true, true) => DragMode::Pan,
        }
    }

    /// Track button state and turn wheel or motion events into a gesture
    pub fn device_gesture(&mut self, event: &DeviceEvent) -> Option<CameraGesture> {
        match event {
            DeviceEvent::Button {
                button: PRIMARY_BUTTON,
                state,
            } => {
                self.button_down = state.is_pressed();
                None
            }
            DeviceEvent::MouseWheel { delta } => Some(self.scroll_gesture(delta)),
            DeviceEvent::MouseMotion { delta: (dx, dy) } => self.drag_gesture(*dx, *dy),
            _ => None,
        }
    }

    /// Track Shift and map Shift+C to a reset
    pub fn key_gesture(&mut self, key: PhysicalKey, state: ElementState) -> Option<CameraGesture> {
        match key {
            PhysicalKey::Code(KeyCode::ShiftLeft | KeyCode::ShiftRight) => {
                self.shift_down = state.is_pressed();
                None
            }
            PhysicalKey::Code(KeyCode::KeyC) if self.shift_down && state.is_pressed() => {
                Some(CameraGesture::Reset)
            }
            _ => None,
        }
    }

    /// Scrolling up moves the camera closer
    pub fn scroll_gesture(&self, delta: &MouseScrollDelta) -> CameraGesture {
        let lines = match delta {
            MouseScrollDelta::LineDelta(_, y) => *y,
            MouseScrollDelta::PixelDelta(PhysicalPosition { y, .. }) => *y as f32,
        };
        CameraGesture::Zoom(-lines * self.zoom_speed)
    }

    pub fn drag_gesture(&self, dx: f64, dy: f64) -> Option<CameraGesture> {
        let (dx, dy) = (dx as f32, dy as f32);
        match self.drag_mode() {
            DragMode::Idle => None,
            DragMode::Orbit => Some(CameraGesture::Orbit {
                yaw: -dx * self.rotate_speed,
                pitch: dy * self.rotate_speed,
            }),
            DragMode::Pan => Some(CameraGesture::Pan {
                right: -dx * self.pan_speed,
                up: dy * self.pan_speed,
            }),
        }
    }

    /// Returns true when the camera moved
    pub fn process_events(&mut self, event: &DeviceEvent, camera: &mut OrbitCamera) -> bool {
        match self.device_gesture(event) {
            Some(gesture) => {
                gesture.apply(camera);
                true
            }
            None => false,
        }
    }

    pub fn process_keyed_events(&mut self, event: &KeyEvent, camera: &mut OrbitCamera) {
        if let Some(gesture) = self.key_gesture(event.physical_key, event.state) {
            gesture.apply(camera);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::Vector3;

    fn camera() -> OrbitCamera {
        OrbitCamera::looking_at(Vector3::new(0.0, 10.0, 100.0), Vector3::new(0.0, 0.0, 0.0), 75.0, 1.0)
    }

    fn press(controller: &mut CameraController) {
        controller.device_gesture(&DeviceEvent::Button {
            button: PRIMARY_BUTTON,
            state: ElementState::Pressed,
        });
    }

    #[test]
    fn test_motion_without_button_is_ignored() {
        let mut controller = CameraController::new(0.005, 0.5);
        let event = DeviceEvent::MouseMotion { delta: (10.0, 4.0) };
        assert_eq!(controller.device_gesture(&event), None);
        assert_eq!(controller.drag_mode(), DragMode::Idle);
    }

    #[test]
    fn test_drag_orbits_and_shift_drag_pans() {
        let mut controller = CameraController::new(0.005, 0.5);
        press(&mut controller);
        assert_eq!(controller.drag_mode(), DragMode::Orbit);
        match controller.drag_gesture(10.0, -4.0) {
            Some(CameraGesture::Orbit { yaw, pitch }) => {
                assert!((yaw + 0.05).abs() < 1e-6);
                assert!((pitch + 0.02).abs() < 1e-6);
            }
            other => panic!("expected an orbit, got {other:?}"),
        }

        controller.key_gesture(PhysicalKey::Code(KeyCode::ShiftLeft), ElementState::Pressed);
        assert_eq!(controller.drag_mode(), DragMode::Pan);
        match controller.drag_gesture(10.0, 0.0) {
            Some(CameraGesture::Pan { right, up }) => {
                assert!((right + 0.1).abs() < 1e-6);
                assert_eq!(up, 0.0);
            }
            other => panic!("expected a pan, got {other:?}"),
        }

        controller.device_gesture(&DeviceEvent::Button {
            button: PRIMARY_BUTTON,
            state: ElementState::Released,
        });
        assert_eq!(controller.drag_gesture(10.0, 0.0), None);
    }

    #[test]
    fn test_scroll_up_zooms_in() {
        let controller = CameraController::new(0.005, 0.5);
        let gesture = controller.scroll_gesture(&MouseScrollDelta::LineDelta(0.0, 2.0));
        assert_eq!(gesture, CameraGesture::Zoom(-1.0));

        let mut camera = camera();
        let before = camera.distance;
        gesture.apply(&mut camera);
        assert!(camera.distance < before);
    }

    #[test]
    fn test_shift_c_resets_the_camera() {
        let mut controller = CameraController::new(0.005, 0.5);
        let c = PhysicalKey::Code(KeyCode::KeyC);
        assert_eq!(controller.key_gesture(c, ElementState::Pressed), None);

        controller.key_gesture(PhysicalKey::Code(KeyCode::ShiftRight), ElementState::Pressed);
        assert_eq!(controller.key_gesture(c, ElementState::Released), None);
        assert_eq!(controller.key_gesture(c, ElementState::Pressed), Some(CameraGesture::Reset));

        let mut camera = camera();
        let initial = camera.eye;
        CameraGesture::Orbit { yaw: 0.4, pitch: 0.1 }.apply(&mut camera);
        assert!((camera.eye - initial).x.abs() > 1.0);
        CameraGesture::Reset.apply(&mut camera);
        assert!((camera.eye.x - initial.x).abs() < 1e-4);
        assert!((camera.eye.z - initial.z).abs() < 1e-4);
    }

    #[test]
    fn test_process_events_reports_camera_motion() {
        let mut controller = CameraController::new(0.005, 0.5);
        let mut camera = camera();
        let motion = DeviceEvent::MouseMotion { delta: (20.0, 0.0) };
        assert!(!controller.process_events(&motion, &mut camera));

        press(&mut controller);
        let yaw = camera.yaw;
        assert!(controller.process_events(&motion, &mut camera));
        assert!((camera.yaw - (yaw - 0.1)).abs() < 1e-6);
    }
}
