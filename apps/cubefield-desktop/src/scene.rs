use crate::settings::CameraSettings;
use cubefield_camera::FlyCamera;
use cubefield_events::{EventHandler, Key};
use cubefield_input::{Bindings, KeyState, MoveIntent};

/// Frames between fps log lines.
const FPS_REPORT_INTERVAL: u32 = 10_000;
/// Per-frame step of the pulsing color channel.
const PULSE_STEP: f32 = 0.001;
/// Degrees of FOV change per second while a bracket key is held.
const FOV_RATE: f32 = 10.0;

/// The demo's single layer: owns the camera and the live input state,
/// consumes events, and advances everything once per frame.
pub struct Scene {
    pub camera: FlyCamera,
    keys: KeyState,
    bindings: Bindings,
    pulse: f32,
    pulse_step: f32,
    frame_count: u32,
}

impl Scene {
    pub fn new(camera: &CameraSettings) -> Self {
        Self {
            camera: FlyCamera {
                fov: camera.fov,
                speed: camera.speed,
                sprint_speed: camera.sprint_speed,
                sensitivity: camera.sensitivity,
                ..FlyCamera::default()
            },
            keys: KeyState::new(),
            bindings: Bindings::default(),
            pulse: 0.0,
            pulse_step: PULSE_STEP,
            frame_count: 0,
        }
    }

    /// Per-frame update: derive intent from held keys, integrate the
    /// camera, apply FOV keys, and advance the pulse channel.
    pub fn update(&mut self, dt: f32) {
        let intent = MoveIntent::from_keys(&self.keys, &self.bindings);
        let sprinting = self.keys.is_held(self.bindings.sprint);
        self.camera.integrate(intent, sprinting, dt);

        if self.keys.is_held(Key::BracketLeft) {
            self.camera.fov -= FOV_RATE * dt;
            tracing::info!(fov = self.camera.fov, "fov");
        }
        if self.keys.is_held(Key::BracketRight) {
            self.camera.fov += FOV_RATE * dt;
            tracing::info!(fov = self.camera.fov, "fov");
        }

        self.pulse += self.pulse_step;
        if self.pulse > 1.0 || self.pulse < 0.0 {
            self.pulse_step = -self.pulse_step;
        }

        self.frame_count += 1;
        if self.frame_count == FPS_REPORT_INTERVAL {
            tracing::info!(fps = 1.0 / dt, "frame rate");
            self.frame_count = 0;
        }
    }

    /// Cube color for this frame; the red channel carries the pulse.
    pub fn tint(&self) -> [f32; 4] {
        [self.pulse, 0.35, 0.85, 1.0]
    }
}

impl EventHandler for Scene {
    fn on_window_resize(&mut self, width: u32, height: u32) {
        self.camera.set_aspect(width, height);
    }

    fn on_key_pressed(&mut self, key: Key) {
        self.keys.press(key);
    }

    fn on_key_released(&mut self, key: Key) {
        self.keys.release(key);
    }

    fn on_mouse_moved(&mut self, x: f32, y: f32) {
        self.camera.look(x, y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cubefield_events::Event;

    fn scene() -> Scene {
        Scene::new(&CameraSettings::default())
    }

    #[test]
    fn resize_event_updates_camera_aspect() {
        let mut scene = scene();
        scene.handle(&Event::WindowResize {
            width: 640,
            height: 480,
        });
        assert_eq!(scene.camera.aspect, 640.0 / 480.0);
    }

    #[test]
    fn held_forward_key_moves_the_camera() {
        let mut scene = scene();
        scene.handle(&Event::KeyPressed { key: Key::W });
        scene.update(0.1);
        assert_ne!(scene.camera.position, glam::Vec3::ZERO);
        scene.handle(&Event::KeyReleased { key: Key::W });
        let before = scene.camera.position;
        scene.update(0.1);
        assert_eq!(scene.camera.position, before);
    }

    #[test]
    fn mouse_events_feed_the_camera() {
        let mut scene = scene();
        scene.handle(&Event::MouseMoved { x: 10.0, y: 10.0 });
        scene.handle(&Event::MouseMoved { x: 20.0, y: 10.0 });
        assert!(scene.camera.yaw != 0.0);
    }

    #[test]
    fn bracket_keys_change_fov() {
        let mut scene = scene();
        let fov = scene.camera.fov;
        scene.handle(&Event::KeyPressed {
            key: Key::BracketRight,
        });
        scene.update(1.0);
        assert!((scene.camera.fov - (fov + FOV_RATE)).abs() < 1e-4);
    }

    #[test]
    fn pulse_ping_pongs_within_bounds() {
        let mut scene = scene();
        for _ in 0..5000 {
            scene.update(0.016);
            let pulse = scene.tint()[0];
            assert!(pulse >= -PULSE_STEP && pulse <= 1.0 + PULSE_STEP);
        }
    }
}
