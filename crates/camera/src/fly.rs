use cubefield_input::MoveIntent;
use glam::{Mat4, Vec2, Vec3};
use std::f32::consts::FRAC_PI_2;

/// Near clip plane distance.
pub const NEAR_PLANE: f32 = 0.1;
/// Far clip plane distance, shared by initial setup and resize.
pub const FAR_PLANE: f32 = 1500.0;

/// Fly camera with position, yaw, pitch, and projection parameters.
///
/// Movement is camera-relative on the horizontal plane; vertical movement
/// ignores the look direction. Look input arrives as absolute cursor
/// coordinates, so the camera tracks the previous sample itself.
#[derive(Debug, Clone)]
pub struct FlyCamera {
    pub position: Vec3,
    /// Horizontal look angle in radians.
    pub yaw: f32,
    /// Vertical look angle in radians, clamped to ±π/2.
    pub pitch: f32,
    /// Field of view in degrees.
    pub fov: f32,
    pub aspect: f32,
    /// Movement speed in units per second.
    pub speed: f32,
    /// Movement speed while the sprint key is held.
    pub sprint_speed: f32,
    /// Radians of rotation per pixel of cursor travel.
    pub sensitivity: f32,
    /// Previous cursor sample; `None` until the first mouse-move arrives.
    pub last_cursor: Option<Vec2>,
}

impl Default for FlyCamera {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
            fov: 45.0,
            aspect: 16.0 / 9.0,
            speed: 5.0,
            sprint_speed: 15.0,
            sensitivity: 0.002,
            last_cursor: None,
        }
    }
}

impl FlyCamera {
    /// Accumulate yaw/pitch from an absolute cursor sample.
    ///
    /// The first sample only seeds the previous position, so a cursor that
    /// enters the window far from where it left causes no jump.
    pub fn look(&mut self, x: f32, y: f32) {
        let cursor = Vec2::new(x, y);
        if let Some(prev) = self.last_cursor {
            let delta = cursor - prev;
            self.yaw += delta.x * self.sensitivity;
            self.pitch += delta.y * self.sensitivity;
            self.pitch = self.pitch.clamp(-FRAC_PI_2, FRAC_PI_2);
        }
        self.last_cursor = Some(cursor);
    }

    /// Advance the position by one explicit Euler step.
    ///
    /// Strafe and forward motion are rotated into the horizontal plane by
    /// the current yaw; the vertical axis integrates directly.
    pub fn integrate(&mut self, intent: MoveIntent, sprinting: bool, dt: f32) {
        let speed = if sprinting { self.sprint_speed } else { self.speed };
        let (lr, fb, ud) = (intent.lr as f32, intent.fb as f32, intent.ud as f32);
        let (yaw_sin, yaw_cos) = self.yaw.sin_cos();

        self.position.x += dt * lr * speed * yaw_cos;
        self.position.z += dt * lr * speed * yaw_sin;

        self.position.y += dt * ud * speed;

        self.position.z -= dt * fb * speed * yaw_cos;
        self.position.x += dt * fb * speed * yaw_sin;
    }

    /// Update the aspect ratio from new window dimensions.
    pub fn set_aspect(&mut self, width: u32, height: u32) {
        self.aspect = width as f32 / height as f32;
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov.to_radians(), self.aspect, NEAR_PLANE, FAR_PLANE)
    }

    /// View transform: pitch and yaw rotations applied to the accumulated
    /// translation. The position integrates with view-space signs, so it is
    /// applied directly rather than negated.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_rotation_x(self.pitch)
            * Mat4::from_rotation_y(self.yaw)
            * Mat4::from_translation(self.position)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_look_sample_changes_no_angle() {
        let mut cam = FlyCamera::default();
        cam.look(640.0, 360.0);
        assert_eq!(cam.yaw, 0.0);
        assert_eq!(cam.pitch, 0.0);
    }

    #[test]
    fn second_look_sample_applies_scaled_delta() {
        let mut cam = FlyCamera::default();
        cam.look(100.0, 100.0);
        cam.look(110.0, 95.0);
        assert!((cam.yaw - 10.0 * cam.sensitivity).abs() < 1e-6);
        assert!((cam.pitch - -5.0 * cam.sensitivity).abs() < 1e-6);
    }

    #[test]
    fn pitch_stays_clamped_over_any_sample_sequence() {
        let mut cam = FlyCamera::default();
        cam.look(0.0, 0.0);
        // Drag far down, then far up, in uneven steps.
        for i in 1..200 {
            cam.look(i as f32 * 3.0, i as f32 * 50.0);
            assert!(cam.pitch <= FRAC_PI_2);
            assert!(cam.pitch >= -FRAC_PI_2);
        }
        for i in 1..400 {
            cam.look(0.0, -(i as f32) * 37.0);
            assert!(cam.pitch <= FRAC_PI_2);
            assert!(cam.pitch >= -FRAC_PI_2);
        }
    }

    #[test]
    fn resize_sets_aspect_exactly() {
        let mut cam = FlyCamera::default();
        cam.set_aspect(1024, 768);
        assert_eq!(cam.aspect, 1024.0 / 768.0);
        cam.set_aspect(333, 444);
        assert_eq!(cam.aspect, 333.0 / 444.0);
    }

    #[test]
    fn integration_at_zero_yaw_moves_along_axes() {
        let mut cam = FlyCamera::default();
        let dt = 0.5;

        cam.integrate(MoveIntent { lr: 1, fb: 0, ud: 0 }, false, dt);
        assert!((cam.position.x - dt * cam.speed).abs() < 1e-6);
        assert!(cam.position.z.abs() < 1e-6);

        let mut cam = FlyCamera::default();
        cam.integrate(MoveIntent { lr: 0, fb: 1, ud: 0 }, false, dt);
        assert!((cam.position.z + dt * cam.speed).abs() < 1e-6);
        assert!(cam.position.x.abs() < 1e-6);

        let mut cam = FlyCamera::default();
        cam.integrate(MoveIntent { lr: 0, fb: 0, ud: -1 }, false, dt);
        assert!((cam.position.y + dt * cam.speed).abs() < 1e-6);
    }

    #[test]
    fn yaw_rotates_horizontal_motion() {
        let mut cam = FlyCamera {
            yaw: FRAC_PI_2,
            ..FlyCamera::default()
        };
        cam.integrate(MoveIntent { lr: 1, fb: 0, ud: 0 }, false, 1.0);
        // cos(π/2) ≈ 0, sin(π/2) = 1: strafe lands on the z axis.
        assert!(cam.position.x.abs() < 1e-5);
        assert!((cam.position.z - cam.speed).abs() < 1e-5);
    }

    #[test]
    fn sprint_uses_sprint_speed() {
        let mut cam = FlyCamera::default();
        cam.integrate(MoveIntent { lr: 1, fb: 0, ud: 0 }, true, 1.0);
        assert!((cam.position.x - cam.sprint_speed).abs() < 1e-6);
    }

    #[test]
    fn rest_intent_leaves_position_unchanged() {
        let mut cam = FlyCamera::default();
        cam.integrate(MoveIntent::default(), false, 1.0);
        assert_eq!(cam.position, Vec3::ZERO);
    }

    #[test]
    fn matrices_are_finite() {
        let cam = FlyCamera {
            position: Vec3::new(3.0, 4.0, 5.0),
            yaw: 0.7,
            pitch: -0.3,
            ..FlyCamera::default()
        };
        let vp = cam.view_projection();
        assert!(vp.to_cols_array().iter().all(|v| v.is_finite()));
    }
}
