//! Cameras that turn input deltas into view and projection matrices.
//!
//! [`FreeCamera`] is the first-person camera driven by WASD and the mouse.
//! [`LookAtCamera`] is a simpler eye/target/up camera whose parameters are
//! nudged directly from the keyboard.

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

pub const NEAR_PLANE: f32 = 0.1;
pub const FAR_PLANE: f32 = 100.0;

/// Pitch is kept strictly inside ±90° so `front` never lines up with world up.
pub const PITCH_LIMIT: f32 = 89.0;
pub const MIN_ZOOM: f32 = 1.0;
pub const MAX_ZOOM: f32 = 45.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CameraMovement {
    Forward,
    Backward,
    Left,
    Right,
    YawRight,
    YawLeft,
}

/// Tunables for [`FreeCamera`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraSettings {
    pub yaw: f32,
    pub pitch: f32,
    /// Units per second.
    pub speed: f32,
    /// Degrees per pixel of mouse motion.
    pub sensitivity: f32,
    /// Degrees per second for keyboard yaw.
    pub yaw_rate: f32,
    pub zoom: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            yaw: -90.0,
            pitch: 0.0,
            speed: 2.5,
            sensitivity: 0.1,
            yaw_rate: 60.0,
            zoom: MAX_ZOOM,
        }
    }
}

/// First-person camera with yaw/pitch orientation.
#[derive(Debug, Clone, PartialEq)]
pub struct FreeCamera {
    position: Vec3,
    front: Vec3,
    up: Vec3,
    right: Vec3,
    world_up: Vec3,
    yaw: f32,
    pitch: f32,
    zoom: f32,
    settings: CameraSettings,
}

impl FreeCamera {
    pub fn new(position: Vec3) -> Self {
        Self::with_settings(position, CameraSettings::default())
    }

    pub fn with_settings(position: Vec3, settings: CameraSettings) -> Self {
        let mut camera = Self {
            position,
            front: Vec3::NEG_Z,
            up: Vec3::Y,
            right: Vec3::X,
            world_up: Vec3::Y,
            yaw: settings.yaw,
            pitch: settings.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT),
            zoom: settings.zoom.clamp(MIN_ZOOM, MAX_ZOOM),
            settings,
        };
        camera.update_vectors();
        camera
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn front(&self) -> Vec3 {
        self.front
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Vertical field of view in degrees.
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    pub fn projection(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(
            self.zoom.to_radians(),
            aspect.max(0.01),
            NEAR_PLANE,
            FAR_PLANE,
        )
    }

    pub fn process_keyboard(&mut self, movement: CameraMovement, delta_time: f32) {
        let velocity = self.settings.speed * delta_time;
        match movement {
            CameraMovement::Forward => self.position += self.front * velocity,
            CameraMovement::Backward => self.position -= self.front * velocity,
            CameraMovement::Left => self.position -= self.right * velocity,
            CameraMovement::Right => self.position += self.right * velocity,
            CameraMovement::YawRight => {
                self.yaw += self.settings.yaw_rate * delta_time;
                self.update_vectors();
            }
            CameraMovement::YawLeft => {
                self.yaw -= self.settings.yaw_rate * delta_time;
                self.update_vectors();
            }
        }
    }

    /// `y_offset` is positive when the cursor moves up the screen.
    pub fn process_mouse_movement(&mut self, x_offset: f32, y_offset: f32, constrain_pitch: bool) {
        self.yaw += x_offset * self.settings.sensitivity;
        self.pitch += y_offset * self.settings.sensitivity;
        if constrain_pitch {
            self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        }
        self.update_vectors();
    }

    pub fn process_mouse_scroll(&mut self, y_offset: f32) {
        self.zoom = (self.zoom - y_offset).clamp(MIN_ZOOM, MAX_ZOOM);
    }

    fn update_vectors(&mut self) {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        self.front = Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        )
        .normalize();
        self.right = self.front.cross(self.world_up).normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}

/// Eye/target/up camera kept for experimenting with view parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LookAtCamera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
}

impl Default for LookAtCamera {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 1.0, 3.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
        }
    }
}

impl LookAtCamera {
    /// Units per second for eye and target adjustments.
    pub const NUDGE_SPEED: f32 = 2.5;

    pub fn move_eye(&mut self, delta: Vec3) {
        self.eye += delta;
    }

    pub fn move_target(&mut self, delta: Vec3) {
        self.target += delta;
    }

    pub fn set_up(&mut self, up: Vec3) {
        self.up = up;
    }

    pub fn view_matrix(&self) -> Mat4 {
        let forward = self.target - self.eye;
        let forward = if forward.length_squared() > f32::EPSILON {
            forward
        } else {
            Vec3::NEG_Z
        };
        let up = if forward.cross(self.up).length_squared() > f32::EPSILON {
            self.up
        } else {
            fallback_up(forward)
        };
        Mat4::look_at_rh(self.eye, self.eye + forward, up)
    }
}

// World axis least aligned with `forward`.
fn fallback_up(forward: Vec3) -> Vec3 {
    let abs = forward.abs();
    if abs.x <= abs.y && abs.x <= abs.z {
        Vec3::X
    } else if abs.y <= abs.z {
        Vec3::Y
    } else {
        Vec3::Z
    }
}
