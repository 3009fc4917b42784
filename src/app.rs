use glam::{Vec2, Vec3};
use log::{debug, info};

use crate::camera::{FreeCamera, LookAtCamera};
use crate::config::CliOptions;
use crate::controls::{HeldAction, PressAction, HELD_BINDINGS, PRESS_BINDINGS};
use crate::fan::FanState;
use crate::input::InputState;
use crate::render::FrameUniforms;
use crate::scene::{DrawCommand, Room};
use crate::transform::RootTransform;

/// Which camera drives the view matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    FreeLook,
    LookAt,
}

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone)]
pub struct Frame {
    pub uniforms: FrameUniforms,
    pub draws: Vec<DrawCommand>,
}

/// Mutable state of the room viewer, independent of any window or GPU.
#[derive(Debug, Clone)]
pub struct RoomState {
    pub camera: FreeCamera,
    pub look_at: LookAtCamera,
    pub root: RootTransform,
    pub fan: FanState,
    pub view_mode: ViewMode,
    room: Room,
    face_tint: f32,
    quit_requested: bool,
}

pub const START_POSITION: Vec3 = Vec3::new(1.5, 0.0, 3.0);

impl RoomState {
    pub fn new(options: &CliOptions) -> Self {
        Self {
            camera: FreeCamera::new(START_POSITION),
            look_at: LookAtCamera::default(),
            root: RootTransform::default(),
            fan: FanState::default(),
            view_mode: if options.look_at {
                ViewMode::LookAt
            } else {
                ViewMode::FreeLook
            },
            room: Room::default(),
            face_tint: if options.face_colors { 1.0 } else { 0.0 },
            quit_requested: false,
        }
    }

    pub fn room(&self) -> &Room {
        &self.room
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Applies this frame's input and advances the fan.
    ///
    /// Bindings are applied in table order, so simultaneous keys always
    /// resolve the same way.
    pub fn update(&mut self, input: &mut InputState, delta_time: f32) {
        for &(key, action) in &PRESS_BINDINGS {
            if input.was_pressed(key) {
                self.apply_press(action);
            }
        }
        for &(key, action) in &HELD_BINDINGS {
            if input.is_key_down(key) {
                self.apply_held(action, delta_time);
            }
        }

        let motion = input.take_mouse_motion();
        if motion != Vec2::ZERO {
            // Screen Y grows downward; pitch grows upward.
            self.camera.process_mouse_movement(motion.x, -motion.y, true);
        }
        let scroll = input.take_scroll();
        if scroll != 0.0 {
            self.camera.process_mouse_scroll(scroll);
        }

        self.fan.advance();
        input.end_frame();
    }

    pub fn frame(&self, aspect: f32) -> Frame {
        let view = match self.view_mode {
            ViewMode::FreeLook => self.camera.view_matrix(),
            ViewMode::LookAt => self.look_at.view_matrix(),
        };
        Frame {
            uniforms: FrameUniforms {
                projection: self.camera.projection(aspect),
                view,
                face_tint: self.face_tint,
            },
            draws: self.room.draw_list(self.root.matrix(), &self.fan),
        }
    }

    fn apply_press(&mut self, action: PressAction) {
        match action {
            PressAction::CycleFanSpeed => {
                self.fan.cycle_speed();
                info!("fan speed level {}", self.fan.level());
            }
            PressAction::ToggleView => {
                self.view_mode = match self.view_mode {
                    ViewMode::FreeLook => ViewMode::LookAt,
                    ViewMode::LookAt => ViewMode::FreeLook,
                };
                info!("view mode {:?}", self.view_mode);
            }
            PressAction::Quit => self.quit_requested = true,
        }
    }

    fn apply_held(&mut self, action: HeldAction, delta_time: f32) {
        let nudge = LookAtCamera::NUDGE_SPEED * delta_time;
        match action {
            HeldAction::Move(movement) => self.camera.process_keyboard(movement, delta_time),
            HeldAction::Rotate(axis) => self.root.rotate_about(axis),
            HeldAction::RotateBack => self.root.rotate_back(),
            HeldAction::Translate(axis, sign) => self.root.translate(axis, sign),
            HeldAction::Scale(axis, sign) => self.root.scale(axis, sign),
            HeldAction::MoveEye(direction) => self.look_at.move_eye(direction * nudge),
            HeldAction::MoveTarget(direction) => self.look_at.move_target(direction * nudge),
            HeldAction::SetUp(up) => {
                if self.look_at.up != up {
                    debug!("look-at up vector {up}");
                }
                self.look_at.set_up(up);
            }
        }
    }
}

/// Width over height, guarding against a minimized window.
pub fn aspect_ratio(width: u32, height: u32) -> f32 {
    if height == 0 {
        1.0
    } else {
        width as f32 / height as f32
    }
}
