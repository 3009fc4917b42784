use glam::{Mat4, Vec3};

use crate::scene::DrawCommand;

/// Speed level and accumulated spin of the ceiling fan.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FanState {
    level: u8,
    angle: f32,
}

impl FanState {
    pub const MAX_LEVEL: u8 = 2;
    /// The angle is reset to zero once it reaches this value.
    pub const WRAP_ANGLE: f32 = 361.0;

    pub fn level(&self) -> u8 {
        self.level
    }

    /// Current spin in degrees.
    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Steps the speed level 0 -> 1 -> 2 -> 0.
    pub fn cycle_speed(&mut self) {
        self.level = (self.level + 1) % (Self::MAX_LEVEL + 1);
    }

    /// Advances the spin by one frame's worth of rotation.
    pub fn advance(&mut self) {
        self.angle += f32::from(self.level);
        if self.angle >= Self::WRAP_ANGLE {
            self.angle = 0.0;
        }
    }
}

/// One rigid piece of the fan, positioned inside its parent frame.
///
/// The local matrix is `Ry * S * T`: the cube is offset first, then scaled,
/// then turned about the fan axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AssemblyPart {
    pub yaw: f32,
    pub scale: Vec3,
    pub offset: Vec3,
}

impl AssemblyPart {
    pub fn local_matrix(&self) -> Mat4 {
        Mat4::from_rotation_y(self.yaw.to_radians())
            * Mat4::from_scale(self.scale)
            * Mat4::from_translation(self.offset)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CeilingFan {
    /// Placement of the down rod in the room.
    pub mount: Vec3,
    pub rod: AssemblyPart,
    pub rod_color: Vec3,
    /// Point the blades spin around, before the spin is applied.
    pub hub: Vec3,
    pub blades: [AssemblyPart; 3],
    pub blade_color: Vec3,
}

pub const CEILING_FAN: CeilingFan = CeilingFan {
    mount: Vec3::new(-0.15, 2.2, 0.0),
    rod: AssemblyPart {
        yaw: 225.0,
        scale: Vec3::new(0.1, 0.5, 0.1),
        offset: Vec3::new(-0.3, -3.0, -0.6),
    },
    rod_color: Vec3::new(0.48, 0.35, 0.0),
    hub: Vec3::new(-0.2, 0.6, 0.0),
    blades: [
        AssemblyPart {
            yaw: 0.0,
            scale: Vec3::new(1.5, 0.2, 0.5),
            offset: Vec3::ZERO,
        },
        AssemblyPart {
            yaw: 90.0,
            scale: Vec3::new(1.5, 0.2, 0.5),
            offset: Vec3::ZERO,
        },
        AssemblyPart {
            yaw: 225.0,
            scale: Vec3::new(1.5, 0.2, 0.5),
            offset: Vec3::new(0.0, 0.0, -0.5),
        },
    ],
    blade_color: Vec3::new(0.0, 0.0, 1.0),
};

impl CeilingFan {
    pub fn part_count(&self) -> usize {
        1 + self.blades.len()
    }

    /// Parent frame of the blades for the given spin angle.
    pub fn spin_matrix(&self, angle: f32) -> Mat4 {
        Mat4::from_rotation_y(angle.to_radians()) * Mat4::from_translation(self.hub)
    }

    pub fn push_draws(&self, root: Mat4, state: &FanState, draws: &mut Vec<DrawCommand>) {
        draws.push(DrawCommand {
            model: root * Mat4::from_translation(self.mount) * self.rod.local_matrix(),
            color: self.rod_color,
        });
        let spin = root * self.spin_matrix(state.angle());
        draws.extend(self.blades.iter().map(|blade| DrawCommand {
            model: spin * blade.local_matrix(),
            color: self.blade_color,
        }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speed_level_cycles_and_never_exceeds_two() {
        let mut fan = FanState::default();
        let mut seen = Vec::new();
        for _ in 0..7 {
            fan.cycle_speed();
            assert!(fan.level() <= FanState::MAX_LEVEL);
            seen.push(fan.level());
        }
        assert_eq!(seen, vec![1, 2, 0, 1, 2, 0, 1]);
    }

    #[test]
    fn stopped_fan_does_not_turn() {
        let mut fan = FanState::default();
        for _ in 0..10 {
            fan.advance();
        }
        assert_eq!(fan.angle(), 0.0);
    }

    #[test]
    fn angle_wraps_at_361_degrees() {
        let mut fan = FanState::default();
        fan.cycle_speed();
        for _ in 0..360 {
            fan.advance();
        }
        assert_eq!(fan.angle(), 360.0);
        fan.advance();
        assert_eq!(fan.angle(), 0.0);
    }

    #[test]
    fn angle_wraps_at_fast_speed_too() {
        let mut fan = FanState::default();
        fan.cycle_speed();
        fan.cycle_speed();
        let mut max = 0.0f32;
        for _ in 0..1_000 {
            fan.advance();
            max = max.max(fan.angle());
        }
        assert!(max < FanState::WRAP_ANGLE);
    }

    #[test]
    fn blades_orbit_the_hub() {
        let fan = CEILING_FAN;
        let origin = fan.spin_matrix(90.0).transform_point3(Vec3::ZERO);
        assert!(origin.abs_diff_eq(Vec3::new(0.0, 0.6, 0.2), 1e-5));

        let still = fan.spin_matrix(0.0).transform_point3(Vec3::ZERO);
        assert!(still.abs_diff_eq(fan.hub, 1e-6));
    }

    #[test]
    fn rod_ignores_spin() {
        let fan = CEILING_FAN;
        let mut still = Vec::new();
        let mut spinning = Vec::new();
        let mut state = FanState::default();
        fan.push_draws(Mat4::IDENTITY, &state, &mut still);
        state.cycle_speed();
        for _ in 0..45 {
            state.advance();
        }
        fan.push_draws(Mat4::IDENTITY, &state, &mut spinning);

        assert_eq!(still.len(), fan.part_count());
        assert_eq!(still[0], spinning[0]);
        assert_ne!(still[1], spinning[1]);
    }
}
