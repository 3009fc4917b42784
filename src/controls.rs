//! Keyboard bindings for the room viewer.

use glam::Vec3;

use crate::camera::CameraMovement;
use crate::input::{KeyCode, NamedKey};
use crate::transform::Axis;

/// What a key does while it is held, applied once per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HeldAction {
    Move(CameraMovement),
    /// Increase rotation about an axis and make it the active axis.
    Rotate(Axis),
    /// Decrease rotation about the active axis.
    RotateBack,
    Translate(Axis, f32),
    Scale(Axis, f32),
    /// Direction the look-at eye moves in, scaled by speed and frame time.
    MoveEye(Vec3),
    MoveTarget(Vec3),
    SetUp(Vec3),
}

/// What a key does once per press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressAction {
    CycleFanSpeed,
    ToggleView,
    Quit,
}

/// Held-key bindings in the order they are applied each frame. When two held
/// keys touch the same state, the later binding wins: Z over Y for the active
/// axis, 9 over 8 over 7 for the look-at up vector. `R` comes before `Y`/`Z`
/// so rotating back uses the axis that was active before this frame.
pub const HELD_BINDINGS: [(KeyCode, HeldAction); 34] = {
    use HeldAction::*;
    [
        (KeyCode::Character('W'), Move(CameraMovement::Forward)),
        (KeyCode::Character('S'), Move(CameraMovement::Backward)),
        (KeyCode::Character('A'), Move(CameraMovement::Left)),
        (KeyCode::Character('D'), Move(CameraMovement::Right)),
        (KeyCode::Digit(1), Move(CameraMovement::YawRight)),
        (KeyCode::Digit(2), Move(CameraMovement::YawLeft)),
        (KeyCode::Character('R'), RotateBack),
        (KeyCode::Character('L'), Translate(Axis::X, 1.0)),
        (KeyCode::Character('J'), Translate(Axis::X, -1.0)),
        (KeyCode::Character('I'), Translate(Axis::Y, 1.0)),
        (KeyCode::Character('K'), Translate(Axis::Y, -1.0)),
        (KeyCode::Character('O'), Translate(Axis::Z, 1.0)),
        (KeyCode::Character('P'), Translate(Axis::Z, -1.0)),
        (KeyCode::Character('C'), Scale(Axis::X, 1.0)),
        (KeyCode::Character('V'), Scale(Axis::X, -1.0)),
        (KeyCode::Character('B'), Scale(Axis::Y, 1.0)),
        (KeyCode::Character('N'), Scale(Axis::Y, -1.0)),
        (KeyCode::Character('M'), Scale(Axis::Z, 1.0)),
        (KeyCode::Character('U'), Scale(Axis::Z, -1.0)),
        (KeyCode::Character('Y'), Rotate(Axis::Y)),
        (KeyCode::Character('Z'), Rotate(Axis::Z)),
        (KeyCode::Character('H'), MoveEye(Vec3::X)),
        (KeyCode::Character('F'), MoveEye(Vec3::NEG_X)),
        (KeyCode::Character('Q'), MoveEye(Vec3::Y)),
        (KeyCode::Character('E'), MoveEye(Vec3::NEG_Y)),
        (KeyCode::Character('T'), MoveEye(Vec3::Z)),
        (KeyCode::Character('G'), MoveEye(Vec3::NEG_Z)),
        (KeyCode::Digit(3), MoveTarget(Vec3::Y)),
        (KeyCode::Digit(4), MoveTarget(Vec3::NEG_Y)),
        (KeyCode::Digit(5), MoveTarget(Vec3::Z)),
        (KeyCode::Digit(6), MoveTarget(Vec3::NEG_Z)),
        (KeyCode::Digit(7), SetUp(Vec3::X)),
        (KeyCode::Digit(8), SetUp(Vec3::Y)),
        (KeyCode::Digit(9), SetUp(Vec3::Z)),
    ]
};

pub const PRESS_BINDINGS: [(KeyCode, PressAction); 3] = [
    (KeyCode::Character('X'), PressAction::CycleFanSpeed),
    (KeyCode::Digit(0), PressAction::ToggleView),
    (KeyCode::Named(NamedKey::Escape), PressAction::Quit),
];

pub fn held_action(key: KeyCode) -> Option<HeldAction> {
    HELD_BINDINGS
        .iter()
        .find(|(bound, _)| *bound == key)
        .map(|&(_, action)| action)
}

pub fn press_action(key: KeyCode) -> Option<PressAction> {
    PRESS_BINDINGS
        .iter()
        .find(|(bound, _)| *bound == key)
        .map(|&(_, action)| action)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_key_is_bound_twice() {
        let keys = ('A'..='Z')
            .map(KeyCode::Character)
            .chain((0..=9).map(KeyCode::Digit))
            .chain(std::iter::once(KeyCode::Named(NamedKey::Escape)));
        for key in keys {
            assert!(
                !(held_action(key).is_some() && press_action(key).is_some()),
                "{key:?} has both a held and a press action"
            );
        }
    }

    #[test]
    fn look_at_camera_has_eye_target_and_up_keys() {
        let count = ('A'..='Z')
            .map(KeyCode::Character)
            .chain((0..=9).map(KeyCode::Digit))
            .filter(|&key| {
                matches!(
                    held_action(key),
                    Some(HeldAction::MoveEye(_) | HeldAction::MoveTarget(_) | HeldAction::SetUp(_))
                )
            })
            .count();
        // Six eye keys, four target keys and three up-vector keys.
        assert_eq!(count, 13);
    }

    #[test]
    fn binding_tables_list_each_key_once() {
        let mut keys: Vec<KeyCode> = HELD_BINDINGS
            .iter()
            .map(|&(key, _)| key)
            .chain(PRESS_BINDINGS.iter().map(|&(key, _)| key))
            .collect();
        let total = keys.len();
        keys.sort_by_key(|key| format!("{key:?}"));
        keys.dedup();
        assert_eq!(keys.len(), total);
    }

    #[test]
    fn overriding_keys_are_applied_last() {
        let position = |key: KeyCode| HELD_BINDINGS.iter().position(|&(bound, _)| bound == key);
        assert!(position(KeyCode::Character('R')) < position(KeyCode::Character('Y')));
        assert!(position(KeyCode::Character('Y')) < position(KeyCode::Character('Z')));
        assert!(position(KeyCode::Digit(7)) < position(KeyCode::Digit(8)));
        assert!(position(KeyCode::Digit(8)) < position(KeyCode::Digit(9)));
    }
}
