use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// Translate/rotate/scale triple for one placement of the cube.
///
/// Rotation is stored in degrees per axis and applied X, then Y, then Z
/// (outermost first), so the composed matrix is `T * Rx * Ry * Rz * S`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub translation: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        rotation: Vec3::ZERO,
        scale: Vec3::ONE,
    };

    pub const fn new(translation: Vec3, rotation: Vec3, scale: Vec3) -> Self {
        Self {
            translation,
            rotation,
            scale,
        }
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::from_translation(self.translation)
            * Mat4::from_rotation_x(self.rotation.x.to_radians())
            * Mat4::from_rotation_y(self.rotation.y.to_radians())
            * Mat4::from_rotation_z(self.rotation.z.to_radians())
            * Mat4::from_scale(self.scale)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Keyboard-driven transform applied at the scene root.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootTransform {
    transform: Transform,
    active_axis: Axis,
}

impl Default for RootTransform {
    fn default() -> Self {
        Self {
            transform: Transform::IDENTITY,
            active_axis: Axis::Z,
        }
    }
}

impl RootTransform {
    pub const TRANSLATE_STEP: f32 = 0.01;
    pub const SCALE_STEP: f32 = 0.01;
    pub const ROTATE_STEP: f32 = 1.0;
    pub const MIN_SCALE: f32 = 0.05;

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    pub fn active_axis(&self) -> Axis {
        self.active_axis
    }

    pub fn matrix(&self) -> Mat4 {
        self.transform.matrix()
    }

    pub fn translate(&mut self, axis: Axis, sign: f32) {
        *component_mut(&mut self.transform.translation, axis) += sign * Self::TRANSLATE_STEP;
    }

    pub fn scale(&mut self, axis: Axis, sign: f32) {
        let value = component_mut(&mut self.transform.scale, axis);
        *value = (*value + sign * Self::SCALE_STEP).max(Self::MIN_SCALE);
    }

    /// Increments rotation about `axis` and makes it the active axis.
    pub fn rotate_about(&mut self, axis: Axis) {
        self.active_axis = axis;
        *component_mut(&mut self.transform.rotation, axis) += Self::ROTATE_STEP;
    }

    /// Decrements rotation about the active axis.
    pub fn rotate_back(&mut self) {
        *component_mut(&mut self.transform.rotation, self.active_axis) -= Self::ROTATE_STEP;
    }
}

fn component_mut(vector: &mut Vec3, axis: Axis) -> &mut f32 {
    match axis {
        Axis::X => &mut vector.x,
        Axis::Y => &mut vector.y,
        Axis::Z => &mut vector.z,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    #[test]
    fn quarter_turn_about_x_maps_y_onto_z() {
        let transform = Transform::new(Vec3::ZERO, Vec3::new(90.0, 0.0, 0.0), Vec3::ONE);
        let mapped = transform.matrix() * Vec4::new(0.0, 1.0, 0.0, 0.0);
        assert!(mapped.truncate().abs_diff_eq(Vec3::Z, 1e-6));
    }

    #[test]
    fn scale_applies_before_translation() {
        let transform = Transform::new(Vec3::new(1.0, 2.0, 3.0), Vec3::ZERO, Vec3::splat(2.0));
        let point = transform.matrix().transform_point3(Vec3::ONE);
        assert!(point.abs_diff_eq(Vec3::new(3.0, 4.0, 5.0), 1e-6));
    }

    #[test]
    fn rotate_back_uses_last_selected_axis() {
        let mut root = RootTransform::default();
        assert_eq!(root.active_axis(), Axis::Z);
        root.rotate_back();
        assert_eq!(root.transform().rotation, Vec3::new(0.0, 0.0, -1.0));

        root.rotate_about(Axis::Y);
        root.rotate_back();
        root.rotate_back();
        assert_eq!(root.active_axis(), Axis::Y);
        assert_eq!(root.transform().rotation, Vec3::new(0.0, -1.0, -1.0));
    }

    #[test]
    fn scale_never_collapses() {
        let mut root = RootTransform::default();
        for _ in 0..500 {
            root.scale(Axis::X, -1.0);
        }
        assert_eq!(root.transform().scale.x, RootTransform::MIN_SCALE);
    }

    #[test]
    fn default_root_is_identity() {
        assert_eq!(RootTransform::default().matrix(), Mat4::IDENTITY);
    }
}
