use std::fmt;

use glam::{Mat4, Vec3};

use crate::fan::{CeilingFan, FanState, CEILING_FAN};
use crate::transform::Transform;

/// Piece of furniture (or part of the room shell) an instance belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Group {
    Bed,
    Almirah,
    Table,
    Chair,
    Structure,
}

impl Group {
    pub const ALL: [Group; 5] = [
        Group::Bed,
        Group::Almirah,
        Group::Table,
        Group::Chair,
        Group::Structure,
    ];
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Group::Bed => "bed",
            Group::Almirah => "almirah",
            Group::Table => "table",
            Group::Chair => "chair",
            Group::Structure => "walls and floor",
        })
    }
}

/// One placement of the shared cube with a flat color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Instance {
    pub group: Group,
    pub name: &'static str,
    pub transform: Transform,
    pub color: Vec3,
}

/// Model matrix and color for a single draw of the cube.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCommand {
    pub model: Mat4,
    pub color: Vec3,
}

// Every piece in the room is modelled lying on its back: a quarter turn
// about X turns the cube's local Y into world Z.
const LAID_FLAT: Vec3 = Vec3::new(90.0, 0.0, 0.0);

const fn part(
    group: Group,
    name: &'static str,
    translation: [f32; 3],
    scale: [f32; 3],
    color: [f32; 3],
) -> Instance {
    Instance {
        group,
        name,
        transform: Transform::new(
            Vec3::new(translation[0], translation[1], translation[2]),
            LAID_FLAT,
            Vec3::new(scale[0], scale[1], scale[2]),
        ),
        color: Vec3::new(color[0], color[1], color[2]),
    }
}

const BED_FRAME: [f32; 3] = [0.6, 0.2, 0.4];
const PILLOW: [f32; 3] = [1.0, 0.6, 0.8];
const WOOD: [f32; 3] = [0.6, 0.35, 0.2];
const CHAIR_WOOD: [f32; 3] = [0.8, 0.5, 0.2];
const PLASTER: [f32; 3] = [0.9, 0.9, 0.9];
const WALL: [f32; 3] = [1.0, 0.9, 0.9];
const PANEL: [f32; 3] = [1.0, 0.0, 0.9];

/// Furniture and room shell, in draw order.
pub const FURNITURE: [Instance; 35] = [
    part(Group::Bed, "bed frame", [0.5, -0.85, -1.0], [2.0, 3.0, 0.5], BED_FRAME),
    part(Group::Bed, "right pillow", [1.05, -0.7, -1.0], [0.8, 0.5, 0.5], PILLOW),
    part(Group::Bed, "left pillow", [0.58, -0.7, -1.0], [0.8, 0.5, 0.5], PILLOW),
    part(Group::Almirah, "back panel", [-1.9, 0.9, -1.0], [0.2, 2.0, 4.0], PILLOW),
    part(Group::Almirah, "top", [-1.9, 0.9, -1.0], [1.0, 2.0, 0.2], BED_FRAME),
    part(Group::Almirah, "upper shelf", [-1.9, 0.5, -1.0], [1.0, 2.0, 0.2], BED_FRAME),
    part(Group::Almirah, "middle shelf", [-1.9, 0.05, -1.0], [1.0, 2.0, 0.2], BED_FRAME),
    part(Group::Almirah, "lower shelf", [-1.9, -0.45, -1.0], [1.0, 2.0, 0.2], BED_FRAME),
    part(Group::Almirah, "base", [-1.9, -0.9, -1.0], [1.0, 2.0, 0.2], BED_FRAME),
    part(Group::Almirah, "rear side", [-1.9, 0.9, -1.0], [1.0, 0.2, 4.0], BED_FRAME),
    part(Group::Almirah, "front side", [-1.9, 0.9, 0.0], [1.0, 0.2, 4.0], BED_FRAME),
    part(Group::Table, "top", [-1.9, -0.1, 1.0], [1.2, 2.0, 0.2], WOOD),
    part(Group::Table, "back left leg", [-1.8, -0.1, 1.0], [0.1, 0.1, 2.0], WOOD),
    part(Group::Table, "back right leg", [-1.4, -0.1, 1.0], [0.1, 0.1, 2.0], WOOD),
    part(Group::Table, "front left leg", [-1.8, -0.1, 1.9], [0.1, 0.1, 2.0], WOOD),
    part(Group::Table, "front right leg", [-1.4, -0.1, 1.9], [0.1, 0.1, 2.0], WOOD),
    part(Group::Chair, "seat", [-0.9, -0.6, 1.0], [0.9, 0.9, 0.1], CHAIR_WOOD),
    part(Group::Chair, "back left leg", [-0.8, -0.6, 1.0], [0.1, 0.1, 1.0], CHAIR_WOOD),
    part(Group::Chair, "back right leg", [-0.55, -0.6, 1.0], [0.1, 0.1, 1.0], CHAIR_WOOD),
    part(Group::Chair, "front right leg", [-0.55, -0.6, 1.4], [0.1, 0.1, 1.0], CHAIR_WOOD),
    part(Group::Chair, "front left leg", [-0.8, -0.6, 1.4], [0.1, 0.1, 1.0], CHAIR_WOOD),
    part(Group::Chair, "front backrest post", [-0.55, 0.0, 1.4], [0.1, 0.1, 2.0], CHAIR_WOOD),
    part(Group::Chair, "rear backrest post", [-0.55, 0.0, 1.0], [0.1, 0.1, 2.0], CHAIR_WOOD),
    part(Group::Chair, "upper backrest rail", [-0.55, 0.0, 1.0], [0.1, 0.9, 0.06], CHAIR_WOOD),
    part(Group::Chair, "lower backrest rail", [-0.55, -0.1, 1.0], [0.1, 0.9, 0.06], CHAIR_WOOD),
    part(Group::Structure, "floor", [-2.4, -1.1, -2.0], [9.0, 8.0, 0.2], PLASTER),
    part(Group::Structure, "left wall", [-2.4, 0.9, -2.0], [0.3, 8.0, 4.0], WALL),
    part(Group::Structure, "right wall", [1.95, 0.9, -2.0], [0.3, 8.0, 4.0], WALL),
    part(Group::Structure, "back wall skirting", [-2.3, -0.6, -2.0], [8.8, 0.3, 1.0], PANEL),
    part(Group::Structure, "back wall cornice", [-2.3, 0.91, -2.0], [8.8, 0.3, 1.0], PANEL),
    part(Group::Structure, "left back panel", [-2.3, 0.8, -2.0], [3.0, 0.3, 3.0], PANEL),
    part(Group::Structure, "right back panel", [0.8, 0.6, -2.0], [2.5, 0.3, 3.0], PANEL),
    part(Group::Structure, "back panel divider", [0.0, 0.6, -2.0], [0.1, 0.3, 3.0], PANEL),
    part(Group::Structure, "back wall rail", [-2.3, -0.1, -2.0], [8.8, 0.1, 0.1], PANEL),
    part(Group::Structure, "ceiling", [-2.4, 1.0, -2.0], [9.0, 8.0, 0.2], PLASTER),
];

/// The furnished room: a fixed instance table plus the ceiling fan.
#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    instances: Vec<Instance>,
    fan: CeilingFan,
}

impl Default for Room {
    fn default() -> Self {
        Self {
            instances: FURNITURE.to_vec(),
            fan: CEILING_FAN,
        }
    }
}

impl Room {
    pub fn instances(&self) -> &[Instance] {
        &self.instances
    }

    pub fn fan(&self) -> &CeilingFan {
        &self.fan
    }

    pub fn draw_count(&self) -> usize {
        self.instances.len() + self.fan.part_count()
    }

    pub fn group_count(&self, group: Group) -> usize {
        self.instances
            .iter()
            .filter(|instance| instance.group == group)
            .count()
    }

    /// Builds this frame's draws with `root` applied to every instance.
    pub fn draw_list(&self, root: Mat4, fan: &FanState) -> Vec<DrawCommand> {
        let mut draws = Vec::with_capacity(self.draw_count());
        draws.extend(self.instances.iter().map(|instance| DrawCommand {
            model: root * instance.transform.matrix(),
            color: instance.color,
        }));
        self.fan.push_draws(root, fan, &mut draws);
        draws
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn room_draws_furniture_then_fan() {
        let room = Room::default();
        let draws = room.draw_list(Mat4::IDENTITY, &FanState::default());
        assert_eq!(draws.len(), 39);
        assert_eq!(draws.len(), room.draw_count());
        assert_eq!(draws[0].color, Vec3::new(0.6, 0.2, 0.4));
        assert_eq!(draws[35].color, room.fan().rod_color);
        assert!(draws[36..]
            .iter()
            .all(|draw| draw.color == room.fan().blade_color));
    }

    #[test]
    fn identity_root_keeps_instance_matrices() {
        let room = Room::default();
        let draws = room.draw_list(Mat4::IDENTITY, &FanState::default());
        for (draw, instance) in draws.iter().zip(room.instances()) {
            assert_eq!(draw.model, instance.transform.matrix());
        }
    }

    #[test]
    fn root_translation_moves_every_draw() {
        let room = Room::default();
        let fan = FanState::default();
        let offset = Vec3::new(0.0, 1.0, 0.0);
        let base = room.draw_list(Mat4::IDENTITY, &fan);
        let moved = room.draw_list(Mat4::from_translation(offset), &fan);
        for (a, b) in base.iter().zip(&moved) {
            let pa = a.model.transform_point3(Vec3::ZERO);
            let pb = b.model.transform_point3(Vec3::ZERO);
            assert!((pb - pa).abs_diff_eq(offset, 1e-5));
        }
    }

    #[test]
    fn groups_cover_every_instance() {
        let room = Room::default();
        let total: usize = Group::ALL.iter().map(|&g| room.group_count(g)).sum();
        assert_eq!(total, room.instances().len());
        assert_eq!(room.group_count(Group::Bed), 3);
        assert_eq!(room.group_count(Group::Table), 5);
        assert_eq!(room.group_count(Group::Chair), 9);
    }

    #[test]
    fn floor_lies_below_ceiling() {
        let room = Room::default();
        let height = |name: &str| {
            room.instances()
                .iter()
                .find(|instance| instance.name == name)
                .map(|instance| instance.transform.translation.y)
        };
        assert!(height("floor") < height("ceiling"));
    }
}
