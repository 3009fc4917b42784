use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// Vertex of the shared cube: position followed by the face color.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

impl Vertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }

    pub fn position(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }
}

/// Edge length of the cube. The cube spans `[0, CUBE_SIZE]` on every axis.
pub const CUBE_SIZE: f32 = 0.5;

pub const VERTICES_PER_FACE: usize = 4;
pub const FACE_COUNT: usize = 6;

const fn v(position: [f32; 3], color: [f32; 3]) -> Vertex {
    Vertex { position, color }
}

const RED: [f32; 3] = [1.0, 0.0, 0.0];
const GREEN: [f32; 3] = [0.0, 1.0, 0.0];
const BLUE: [f32; 3] = [0.0, 0.0, 1.0];
const YELLOW: [f32; 3] = [1.0, 1.0, 0.0];
const CYAN: [f32; 3] = [0.0, 1.0, 1.0];
const MAGENTA: [f32; 3] = [1.0, 0.0, 1.0];

/// Four vertices per face so every face can carry its own color.
pub const CUBE_VERTICES: [Vertex; 24] = [
    // z = 0
    v([0.0, 0.0, 0.0], RED),
    v([0.5, 0.0, 0.0], RED),
    v([0.5, 0.5, 0.0], RED),
    v([0.0, 0.5, 0.0], RED),
    // x = 0.5
    v([0.5, 0.0, 0.0], GREEN),
    v([0.5, 0.5, 0.0], GREEN),
    v([0.5, 0.0, 0.5], GREEN),
    v([0.5, 0.5, 0.5], GREEN),
    // z = 0.5
    v([0.0, 0.0, 0.5], BLUE),
    v([0.5, 0.0, 0.5], BLUE),
    v([0.5, 0.5, 0.5], BLUE),
    v([0.0, 0.5, 0.5], BLUE),
    // x = 0
    v([0.0, 0.0, 0.5], YELLOW),
    v([0.0, 0.5, 0.5], YELLOW),
    v([0.0, 0.5, 0.0], YELLOW),
    v([0.0, 0.0, 0.0], YELLOW),
    // y = 0.5
    v([0.5, 0.5, 0.5], CYAN),
    v([0.5, 0.5, 0.0], CYAN),
    v([0.0, 0.5, 0.0], CYAN),
    v([0.0, 0.5, 0.5], CYAN),
    // y = 0
    v([0.0, 0.0, 0.0], MAGENTA),
    v([0.5, 0.0, 0.0], MAGENTA),
    v([0.5, 0.0, 0.5], MAGENTA),
    v([0.0, 0.0, 0.5], MAGENTA),
];

/// Two counter-clockwise (seen from outside) triangles per face.
pub const CUBE_INDICES: [u32; 36] = [
    0, 3, 2, 2, 1, 0, // z = 0
    4, 5, 7, 7, 6, 4, // x = 0.5
    8, 9, 10, 10, 11, 8, // z = 0.5
    12, 13, 14, 14, 15, 12, // x = 0
    16, 17, 18, 18, 19, 16, // y = 0.5
    20, 21, 22, 22, 23, 20, // y = 0
];

/// Iterates the cube's triangles as vertex triples.
pub fn triangles() -> impl Iterator<Item = [Vertex; 3]> {
    let indices: &'static [u32] = &CUBE_INDICES;
    indices.chunks_exact(3).map(|tri| {
        [
            CUBE_VERTICES[tri[0] as usize],
            CUBE_VERTICES[tri[1] as usize],
            CUBE_VERTICES[tri[2] as usize],
        ]
    })
}

/// Center of the cube in mesh space.
pub fn center() -> Vec3 {
    Vec3::splat(CUBE_SIZE * 0.5)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forms_twelve_triangles_over_valid_vertices() {
        assert_eq!(CUBE_INDICES.len(), 36);
        assert_eq!(triangles().count(), 12);
        assert!(CUBE_INDICES
            .iter()
            .all(|&index| (index as usize) < CUBE_VERTICES.len()));
    }

    #[test]
    fn each_face_uses_exactly_its_own_four_vertices() {
        for (face, indices) in CUBE_INDICES.chunks_exact(6).enumerate() {
            let mut used: Vec<u32> = indices.to_vec();
            used.sort_unstable();
            used.dedup();
            let first = (face * VERTICES_PER_FACE) as u32;
            let expected: Vec<u32> = (first..first + VERTICES_PER_FACE as u32).collect();
            assert_eq!(used, expected, "face {face}");
        }
    }

    #[test]
    fn faces_are_planar_and_single_colored() {
        for face in CUBE_VERTICES.chunks_exact(VERTICES_PER_FACE) {
            let color = face[0].color;
            assert!(face.iter().all(|vertex| vertex.color == color));

            // Planar quads on a cube face share exactly one constant coordinate.
            let constant_axes = (0..3)
                .filter(|&axis| face.iter().all(|v| v.position[axis] == face[0].position[axis]))
                .count();
            assert_eq!(constant_axes, 1);
        }
        assert_eq!(FACE_COUNT * VERTICES_PER_FACE, CUBE_VERTICES.len());
    }

    #[test]
    fn triangles_wind_outward() {
        let center = center();
        for [a, b, c] in triangles() {
            let normal = (b.position() - a.position()).cross(c.position() - a.position());
            let centroid = (a.position() + b.position() + c.position()) / 3.0;
            assert!(
                normal.dot(centroid - center) > 0.0,
                "triangle {:?} faces inward",
                [a.position, b.position, c.position]
            );
        }
    }
}
