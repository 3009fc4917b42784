use bytemuck::{bytes_of, Pod, Zeroable};
use glam::{Mat4, Vec3};

use crate::scene::DrawCommand;

/// Per-frame matrices consumed by the renderer's global uniform buffer.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameUniforms {
    pub projection: Mat4,
    pub view: Mat4,
    /// 0 draws flat instance colors, 1 draws the mesh's face colors.
    pub face_tint: f32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub(crate) struct GlobalUniform {
    pub projection: [[f32; 4]; 4],
    pub view: [[f32; 4]; 4],
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub(crate) struct InstanceUniform {
    pub model: [[f32; 4]; 4],
    /// Flat color in `rgb`, face tint in `a`.
    pub color: [f32; 4],
}

impl GlobalUniform {
    pub fn new(frame: &FrameUniforms) -> Self {
        Self {
            projection: frame.projection.to_cols_array_2d(),
            view: frame.view.to_cols_array_2d(),
        }
    }
}

impl InstanceUniform {
    pub fn new(draw: &DrawCommand, face_tint: f32) -> Self {
        Self {
            model: draw.model.to_cols_array_2d(),
            color: draw.color.extend(face_tint.clamp(0.0, 1.0)).into(),
        }
    }
}

/// Distance in bytes between per-draw uniforms packed into one buffer, padded
/// to the device's dynamic-offset alignment.
pub(crate) fn instance_stride(offset_alignment: u32) -> u64 {
    wgpu::util::align_to(
        std::mem::size_of::<InstanceUniform>() as u64,
        u64::from(offset_alignment.max(1)),
    )
}

/// Lays out one [`InstanceUniform`] per draw, `stride` bytes apart.
pub(crate) fn pack_instances(draws: &[DrawCommand], face_tint: f32, stride: u64) -> Vec<u8> {
    let stride = stride as usize;
    let size = std::mem::size_of::<InstanceUniform>();
    let mut bytes = vec![0u8; draws.len() * stride];
    for (slot, draw) in bytes.chunks_exact_mut(stride).zip(draws) {
        slot[..size].copy_from_slice(bytes_of(&InstanceUniform::new(draw, face_tint)));
    }
    bytes
}

pub(crate) const CLEAR_COLOR: Vec3 = Vec3::new(0.2, 0.3, 0.3);

pub(crate) const SHADER: &str = r#"
struct GlobalUniform {
    projection: mat4x4<f32>,
    view: mat4x4<f32>,
}

struct InstanceUniform {
    model: mat4x4<f32>,
    color: vec4<f32>,
}

@group(0) @binding(0)
var<uniform> globals: GlobalUniform;

@group(1) @binding(0)
var<uniform> per_draw: InstanceUniform;

struct VertexInput {
    @location(0) position: vec3<f32>,
    @location(1) face_color: vec3<f32>,
}

struct VertexOutput {
    @builtin(position) position: vec4<f32>,
    @location(0) color: vec3<f32>,
}

@vertex
fn vs_main(input: VertexInput) -> VertexOutput {
    var out: VertexOutput;
    out.position = globals.projection * globals.view * per_draw.model * vec4<f32>(input.position, 1.0);
    out.color = mix(per_draw.color.rgb, input.face_color, per_draw.color.a);
    return out;
}

@fragment
fn fs_main(input: VertexOutput) -> @location(0) vec4<f32> {
    return vec4<f32>(input.color, 1.0);
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_layouts_match_wgsl_sizes() {
        assert_eq!(std::mem::size_of::<GlobalUniform>(), 128);
        assert_eq!(std::mem::size_of::<InstanceUniform>(), 80);
    }

    #[test]
    fn instance_uniform_packs_tint_into_alpha() {
        let draw = DrawCommand {
            model: Mat4::from_translation(Vec3::X),
            color: Vec3::new(0.1, 0.2, 0.3),
        };
        let uniform = InstanceUniform::new(&draw, 2.0);
        assert_eq!(uniform.color, [0.1, 0.2, 0.3, 1.0]);
        assert_eq!(uniform.model[3], [1.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn stride_rounds_up_to_offset_alignment() {
        assert_eq!(instance_stride(256), 256);
        assert_eq!(instance_stride(64), 128);
        assert_eq!(instance_stride(16), 80);
        assert_eq!(instance_stride(0), 80);
    }

    #[test]
    fn packed_draws_start_on_stride_boundaries() {
        let draws = [
            DrawCommand {
                model: Mat4::IDENTITY,
                color: Vec3::new(1.0, 0.0, 0.0),
            },
            DrawCommand {
                model: Mat4::from_translation(Vec3::new(2.0, 3.0, 4.0)),
                color: Vec3::new(0.0, 0.5, 1.0),
            },
        ];
        let bytes = pack_instances(&draws, 0.0, 256);
        assert_eq!(bytes.len(), 512);

        let second: InstanceUniform = bytemuck::pod_read_unaligned(&bytes[256..256 + 80]);
        assert_eq!(second.model[3], [2.0, 3.0, 4.0, 1.0]);
        assert_eq!(second.color, [0.0, 0.5, 1.0, 0.0]);
        assert!(bytes[80..256].iter().all(|&byte| byte == 0));
    }
}
