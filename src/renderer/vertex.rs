use bytemuck::{Pod, Zeroable};
use glow::HasContext;

#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
    pub texcoord: [f32; 2],
}

pub const TRIANGLE: [Vertex; 3] = [
    Vertex {
        position: [0.0, 0.5, 0.0],
        color: [1.0, 0.0, 0.0],
        texcoord: [0.0, 0.0],
    },
    Vertex {
        position: [-0.5, -0.5, 0.0],
        color: [0.0, 1.0, 0.0],
        texcoord: [0.0, 0.0],
    },
    Vertex {
        position: [0.5, -0.5, 0.0],
        color: [0.0, 0.0, 1.0],
        texcoord: [0.0, 0.0],
    },
];

pub const INDICES: [u32; 3] = [0, 1, 2];

const STRIDE: i32 = std::mem::size_of::<Vertex>() as i32;
const POSITION_OFFSET: i32 = 0;
const COLOR_OFFSET: i32 = POSITION_OFFSET + 3 * 4;
const TEXCOORD_OFFSET: i32 = COLOR_OFFSET + 3 * 4;

impl Vertex {
    /// Slots 0/1/2 must line up with the `layout (location = …)` qualifiers
    /// in the vertex shader; nothing validates the match.
    pub unsafe fn describe_layout(gl: &glow::Context) {
        gl.vertex_attrib_pointer_f32(0, 3, glow::FLOAT, false, STRIDE, POSITION_OFFSET);
        gl.enable_vertex_attrib_array(0);
        gl.vertex_attrib_pointer_f32(1, 3, glow::FLOAT, false, STRIDE, COLOR_OFFSET);
        gl.enable_vertex_attrib_array(1);
        gl.vertex_attrib_pointer_f32(2, 2, glow::FLOAT, false, STRIDE, TEXCOORD_OFFSET);
        gl.enable_vertex_attrib_array(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_record_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<Vertex>(), 32);
        assert_eq!(STRIDE, 32);
        assert_eq!(POSITION_OFFSET, 0);
        assert_eq!(COLOR_OFFSET, 12);
        assert_eq!(TEXCOORD_OFFSET, 24);
    }

    #[test]
    fn triangle_is_three_rgb_vertices() {
        assert_eq!(TRIANGLE.len(), 3);
        assert_eq!(TRIANGLE[0].color, [1.0, 0.0, 0.0]);
        assert_eq!(TRIANGLE[1].color, [0.0, 1.0, 0.0]);
        assert_eq!(TRIANGLE[2].color, [0.0, 0.0, 1.0]);
    }

    #[test]
    fn indices_are_the_ordered_triple() {
        assert_eq!(INDICES, [0, 1, 2]);
    }

    #[test]
    fn vertex_bytes_round_trip_through_bytemuck() {
        let bytes: &[u8] = bytemuck::cast_slice(&TRIANGLE);
        assert_eq!(bytes.len(), 3 * 32);
    }
}
