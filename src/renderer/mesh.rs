use std::rc::Rc;

use glow::HasContext;

use super::buffer::Buffer;
use super::vertex::{Vertex, INDICES, TRIANGLE};

/// The demo's one triangle, resident on the GPU.
pub struct Mesh {
    gl: Rc<glow::Context>,
    vao: glow::VertexArray,
    _vertex_buffer: Buffer,
    _index_buffer: Buffer,
    index_count: i32,
}

impl Mesh {
    pub fn upload_triangle(gl: &Rc<glow::Context>) -> Self {
        Self::upload(gl, &TRIANGLE, &INDICES)
    }

    /// Uploads vertices and indices as STATIC_DRAW and records the attribute
    /// layout in a fresh vertex array object. The data is never touched
    /// again after this.
    pub fn upload(gl: &Rc<glow::Context>, vertices: &[Vertex], indices: &[u32]) -> Self {
        let vao = unsafe {
            gl.create_vertex_array()
                .expect("failed to create vertex array object")
        };
        let vertex_buffer = Buffer::new(gl, glow::ARRAY_BUFFER);
        let index_buffer = Buffer::new(gl, glow::ELEMENT_ARRAY_BUFFER);
        unsafe {
            gl.bind_vertex_array(Some(vao));
            vertex_buffer.upload(bytemuck::cast_slice(vertices), glow::STATIC_DRAW);
            index_buffer.upload(bytemuck::cast_slice(indices), glow::STATIC_DRAW);
            Vertex::describe_layout(gl);
            gl.bind_vertex_array(None);
        }

        Mesh {
            gl: Rc::clone(gl),
            vao,
            _vertex_buffer: vertex_buffer,
            _index_buffer: index_buffer,
            index_count: indices.len() as i32,
        }
    }

    /// One indexed draw of the whole mesh; the caller binds the program.
    pub fn draw(&self) {
        unsafe {
            self.gl.bind_vertex_array(Some(self.vao));
            self.gl
                .draw_elements(glow::TRIANGLES, self.index_count, glow::UNSIGNED_INT, 0);
            self.gl.bind_vertex_array(None);
        }
    }
}

impl Drop for Mesh {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_vertex_array(self.vao);
        }
    }
}
