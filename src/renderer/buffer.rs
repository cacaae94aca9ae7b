use std::rc::Rc;

use glow::HasContext;

/// Owning wrapper around one GL buffer object.
pub struct Buffer {
    gl: Rc<glow::Context>,
    id: glow::Buffer,
    target: u32,
}

impl Buffer {
    pub fn new(gl: &Rc<glow::Context>, target: u32) -> Self {
        let id = unsafe { gl.create_buffer().expect("failed to create buffer object") };
        Buffer {
            gl: Rc::clone(gl),
            id,
            target,
        }
    }

    pub fn upload(&self, data: &[u8], usage: u32) {
        self.bind();
        unsafe {
            self.gl.buffer_data_u8_slice(self.target, data, usage);
        }
    }

    pub fn bind(&self) {
        unsafe {
            self.gl.bind_buffer(self.target, Some(self.id));
        }
    }
}

impl Drop for Buffer {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_buffer(self.id);
        }
    }
}
