use std::path::Path;
use std::rc::Rc;

use glow::HasContext;

mod buffer;
mod mesh;
pub mod shader;
mod vertex;

use mesh::Mesh;
use shader::ShaderProgram;

use crate::error::Error;

pub const VERTEX_SHADER_PATH: &str = "./shaders/VertextShader.glsl";
pub const FRAGMENT_SHADER_PATH: &str = "./shaders/FragmentShader.glsl";

/// The triangle variant clears to plain black.
pub const CLEAR_COLOR: [f32; 3] = [0.0, 0.0, 0.0];

/// Owns the program and the triangle mesh and draws one frame at a time.
pub struct Renderer {
    gl: Rc<glow::Context>,
    program: ShaderProgram,
    mesh: Mesh,
}

impl Renderer {
    /// Sets the fixed-function state once, then loads the shader pair from
    /// `shaders/` and uploads the triangle.
    pub fn new(gl: &Rc<glow::Context>) -> Result<Self, Error> {
        unsafe { set_pipeline_state(gl) };

        let program = ShaderProgram::load(
            gl,
            Path::new(VERTEX_SHADER_PATH),
            Path::new(FRAGMENT_SHADER_PATH),
        )?;
        let mesh = Mesh::upload_triangle(gl);

        Ok(Renderer {
            gl: Rc::clone(gl),
            program,
            mesh,
        })
    }

    pub fn render(&self) {
        clear(&self.gl, CLEAR_COLOR);
        self.program.bind();
        self.mesh.draw();
    }
}

/// Resets color, depth and stencil for the next frame.
pub fn clear(gl: &glow::Context, [r, g, b]: [f32; 3]) {
    unsafe {
        gl.clear_color(r, g, b, 1.0);
        gl.clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT | glow::STENCIL_BUFFER_BIT);
    }
}

/// Clear color for the blend variant: one sinusoid per channel, mapped from
/// [-1, 1] into [0, 1].
pub fn blend_color(t: f32) -> [f32; 3] {
    [
        ((t * 0.5).sin() + 1.0) / 2.0,
        ((t * 0.3).sin() + 1.0) / 2.0,
        ((t * 0.7).sin() + 1.0) / 2.0,
    ]
}

// Depth test, back-face culling with CCW front faces, alpha blending,
// filled polygons.
unsafe fn set_pipeline_state(gl: &glow::Context) {
    gl.enable(glow::DEPTH_TEST);
    gl.enable(glow::CULL_FACE);
    gl.cull_face(glow::BACK);
    gl.front_face(glow::CCW);
    gl.enable(glow::BLEND);
    gl.blend_func(glow::SRC_ALPHA, glow::ONE_MINUS_SRC_ALPHA);
    gl.polygon_mode(glow::FRONT_AND_BACK, glow::FILL);
}

#[cfg(test)]
mod tests {
    use super::blend_color;

    #[test]
    fn blend_color_starts_at_half_grey() {
        assert_eq!(blend_color(0.0), [0.5, 0.5, 0.5]);
    }

    #[test]
    fn blend_color_red_peaks_at_pi() {
        let [r, _, _] = blend_color(std::f32::consts::PI);
        assert!((r - 1.0).abs() < 1e-6);
    }

    #[test]
    fn blend_color_stays_in_unit_range() {
        for i in 0..1000 {
            let t = i as f32 * 0.1;
            for channel in blend_color(t).iter() {
                assert!(*channel >= 0.0 && *channel <= 1.0, "t={} -> {}", t, channel);
            }
        }
    }
}
