use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use glow::HasContext;
use log::error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShaderError {
    #[error("failed to open shader source {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Carries every stage diagnostic that was captured, one per line.
    #[error("shader compilation failed:\n{0}")]
    Compile(String),

    #[error("program linking failed:\n{0}")]
    Link(String),
}

/// Reads a whole GLSL source file. Line structure is preserved so driver
/// diagnostics keep their line numbers.
pub fn load_source(path: &Path) -> Result<String, ShaderError> {
    std::fs::read_to_string(path).map_err(|source| ShaderError::Open {
        path: path.to_owned(),
        source,
    })
}

/// Owning wrapper around a linked program object.
pub struct ShaderProgram {
    gl: Rc<glow::Context>,
    id: glow::Program,
}

impl ShaderProgram {
    /// Loads, compiles and links a vertex/fragment pair from disk. A missing
    /// file fails the load before anything is submitted to the driver.
    pub fn load(
        gl: &Rc<glow::Context>,
        vertex_path: &Path,
        fragment_path: &Path,
    ) -> Result<Self, ShaderError> {
        let vertex_src = load_source(vertex_path)?;
        let fragment_src = load_source(fragment_path)?;
        Self::from_sources(gl, &vertex_src, &fragment_src)
    }

    /// Both stages are always compiled so every diagnostic gets reported,
    /// but a failed stage short-circuits the link: linking objects that are
    /// known broken only produces a meaningless program.
    pub fn from_sources(
        gl: &Rc<glow::Context>,
        vertex_src: &str,
        fragment_src: &str,
    ) -> Result<Self, ShaderError> {
        let vertex = unsafe { compile_stage(gl, glow::VERTEX_SHADER, vertex_src) };
        if let Err(diagnostic) = &vertex {
            error!("vertex shader failed to compile:\n{}", diagnostic);
        }
        let fragment = unsafe { compile_stage(gl, glow::FRAGMENT_SHADER, fragment_src) };
        if let Err(diagnostic) = &fragment {
            error!("fragment shader failed to compile:\n{}", diagnostic);
        }

        match (vertex, fragment) {
            (Ok(vertex), Ok(fragment)) => {
                let linked = unsafe { link_stages(gl, vertex, fragment) };
                // The stage objects are compile artifacts; drop them no
                // matter how the link went.
                unsafe {
                    gl.delete_shader(vertex);
                    gl.delete_shader(fragment);
                }
                match linked {
                    Ok(id) => Ok(ShaderProgram {
                        gl: Rc::clone(gl),
                        id,
                    }),
                    Err(diagnostic) => {
                        error!("shader program failed to link:\n{}", diagnostic);
                        Err(ShaderError::Link(diagnostic))
                    }
                }
            }
            (vertex, fragment) => {
                let mut failures = Vec::new();
                for (stage, outcome) in vec![("vertex", vertex), ("fragment", fragment)] {
                    match outcome {
                        Ok(shader) => unsafe { gl.delete_shader(shader) },
                        Err(diagnostic) => failures.push(format!("{}: {}", stage, diagnostic)),
                    }
                }
                Err(ShaderError::Compile(failures.join("\n")))
            }
        }
    }

    pub fn bind(&self) {
        unsafe { self.gl.use_program(Some(self.id)) }
    }
}

impl Drop for ShaderProgram {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_program(self.id);
        }
    }
}

unsafe fn compile_stage(
    gl: &glow::Context,
    stage: u32,
    source: &str,
) -> Result<glow::Shader, String> {
    let shader = gl.create_shader(stage)?;
    gl.shader_source(shader, source);
    gl.compile_shader(shader);
    if gl.get_shader_compile_status(shader) {
        Ok(shader)
    } else {
        let log = gl.get_shader_info_log(shader);
        gl.delete_shader(shader);
        Err(log)
    }
}

unsafe fn link_stages(
    gl: &glow::Context,
    vertex: glow::Shader,
    fragment: glow::Shader,
) -> Result<glow::Program, String> {
    let program = gl.create_program()?;
    gl.attach_shader(program, vertex);
    gl.attach_shader(program, fragment);
    gl.link_program(program);
    if gl.get_program_link_status(program) {
        Ok(program)
    } else {
        let log = gl.get_program_info_log(program);
        gl.delete_program(program);
        Err(log)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use super::{load_source, ShaderError};

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("virtuniverse-{}-{}", std::process::id(), name))
    }

    #[test]
    fn load_source_preserves_line_structure() {
        let path = scratch_path("lines.glsl");
        fs::write(&path, "#version 440 core\nvoid main() {}\n").unwrap();

        let src = load_source(&path).unwrap();
        assert_eq!(src.lines().count(), 2);
        assert_eq!(src.lines().nth(1), Some("void main() {}"));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn load_source_fails_on_missing_file() {
        let path = scratch_path("does-not-exist.glsl");
        let err = load_source(&path).unwrap_err();
        match &err {
            ShaderError::Open { path: reported, .. } => assert_eq!(reported, &path),
            other => panic!("expected Open, got {:?}", other),
        }
        assert!(err.to_string().contains("does-not-exist.glsl"));
    }

    #[test]
    fn compile_error_reports_every_stage() {
        let err = ShaderError::Compile("vertex: bad\nfragment: also bad".into());
        let text = err.to_string();
        assert!(text.contains("vertex: bad"));
        assert!(text.contains("fragment: also bad"));
    }
}
