use thiserror::Error;

use crate::renderer::shader::ShaderError;

/// Everything that can abort initialization. All of these are fatal at the
/// point encountered; the binaries log them and exit nonzero.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to initialize the window system: {0:?}")]
    WindowSystemInit(glfw::InitError),

    #[error("failed to create the window")]
    WindowCreation,

    #[error("context reports OpenGL {major}.{minor}, need at least {want_major}.{want_minor}")]
    ContextVersion {
        major: u32,
        minor: u32,
        want_major: u32,
        want_minor: u32,
    },

    #[error(transparent)]
    Shader(#[from] ShaderError),
}
