use std::rc::Rc;
use std::sync::mpsc::Receiver;

use glfw::{Action, Context as _, Glfw, Key, Window, WindowEvent};
use glow::HasContext;
use log::{error, info};

use crate::error::Error;

/// The demo window and the OpenGL context loaded on it.
pub struct DemoWindow {
    pub glfw: Glfw,
    pub window: Window,
    pub gl: Rc<glow::Context>,
    _events: Receiver<(f64, WindowEvent)>,
}

impl DemoWindow {
    pub const WIDTH: u32 = 800;
    pub const HEIGHT: u32 = 600;
    pub const TITLE: &'static str = "Virtuniverse";
    pub const GL_VERSION_MAJOR: u32 = 4;
    pub const GL_VERSION_MINOR: u32 = 4;

    /// Initializes GLFW, opens the fixed-size window and loads the OpenGL
    /// function pointers on its context.
    pub fn create() -> Result<Self, Error> {
        let mut glfw = glfw::init(Some(glfw::Callback {
            f: error_callback as fn(glfw::Error, String, &()),
            data: (),
        }))
        .map_err(Error::WindowSystemInit)?;

        glfw.window_hint(glfw::WindowHint::ContextVersion(
            Self::GL_VERSION_MAJOR,
            Self::GL_VERSION_MINOR,
        ));
        glfw.window_hint(glfw::WindowHint::OpenGlProfile(
            glfw::OpenGlProfileHint::Core,
        ));
        glfw.window_hint(glfw::WindowHint::Resizable(false));

        let (mut window, events) = glfw
            .create_window(
                Self::WIDTH,
                Self::HEIGHT,
                Self::TITLE,
                glfw::WindowMode::Windowed,
            )
            .ok_or(Error::WindowCreation)?;
        window.make_current();

        let gl = unsafe {
            glow::Context::from_loader_function(|s| window.get_proc_address(s) as *const _)
        };

        // The loader itself cannot fail, so the version query is the spot
        // where an unusable context shows up.
        let version = gl.version();
        if version.major < Self::GL_VERSION_MAJOR
            || (version.major == Self::GL_VERSION_MAJOR && version.minor < Self::GL_VERSION_MINOR)
        {
            return Err(Error::ContextVersion {
                major: version.major,
                minor: version.minor,
                want_major: Self::GL_VERSION_MAJOR,
                want_minor: Self::GL_VERSION_MINOR,
            });
        }
        info!(
            "OpenGL {}.{} context ready ({})",
            version.major, version.minor, version.vendor_info
        );

        Ok(DemoWindow {
            glfw,
            window,
            gl: Rc::new(gl),
            _events: events,
        })
    }

    /// Escape requests a close; checked once per frame.
    pub fn update_input(&mut self) {
        if self.window.get_key(Key::Escape) == Action::Press {
            self.window.set_should_close(true);
        }
    }

    pub fn should_close(&self) -> bool {
        self.window.should_close()
    }

    pub fn swap_buffers(&mut self) {
        self.window.swap_buffers();
    }

    pub fn poll_events(&mut self) {
        self.glfw.poll_events();
    }

    /// Seconds since GLFW was initialized.
    pub fn time(&self) -> f32 {
        self.glfw.get_time() as f32
    }
}

// Driver/API errors reported here are observational only and never
// interrupt execution.
fn error_callback(err: glfw::Error, description: String, _: &()) {
    error!("GLFW error {:?}: {}", err, description);
}
