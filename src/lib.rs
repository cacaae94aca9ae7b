pub mod error;
pub mod renderer;
pub mod window;

pub use error::Error;
pub use renderer::Renderer;
pub use window::DemoWindow;
