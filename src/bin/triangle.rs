use log::{error, info};

use virtuniverse::renderer::Renderer;
use virtuniverse::window::DemoWindow;
use virtuniverse::Error;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        error!("{}", err);
        std::process::exit(-1);
    }
}

fn run() -> Result<(), Error> {
    let mut window = DemoWindow::create()?;
    let renderer = Renderer::new(&window.gl)?;
    info!("initialized, entering render loop");

    #[cfg(debug_assertions)]
    let mut fps_counter = fps_counter::FPSCounter::new();

    while !window.should_close() {
        window.update_input();
        renderer.render();
        window.swap_buffers();
        window.poll_events();
        #[cfg(debug_assertions)]
        log::debug!("fps: {}", fps_counter.tick());
    }
    Ok(())
}
