use log::{error, info};

use virtuniverse::renderer::{blend_color, clear};
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
    info!("initialized, entering render loop");

    while !window.should_close() {
        window.update_input();
        let t = window.time();
        clear(&window.gl, blend_color(t));
        window.swap_buffers();
        window.poll_events();
    }
    Ok(())
}
