//! Hello Vulkan
//!
//! Opens a window, creates a Vulkan instance, and polls events until the
//! window is closed. Exits 0 on clean shutdown; prints the bootstrap error
//! and exits -1 when any initialization step fails.

use vk_bootstrap::{deinitialize, initialize, BootstrapConfig};

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let config = BootstrapConfig::default();

    let (mut window, instance) = match initialize(&config) {
        Ok(handles) => handles,
        Err(err) => {
            println!("An error occurred during initialization: {err}");
            std::process::exit(-1);
        }
    };

    let (width, height) = window.size();
    log::info!("Entering event loop ({width}x{height} window)");
    while !window.should_close() {
        window.poll_events();
    }

    deinitialize(window, instance);
}
