//! Top-level bootstrap sequencer
//!
//! Runs the fallible initialization steps in dependency order and tears
//! them down in reverse. The window always comes first: the instance needs
//! GLFW's required-extension list, which needs the runtime initialized.

use crate::config::BootstrapConfig;
use crate::error::BootstrapResult;
use crate::instance::Instance;
use crate::window::Window;

/// Run the full bootstrap sequence: window, then instance.
///
/// Short-circuits on the first failure. If instance creation fails after
/// the window exists, the window is released on the early-return path by
/// its `Drop` before the error reaches the caller.
///
/// # Errors
///
/// Propagates the failing step's [`crate::error::BootstrapError`] unchanged.
pub fn initialize(config: &BootstrapConfig) -> BootstrapResult<(Window, Instance)> {
    let window = Window::new(
        config.window_width,
        config.window_height,
        &config.window_title,
    )?;

    let instance = Instance::new(&window, config)?;

    Ok((window, instance))
}

/// Tear down in strict reverse creation order.
///
/// The instance goes first, then the window, whose release also terminates
/// the GLFW runtime. Only called after a fully successful [`initialize`].
pub fn deinitialize(window: Window, instance: Instance) {
    drop(instance);
    drop(window);
    log::info!("Bootstrap teardown complete");
}
