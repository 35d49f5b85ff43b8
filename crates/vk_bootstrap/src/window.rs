//! Window bootstrap using GLFW
//!
//! Initializes the GLFW runtime and creates a single fixed-size surface
//! with no client rendering context, ready for Vulkan instance creation.

use crate::error::{BootstrapError, BootstrapResult};

/// GLFW window wrapper with single-owner release semantics
///
/// Dropping the handle destroys the window before the runtime shuts down;
/// field order matters for that.
pub struct Window {
    window: glfw::PWindow,
    // Never drained; nothing in the bootstrap consumes window events
    _events: glfw::GlfwReceiver<(f64, glfw::WindowEvent)>,
    glfw: glfw::Glfw,
}

impl Window {
    /// Create the GLFW runtime and a non-resizable window without a GL context.
    ///
    /// # Errors
    ///
    /// [`BootstrapError::FailedToInitializeWindowingRuntime`] when GLFW cannot
    /// start, [`BootstrapError::FailedToCreateWindow`] when surface creation
    /// yields no handle.
    pub fn new(width: u32, height: u32, title: &str) -> BootstrapResult<Self> {
        let mut glfw = glfw::init(glfw::fail_on_errors)
            .map_err(|_| BootstrapError::FailedToInitializeWindowingRuntime)?;

        // Vulkan drives the surface; no implicit GL context, no resizing
        glfw.window_hint(glfw::WindowHint::ClientApi(glfw::ClientApiHint::NoApi));
        glfw.window_hint(glfw::WindowHint::Resizable(false));

        let (window, events) = glfw
            .create_window(width, height, title, glfw::WindowMode::Windowed)
            .ok_or(BootstrapError::FailedToCreateWindow)?;

        log::info!("Created {width}x{height} window \"{title}\"");

        Ok(Self {
            window,
            _events: events,
            glfw,
        })
    }

    /// Whether the user requested the window to close
    #[must_use]
    pub fn should_close(&self) -> bool {
        self.window.should_close()
    }

    /// Process pending platform events
    pub fn poll_events(&mut self) {
        self.glfw.poll_events();
    }

    /// Current window size in pixels
    #[must_use]
    pub fn size(&self) -> (u32, u32) {
        let (width, height) = self.window.get_size();
        (width as u32, height as u32)
    }

    /// Instance extensions GLFW needs the Vulkan instance to enable.
    ///
    /// The list is queried fresh on every call. GLFW reports none when the
    /// platform has no Vulkan loader; that is passed through as an empty
    /// list and surfaces later as an instance-creation failure.
    #[must_use]
    pub fn required_instance_extensions(&self) -> Vec<String> {
        self.glfw.get_required_instance_extensions().unwrap_or_else(|| {
            log::warn!("GLFW reported no required instance extensions");
            Vec::new()
        })
    }
}
