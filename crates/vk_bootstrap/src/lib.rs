//! # vk_bootstrap
//!
//! Minimal bootstrap sequence for a Vulkan application: open a GLFW window,
//! create a Vulkan instance (optionally with validation layers), and tear
//! both down in reverse order. No rendering, swapchain, or device logic —
//! the crate's job is the ordered, fallible initialization chain and its
//! error taxonomy.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use vk_bootstrap::{deinitialize, initialize, BootstrapConfig};
//!
//! fn main() -> Result<(), vk_bootstrap::BootstrapError> {
//!     let config = BootstrapConfig::default();
//!     let (mut window, instance) = initialize(&config)?;
//!
//!     while !window.should_close() {
//!         window.poll_events();
//!     }
//!
//!     deinitialize(window, instance);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod boot;
pub mod config;
pub mod error;
pub mod instance;
pub mod window;

pub use boot::{deinitialize, initialize};
pub use config::BootstrapConfig;
pub use error::{is_fatal_instance_error, BootstrapError, BootstrapResult};
pub use instance::Instance;
pub use window::Window;
