//! Bootstrap error taxonomy
//!
//! Every bootstrap step returns its outcome through [`BootstrapError`]
//! rather than aborting the process; the sequencer short-circuits on the
//! first failure and propagates it unchanged.

use ash::vk;
use thiserror::Error;

/// Closed set of failures the bootstrap sequence can produce
#[derive(Error, Debug)]
pub enum BootstrapError {
    /// The GLFW runtime could not start
    #[error("Failed to initialize the GLFW runtime")]
    FailedToInitializeWindowingRuntime,

    /// Window creation returned an invalid handle
    #[error("Failed to initialize GLFW Window")]
    FailedToCreateWindow,

    /// A requested validation layer is absent from the enumerated set
    #[error("Validation layer not found: {0}")]
    ValidationLayerNotFound(String),

    /// Instance creation returned a fatal status code
    #[error("Failed to initialize Vulkan: error number: {} (VK_{:?})", .0.as_raw(), .0)]
    FailedToInitializeGraphicsInstance(vk::Result),
}

/// Result type for bootstrap operations
pub type BootstrapResult<T> = Result<T, BootstrapError>;

/// Whether a `vkCreateInstance` status code means no instance was produced.
///
/// Only these codes abort the bootstrap; anything else is out of contract
/// for instance creation and handled by the caller.
#[must_use]
pub const fn is_fatal_instance_error(result: vk::Result) -> bool {
    matches!(
        result,
        vk::Result::ERROR_OUT_OF_HOST_MEMORY
            | vk::Result::ERROR_OUT_OF_DEVICE_MEMORY
            | vk::Result::ERROR_INITIALIZATION_FAILED
            | vk::Result::ERROR_LAYER_NOT_PRESENT
            | vk::Result::ERROR_EXTENSION_NOT_PRESENT
            | vk::Result::ERROR_INCOMPATIBLE_DRIVER
    )
}
