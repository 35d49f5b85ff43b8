//! Vulkan instance bootstrap
//!
//! Builds application metadata, negotiates validation layers against the
//! enumerated set, and requests instance creation. The window must exist
//! first: GLFW supplies the required-extension list.

use std::ffi::{c_char, CStr, CString};

use ash::vk;

use crate::config::BootstrapConfig;
use crate::error::{is_fatal_instance_error, BootstrapError, BootstrapResult};
use crate::window::Window;

/// Vulkan instance wrapper with single-owner release semantics
pub struct Instance {
    // The entry keeps the loader library alive for the instance's lifetime
    _entry: ash::Entry,
    instance: ash::Instance,
}

impl Instance {
    /// Load the Vulkan entry point and create an instance for the window.
    ///
    /// # Errors
    ///
    /// [`BootstrapError::ValidationLayerNotFound`] when validation is enabled
    /// and a requested layer is absent from the enumerated set (instance
    /// creation is never attempted in that case), or
    /// [`BootstrapError::FailedToInitializeGraphicsInstance`] carrying the
    /// status code when the loader or `vkCreateInstance` fails.
    pub fn new(window: &Window, config: &BootstrapConfig) -> BootstrapResult<Self> {
        let entry = unsafe { ash::Entry::load() }.map_err(|err| {
            log::warn!("Vulkan loader unavailable: {err}");
            BootstrapError::FailedToInitializeGraphicsInstance(
                vk::Result::ERROR_INITIALIZATION_FAILED,
            )
        })?;

        // Application metadata: pure value construction, cannot fail
        let application_name = CString::new(config.application_name.as_str()).unwrap();
        let engine_name = CString::new(config.engine_name.as_str()).unwrap();
        let application_info = vk::ApplicationInfo::builder()
            .application_name(&application_name)
            .application_version(config.application_version)
            .engine_name(&engine_name)
            .engine_version(config.engine_version)
            .api_version(config.api_version);

        // Extensions GLFW needs; the list is borrowed for this call only
        let required_extensions = window.required_instance_extensions();
        let extension_names: Vec<CString> = required_extensions
            .iter()
            .map(|name| CString::new(name.as_str()).unwrap())
            .collect();
        let extension_ptrs: Vec<*const c_char> =
            extension_names.iter().map(|name| name.as_ptr()).collect();

        let mut layer_names: Vec<CString> = Vec::new();
        if config.validation_enabled {
            let available = enumerate_layer_names(&entry)?;
            if let Some(missing) = missing_layer(&config.validation_layers, &available) {
                return Err(BootstrapError::ValidationLayerNotFound(missing.to_string()));
            }
            log_available_extensions(&entry);
            layer_names = config
                .validation_layers
                .iter()
                .map(|name| CString::new(name.as_str()).unwrap())
                .collect();
        }
        let layer_ptrs: Vec<*const c_char> =
            layer_names.iter().map(|name| name.as_ptr()).collect();

        let create_info = vk::InstanceCreateInfo::builder()
            .application_info(&application_info)
            .enabled_extension_names(&extension_ptrs)
            .enabled_layer_names(&layer_ptrs);

        let instance = unsafe { entry.create_instance(&create_info, None) }
            .map_err(classify_create_instance_error)?;

        log::info!(
            "Created Vulkan instance ({} extensions, validation {})",
            extension_ptrs.len(),
            if config.validation_enabled { "on" } else { "off" }
        );

        Ok(Self {
            _entry: entry,
            instance,
        })
    }
}

impl Drop for Instance {
    fn drop(&mut self) {
        unsafe {
            self.instance.destroy_instance(None);
        }
    }
}

/// Map a `vkCreateInstance` status to the bootstrap error taxonomy.
///
/// The Vulkan spec restricts `vkCreateInstance` failures to the fatal set;
/// an out-of-contract code still produced no instance, so it fails the
/// bootstrap too rather than being silently accepted.
fn classify_create_instance_error(code: vk::Result) -> BootstrapError {
    if !is_fatal_instance_error(code) {
        log::warn!("Unexpected status from vkCreateInstance: {code:?}");
    }
    BootstrapError::FailedToInitializeGraphicsInstance(code)
}

/// First requested layer absent from the full available set, if any
fn missing_layer<'a>(requested: &'a [String], available: &[String]) -> Option<&'a str> {
    requested
        .iter()
        .find(|name| !available.iter().any(|avail| avail == *name))
        .map(String::as_str)
}

fn enumerate_layer_names(entry: &ash::Entry) -> BootstrapResult<Vec<String>> {
    let layers = entry
        .enumerate_instance_layer_properties()
        .map_err(BootstrapError::FailedToInitializeGraphicsInstance)?;

    Ok(layers
        .iter()
        .map(|properties| {
            let name = unsafe { CStr::from_ptr(properties.layer_name.as_ptr()) };
            name.to_string_lossy().into_owned()
        })
        .collect())
}

/// Debug dump of the available instance extensions; failures are not fatal
fn log_available_extensions(entry: &ash::Entry) {
    match entry.enumerate_instance_extension_properties(None) {
        Ok(extensions) => {
            log::debug!("available vulkan extensions:");
            for extension in &extensions {
                let name = unsafe { CStr::from_ptr(extension.extension_name.as_ptr()) };
                log::debug!("\t{}", name.to_string_lossy());
            }
        }
        Err(code) => {
            log::debug!("could not enumerate instance extensions: {code:?}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(values: &[&str]) -> Vec<String> {
        values.iter().map(|name| (*name).to_string()).collect()
    }

    #[test]
    fn test_all_requested_layers_present() {
        let requested = names(&["VK_LAYER_KHRONOS_validation"]);
        let available = names(&["VK_LAYER_KHRONOS_validation", "VK_LAYER_MESA_overlay"]);
        assert_eq!(missing_layer(&requested, &available), None);
    }

    #[test]
    fn test_requested_layer_not_first_in_enumeration() {
        // The layer only has to be somewhere in the enumerated set
        let requested = names(&["VK_LAYER_KHRONOS_validation"]);
        let available = names(&["VK_LAYER_MESA_overlay", "VK_LAYER_KHRONOS_validation"]);
        assert_eq!(missing_layer(&requested, &available), None);
    }

    #[test]
    fn test_missing_layer_is_reported_by_name() {
        let requested = names(&["DIAG_LAYER_X"]);
        let available = names(&["VK_LAYER_KHRONOS_validation"]);
        assert_eq!(missing_layer(&requested, &available), Some("DIAG_LAYER_X"));
    }

    #[test]
    fn test_missing_layer_from_empty_enumeration() {
        let requested = names(&["VK_LAYER_KHRONOS_validation"]);
        assert_eq!(
            missing_layer(&requested, &[]),
            Some("VK_LAYER_KHRONOS_validation")
        );
    }

    #[test]
    fn test_reported_layer_comes_from_requested_set() {
        let requested = names(&["VK_LAYER_KHRONOS_validation", "DIAG_LAYER_X"]);
        let available = names(&["VK_LAYER_KHRONOS_validation"]);
        let missing = missing_layer(&requested, &available);
        assert_eq!(missing, Some("DIAG_LAYER_X"));
        assert!(requested.iter().any(|name| Some(name.as_str()) == missing));
    }

    #[test]
    fn test_no_layers_requested() {
        assert_eq!(missing_layer(&[], &[]), None);
    }

    #[test]
    fn test_classify_fatal_code() {
        let err = classify_create_instance_error(vk::Result::ERROR_INCOMPATIBLE_DRIVER);
        assert!(matches!(
            err,
            BootstrapError::FailedToInitializeGraphicsInstance(
                vk::Result::ERROR_INCOMPATIBLE_DRIVER
            )
        ));
    }
}
