//! Bootstrap configuration
//!
//! All process-wide constants the bootstrap consumes (window geometry,
//! application metadata, validation settings) travel through one immutable
//! value so the bootstrap functions stay testable in isolation.

use ash::vk;

/// Immutable settings consumed by the bootstrap sequence
#[derive(Debug, Clone)]
pub struct BootstrapConfig {
    /// Window width in pixels
    pub window_width: u32,
    /// Window height in pixels
    pub window_height: u32,
    /// Window title text
    pub window_title: String,
    /// Application name reported to the driver
    pub application_name: String,
    /// Application version (`vk::make_api_version` encoding)
    pub application_version: u32,
    /// Engine name reported to the driver
    pub engine_name: String,
    /// Engine version (`vk::make_api_version` encoding)
    pub engine_version: u32,
    /// Target Vulkan API version
    pub api_version: u32,
    /// Whether validation layers are requested at instance creation
    pub validation_enabled: bool,
    /// Validation layer names to request when validation is enabled
    pub validation_layers: Vec<String>,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            window_width: 800,
            window_height: 800,
            window_title: "hello_vulkan".to_string(),
            application_name: "hello vulkan".to_string(),
            application_version: vk::make_api_version(0, 1, 0, 0),
            engine_name: "No Engine".to_string(),
            engine_version: vk::make_api_version(0, 1, 0, 0),
            api_version: vk::API_VERSION_1_0,
            validation_enabled: cfg!(debug_assertions),
            validation_layers: vec!["VK_LAYER_KHRONOS_validation".to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_window_geometry() {
        let config = BootstrapConfig::default();
        assert_eq!(config.window_width, 800);
        assert_eq!(config.window_height, 800);
        assert_eq!(config.window_title, "hello_vulkan");
    }

    #[test]
    fn test_default_application_metadata() {
        let config = BootstrapConfig::default();
        assert_eq!(config.application_name, "hello vulkan");
        assert_eq!(config.engine_name, "No Engine");
        assert_eq!(config.api_version, vk::API_VERSION_1_0);
        assert_eq!(config.application_version, vk::make_api_version(0, 1, 0, 0));
    }

    #[test]
    fn test_default_validation_layer_list() {
        let config = BootstrapConfig::default();
        assert_eq!(config.validation_layers, ["VK_LAYER_KHRONOS_validation"]);
    }
}
