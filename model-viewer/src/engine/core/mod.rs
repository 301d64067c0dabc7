//! Core application setup and state management.
//!
//! Handles application lifecycle, window configuration, viewer configuration
//! and the load/hint state machine for both native and WASM targets.

/// Application setup and plugin configuration for the Bevy engine.
///
/// Creates the main app with asset loading, lifecycle, camera and host-page
/// bridge plugins.
pub mod app_setup;

/// Load and interaction-hint state machine.
pub mod app_state;

/// Viewer configuration resource assembled from the `constants` crate.
pub mod config;

/// Platform-specific window configuration for native and WASM builds.
///
/// Configures canvas integration for web targets and vsync settings.
pub mod window_config;
