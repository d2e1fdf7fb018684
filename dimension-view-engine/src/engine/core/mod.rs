//! Core application setup and state management.
//!
//! Handles application lifecycle, window configuration, settings loading and
//! the frame ordering shared by every runtime system, for both native and
//! WASM targets.

/// Application setup and plugin configuration for the Bevy engine.
///
/// Creates the main app with settings loading, scene composition, the shell
/// and platform-specific configurations.
pub mod app_setup;

/// Application state machine and the loading transition.
///
/// Moves from settings loading to the running scene, or to a failure screen.
pub mod app_state;

/// JSON settings asset with an embedded fallback.
pub mod settings;

/// Platform-specific window configuration for native and WASM builds.
///
/// Configures canvas integration for web targets and vsync settings.
pub mod window_config;
