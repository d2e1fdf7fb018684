//! Core runtime systems for view state and diagnostics.
//!
//! Provides the `ViewAction` reducer that every input path feeds into and the
//! FPS tracking used by the native overlay and the RPC bridge.

/// FPS tracking and notification systems for performance monitoring.
///
/// Sends frame rate updates to frontend via RPC and updates native UI overlays.
pub mod fps_tracking;

/// View state resource and the once-per-frame action reducer.
pub mod view_actions;
