//! View camera driven by the camera rig.
//!
//! The rig in `dimension-model` owns the transition and scroll-follow logic;
//! this module applies its pose to the Bevy camera and routes wheel input to
//! vertical panning, horizontal day scrolling or user zoom.

/// Rig resource, camera spawning and the per-frame pose update.
pub mod rig_camera;
