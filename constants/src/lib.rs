//! Shared default values for the DimensionView workspace.
//!
//! Kept free of engine dependencies so the build script and the model crate
//! can read them without pulling in Bevy.

pub mod camera;
pub mod dataset;
pub mod layout;
pub mod palette;
pub mod shell;
