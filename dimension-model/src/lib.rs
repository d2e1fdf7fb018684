//! Engine-agnostic core of DimensionView.
//!
//! Holds the synthetic dataset, the view state and its reducer, the spatial
//! layout that places files along time, group and priority axes, and the
//! camera rig that eases between view presets while following scroll input.
//!
//! ## Frame Order
//!
//! ```text
//! ViewAction events ──> ViewState::apply ──> CameraRig::advance ──> CameraPose
//!                              │
//!                              └──> LayoutConfig::file_opacity per file
//! ```
//!
//! Nothing here depends on a renderer; the view engine owns the frame loop and
//! feeds these types once per frame.

/// Calendar helpers on top of chrono: day offsets and display labels.
pub mod calendar;

/// Camera presets, ease-out transitions and scroll following.
pub mod camera_rig;

/// Dataset generation and the validated, immutable dataset.
pub mod dataset;

/// Error types for dataset construction and identifier parsing.
pub mod error;

/// Optional group, priority and date constraints on files.
pub mod filter;

/// Wheel routing between vertical pan and zoom.
pub mod input;

/// Pure mapping from files to positions and opacities.
pub mod layout;

/// Ray and box intersection used for scene picking.
pub mod picking;

/// Person, group and file records with their identifiers.
pub mod records;

/// Application view state and the action reducer.
pub mod state;

pub use camera_rig::{CameraPose, CameraRig, RigConfig, ViewPreset, ease_out};
pub use dataset::{Dataset, DatasetConfig};
pub use error::{DatasetError, ParseError};
pub use filter::FilterState;
pub use layout::{LayoutConfig, SceneExtents};
pub use records::{FileAction, FileId, FileNode, Group, GroupId, Person, PersonId, Priority};
pub use state::{ScrollOffsets, ViewAction, ViewMode, ViewState};
