//! Pointer and keyboard tools that turn raw input into view actions.
//!
//! ## Input Flow
//!
//! ```text
//! Left click ──> cursor ray ──> nearest Pickable ──> SceneTarget::action()
//!                                    │
//!                                    └─ miss ──> SelectFile(None)
//!
//! Keys (native) ──> ViewActionEvent
//! ```
//!
//! Both tools ignore the pointer while it is over a shell panel, so clicks on
//! buttons never fall through into the scene.
//!
//! ## Shortcuts (native only)
//!
//! - `1` / `2` / `3`: front, top and side view
//! - Arrow keys: scroll time and groups
//! - `Esc`: clear the selection
//! - `Backspace`: clear all filters

/// Scene picking with ray and box hit tests, plus hover feedback.
pub mod picking;

/// Keyboard shortcuts for view modes, scrolling and clearing.
pub mod shortcuts;
