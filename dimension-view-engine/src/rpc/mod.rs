//! JSON-RPC 2.0 communication layer for embedding the viewer in a host page.
//!
//! Implements bidirectional messaging between the Bevy engine and the parent
//! window via iframe postMessage, supporting both request-response and
//! notification patterns.
//!
//! ## Message Flow
//!
//! ```text
//! Host page (parent)   <──postMessage──>  Bevy (iframe)
//!        │                                        │
//!        ├─ Request (with ID) ──────────────────> │
//!        │                                        ├─ parse_command
//!        │                                        ├─ ViewActionEvent(s)
//!        │ <───────────────── Response (with ID) ─┤
//!        │                                        │
//!        │ <────────── Notification (no ID) ─────┤
//! ```
//!
//! Requests never touch `ViewStore` directly. State changes are turned into
//! `ViewActionEvent`s and go through the same reducer as clicks and shortcuts,
//! so the response to a `set_*` call only confirms the actions were queued.
//!
//! ## Methods
//!
//! ### View
//! - `set_view_mode {mode}`: `front`, `top` or `side`
//! - `set_scroll {x?, y?}`: absolute scroll in world units, clamped to the dataset
//! - `get_view_state`: mode, scroll, filters and selection
//!
//! ### Focus
//! - `set_filter {group?, priority?, date?}`: `g-N`, `p1`..`p9`, `YYYY-MM-DD`.
//!   Each field toggles, so sending the active value clears it
//! - `clear_filters`
//! - `select_file {id}`: `f-N`, or `null` to deselect
//!
//! ### Diagnostics
//! - `get_fps`: Retrieve current frame rate
//!
//! ## Notifications
//!
//! - `view_state_changed`: mode, filters or selection changed (scroll alone does not count)
//! - `selection_changed`: `{file}` with display fields, or `null`
//! - `fps_update`: every half second
//!
//! ## Error Handling
//!
//! Standard JSON-RPC 2.0 error codes:
//! - `-32601`: Method not found
//! - `-32602`: Invalid params

/// JSON-RPC 2.0 bidirectional communication system for the host page.
///
/// Handles request-response patterns, notifications, and WASM message listeners.
pub mod web_rpc;
