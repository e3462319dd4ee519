//! JSON-RPC 2.0 channel between the scene and the page embedding it.
//!
//! Messages travel over `postMessage`. The host can query the scene and push
//! its own scroll measurements; the scene notifies the host as loading
//! progresses and the lifecycle state changes.
//!
//! ## Message Flow
//!
//! ```text
//! Host page (parent)  <──postMessage──>  Scene (canvas / iframe)
//!        │                                        │
//!        ├─ Request (with ID) ──────────────────> │
//!        │ <───────────────── Response (with ID) ─┤
//!        │                                        │
//!        │ <────────── Notification (no ID) ─────┤
//! ```
//!
//! ## Methods
//!
//! ### Requests
//! - `get_state`: current lifecycle state
//! - `get_load_progress`: load fraction, completion and failure message
//! - `scroll_update`: push `scroll_y`, `viewport_height` and optional
//!   `sections` (`name`, `top`, `height` in pixels); the host then owns the
//!   scroll layout
//!
//! ### Notifications
//! - `load_progress`: sent whenever the load fraction changes
//! - `state_changed`: sent on every lifecycle transition
//! - `load_failed`: sent once if an asset cannot be loaded
//!
//! ## Error Handling
//!
//! Standard JSON-RPC 2.0 error codes:
//! - `-32601`: Method not found
//! - `-32602`: Invalid params

/// Message queue, request handlers and the wasm message listener.
pub mod web_rpc;
