//! Per-frame render loop systems and host notifications.
//!
//! The clock ticks once per frame, the animation mixer advances by the
//! frame delta, and the viewport follows window resizes. The draw itself
//! is the engine's render schedule.

/// Monotonic frame clock providing the per-frame delta.
pub mod frame_clock;

/// Load progress and state change notifications for the host page.
pub mod host_notifications;

/// Animation mixer advanced by the frame clock.
pub mod mixer;

/// Window resize handling for camera aspect and output size.
pub mod resize;
