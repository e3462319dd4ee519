//! Core application setup and state management.
//!
//! Handles application lifecycle, window configuration, state transitions,
//! and plugin initialisation for both native and WASM targets.

/// Application setup and plugin configuration for the Bevy engine.
///
/// Creates the main app with scene bootstrap, loading, intro, scroll-bound
/// transitions and the per-frame render loop systems.
pub mod app_setup;

/// Application state machine and loading progress transitions.
///
/// Manages states from bootstrap through loading and the intro to the
/// terminal scroll-bound state, plus the load failure state.
pub mod app_state;

/// Platform-specific window configuration for native and WASM builds.
///
/// Configures canvas integration for web targets and vsync settings.
pub mod window_config;
