//! Optional user-driven camera controls.
//!
//! Provides orbit controls around the model, enabled from the scene
//! manifest and updated by the render loop.

/// Orbit controls resource and its per-frame update system.
pub mod orbit_controls;
