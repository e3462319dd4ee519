//! Scene graph construction: viewport, lighting, and the animated model.

/// Startup system building the camera, lights and viewport state.
pub mod bootstrap;

/// Model spawning, animation binding and orientation sync.
pub mod model;

/// Explicit viewport state shared by the render loop and transitions.
///
/// Holds camera and renderer settings plus the camera and model entities.
pub mod viewport;
