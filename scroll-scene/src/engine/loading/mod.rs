//! Asset loading for the scene manifest and the animated model.
//!
//! The manifest is loaded first, then the glTF file it names. Progress is
//! reported as a monotonic fraction and either completes once or fails.

/// Errors that end the loading phase.
pub mod error;

/// Scene manifest request and hand-off to the model loader.
pub mod manifest_loader;

/// glTF model request, load state classification and model spawning.
pub mod model_loader;

/// Loading progress latch driving the Loading state transitions.
pub mod progress;
