//! Crate-local configuration: asset paths and render defaults.

/// Asset paths relative to the asset root.
pub mod path;

/// Camera, lighting and renderer defaults used by scene bootstrap.
pub mod render_settings;
