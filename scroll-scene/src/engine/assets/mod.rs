//! Runtime scene configuration loaded as a JSON asset.

/// Scene manifest naming the model, its clip, and the native page layout.
pub mod scene_manifest;
