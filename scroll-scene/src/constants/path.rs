/// Scene manifest consumed by the loader before the model itself.
pub const SCENE_MANIFEST_PATH: &str = "scene_manifest.json";

/// Model used when the manifest does not name one.
pub const DEFAULT_MODEL_PATH: &str = "models/character.glb";
