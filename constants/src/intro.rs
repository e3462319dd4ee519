/// Duration of the loader slide-out (seconds)
pub const LOADER_HIDE_SECONDS: f32 = 1.0;

/// Loader translation once hidden, in percent of its own height
pub const LOADER_HIDDEN_TRANSLATE_Y: f32 = -100.0;

/// Duration of the background fade (seconds)
pub const BACKGROUND_FADE_SECONDS: f32 = 1.5;

/// Default playback length for keyframes that are not scrubbed (seconds)
pub const TOGGLE_TWEEN_SECONDS: f32 = 0.5;
