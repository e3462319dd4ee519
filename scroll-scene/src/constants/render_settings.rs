use bevy::prelude::*;

pub const CAMERA_START_POSITION: Vec3 = Vec3::new(0.0, 1.0, 5.0);

/// Vertical field of view in degrees
pub const CAMERA_FOV_DEGREES: f32 = 45.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;

pub const AMBIENT_LIGHT_BRIGHTNESS: f32 = 400.0;
pub const DIRECTIONAL_LIGHT_ILLUMINANCE: f32 = 6000.0;
pub const DIRECTIONAL_LIGHT_POSITION: Vec3 = Vec3::new(5.0, 10.0, 7.5);
pub const SHADOWS_ENABLED: bool = true;

pub const CLEAR_COLOUR: Color = Color::srgb(0.04, 0.04, 0.06);

/// Orbit controls, only used when the manifest enables them.
pub const ORBIT_YAW_SENSITIVITY: f32 = 0.0035;
pub const ORBIT_PITCH_SENSITIVITY: f32 = 0.0030;
pub const ORBIT_PITCH_LIMIT: f32 = 1.55;

/// Pixels scrolled per wheel line on native builds.
pub const WHEEL_LINE_PIXELS: f32 = 40.0;
