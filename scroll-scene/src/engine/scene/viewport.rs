use bevy::prelude::*;

use crate::constants::render_settings::{
    CAMERA_FAR, CAMERA_FOV_DEGREES, CAMERA_NEAR, CAMERA_START_POSITION, SHADOWS_ENABLED,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraSettings {
    pub position: Vec3,
    /// Vertical field of view in radians
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RendererSettings {
    pub pixel_ratio: f32,
    /// Output size in logical pixels
    pub canvas_size: Vec2,
    pub shadows: bool,
}

/// Viewport created once at bootstrap and kept for the app lifetime.
#[derive(Resource, Debug, Clone)]
pub struct ViewportState {
    pub camera: CameraSettings,
    pub renderer: RendererSettings,
    pub camera_entity: Entity,
    /// Set once the model has been spawned; never replaced.
    pub model_entity: Option<Entity>,
}

impl ViewportState {
    pub fn new(camera_entity: Entity, width: f32, height: f32, pixel_ratio: f32) -> Self {
        let mut state = Self {
            camera: CameraSettings {
                position: CAMERA_START_POSITION,
                fov: CAMERA_FOV_DEGREES.to_radians(),
                aspect: 1.0,
                near: CAMERA_NEAR,
                far: CAMERA_FAR,
            },
            renderer: RendererSettings {
                pixel_ratio,
                canvas_size: Vec2::ZERO,
                shadows: SHADOWS_ENABLED,
            },
            camera_entity,
            model_entity: None,
        };
        state.resize(width, height);
        state
    }

    /// Match the camera aspect and output size to a new window size.
    /// A zero height keeps the previous aspect ratio.
    pub fn resize(&mut self, width: f32, height: f32) {
        if height > 0.0 {
            self.camera.aspect = width / height;
        }
        self.renderer.canvas_size = Vec2::new(width, height);
    }

    pub fn perspective(&self) -> PerspectiveProjection {
        PerspectiveProjection {
            fov: self.camera.fov,
            aspect_ratio: self.camera.aspect,
            near: self.camera.near,
            far: self.camera.far,
        }
    }
}
