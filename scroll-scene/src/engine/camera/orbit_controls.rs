use bevy::input::mouse::MouseMotion;
use bevy::math::EulerRot;
use bevy::prelude::*;

use crate::constants::render_settings::{
    ORBIT_PITCH_LIMIT, ORBIT_PITCH_SENSITIVITY, ORBIT_YAW_SENSITIVITY,
};
use crate::engine::scene::viewport::ViewportState;

/// Orbit camera around a fixed target. Right-drag rotates; the mouse wheel
/// is left to page scrolling.
#[derive(Resource, Debug, Clone)]
pub struct OrbitControls {
    pub enabled: bool,
    pub target: Vec3,
    pub radius: f32,
    pub yaw: f32,
    pub pitch: f32,
}

impl OrbitControls {
    pub fn new(position: Vec3, target: Vec3, enabled: bool) -> Self {
        let offset = position - target;
        let radius = offset.length();
        let (yaw, pitch) = if radius > f32::EPSILON {
            let dir = offset / radius;
            (dir.x.atan2(dir.z), dir.y.asin())
        } else {
            (0.0, 0.0)
        };

        Self {
            enabled,
            target,
            radius,
            yaw,
            pitch,
        }
    }

    pub fn rotate(&mut self, mouse_delta: Vec2) {
        self.yaw += -mouse_delta.x * ORBIT_YAW_SENSITIVITY;
        self.pitch += mouse_delta.y * ORBIT_PITCH_SENSITIVITY;
        self.pitch = self.pitch.clamp(-ORBIT_PITCH_LIMIT, ORBIT_PITCH_LIMIT);
    }

    /// Camera position for the current yaw and pitch.
    pub fn eye(&self) -> Vec3 {
        let rotation = Quat::from_euler(EulerRot::YXZ, self.yaw, -self.pitch, 0.0);
        self.target + rotation * Vec3::Z * self.radius
    }
}

/// Run condition for the controls update.
pub fn controls_enabled(controls: Option<Res<OrbitControls>>) -> bool {
    controls.is_some_and(|c| c.enabled)
}

pub fn update_orbit_controls(
    mut controls: ResMut<OrbitControls>,
    mut viewport: ResMut<ViewportState>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut transforms: Query<&mut Transform>,
) {
    let mouse_delta: Vec2 = mouse_motion.read().map(|m| m.delta).sum();
    if mouse_button.pressed(MouseButton::Right) && mouse_delta != Vec2::ZERO {
        controls.rotate(mouse_delta);
    }

    let Ok(mut camera_transform) = transforms.get_mut(viewport.camera_entity) else {
        return;
    };

    let eye = controls.eye();
    viewport.camera.position = eye;
    *camera_transform = Transform::from_translation(eye).looking_at(controls.target, Vec3::Y);
}
