use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::constants::render_settings::{
    AMBIENT_LIGHT_BRIGHTNESS, CLEAR_COLOUR, DIRECTIONAL_LIGHT_ILLUMINANCE,
    DIRECTIONAL_LIGHT_POSITION,
};
use crate::engine::scene::viewport::ViewportState;

/// Used when the primary window is not available yet.
const FALLBACK_WINDOW_SIZE: Vec2 = Vec2::new(1280.0, 720.0);

// Startup system that builds the viewport once
pub fn setup(mut commands: Commands, windows: Query<&Window, With<PrimaryWindow>>) {
    let (size, pixel_ratio) = windows
        .single()
        .map(|window| (window.size(), window.scale_factor()))
        .unwrap_or((FALLBACK_WINDOW_SIZE, 1.0));

    let mut viewport = ViewportState::new(Entity::PLACEHOLDER, size.x, size.y, pixel_ratio);
    viewport.camera_entity = spawn_camera(&mut commands, &viewport);

    commands.insert_resource(ClearColor(CLEAR_COLOUR));
    spawn_lighting(&mut commands, &viewport);

    #[cfg(not(target_arch = "wasm32"))]
    crate::page::overlay::create_native_overlays(&mut commands);

    info!(
        "Viewport ready: {:.0}x{:.0} @{}x, aspect {:.3}",
        size.x, size.y, pixel_ratio, viewport.camera.aspect
    );
    commands.insert_resource(viewport);
}

fn spawn_camera(commands: &mut Commands, viewport: &ViewportState) -> Entity {
    commands
        .spawn((
            Camera3d::default(),
            Projection::Perspective(viewport.perspective()),
            Transform::from_translation(viewport.camera.position),
        ))
        .id()
}

fn spawn_lighting(commands: &mut Commands, viewport: &ViewportState) {
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: AMBIENT_LIGHT_BRIGHTNESS,
        ..default()
    });

    commands.spawn((
        DirectionalLight {
            illuminance: DIRECTIONAL_LIGHT_ILLUMINANCE,
            shadows_enabled: viewport.renderer.shadows,
            ..default()
        },
        Transform::from_translation(DIRECTIONAL_LIGHT_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}
