use bevy::prelude::*;

use crate::engine::loading::progress::LoadProgress;
use crate::engine::scene::model::{ModelOrientation, ModelRoot};
use crate::engine::scene::viewport::ViewportState;
use crate::engine::systems::frame_clock::FrameClock;
use crate::page::layout::PageLayout;
use crate::page::styles::PageStyles;
use crate::transitions::keyframe::PropertyPath;
use crate::transitions::timeline::{Timeline, scroll_timeline};

fn current_value(
    property: &PropertyPath,
    viewport: &ViewportState,
    orientation: Vec3,
    styles: &PageStyles,
) -> f32 {
    match property {
        PropertyPath::CameraPosition(axis) => axis.get(viewport.camera.position),
        PropertyPath::ModelRotation(axis) => axis.get(orientation),
        PropertyPath::ElementOpacity(class) => styles.get(class).opacity,
        PropertyPath::ElementTranslateY(class) => styles.get(class).translate_y,
    }
}

// Bind the scroll keyframes once the model is in the scene
pub fn register_timeline(
    mut timeline: ResMut<Timeline>,
    loading_progress: Res<LoadProgress>,
    viewport: Res<ViewportState>,
    models: Query<&ModelOrientation, With<ModelRoot>>,
    styles: Res<PageStyles>,
) {
    if !loading_progress.is_complete() || !timeline.is_empty() {
        return;
    }
    let Some(model) = viewport.model_entity else {
        warn!("No model in the scene, skipping timeline registration");
        return;
    };

    let orientation = models.get(model).map_or(Vec3::ZERO, |o| o.0);
    for descriptor in scroll_timeline() {
        let current = current_value(&descriptor.target, &viewport, orientation, &styles);
        if let Err(err) = timeline.register(descriptor, current) {
            warn!("Keyframe skipped: {}", err);
        }
    }

    info!("✓ Timeline registered with {} keyframes", timeline.keyframes().len());
}

/// Advance the timeline against the current scroll layout and write the
/// resolved values to the camera, the model and the page styles.
pub fn drive_timeline(
    clock: Res<FrameClock>,
    layout: Res<PageLayout>,
    mut timeline: ResMut<Timeline>,
    mut viewport: ResMut<ViewportState>,
    mut transforms: Query<&mut Transform>,
    mut models: Query<&mut ModelOrientation, With<ModelRoot>>,
    mut styles: ResMut<PageStyles>,
) {
    if timeline.is_empty() {
        return;
    }
    timeline.advance(&layout, clock.delta_secs());

    let mut camera_position = viewport.camera.position;
    let mut rotation = viewport
        .model_entity
        .and_then(|model| models.get(model).ok())
        .map(|o| o.0);

    for (property, value) in timeline.resolve() {
        match property {
            PropertyPath::CameraPosition(axis) => axis.set(&mut camera_position, value),
            PropertyPath::ModelRotation(axis) => {
                if let Some(rotation) = rotation.as_mut() {
                    axis.set(rotation, value);
                }
            }
            PropertyPath::ElementOpacity(class) => {
                if styles.get(&class).opacity != value {
                    styles.set_opacity(&class, value);
                }
            }
            PropertyPath::ElementTranslateY(class) => {
                if styles.get(&class).translate_y != value {
                    styles.set_translate_y(&class, value);
                }
            }
        }
    }

    if camera_position != viewport.camera.position {
        viewport.camera.position = camera_position;
        if let Ok(mut transform) = transforms.get_mut(viewport.camera_entity) {
            transform.translation = camera_position;
        }
    }

    if let (Some(rotation), Some(model)) = (rotation, viewport.model_entity) {
        if let Ok(mut orientation) = models.get_mut(model) {
            orientation.set_if_neq(ModelOrientation(rotation));
        }
    }
}
