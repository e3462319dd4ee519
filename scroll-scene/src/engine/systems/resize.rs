use bevy::prelude::*;
use bevy::window::{WindowResized, WindowScaleFactorChanged};

use crate::engine::scene::viewport::ViewportState;

/// Keep the camera aspect ratio and output size in step with the window.
/// Every event is applied; there is no debouncing.
pub fn handle_window_resize(
    mut resize_events: EventReader<WindowResized>,
    mut scale_events: EventReader<WindowScaleFactorChanged>,
    mut viewport: ResMut<ViewportState>,
    mut projections: Query<&mut Projection>,
) {
    for event in scale_events.read() {
        viewport.renderer.pixel_ratio = event.scale_factor as f32;
    }

    let mut resized = false;
    for event in resize_events.read() {
        viewport.resize(event.width, event.height);
        resized = true;
    }

    if !resized {
        return;
    }

    if let Ok(mut projection) = projections.get_mut(viewport.camera_entity) {
        if let Projection::Perspective(perspective) = projection.as_mut() {
            perspective.aspect_ratio = viewport.camera.aspect;
        }
    }
}
