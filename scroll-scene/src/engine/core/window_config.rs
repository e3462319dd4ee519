use bevy::prelude::*;
use bevy::window::PresentMode;

pub fn create_window_config() -> Window {
    #[cfg(target_arch = "wasm32")]
    {
        Window {
            canvas: Some(constants::page::CANVAS_SELECTOR.into()),
            fit_canvas_to_parent: true,
            // The host page must keep receiving wheel and touch events so it scrolls.
            prevent_default_event_handling: false,
            present_mode: PresentMode::AutoVsync,
            ..default()
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        Window {
            title: "Scroll Scene".into(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }
    }
}
