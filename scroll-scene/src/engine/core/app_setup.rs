use bevy::asset::AssetMetaCheck;
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;

use crate::engine::assets::scene_manifest::SceneManifest;
use crate::engine::camera::orbit_controls::{controls_enabled, update_orbit_controls};
use crate::engine::core::app_state::{
    AppState, FrameSet, transition_to_intro, transition_to_load_failed,
};
use crate::engine::core::window_config::create_window_config;
use crate::engine::loading::manifest_loader::{ManifestLoader, load_manifest_system, start_loading};
use crate::engine::loading::model_loader::{ModelLoader, track_load_progress};
use crate::engine::loading::progress::LoadProgress;
use crate::engine::scene::bootstrap::setup;
use crate::engine::scene::model::{spawn_model, sync_model_rotation};
use crate::engine::systems::frame_clock::{FrameClock, tick_frame_clock};
use crate::engine::systems::host_notifications::{
    notify_load_progress, notify_state_changed, report_load_failure,
};
use crate::engine::systems::mixer::advance_animation_mixer;
use crate::engine::systems::resize::handle_window_resize;
use crate::page::layout::PageLayout;
use crate::page::styles::PageStyles;
use crate::rpc::web_rpc::WebRpcPlugin;
use crate::transitions::director::{drive_timeline, register_timeline};
use crate::transitions::intro::{advance_intro, begin_intro};
use crate::transitions::timeline::Timeline;

#[cfg(not(target_arch = "wasm32"))]
use crate::page::{
    native_scroll::scroll_virtual_page,
    overlay::{show_load_failure, sync_overlay_styles, update_loader_caption},
};

#[cfg(target_arch = "wasm32")]
use crate::page::dom::{apply_dom_styles, sample_dom_layout};

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .init_state::<AppState>()
        // Registers SceneManifest as a loadable asset type from JSON files.
        .add_plugins(JsonAssetPlugin::<SceneManifest>::new(&["json"]))
        .add_plugins(WebRpcPlugin);

    // Initialise resources early
    app.init_resource::<LoadProgress>()
        .init_resource::<ManifestLoader>()
        .init_resource::<ModelLoader>()
        .init_resource::<FrameClock>()
        .init_resource::<PageLayout>()
        .init_resource::<PageStyles>()
        .init_resource::<Timeline>();

    app.configure_sets(
        Update,
        (
            FrameSet::Clock,
            FrameSet::Page,
            FrameSet::Transitions,
            FrameSet::Present,
        )
            .chain(),
    );

    // State-based system scheduling
    app.add_systems(Startup, (setup, start_loading).chain())
        .add_systems(
            Update,
            (
                load_manifest_system,
                track_load_progress,
                transition_to_intro,
                transition_to_load_failed,
            )
                .chain()
                .run_if(in_state(AppState::Loading)),
        )
        .add_systems(OnEnter(AppState::IntroPlaying), (spawn_model, begin_intro))
        .add_systems(
            Update,
            advance_intro
                .in_set(FrameSet::Transitions)
                .run_if(in_state(AppState::IntroPlaying)),
        )
        .add_systems(OnEnter(AppState::ScrollBound), register_timeline)
        .add_systems(
            Update,
            (drive_timeline, sync_model_rotation)
                .chain()
                .in_set(FrameSet::Transitions)
                .run_if(in_state(AppState::ScrollBound)),
        )
        .add_systems(OnEnter(AppState::LoadFailed), report_load_failure);

    // Render loop systems run in every state.
    app.add_systems(
        Update,
        (
            tick_frame_clock.in_set(FrameSet::Clock),
            handle_window_resize.in_set(FrameSet::Page),
            advance_animation_mixer.in_set(FrameSet::Present),
            // Runs after the director so manual orbiting wins.
            update_orbit_controls
                .run_if(controls_enabled)
                .in_set(FrameSet::Present),
            (notify_load_progress, notify_state_changed).in_set(FrameSet::Present),
        ),
    );

    #[cfg(not(target_arch = "wasm32"))]
    {
        app.add_systems(Update, scroll_virtual_page.in_set(FrameSet::Page))
            .add_systems(
                Update,
                (sync_overlay_styles, update_loader_caption).in_set(FrameSet::Present),
            )
            .add_systems(OnEnter(AppState::LoadFailed), show_load_failure);
    }

    #[cfg(target_arch = "wasm32")]
    {
        app.add_systems(Update, sample_dom_layout.in_set(FrameSet::Page))
            .add_systems(Update, apply_dom_styles.in_set(FrameSet::Present));
    }

    app
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}
