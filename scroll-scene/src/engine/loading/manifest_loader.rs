use bevy::prelude::*;

use crate::constants::path::SCENE_MANIFEST_PATH;
use crate::engine::assets::scene_manifest::SceneManifest;
use crate::engine::camera::orbit_controls::OrbitControls;
use crate::engine::core::app_state::AppState;
use crate::engine::loading::model_loader::ModelLoader;
use crate::engine::scene::viewport::ViewportState;

#[derive(Resource, Default)]
pub struct ManifestLoader {
    pub handle: Option<Handle<SceneManifest>>,
}

// Start the loading process
pub fn start_loading(
    mut manifest_loader: ResMut<ManifestLoader>,
    asset_server: Res<AssetServer>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    info!("Loading scene manifest from: {}", SCENE_MANIFEST_PATH);
    manifest_loader.handle = Some(asset_server.load(SCENE_MANIFEST_PATH));

    info!("→ Transitioning to Loading state");
    next_state.set(AppState::Loading);
}

// Publish the manifest and request the model it names
pub fn load_manifest_system(
    mut commands: Commands,
    manifest_loader: Res<ManifestLoader>,
    mut model_loader: ResMut<ModelLoader>,
    asset_server: Res<AssetServer>,
    manifests: Res<Assets<SceneManifest>>,
    viewport: Res<ViewportState>,
) {
    if model_loader.handle.is_some() {
        return;
    }

    let Some(handle) = manifest_loader.handle.as_ref() else {
        return;
    };
    let Some(manifest) = manifests.get(handle) else {
        return;
    };

    info!("✓ Scene manifest loaded");
    info!("  Model: {}", manifest.model_path);
    info!(
        "  Scene index: {}, animation index: {}",
        manifest.scene_index, manifest.animation_index
    );

    commands.insert_resource(OrbitControls::new(
        viewport.camera.position,
        Vec3::ZERO,
        manifest.camera_controls,
    ));

    #[cfg(not(target_arch = "wasm32"))]
    commands.insert_resource(crate::page::native_scroll::VirtualPage::new(
        manifest.page_sections(),
    ));

    model_loader.handle = Some(asset_server.load(manifest.model_path.clone()));
    commands.insert_resource(manifest.clone());
}
