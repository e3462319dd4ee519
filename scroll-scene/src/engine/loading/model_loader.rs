use bevy::asset::{LoadState, RecursiveDependencyLoadState, UntypedAssetId};
use bevy::gltf::Gltf;
use bevy::prelude::*;

use crate::engine::assets::scene_manifest::SceneManifest;
use crate::engine::loading::error::LoadError;
use crate::engine::loading::manifest_loader::ManifestLoader;
use crate::engine::loading::progress::{LoadProgress, ProgressReport};

#[derive(Resource, Default)]
pub struct ModelLoader {
    pub handle: Option<Handle<Gltf>>,
}

/// Load state of a single asset as seen by the progress tracker.
#[derive(Debug, Clone, PartialEq)]
pub enum AssetStatus {
    Pending,
    /// The file itself is parsed, dependencies may still be loading.
    Loaded,
    DependenciesLoaded,
    Failed(String),
}

/// Coarse loading stages, each mapped to a fixed progress fraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LoadStage {
    Pending,
    ManifestReady,
    ModelParsed,
    ModelReady,
}

impl LoadStage {
    pub fn fraction(self) -> f32 {
        match self {
            Self::Pending => 0.0,
            Self::ManifestReady => 0.2,
            Self::ModelParsed => 0.6,
            Self::ModelReady => 1.0,
        }
    }
}

pub fn asset_status(asset_server: &AssetServer, id: impl Into<UntypedAssetId>) -> AssetStatus {
    match asset_server.get_load_states(id) {
        Some((LoadState::Failed(err), _, _)) => AssetStatus::Failed(err.to_string()),
        Some((_, _, RecursiveDependencyLoadState::Failed(err))) => {
            AssetStatus::Failed(err.to_string())
        }
        Some((_, _, RecursiveDependencyLoadState::Loaded)) => AssetStatus::DependenciesLoaded,
        Some((LoadState::Loaded, _, _)) => AssetStatus::Loaded,
        _ => AssetStatus::Pending,
    }
}

/// Combine the manifest and model load states into a stage.
pub fn classify_load(
    manifest: Option<&AssetStatus>,
    model: Option<&AssetStatus>,
) -> Result<LoadStage, LoadError> {
    if let Some(AssetStatus::Failed(message)) = manifest {
        return Err(LoadError::Manifest(message.clone()));
    }

    match model {
        Some(AssetStatus::Failed(message)) => Err(LoadError::Model(message.clone())),
        Some(AssetStatus::DependenciesLoaded) => Ok(LoadStage::ModelReady),
        Some(AssetStatus::Loaded) => Ok(LoadStage::ModelParsed),
        Some(AssetStatus::Pending) => Ok(LoadStage::ManifestReady),
        None => match manifest {
            Some(AssetStatus::Loaded | AssetStatus::DependenciesLoaded) => {
                Ok(LoadStage::ManifestReady)
            }
            _ => Ok(LoadStage::Pending),
        },
    }
}

/// Scene to instantiate for the model: the requested index, else the
/// file's default scene.
pub fn model_scene(gltf: &Gltf, index: usize) -> Option<Handle<Scene>> {
    gltf.scenes
        .get(index)
        .cloned()
        .or_else(|| gltf.default_scene.clone())
}

// Report manifest and model load progress, or the first failure
pub fn track_load_progress(
    asset_server: Res<AssetServer>,
    manifest_loader: Res<ManifestLoader>,
    model_loader: Res<ModelLoader>,
    manifest: Option<Res<SceneManifest>>,
    gltfs: Res<Assets<Gltf>>,
    mut loading_progress: ResMut<LoadProgress>,
) {
    let manifest_status = manifest_loader
        .handle
        .as_ref()
        .map(|handle| asset_status(&asset_server, handle.id()));
    let model_status = model_loader
        .handle
        .as_ref()
        .map(|handle| asset_status(&asset_server, handle.id()));

    let stage = classify_load(manifest_status.as_ref(), model_status.as_ref()).and_then(|stage| {
        if stage != LoadStage::ModelReady {
            return Ok(stage);
        }

        // The model only counts as loaded once the scene we will spawn exists.
        let index = manifest.as_ref().map_or(0, |m| m.scene_index);
        let scene = model_loader
            .handle
            .as_ref()
            .and_then(|handle| gltfs.get(handle))
            .and_then(|gltf| model_scene(gltf, index));
        match scene {
            Some(_) => Ok(stage),
            None => Err(LoadError::MissingScene { index }),
        }
    });

    match stage {
        Ok(stage) => match loading_progress.report(stage.fraction()) {
            ProgressReport::Advanced => {
                info!("Loading progress: {:.0}%", loading_progress.fraction() * 100.0);
            }
            ProgressReport::Completed => info!("✓ Model and dependencies loaded"),
            ProgressReport::Unchanged => {}
        },
        Err(err) => {
            if loading_progress.fail(err.to_string()) {
                error!("{}", err);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stages_follow_the_load_order() {
        let loaded = AssetStatus::DependenciesLoaded;

        assert_eq!(classify_load(None, None), Ok(LoadStage::Pending));
        assert_eq!(
            classify_load(Some(&AssetStatus::Pending), None),
            Ok(LoadStage::Pending)
        );
        assert_eq!(
            classify_load(Some(&loaded), None),
            Ok(LoadStage::ManifestReady)
        );
        assert_eq!(
            classify_load(Some(&loaded), Some(&AssetStatus::Pending)),
            Ok(LoadStage::ManifestReady)
        );
        assert_eq!(
            classify_load(Some(&loaded), Some(&AssetStatus::Loaded)),
            Ok(LoadStage::ModelParsed)
        );
        assert_eq!(
            classify_load(Some(&loaded), Some(&loaded)),
            Ok(LoadStage::ModelReady)
        );
    }

    #[test]
    fn stage_fractions_are_increasing_and_end_at_one() {
        let fractions: Vec<f32> = [
            LoadStage::Pending,
            LoadStage::ManifestReady,
            LoadStage::ModelParsed,
            LoadStage::ModelReady,
        ]
        .iter()
        .map(|stage| stage.fraction())
        .collect();

        assert_eq!(fractions, vec![0.0, 0.2, 0.6, 1.0]);
    }

    #[test]
    fn failures_are_reported_per_asset() {
        let failed = AssetStatus::Failed("404".into());
        assert_eq!(
            classify_load(Some(&failed), None),
            Err(LoadError::Manifest("404".into()))
        );
        assert_eq!(
            classify_load(Some(&AssetStatus::Loaded), Some(&failed)),
            Err(LoadError::Model("404".into()))
        );
    }
}
