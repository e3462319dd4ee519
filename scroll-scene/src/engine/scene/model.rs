use bevy::gltf::Gltf;
use bevy::prelude::*;
use bevy::scene::SceneInstanceReady;

use crate::engine::assets::scene_manifest::SceneManifest;
use crate::engine::loading::model_loader::{ModelLoader, model_scene};
use crate::engine::loading::progress::LoadProgress;
use crate::engine::scene::viewport::ViewportState;
use crate::engine::systems::mixer::{AnimationMixer, MixerBound};

/// Root of the spawned model scene.
#[derive(Component)]
pub struct ModelRoot;

/// Model orientation as XYZ Euler angles in radians. Transitions write
/// this, and the transform rotation follows it.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct ModelOrientation(pub Vec3);

impl ModelOrientation {
    pub fn rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.0.x, self.0.y, self.0.z)
    }
}

// Spawn the loaded model and prepare its animation mixer
pub fn spawn_model(
    mut commands: Commands,
    loading_progress: Res<LoadProgress>,
    model_loader: Res<ModelLoader>,
    manifest: Option<Res<SceneManifest>>,
    gltfs: Res<Assets<Gltf>>,
    clips: Res<Assets<AnimationClip>>,
    mut graphs: ResMut<Assets<AnimationGraph>>,
    mut viewport: ResMut<ViewportState>,
) {
    if viewport.model_entity.is_some() || !loading_progress.is_complete() {
        return;
    }

    let Some(gltf) = model_loader.handle.as_ref().and_then(|h| gltfs.get(h)) else {
        error!("Model asset missing after load completed");
        return;
    };

    let manifest = manifest.map(|m| (*m).clone()).unwrap_or_default();
    let Some(scene) = model_scene(gltf, manifest.scene_index) else {
        error!("Model has no scene at index {}", manifest.scene_index);
        return;
    };

    match gltf.animations.get(manifest.animation_index) {
        Some(clip) => {
            let duration = clips.get(clip).map_or(0.0, |c| c.duration());
            let (graph, node) = AnimationGraph::from_clip(clip.clone());
            commands.insert_resource(AnimationMixer::new(graphs.add(graph), node, duration));
            info!("Animation clip {} bound ({:.2}s)", manifest.animation_index, duration);
        }
        None => warn!(
            "Model has no animation at index {}, playing static",
            manifest.animation_index
        ),
    }

    let model = commands
        .spawn((
            SceneRoot(scene),
            Transform::default(),
            ModelRoot,
            ModelOrientation::default(),
        ))
        .observe(bind_animation_players)
        .id();
    viewport.model_entity = Some(model);
    info!("✓ Model spawned");
}

/// Attach the mixer's graph to every animation player in the model once
/// the scene instance exists. The players are paused; the mixer seeks them.
fn bind_animation_players(
    trigger: Trigger<SceneInstanceReady>,
    mut commands: Commands,
    mixer: Option<Res<AnimationMixer>>,
    children: Query<&Children>,
    mut players: Query<&mut AnimationPlayer>,
) {
    let Some(mixer) = mixer else {
        return;
    };

    for entity in children.iter_descendants(trigger.target()) {
        let Ok(mut player) = players.get_mut(entity) else {
            continue;
        };
        player.play(mixer.node).repeat().pause();
        commands
            .entity(entity)
            .insert((AnimationGraphHandle(mixer.graph.clone()), MixerBound));
    }
}

pub fn sync_model_rotation(
    mut models: Query<(&ModelOrientation, &mut Transform), Changed<ModelOrientation>>,
) {
    for (orientation, mut transform) in &mut models {
        transform.rotation = orientation.rotation();
    }
}
