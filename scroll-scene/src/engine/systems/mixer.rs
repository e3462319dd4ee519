use bevy::animation::graph::AnimationNodeIndex;
use bevy::prelude::*;

use crate::engine::systems::frame_clock::FrameClock;

/// Advances the model's animation clip by the frame delta. Exists only
/// once a model with an animation clip has been spawned.
#[derive(Resource, Debug, Clone)]
pub struct AnimationMixer {
    pub graph: Handle<AnimationGraph>,
    pub node: AnimationNodeIndex,
    duration: f32,
    elapsed: f32,
}

/// Animation player driven by the mixer rather than by virtual time.
#[derive(Component)]
pub struct MixerBound;

impl AnimationMixer {
    pub fn new(graph: Handle<AnimationGraph>, node: AnimationNodeIndex, duration: f32) -> Self {
        Self {
            graph,
            node,
            duration,
            elapsed: 0.0,
        }
    }

    /// Advance by `delta` seconds, looping over the clip duration.
    pub fn advance(&mut self, delta: f32) -> f32 {
        if delta > 0.0 {
            self.elapsed += delta;
            if self.duration > 0.0 {
                self.elapsed = self.elapsed.rem_euclid(self.duration);
            }
        }
        self.elapsed
    }
}

pub fn advance_animation_mixer(
    clock: Res<FrameClock>,
    mixer: Option<ResMut<AnimationMixer>>,
    mut players: Query<&mut AnimationPlayer, With<MixerBound>>,
) {
    let Some(mut mixer) = mixer else {
        return;
    };

    let seek_time = mixer.advance(clock.delta_secs());
    for mut player in &mut players {
        if let Some(active) = player.animation_mut(mixer.node) {
            active.seek_to(seek_time);
        }
    }
}
