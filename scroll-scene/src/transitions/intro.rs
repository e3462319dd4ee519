use bevy::math::curve::EaseFunction;
use bevy::prelude::*;
use constants::intro::{BACKGROUND_FADE_SECONDS, LOADER_HIDDEN_TRANSLATE_Y, LOADER_HIDE_SECONDS};
use constants::page::{BACKGROUND_CLASS, LOADER_CLASS};

use crate::engine::core::app_state::AppState;
use crate::engine::systems::frame_clock::FrameClock;
use crate::page::styles::PageStyles;
use crate::transitions::tween::Tween;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntroPhase {
    HidingLoader,
    FadingBackground,
    Finished,
}

/// Loader slide-out followed by the background fade. The fade only starts
/// on the frame after the loader is fully hidden.
#[derive(Resource, Debug, Clone)]
pub struct IntroSequence {
    phase: IntroPhase,
    loader: Tween,
    background: Tween,
}

impl IntroSequence {
    pub fn new(styles: &PageStyles) -> Self {
        Self {
            phase: IntroPhase::HidingLoader,
            loader: Tween::new(
                styles.get(LOADER_CLASS).translate_y,
                LOADER_HIDDEN_TRANSLATE_Y,
                LOADER_HIDE_SECONDS,
                EaseFunction::QuadraticInOut,
            ),
            background: Tween::new(
                styles.get(BACKGROUND_CLASS).opacity,
                0.0,
                BACKGROUND_FADE_SECONDS,
                EaseFunction::QuadraticOut,
            ),
        }
    }

    pub fn phase(&self) -> IntroPhase {
        self.phase
    }

    pub fn advance(&mut self, delta: f32, styles: &mut PageStyles) -> IntroPhase {
        match self.phase {
            IntroPhase::HidingLoader => {
                styles.set_translate_y(LOADER_CLASS, self.loader.advance(delta));
                if self.loader.is_finished() {
                    self.phase = IntroPhase::FadingBackground;
                }
            }
            IntroPhase::FadingBackground => {
                styles.set_opacity(BACKGROUND_CLASS, self.background.advance(delta));
                if self.background.is_finished() {
                    self.phase = IntroPhase::Finished;
                }
            }
            IntroPhase::Finished => {}
        }
        self.phase
    }
}

pub fn begin_intro(mut commands: Commands, styles: Res<PageStyles>) {
    info!("Intro started");
    commands.insert_resource(IntroSequence::new(&styles));
}

// IntroPlaying → ScrollBound, once the background has faded out.
pub fn advance_intro(
    clock: Res<FrameClock>,
    intro: Option<ResMut<IntroSequence>>,
    mut styles: ResMut<PageStyles>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    let Some(mut intro) = intro else {
        return;
    };
    if intro.phase() == IntroPhase::Finished {
        return;
    }

    if intro.advance(clock.delta_secs(), &mut styles) == IntroPhase::Finished {
        info!("→ Transitioning to ScrollBound state");
        next_state.set(AppState::ScrollBound);
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use bevy::state::app::StatesPlugin;

    use super::*;
    use crate::engine::loading::progress::LoadProgress;
    use crate::engine::scene::model::{ModelOrientation, ModelRoot};
    use crate::engine::scene::viewport::ViewportState;
    use crate::transitions::director::register_timeline;
    use crate::transitions::timeline::Timeline;

    #[test]
    fn loader_hides_before_background_fades() {
        let mut styles = PageStyles::default();
        let mut intro = IntroSequence::new(&styles);

        assert_eq!(intro.advance(0.5, &mut styles), IntroPhase::HidingLoader);
        let translate = styles.get(LOADER_CLASS).translate_y;
        assert!(translate < 0.0 && translate > LOADER_HIDDEN_TRANSLATE_Y);
        assert_eq!(styles.get(BACKGROUND_CLASS).opacity, 1.0);

        assert_eq!(intro.advance(0.5, &mut styles), IntroPhase::FadingBackground);
        assert_eq!(styles.get(LOADER_CLASS).translate_y, LOADER_HIDDEN_TRANSLATE_Y);
        assert_eq!(styles.get(BACKGROUND_CLASS).opacity, 1.0);

        assert_eq!(intro.advance(1.0, &mut styles), IntroPhase::FadingBackground);
        assert!(styles.get(BACKGROUND_CLASS).opacity < 1.0);

        assert_eq!(intro.advance(1.0, &mut styles), IntroPhase::Finished);
        assert_eq!(styles.get(BACKGROUND_CLASS).opacity, 0.0);
    }

    #[test]
    fn finished_intro_leaves_styles_alone() {
        let mut styles = PageStyles::default();
        let mut intro = IntroSequence::new(&styles);
        intro.advance(10.0, &mut styles);
        intro.advance(10.0, &mut styles);
        assert_eq!(intro.phase(), IntroPhase::Finished);

        styles.set_opacity(BACKGROUND_CLASS, 0.3);
        intro.advance(1.0, &mut styles);
        assert_eq!(styles.get(BACKGROUND_CLASS).opacity, 0.3);
    }

    #[test]
    fn timeline_binds_only_after_the_intro() {
        let mut app = App::new();
        let camera = app.world_mut().spawn(Transform::default()).id();
        let model = app.world_mut().spawn((ModelRoot, ModelOrientation::default())).id();
        let mut viewport = ViewportState::new(camera, 1280.0, 720.0, 1.0);
        viewport.model_entity = Some(model);
        let mut progress = LoadProgress::default();
        progress.report(1.0);

        app.add_plugins((MinimalPlugins, StatesPlugin))
            .insert_state(AppState::IntroPlaying)
            .insert_resource(viewport)
            .insert_resource(progress)
            .init_resource::<FrameClock>()
            .init_resource::<PageStyles>()
            .init_resource::<Timeline>()
            .add_systems(OnEnter(AppState::IntroPlaying), begin_intro)
            .add_systems(
                Update,
                advance_intro.run_if(in_state(AppState::IntroPlaying)),
            )
            .add_systems(OnEnter(AppState::ScrollBound), register_timeline);

        let mut now = Duration::ZERO;
        for _ in 0..40 {
            app.world_mut().resource_mut::<FrameClock>().tick(now);
            app.update();
            now += Duration::from_millis(250);

            let state = *app.world().resource::<State<AppState>>().get();
            let styles = app.world().resource::<PageStyles>();
            let timeline = app.world().resource::<Timeline>();

            if styles.get(LOADER_CLASS).translate_y > LOADER_HIDDEN_TRANSLATE_Y {
                assert_eq!(styles.get(BACKGROUND_CLASS).opacity, 1.0);
            }
            if state == AppState::IntroPlaying {
                assert!(timeline.is_empty());
            } else {
                assert_eq!(state, AppState::ScrollBound);
                assert_eq!(styles.get(BACKGROUND_CLASS).opacity, 0.0);
                assert!(!timeline.is_empty());
                return;
            }
        }
        panic!("intro never finished");
    }
}
