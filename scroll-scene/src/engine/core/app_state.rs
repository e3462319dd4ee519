use bevy::prelude::*;

use crate::engine::loading::progress::LoadProgress;

/// Lifecycle of the scene. There are no transitions back; `ScrollBound`
/// and `LoadFailed` are terminal.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    #[default]
    Bootstrapping,
    Loading,
    IntroPlaying,
    ScrollBound,
    LoadFailed,
}

impl AppState {
    /// Identifier sent to the host page.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bootstrapping => "bootstrapping",
            Self::Loading => "loading",
            Self::IntroPlaying => "intro_playing",
            Self::ScrollBound => "scroll_bound",
            Self::LoadFailed => "load_failed",
        }
    }
}

/// Ordering of the per-frame systems. The clock ticks first so every
/// consumer of the frame delta sees the same value.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum FrameSet {
    Clock,
    Page,
    Transitions,
    Present,
}

// Loading → IntroPlaying, once the model and its dependencies are in.
pub fn transition_to_intro(
    loading_progress: Res<LoadProgress>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if loading_progress.is_complete() {
        info!("→ Transitioning to IntroPlaying state");
        next_state.set(AppState::IntroPlaying);
    }
}

pub fn transition_to_load_failed(
    loading_progress: Res<LoadProgress>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if let Some(message) = loading_progress.failure() {
        error!("→ Transitioning to LoadFailed state: {}", message);
        next_state.set(AppState::LoadFailed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::state::app::StatesPlugin;

    #[derive(Resource, Default)]
    struct IntroEntries(u32);

    fn count_intro_entry(mut entries: ResMut<IntroEntries>) {
        entries.0 += 1;
    }

    fn loading_app() -> App {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, StatesPlugin))
            .insert_state(AppState::Loading)
            .init_resource::<LoadProgress>()
            .init_resource::<IntroEntries>()
            .add_systems(OnEnter(AppState::IntroPlaying), count_intro_entry)
            .add_systems(
                Update,
                (transition_to_intro, transition_to_load_failed)
                    .run_if(in_state(AppState::Loading)),
            );
        app
    }

    fn state(app: &App) -> AppState {
        *app.world().resource::<State<AppState>>().get()
    }

    #[test]
    fn progress_sequence_enters_intro_once_after_completion() {
        let mut app = loading_app();

        for fraction in [0.2, 0.6] {
            app.world_mut()
                .resource_mut::<LoadProgress>()
                .report(fraction);
            app.update();
            app.update();
            assert_eq!(state(&app), AppState::Loading);
            assert_eq!(app.world().resource::<IntroEntries>().0, 0);
        }

        app.world_mut().resource_mut::<LoadProgress>().report(1.0);
        app.update();
        app.update();
        assert_eq!(state(&app), AppState::IntroPlaying);
        assert_eq!(app.world().resource::<IntroEntries>().0, 1);

        // Late reports and extra frames never re-enter the intro.
        app.world_mut().resource_mut::<LoadProgress>().report(1.0);
        app.update();
        app.update();
        assert_eq!(app.world().resource::<IntroEntries>().0, 1);
    }

    #[test]
    fn load_failure_is_terminal_and_skips_intro() {
        let mut app = loading_app();
        app.world_mut().resource_mut::<LoadProgress>().report(0.2);
        app.world_mut()
            .resource_mut::<LoadProgress>()
            .fail("model failed to load: 404".to_string());
        app.update();
        app.update();
        assert_eq!(state(&app), AppState::LoadFailed);

        app.world_mut().resource_mut::<LoadProgress>().report(1.0);
        app.update();
        app.update();
        assert_eq!(state(&app), AppState::LoadFailed);
        assert_eq!(app.world().resource::<IntroEntries>().0, 0);
    }
}
