use std::time::Duration;

use bevy::prelude::*;

/// Delta-time source queried once per frame. Only the last timestamp is
/// kept between ticks.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct FrameClock {
    last: Option<Duration>,
    delta: Duration,
}

impl FrameClock {
    /// Advance to `now` and return the time since the previous tick. The
    /// first tick yields zero, and a timestamp older than the cursor never
    /// produces a negative delta or moves the cursor back.
    pub fn tick(&mut self, now: Duration) -> Duration {
        self.delta = match self.last {
            Some(last) => now.saturating_sub(last),
            None => Duration::ZERO,
        };
        self.last = Some(self.last.map_or(now, |last| last.max(now)));
        self.delta
    }

    pub fn delta_secs(&self) -> f32 {
        self.delta.as_secs_f32()
    }
}

pub fn tick_frame_clock(mut clock: ResMut<FrameClock>, time: Res<Time<Real>>) {
    clock.tick(time.elapsed());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_tick_has_no_delta() {
        let mut clock = FrameClock::default();
        assert_eq!(clock.tick(Duration::from_millis(500)), Duration::ZERO);
    }

    #[test]
    fn delta_is_time_since_previous_tick() {
        let mut clock = FrameClock::default();
        clock.tick(Duration::from_millis(100));
        assert_eq!(clock.tick(Duration::from_millis(116)), Duration::from_millis(16));
        assert_eq!(clock.tick(Duration::from_millis(150)), Duration::from_millis(34));
        assert!((clock.delta_secs() - 0.034).abs() < 1e-6);
    }

    #[test]
    fn stale_timestamps_never_go_negative() {
        let mut clock = FrameClock::default();
        clock.tick(Duration::from_millis(200));
        assert_eq!(clock.tick(Duration::from_millis(150)), Duration::ZERO);
        // The cursor stayed at 200ms.
        assert_eq!(clock.tick(Duration::from_millis(210)), Duration::from_millis(10));
    }

    #[test]
    fn system_reads_real_time() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .init_resource::<FrameClock>()
            .add_systems(First, tick_frame_clock.after(bevy::time::TimeSystem));

        app.update();
        app.update();
        let clock = *app.world().resource::<FrameClock>();
        let real = app.world().resource::<Time<Real>>().delta();
        assert_eq!(clock.delta_secs(), real.as_secs_f32());
    }
}
