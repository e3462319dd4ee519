use bevy::prelude::*;

/// Outcome of a single progress report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressReport {
    Unchanged,
    Advanced,
    Completed,
}

/// Fraction of the scene assets loaded so far, in `[0, 1]`.
///
/// The fraction never decreases. Completion is latched the first time it
/// reaches 1.0, and a failure freezes the progress for good.
#[derive(Resource, Debug, Default, Clone)]
pub struct LoadProgress {
    fraction: f32,
    completed: bool,
    failure: Option<String>,
}

impl LoadProgress {
    pub fn report(&mut self, fraction: f32) -> ProgressReport {
        if self.completed || self.failure.is_some() || !fraction.is_finite() {
            return ProgressReport::Unchanged;
        }

        let fraction = fraction.clamp(0.0, 1.0);
        if fraction <= self.fraction {
            return ProgressReport::Unchanged;
        }

        self.fraction = fraction;
        if fraction >= 1.0 {
            self.completed = true;
            ProgressReport::Completed
        } else {
            ProgressReport::Advanced
        }
    }

    /// Record a load failure. Returns false if loading already finished
    /// or failed earlier.
    pub fn fail(&mut self, message: String) -> bool {
        if self.completed || self.failure.is_some() {
            return false;
        }
        self.failure = Some(message);
        true
    }

    pub fn fraction(&self) -> f32 {
        self.fraction
    }

    pub fn is_complete(&self) -> bool {
        self.completed
    }

    pub fn failure(&self) -> Option<&str> {
        self.failure.as_deref()
    }
}
