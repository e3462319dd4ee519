use std::f32::consts::PI;

use bevy::math::curve::EaseFunction;
use bevy::prelude::*;
use constants::page::{SECTION_FOUR, SECTION_THREE, SECTION_TWO, STICKY_TEXT_CLASS, STICKY_TEXT2_CLASS};

use crate::page::layout::PageLayout;
use crate::transitions::keyframe::{Axis, KeyframeDescriptor, PropertyPath};
use crate::transitions::scroll_trigger::ScrollTrigger;
use crate::transitions::tween::interpolate;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum TimelineError {
    #[error("{property} is already bound to section {section}")]
    DuplicateBinding { property: String, section: String },
}

/// The transitions bound to page scrolling, in registration order.
pub fn scroll_timeline() -> Vec<KeyframeDescriptor> {
    use KeyframeDescriptor as K;
    use PropertyPath::{CameraPosition, ElementOpacity, ElementTranslateY, ModelRotation};

    let two = || ScrollTrigger::entering(SECTION_TWO);
    let three = || ScrollTrigger::entering(SECTION_THREE);
    let four = || ScrollTrigger::entering(SECTION_FOUR);

    vec![
        // Section two: swing round to the character's side.
        K::scrubbed(CameraPosition(Axis::X), -1.6, two()),
        K::scrubbed(CameraPosition(Axis::Z), 3.8, two()),
        K::scrubbed(ModelRotation(Axis::Y), PI * 0.5, two()),
        K::toggled(ElementOpacity(STICKY_TEXT_CLASS.into()), 1.0, two()),
        // Section three: cross over and drop the camera.
        K::scrubbed(CameraPosition(Axis::X), 1.8, three()),
        K::scrubbed(CameraPosition(Axis::Y), 0.6, three()),
        K::scrubbed(ModelRotation(Axis::Y), -PI * 0.25, three()),
        K::toggled(ElementOpacity(STICKY_TEXT_CLASS.into()), 0.0, three()),
        K::toggled(ElementOpacity(STICKY_TEXT2_CLASS.into()), 1.0, three()),
        // Section four: pull back for the closing shot.
        K::scrubbed(CameraPosition(Axis::X), 0.0, four()),
        K::scrubbed(CameraPosition(Axis::Y), 1.4, four()),
        K::scrubbed(CameraPosition(Axis::Z), 6.5, four()),
        K::scrubbed(ModelRotation(Axis::X), 0.2, four()).with_ease(EaseFunction::SineInOut),
        K::scrubbed(ModelRotation(Axis::Y), 0.0, four()),
        K::toggled(ElementOpacity(STICKY_TEXT2_CLASS.into()), 0.0, four()),
        K::scrubbed(ElementTranslateY(STICKY_TEXT2_CLASS.into()), -20.0, four()),
    ]
}

#[derive(Debug, Clone)]
pub struct BoundKeyframe {
    pub descriptor: KeyframeDescriptor,
    /// Value at progress 0, resolved at registration
    pub from: f32,
    playhead: f32,
}

impl BoundKeyframe {
    pub fn value(&self) -> f32 {
        interpolate(
            self.from,
            self.descriptor.end,
            self.descriptor.ease,
            self.playhead,
        )
    }

    fn update_playhead(&mut self, progress: f32, delta: f32) {
        if self.descriptor.scrub {
            self.playhead = progress;
            return;
        }

        let target = if progress > 0.0 { 1.0 } else { 0.0 };
        let step = if self.descriptor.duration > 0.0 {
            delta.max(0.0) / self.descriptor.duration
        } else {
            1.0
        };
        self.playhead = if target > self.playhead {
            (self.playhead + step).min(target)
        } else {
            (self.playhead - step).max(target)
        };
    }
}

/// Registered keyframes. Descriptors are never changed after registration.
///
/// When several keyframes target the same property, the last registered
/// one that has started (playhead above zero) writes it. Before any of
/// them starts, the first one writes its start value.
#[derive(Resource, Debug, Default)]
pub struct Timeline {
    keyframes: Vec<BoundKeyframe>,
}

impl Timeline {
    /// Register a keyframe. Its start value is the end value of the last
    /// keyframe registered for the same property, else `current`.
    pub fn register(
        &mut self,
        descriptor: KeyframeDescriptor,
        current: f32,
    ) -> Result<(), TimelineError> {
        let mut from = current;
        for bound in &self.keyframes {
            if bound.descriptor.target != descriptor.target {
                continue;
            }
            if bound.descriptor.trigger.section == descriptor.trigger.section {
                return Err(TimelineError::DuplicateBinding {
                    property: descriptor.target.to_string(),
                    section: descriptor.trigger.section.clone(),
                });
            }
            from = bound.descriptor.end;
        }

        self.keyframes.push(BoundKeyframe {
            descriptor,
            from,
            playhead: 0.0,
        });
        Ok(())
    }

    pub fn keyframes(&self) -> &[BoundKeyframe] {
        &self.keyframes
    }

    pub fn is_empty(&self) -> bool {
        self.keyframes.is_empty()
    }

    /// Move every playhead for the current layout. Keyframes whose section
    /// is missing from the page keep their playhead.
    pub fn advance(&mut self, layout: &PageLayout, delta: f32) {
        for bound in &mut self.keyframes {
            if let Some(progress) = bound.descriptor.trigger.progress(layout) {
                bound.update_playhead(progress, delta);
            }
        }
    }

    /// One value per bound property, in first-registration order.
    pub fn resolve(&self) -> Vec<(PropertyPath, f32)> {
        let mut writes: Vec<(PropertyPath, f32)> = Vec::new();

        for bound in &self.keyframes {
            let target = &bound.descriptor.target;
            match writes.iter_mut().find(|(property, _)| property == target) {
                Some(write) if bound.playhead > 0.0 => write.1 = bound.value(),
                Some(_) => {}
                None => writes.push((target.clone(), bound.value())),
            }
        }

        writes
    }
}
