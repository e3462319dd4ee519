use std::fmt;

use bevy::math::curve::EaseFunction;
use bevy::prelude::*;
use constants::intro::TOGGLE_TWEEN_SECONDS;

use crate::transitions::scroll_trigger::ScrollTrigger;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub fn get(self, v: Vec3) -> f32 {
        match self {
            Self::X => v.x,
            Self::Y => v.y,
            Self::Z => v.z,
        }
    }

    pub fn set(self, v: &mut Vec3, value: f32) {
        match self {
            Self::X => v.x = value,
            Self::Y => v.y = value,
            Self::Z => v.z = value,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Z => "z",
        }
    }
}

/// Numeric property a keyframe writes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PropertyPath {
    CameraPosition(Axis),
    /// Euler XYZ rotation of the model, in radians
    ModelRotation(Axis),
    ElementOpacity(String),
    /// Vertical translation of an element, in percent of its height
    ElementTranslateY(String),
}

impl fmt::Display for PropertyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CameraPosition(axis) => write!(f, "camera.position.{}", axis.as_str()),
            Self::ModelRotation(axis) => write!(f, "model.rotation.{}", axis.as_str()),
            Self::ElementOpacity(class) => write!(f, ".{class}.opacity"),
            Self::ElementTranslateY(class) => write!(f, ".{class}.translateY"),
        }
    }
}

/// Declarative binding from scroll progress to a property value.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyframeDescriptor {
    pub target: PropertyPath,
    pub end: f32,
    pub trigger: ScrollTrigger,
    pub ease: EaseFunction,
    /// Scrubbed keyframes follow scroll progress directly. Others play
    /// over `duration` once the region is entered and reverse on leaving
    /// it backwards.
    pub scrub: bool,
    pub duration: f32,
}

impl KeyframeDescriptor {
    pub fn scrubbed(target: PropertyPath, end: f32, trigger: ScrollTrigger) -> Self {
        Self {
            target,
            end,
            trigger,
            ease: EaseFunction::Linear,
            scrub: true,
            duration: 0.0,
        }
    }

    pub fn toggled(target: PropertyPath, end: f32, trigger: ScrollTrigger) -> Self {
        Self {
            target,
            end,
            trigger,
            ease: EaseFunction::QuadraticOut,
            scrub: false,
            duration: TOGGLE_TWEEN_SECONDS,
        }
    }

    pub fn with_ease(mut self, ease: EaseFunction) -> Self {
        self.ease = ease;
        self
    }
}
