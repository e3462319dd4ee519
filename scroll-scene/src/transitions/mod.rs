//! Intro sequence and scroll-bound keyframe transitions.
//!
//! ## Flow
//!
//! ```text
//! Loading ──(progress 1.0)──> IntroPlaying ──(intro done)──> ScrollBound
//!                              │                              │
//!                              ├─ loader slides out           ├─ timeline registered once
//!                              └─ background fades            └─ keyframes evaluated each frame
//! ```
//!
//! Keyframes bind the scroll progress through a named page section to a
//! numeric property: a camera position axis, a model rotation axis, or an
//! element's opacity or translation.

/// Transition director systems registering and driving the timeline.
pub mod director;

/// Two-phase intro: loader slide-out, then background fade.
pub mod intro;

/// Keyframe descriptors and the properties they target.
pub mod keyframe;

/// Scroll trigger regions and progress computation.
pub mod scroll_trigger;

/// Registered keyframes, playheads and write precedence.
pub mod timeline;

/// Eased interpolation and timed tweens.
pub mod tween;
