//! Bridge to the page hosting the scene.
//!
//! The scroll layout is read from the DOM on web builds and simulated from
//! mouse wheel input on native builds. Element styles written by the intro
//! and the scroll transitions are pushed to DOM elements or to UI overlays.

/// DOM sampling and style application for web builds.
#[cfg(target_arch = "wasm32")]
pub mod dom;

/// Scroll offset, viewport height and section rectangles.
pub mod layout;

/// Virtual page scrolled with the mouse wheel on native builds.
#[cfg(not(target_arch = "wasm32"))]
pub mod native_scroll;

/// UI overlays standing in for the page elements on native builds.
#[cfg(not(target_arch = "wasm32"))]
pub mod overlay;

/// Opacity and translation of the styled page elements.
pub mod styles;
