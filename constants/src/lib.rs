//! Shared constants describing the host page contract and intro timing.

pub mod intro;
pub mod page;
