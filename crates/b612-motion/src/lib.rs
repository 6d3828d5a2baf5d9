//! Motion math for the B612 scene.
//!
//! Pure functions for orbital paths, falling-star streaks, boost envelopes,
//! and star brightness pulsing. No ECS dependency — operates on plain data.

pub mod boost;
pub mod orbit;
pub mod pulse;
pub mod trajectory;

pub use b612_core as core;
