//! Scene engine for B612.
//!
//! Owns the hecs ECS world, runs systems at a fixed tick rate,
//! and produces SceneSnapshots for the frontend.

pub mod cast;
pub mod engine;
pub mod systems;
pub mod world_setup;

pub use b612_core as core;
pub use engine::SceneEngine;
