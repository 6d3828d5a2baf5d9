//! Falling-star streak kinematics.
//!
//! A streak is fully described by its spawn point, speed, and descent
//! angle; position is a closed-form function of age. Systems keep only
//! the age and recompute position each tick, so pausing and time scaling
//! fall out for free.

use b612_core::constants::*;
use glam::Vec3;

/// Position of a streak `age_secs` after it left `spawn`.
///
/// The streak moves east and down along its descent angle; depth is
/// constant for the life of the streak.
pub fn position_at(spawn: Vec3, speed: f32, angle: f32, age_secs: f32) -> Vec3 {
    let distance = age_secs * speed;
    Vec3::new(
        spawn.x + distance * angle.cos() * FALLING_DRIFT_X,
        spawn.y - distance * angle.sin() * FALLING_DRIFT_Y,
        spawn.z,
    )
}

/// A streak has exited once it crosses the east edge or the floor.
pub fn has_exited(position: Vec3) -> bool {
    position.x > FALLING_EXIT_EAST || position.y < FALLING_EXIT_FLOOR
}

/// Streaks are hidden until they fall below the visibility ceiling,
/// so a fresh spawn high in the sky never pops into view.
pub fn is_visible(position: Vec3) -> bool {
    position.y < FALLING_VISIBLE_BELOW
}

/// Whether a reseeded spawn point sits inside the band around its anchor:
/// x within the jitter window, y between the anchor and the raise limit.
pub fn in_reseed_band(anchor: Vec3, spawn: Vec3) -> bool {
    (spawn.x - anchor.x).abs() <= FALLING_RESEED_X_JITTER
        && spawn.y >= anchor.y
        && spawn.y <= anchor.y + FALLING_RESEED_Y_RAISE
        && spawn.z == anchor.z
}
