//! Scalar tween evaluation system.
//!
//! Evaluates in-flight hover-scale and roll tweens against the current
//! scene time and writes the results into transforms. Finished tweens
//! are cleared so snapshots can report idle state.

use glam::Vec3;
use hecs::World;

use b612_core::components::{HoverScale, RollAnimation, Transform};
use b612_core::types::SceneTime;

/// Evaluate all active tweens and clear the ones that have finished.
pub fn run(world: &mut World, time: &SceneTime) {
    for (_entity, (hover, transform)) in world.query_mut::<(&mut HoverScale, &mut Transform)>() {
        if let Some(tween) = hover.tween {
            transform.scale = Vec3::splat(tween.value_at(time));
            if tween.finished(time) {
                hover.tween = None;
            }
        }
    }

    for (_entity, (roll, transform)) in world.query_mut::<(&mut RollAnimation, &mut Transform)>() {
        if let Some(tween) = roll.tween {
            transform.rotation.z = tween.value_at(time);
            if tween.finished(time) {
                roll.tween = None;
            }
        }
    }
}
