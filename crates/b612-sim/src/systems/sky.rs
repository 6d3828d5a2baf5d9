//! Sky dome rotation system.
//!
//! The dome's rotation is set absolutely from elapsed time rather than
//! incremented, so pausing and resuming never drifts it.

use hecs::World;

use b612_core::components::{SkyDome, Transform};
use b612_core::types::SceneTime;

pub fn run(world: &mut World, time: &SceneTime) {
    for (_entity, (dome, transform)) in world.query_mut::<(&SkyDome, &mut Transform)>() {
        transform.rotation.y = time.elapsed_secs * dome.rotation_speed;
    }
}
