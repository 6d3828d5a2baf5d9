//! Planet spin system.
//!
//! Applies the idle rotation each tick and layers any active click kick
//! on top. The kick delivers its extra angle along an eased curve; each
//! tick applies only the increment since the last, so the idle spin
//! keeps contributing underneath.

use hecs::World;

use b612_core::components::{Spin, Transform};
use b612_core::constants::PLANET_KICK_SECS;
use b612_core::types::{Ease, SceneTime};

/// Advance rotation for all spinning bodies.
pub fn run(world: &mut World, time: &SceneTime) {
    let dt = time.dt();
    for (_entity, (spin, transform)) in world.query_mut::<(&mut Spin, &mut Transform)>() {
        transform.rotation.y += spin.rate * spin.direction * dt;

        if let Some(kick) = spin.kick.as_mut() {
            let elapsed = time.elapsed_secs - SceneTime::secs_at(kick.start_tick);
            let progress = (elapsed / PLANET_KICK_SECS).clamp(0.0, 1.0);
            let eased = kick.total_angle * Ease::CubicOut.apply(progress);
            transform.rotation.y += eased - kick.applied;
            kick.applied = eased;
            if progress >= 1.0 {
                spin.kick = None;
            }
        }
    }
}
