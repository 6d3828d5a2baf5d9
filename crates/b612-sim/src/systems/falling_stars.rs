//! Falling-star pool system.
//!
//! Each star in the fixed pool streaks east and down along a straight
//! line from its spawn point. Once it leaves the view it waits a short
//! delay, then reseeds in a band around its original anchor and falls
//! again. Stars are never despawned; the pool recycles forever.
//!
//! Visibility is always derived from position: streaks above the
//! ceiling exist but are hidden until they fall into view.

use glam::Vec3;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use b612_core::components::{FallingStar, Transform};
use b612_core::constants::{
    FALLING_RESEED_X_JITTER, FALLING_RESEED_Y_RAISE, FALLING_RESPAWN_DELAY_TICKS,
};
use b612_core::enums::ParticlePhase;
use b612_core::types::SceneTime;
use b612_motion::trajectory;

/// Advance all falling stars: integrate streaks, park exited stars,
/// reseed the ones whose delay has elapsed.
pub fn run(world: &mut World, rng: &mut ChaCha8Rng, time: &SceneTime) {
    let dt = time.dt();
    for (_entity, (star, transform)) in world.query_mut::<(&mut FallingStar, &mut Transform)>() {
        match star.phase {
            ParticlePhase::Falling => {
                star.age_secs += dt;
                let position =
                    trajectory::position_at(star.spawn, star.speed, star.angle, star.age_secs);
                if trajectory::has_exited(position) {
                    star.phase = ParticlePhase::Waiting {
                        until_tick: time.tick + FALLING_RESPAWN_DELAY_TICKS,
                    };
                    star.visible = false;
                } else {
                    transform.translation = position;
                    star.visible = trajectory::is_visible(position);
                }
            }
            ParticlePhase::Waiting { until_tick } => {
                if time.tick >= until_tick {
                    let spawn = Vec3::new(
                        star.anchor.x
                            + rng.gen_range(-FALLING_RESEED_X_JITTER..FALLING_RESEED_X_JITTER),
                        star.anchor.y + rng.gen_range(0.0..FALLING_RESEED_Y_RAISE),
                        star.anchor.z,
                    );
                    star.spawn = spawn;
                    star.age_secs = 0.0;
                    star.phase = ParticlePhase::Falling;
                    transform.translation = spawn;
                    star.visible = trajectory::is_visible(spawn);
                }
            }
        }
    }
}
