//! Shooting star orbit system.
//!
//! Advances the orbit angle (scaled by any active boost envelope) and
//! writes the body's position on the circle. The multiplier applied
//! this tick is kept on the component for snapshots.

use hecs::World;

use b612_core::components::{OrbitPath, Transform};
use b612_core::types::SceneTime;
use b612_motion::{boost, orbit};

/// Advance all orbiting bodies.
pub fn run(world: &mut World, time: &SceneTime) {
    let dt = time.dt();
    for (_entity, (path, transform)) in world.query_mut::<(&mut OrbitPath, &mut Transform)>() {
        path.multiplier = match path.boost {
            Some(active) => {
                let elapsed = time.elapsed_secs - SceneTime::secs_at(active.start_tick);
                if boost::finished(elapsed) {
                    path.boost = None;
                    1.0
                } else {
                    boost::multiplier_at(elapsed)
                }
            }
            None => 1.0,
        };

        path.angle = orbit::advance_angle(path.angle, path.base_speed, path.multiplier, dt);
        transform.translation = orbit::position_on(path.center, path.radius, path.angle);
    }
}
