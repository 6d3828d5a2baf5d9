//! Entity spawn factories for setting up the scene world.
//!
//! Creates the moon, both planets, the shooting star, the falling-star
//! pool, the sky dome, and the character slot with appropriate
//! component bundles.

use glam::Vec3;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use b612_core::components::*;
use b612_core::constants::*;
use b612_core::enums::*;

/// Set up the complete scene. Called once when the engine is created;
/// the world never grows or shrinks afterwards.
pub fn setup_scene(world: &mut World, rng: &mut ChaCha8Rng) {
    spawn_moon(world);
    spawn_planets(world);
    spawn_shooting_star(world);
    spawn_falling_star_pool(world, rng, FALLING_STAR_COUNT);
    spawn_sky_dome(world);
    spawn_character_slot(world);
}

/// Spawn the moon: static pose, click-to-roll animation slot.
pub fn spawn_moon(world: &mut World) -> hecs::Entity {
    world.spawn((
        Moon,
        Transform {
            translation: MOON_POSITION,
            rotation: Vec3::ZERO,
            scale: Vec3::splat(MOON_SCALE),
        },
        RollAnimation {
            step: MOON_ROLL_STEP,
            duration_secs: MOON_ROLL_SECS,
            tween: None,
        },
    ))
}

/// Spawn both background planets. The second one anchors the shooting
/// star orbit and reacts to hover.
pub fn spawn_planets(world: &mut World) {
    world.spawn((
        Planet {
            id: PlanetId::One,
            orbit_anchor: false,
        },
        Transform {
            translation: PLANET_ONE_POSITION,
            rotation: Vec3::ZERO,
            scale: Vec3::splat(PLANET_ONE_SIZE),
        },
        Spin {
            rate: PLANET_ONE_SPIN_RATE,
            direction: PLANET_ONE_SPIN_DIR,
            kick: None,
        },
        HoverScale {
            base: PLANET_ONE_SIZE,
            hovered: false,
            tween: None,
        },
    ));

    world.spawn((
        Planet {
            id: PlanetId::Two,
            orbit_anchor: true,
        },
        Transform {
            translation: PLANET_TWO_POSITION,
            rotation: Vec3::ZERO,
            scale: Vec3::splat(PLANET_TWO_SIZE),
        },
        Spin {
            rate: PLANET_TWO_SPIN_RATE,
            direction: PLANET_TWO_SPIN_DIR,
            kick: None,
        },
        HoverScale {
            base: PLANET_TWO_SIZE,
            hovered: false,
            tween: None,
        },
    ));
}

/// Spawn the shooting star on its orbit around the anchor planet.
pub fn spawn_shooting_star(world: &mut World) -> hecs::Entity {
    let path = OrbitPath {
        center: PLANET_TWO_POSITION,
        radius: ORBIT_RADIUS,
        angle: 0.0,
        base_speed: ORBIT_BASE_SPEED,
        multiplier: 1.0,
        boost: None,
    };
    world.spawn((
        ShootingStar,
        Transform {
            translation: b612_motion::orbit::position_on(path.center, path.radius, path.angle),
            rotation: Vec3::ZERO,
            scale: Vec3::splat(SHOOTING_STAR_SIZE),
        },
        path,
    ))
}

/// Spawn the fixed falling-star pool. Each star draws its own spawn
/// point, speed, size, and descent angle; the pool size never changes.
pub fn spawn_falling_star_pool(world: &mut World, rng: &mut ChaCha8Rng, count: usize) {
    for _ in 0..count {
        let spawn = Vec3::new(
            FALLING_SPAWN_WEST + rng.gen_range(0.0..FALLING_SPAWN_X_SPAN),
            FALLING_SPAWN_HEIGHT + rng.gen_range(0.0..FALLING_SPAWN_Y_SPAN),
            FALLING_SPAWN_NEAR - rng.gen_range(0.0..FALLING_SPAWN_Z_SPAN),
        );
        let star = FallingStar {
            anchor: spawn,
            spawn,
            speed: rng.gen_range(FALLING_SPEED_MIN..FALLING_SPEED_MAX),
            size: rng.gen_range(FALLING_SIZE_MIN..FALLING_SIZE_MAX),
            angle: FALLING_ANGLE_BASE + rng.gen_range(-FALLING_ANGLE_JITTER..FALLING_ANGLE_JITTER),
            age_secs: 0.0,
            phase: ParticlePhase::Falling,
            visible: b612_motion::trajectory::is_visible(spawn),
        };
        world.spawn((
            Transform {
                translation: spawn,
                rotation: Vec3::ZERO,
                scale: Vec3::splat(star.size),
            },
            star,
        ));
    }
}

/// Spawn the sky dome entity carrying the whole-sky rotation.
pub fn spawn_sky_dome(world: &mut World) -> hecs::Entity {
    world.spawn((
        SkyDome {
            rotation_speed: SKY_ROTATION_SPEED,
        },
        Transform::default(),
    ))
}

/// Spawn the character slot, opening on the first cast entry at full
/// opacity.
pub fn spawn_character_slot(world: &mut World) -> hecs::Entity {
    world.spawn((CharacterSlot {
        index: 0,
        opacity: 1.0,
        swap: None,
    },))
}
