//! Scene constants and tuning parameters.

use glam::Vec3;

/// Scene tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f32 = 1.0 / TICK_RATE as f32;

/// Maximum allowed time scale multiplier.
pub const MAX_TIME_SCALE: f64 = 4.0;

// --- Starfield ---

/// Number of stars in the sky dome.
pub const STARFIELD_COUNT: usize = 3000;

/// Radius of the sphere the stars sit on (scene units).
pub const STARFIELD_RADIUS: f32 = 100.0;

/// Sky dome rotation speed (radians per second).
pub const SKY_ROTATION_SPEED: f32 = 0.02;

/// Frequency of the per-star brightness pulse (radians per second).
pub const STAR_PULSE_SPEED: f32 = 1.5;

/// Per-star phase offsets are drawn uniformly from [0, this).
pub const STAR_PULSE_OFFSET_MAX: f32 = 10.0;

/// Rendered point size for a star.
pub const STAR_POINT_SIZE: f32 = 5.0;

/// Star tint, normalized RGB (#FCF6BD).
pub const STAR_COLOR: [f32; 3] = [252.0 / 255.0, 246.0 / 255.0, 189.0 / 255.0];

// --- Falling stars ---

/// Fixed pool size; exited stars are recycled, never despawned.
pub const FALLING_STAR_COUNT: usize = 10;

/// Spawn region west edge (x drawn from [WEST, WEST + X_SPAN)).
pub const FALLING_SPAWN_WEST: f32 = -100.0;

/// Width of the spawn region along x.
pub const FALLING_SPAWN_X_SPAN: f32 = 10.0;

/// Spawn region base height (y drawn from [BASE, BASE + Y_SPAN)).
pub const FALLING_SPAWN_HEIGHT: f32 = 50.0;

/// Height of the spawn region along y.
pub const FALLING_SPAWN_Y_SPAN: f32 = 20.0;

/// Spawn region near edge (z drawn from [NEAR - Z_SPAN, NEAR)).
pub const FALLING_SPAWN_NEAR: f32 = -30.0;

/// Depth of the spawn region along z.
pub const FALLING_SPAWN_Z_SPAN: f32 = 20.0;

/// Streak speed range (scene units per second).
pub const FALLING_SPEED_MIN: f32 = 3.5;
pub const FALLING_SPEED_MAX: f32 = 7.5;

/// Streak size range (scene units).
pub const FALLING_SIZE_MIN: f32 = 0.2;
pub const FALLING_SIZE_MAX: f32 = 0.5;

/// Descent angle below horizontal: 45 degrees plus jitter in [-JITTER, JITTER).
pub const FALLING_ANGLE_BASE: f32 = std::f32::consts::FRAC_PI_4;
pub const FALLING_ANGLE_JITTER: f32 = 0.25;

/// Horizontal drift multiplier applied on top of speed * cos(angle).
pub const FALLING_DRIFT_X: f32 = 2.0;

/// Vertical drop multiplier applied on top of speed * sin(angle).
pub const FALLING_DRIFT_Y: f32 = 1.5;

/// A star has exited once x exceeds this (scene units).
pub const FALLING_EXIT_EAST: f32 = 100.0;

/// A star has exited once y drops below this (scene units).
pub const FALLING_EXIT_FLOOR: f32 = -50.0;

/// Stars are only shown once they fall below this height.
pub const FALLING_VISIBLE_BELOW: f32 = 40.0;

/// Delay between exit and reseed, in ticks (50 ms at 60 Hz).
pub const FALLING_RESPAWN_DELAY_TICKS: u64 = 3;

/// Reseed x lands in [anchor - JITTER, anchor + JITTER).
pub const FALLING_RESEED_X_JITTER: f32 = 5.0;

/// Reseed y lands in [anchor, anchor + RAISE).
pub const FALLING_RESEED_Y_RAISE: f32 = 10.0;

// --- Moon ---

/// Moon position (scene units).
pub const MOON_POSITION: Vec3 = Vec3::new(0.0, -4.0, -1.0);

/// Moon uniform scale.
pub const MOON_SCALE: f32 = 6.0;

/// Roll added around z on each moon click (radians).
pub const MOON_ROLL_STEP: f32 = std::f32::consts::FRAC_PI_4;

/// Duration of the moon roll animation (seconds).
pub const MOON_ROLL_SECS: f32 = 1.0;

// --- Planets ---

/// First planet: the large drifter, upper left.
pub const PLANET_ONE_POSITION: Vec3 = Vec3::new(-11.0, 7.0, -20.0);
pub const PLANET_ONE_SIZE: f32 = 6.0;
/// Idle spin about y (radians per second), retrograde.
pub const PLANET_ONE_SPIN_RATE: f32 = 0.18;
pub const PLANET_ONE_SPIN_DIR: f32 = -1.0;

/// Second planet: smaller, right of the moon, anchors the shooting star orbit.
pub const PLANET_TWO_POSITION: Vec3 = Vec3::new(17.0, 4.0, -30.0);
pub const PLANET_TWO_SIZE: f32 = 4.0;
/// Idle spin about y (radians per second), prograde.
pub const PLANET_TWO_SPIN_RATE: f32 = 0.6;
pub const PLANET_TWO_SPIN_DIR: f32 = 1.0;

/// Hover grows a planet to this multiple of its base size.
pub const PLANET_HOVER_SCALE: f32 = 1.1;

/// Duration of the hover grow/shrink tween (seconds).
pub const PLANET_HOVER_SECS: f32 = 0.3;

/// Extra rotation injected by a planet click (radians, 1.5 turns).
pub const PLANET_KICK_ANGLE: f32 = 3.0 * std::f32::consts::PI;

/// Duration of the click spin kick (seconds).
pub const PLANET_KICK_SECS: f32 = 2.0;

// --- Shooting star orbit ---

/// Orbit radius around the anchor planet (scene units).
pub const ORBIT_RADIUS: f32 = 6.0;

/// Base angular speed (radians per second).
pub const ORBIT_BASE_SPEED: f32 = 1.0;

/// Shooting star render size (scene units).
pub const SHOOTING_STAR_SIZE: f32 = 0.25;

/// Peak speed multiplier reached during a boost.
pub const ORBIT_BOOST_PEAK: f32 = 3.0;

/// Boost envelope: ramp up, hold at peak, ease back down (seconds).
pub const ORBIT_BOOST_RISE_SECS: f32 = 1.5;
pub const ORBIT_BOOST_HOLD_SECS: f32 = 0.5;
pub const ORBIT_BOOST_FALL_SECS: f32 = 2.0;

// --- Character carousel ---

/// Cross-fade out duration before the swap (seconds).
pub const CHARACTER_FADE_OUT_SECS: f32 = 0.5;

/// Cross-fade in duration after the swap (seconds).
pub const CHARACTER_FADE_IN_SECS: f32 = 1.5;
