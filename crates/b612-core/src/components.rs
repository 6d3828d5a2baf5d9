//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Scene logic lives in systems, not components.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::Tween;

/// Spatial placement of an entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Transform {
    pub translation: Vec3,
    /// Euler rotation in radians (x, y, z).
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

/// Continuous rotation about the y axis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Spin {
    /// Idle angular speed (radians per second, always positive).
    pub rate: f32,
    /// +1.0 prograde, -1.0 retrograde.
    pub direction: f32,
    /// Extra eased rotation injected by a click (if any).
    pub kick: Option<SpinKick>,
}

/// A one-shot burst of extra rotation layered on top of the idle spin.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SpinKick {
    /// Tick at which the kick started.
    pub start_tick: u64,
    /// Total extra angle delivered over the kick duration (radians, signed).
    pub total_angle: f32,
    /// Eased angle already applied on previous ticks.
    pub applied: f32,
}

/// Circular path followed by the shooting star.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrbitPath {
    /// Center of the orbit (the anchor planet's position).
    pub center: Vec3,
    pub radius: f32,
    /// Current angle along the circle (radians, unbounded).
    pub angle: f32,
    /// Angular speed before any boost multiplier (radians per second).
    pub base_speed: f32,
    /// Speed multiplier applied this tick (1.0 outside a boost).
    pub multiplier: f32,
    /// Active boost envelope (if any).
    pub boost: Option<OrbitBoost>,
}

/// A temporary speed-up of the orbit: ramp to peak, hold, ease back.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OrbitBoost {
    /// Tick at which the boost started.
    pub start_tick: u64,
}

/// Identity and interaction flags for a background planet.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Planet {
    pub id: PlanetId,
    /// Clicking this planet also boosts the shooting star orbit.
    pub orbit_anchor: bool,
}

/// Hover feedback: grow while the pointer is over the body, shrink when it leaves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HoverScale {
    /// Scale at rest.
    pub base: f32,
    /// Whether the pointer is currently over the body.
    pub hovered: bool,
    /// In-flight grow/shrink tween. Retargeted mid-flight from the current value.
    pub tween: Option<Tween>,
}

/// Click-to-roll animation about the z axis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RollAnimation {
    /// Angle added per click (radians).
    pub step: f32,
    /// Duration of one roll (seconds).
    pub duration_secs: f32,
    /// In-flight roll tween (absolute z rotation).
    pub tween: Option<Tween>,
}

/// One star in the fixed falling-star pool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FallingStar {
    /// Original seed position; reseeds land in a band around it.
    pub anchor: Vec3,
    /// Start of the current streak.
    pub spawn: Vec3,
    /// Streak speed (scene units per second).
    pub speed: f32,
    /// Render size (scene units).
    pub size: f32,
    /// Descent angle below horizontal (radians).
    pub angle: f32,
    /// Seconds since the current streak began.
    pub age_secs: f32,
    pub phase: ParticlePhase,
    /// Derived each tick: only streaks below the ceiling are shown.
    pub visible: bool,
}

/// The rotating dome of pulsing stars.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SkyDome {
    /// Rotation speed about y (radians per second).
    pub rotation_speed: f32,
}

/// Which character is on stage and the state of any cross-fade swap.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterSlot {
    /// Index into the cast list.
    pub index: usize,
    /// Current model opacity in [0, 1].
    pub opacity: f32,
    /// In-flight swap, if one is running. Clicks are ignored until it clears.
    pub swap: Option<CharacterSwap>,
}

/// State of one cross-fade swap.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CharacterSwap {
    pub phase: SwapPhase,
    /// Tick at which the current fade phase began.
    pub phase_start_tick: u64,
}

/// Marks the moon entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Moon;

/// Marks the shooting star entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ShootingStar;
