//! Scene state snapshot — the complete visible state sent to the frontend each tick.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::SceneEvent;
use crate::types::SceneTime;

/// Complete scene state broadcast to the frontend after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SceneSnapshot {
    pub time: SceneTime,
    pub phase: ScenePhase,
    pub time_scale: f64,
    pub moon: MoonView,
    pub planets: Vec<PlanetView>,
    pub shooting_star: ShootingStarView,
    pub falling_stars: Vec<FallingStarView>,
    pub sky: SkyView,
    pub character: CharacterView,
    /// One-shot events raised during this tick.
    pub events: Vec<SceneEvent>,
}

/// Moon pose for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MoonView {
    pub position: Vec3,
    /// Euler rotation in radians (x, y, z); z carries the click roll.
    pub rotation: Vec3,
    pub scale: f32,
    /// Whether a click roll is still animating.
    pub rolling: bool,
}

/// Planet pose for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanetView {
    pub id: PlanetId,
    pub position: Vec3,
    /// Accumulated y rotation (radians).
    pub rotation_y: f32,
    /// Current uniform scale (base size, grown while hovered).
    pub scale: f32,
    pub hovered: bool,
    /// Whether a click kick is still animating.
    pub kicking: bool,
}

/// Shooting star pose for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShootingStarView {
    pub position: Vec3,
    pub size: f32,
    /// Current orbit speed multiplier (1.0 outside a boost).
    pub speed_multiplier: f32,
    pub boosted: bool,
}

/// One falling star streak for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FallingStarView {
    pub position: Vec3,
    pub size: f32,
    /// Hidden while above the visibility ceiling or waiting to reseed.
    pub visible: bool,
}

/// Sky dome state for display. Star positions are static and fetched once.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkyView {
    /// Accumulated dome rotation about y (radians).
    pub rotation_y: f32,
    /// Scene seconds fed to the brightness pulse.
    pub pulse_time: f32,
    pub star_count: u32,
}

/// The character currently on stage.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CharacterView {
    pub index: usize,
    pub name: String,
    pub description: String,
    pub quote: String,
    /// Asset path of the model to show.
    pub model: String,
    pub position: Vec3,
    /// Euler rotation in radians (x, y, z).
    pub rotation: Vec3,
    pub scale: Vec3,
    /// Model opacity in [0, 1]; animated during swaps.
    pub opacity: f32,
    /// Whether a cross-fade swap is in flight.
    pub swapping: bool,
}
