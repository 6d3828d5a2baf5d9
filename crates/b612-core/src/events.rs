//! Events emitted by the scene for audio and UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// One-shot scene events for the frontend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SceneEvent {
    /// The scene left the loading phase and the clock started.
    SceneStarted,
    /// A moon click kicked off a roll animation.
    MoonRolled {
        /// Absolute z rotation the roll is heading toward (radians).
        target_roll: f32,
    },
    /// A planet click injected a spin kick.
    PlanetKicked { planet: PlanetId },
    /// The anchor planet was clicked and the shooting star sped up.
    OrbitBoosted { peak_multiplier: f32 },
    /// The carousel advanced to a new character (fires at the fade midpoint).
    CharacterChanged { index: usize, name: String },
}
