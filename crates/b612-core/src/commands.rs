//! Viewer commands sent from the frontend to the scene.
//!
//! Commands are validated and queued for processing at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// All possible viewer actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ViewerCommand {
    // --- Interaction ---
    /// Click the moon: roll it and advance the character carousel.
    ClickMoon,
    /// Click a planet: kick its spin; the anchor planet also boosts the orbit.
    ClickPlanet { planet: PlanetId },
    /// Pointer entered or left a planet.
    SetPlanetHover { planet: PlanetId, hovered: bool },

    // --- Scene control ---
    /// Leave the loading phase and start the clock.
    StartScene,
    /// Set time scale (1.0 = normal, 2.0 = double).
    SetTimeScale { scale: f64 },
    /// Pause the scene.
    Pause,
    /// Resume the scene.
    Resume,
}
