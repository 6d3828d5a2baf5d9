//! Enumeration types used throughout the scene.

use serde::{Deserialize, Serialize};

/// Scene phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScenePhase {
    /// Assets still loading; the clock is held at zero.
    #[default]
    Loading,
    /// Scene running, clock advancing.
    Active,
    /// Frozen by the viewer; resumes where it stopped.
    Paused,
}

/// Identifies one of the two background planets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlanetId {
    /// Large retrograde drifter, upper left.
    One,
    /// Smaller prograde planet that anchors the shooting star orbit.
    Two,
}

/// Lifecycle of one falling star in the recycling pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParticlePhase {
    /// Streaking across the sky.
    Falling,
    /// Exited the view; hidden until the reseed tick.
    Waiting {
        /// Tick at which the star reseeds near its anchor.
        until_tick: u64,
    },
}

impl Default for ParticlePhase {
    fn default() -> Self {
        ParticlePhase::Falling
    }
}

/// Stage of a character cross-fade swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SwapPhase {
    /// Current character fading to transparent.
    FadeOut,
    /// Next character fading back in.
    FadeIn,
}
