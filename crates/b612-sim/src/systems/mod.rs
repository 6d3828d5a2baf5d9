//! ECS systems that operate on the scene world each tick.
//!
//! Systems are pure functions that take `&mut World` (or `&World` for read-only).
//! They do not own state — all state lives in components.

pub mod carousel;
pub mod falling_stars;
pub mod orbit;
pub mod sky;
pub mod snapshot;
pub mod spin;
pub mod tweens;
