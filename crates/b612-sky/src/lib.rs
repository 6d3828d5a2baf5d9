//! Starfield generation for the B612 scene.
//!
//! Builds the static dome of stars: positions on a sphere plus the
//! per-star phase offsets the pulse shader needs. Generated once per
//! seed and served to the frontend as flat buffers.

pub use b612_core as core;

pub mod starfield;

pub use starfield::Starfield;
