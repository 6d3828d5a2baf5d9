//! Asset preloading for the B612 scene.
//!
//! The scene ships a fixed manifest of GLB models and image textures.
//! At startup every entry is loaded and format-checked in parallel; a
//! failed load is logged and counted as done, so the join always
//! completes and progress always reaches 100%. Content is never parsed
//! beyond the magic bytes — decoding is the renderer's job.

pub mod manifest;
pub mod preload;
pub mod sniff;

pub use manifest::{scene_manifest, AssetKind, AssetSpec};
pub use preload::{preload_all, PreloadReport};
