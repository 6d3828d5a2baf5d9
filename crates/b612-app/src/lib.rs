//! B612 Tauri application.
//!
//! This crate wires the scene crates together and exposes
//! them to the frontend via Tauri IPC commands and events.

pub mod ipc;
pub mod scene_loop;
pub mod state;

pub use b612_core as core;
