//! Application state shared across Tauri commands and the scene loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use b612_assets::PreloadReport;
use b612_core::commands::ViewerCommand;
use b612_core::state::SceneSnapshot;
use b612_sky::Starfield;

/// Commands sent from the IPC layer to the scene loop thread.
#[derive(Debug)]
pub enum SceneLoopCommand {
    /// A viewer command to forward to the scene engine.
    Viewer(ViewerCommand),
    /// Shut down the scene loop thread gracefully.
    Shutdown,
}

/// Shared application state, stored as Tauri managed state.
///
/// Tauri requires managed state to be Send + Sync. We achieve this by:
/// - Wrapping `mpsc::Sender` in `Mutex` (Sender is Send but not Sync)
/// - Using `Mutex<Option<...>>` for state that may not exist before `start_scene`
/// - Using `Arc<Mutex<...>>` for state shared with the scene loop thread
pub struct AppState {
    /// Channel sender to forward commands to the scene loop thread.
    /// `None` before `start_scene` is called.
    pub command_tx: Mutex<Option<mpsc::Sender<SceneLoopCommand>>>,
    /// Latest snapshot for synchronous `get_snapshot` queries.
    /// Updated by the scene loop thread after each tick.
    pub latest_snapshot: Arc<Mutex<Option<SceneSnapshot>>>,
    /// The seed-generated star dome, published once the engine exists.
    /// Positions are static, so the frontend fetches this exactly once.
    pub starfield: Arc<Mutex<Option<Starfield>>>,
    /// Latest preload report, updated as assets finish loading.
    pub preload: Arc<Mutex<Option<PreloadReport>>>,
    /// Whether the scene loop is currently running.
    pub running: Mutex<bool>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
            starfield: Arc::new(Mutex::new(None)),
            preload: Arc::new(Mutex::new(None)),
            running: Mutex::new(false),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_creation() {
        let state = AppState::new();
        assert!(state.command_tx.lock().unwrap().is_none());
        assert!(state.latest_snapshot.lock().unwrap().is_none());
        assert!(state.starfield.lock().unwrap().is_none());
        assert!(state.preload.lock().unwrap().is_none());
        assert!(!*state.running.lock().unwrap());
    }
}
