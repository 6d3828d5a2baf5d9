//! Tauri IPC command handlers.
//!
//! These `#[tauri::command]` functions are invoked by the frontend via `invoke()`.
//! They bridge frontend requests to the scene loop thread via channels.

use tauri::{AppHandle, State};

use b612_assets::PreloadReport;
use b612_core::commands::ViewerCommand;
use b612_core::state::SceneSnapshot;
use b612_sky::Starfield;

use crate::scene_loop;
use crate::state::{AppState, SceneLoopCommand};

/// Start the scene. Spawns the scene loop thread if not already running.
///
/// Frontend: `invoke("start_scene")`
#[tauri::command]
pub fn start_scene(app_handle: AppHandle, state: State<'_, AppState>) -> Result<(), String> {
    let mut running = state.running.lock().map_err(|e| e.to_string())?;

    if *running {
        return Err("Scene already running".into());
    }

    let cmd_tx = scene_loop::spawn_scene_loop(
        app_handle,
        state.latest_snapshot.clone(),
        state.starfield.clone(),
        state.preload.clone(),
    );

    let mut tx_lock = state.command_tx.lock().map_err(|e| e.to_string())?;
    *tx_lock = Some(cmd_tx);
    *running = true;

    Ok(())
}

/// Send a viewer command to the scene.
///
/// Frontend: `invoke("send_command", { command })`
#[tauri::command]
pub fn send_command(command: ViewerCommand, state: State<'_, AppState>) -> Result<(), String> {
    let tx_lock = state.command_tx.lock().map_err(|e| e.to_string())?;

    match tx_lock.as_ref() {
        Some(tx) => tx
            .send(SceneLoopCommand::Viewer(command))
            .map_err(|e| format!("Failed to send command: {}", e)),
        None => Err("Scene not started".into()),
    }
}

/// Get the latest snapshot synchronously (for polling / initial state).
///
/// Frontend: `invoke("get_snapshot")`
#[tauri::command]
pub fn get_snapshot(state: State<'_, AppState>) -> Result<Option<SceneSnapshot>, String> {
    let lock = state.latest_snapshot.lock().map_err(|e| e.to_string())?;
    Ok(lock.clone())
}

/// Get the star dome for this scene's seed. Positions never change,
/// so the frontend fetches this once and builds a static buffer.
///
/// Frontend: `invoke("get_starfield")`
#[tauri::command]
pub fn get_starfield(state: State<'_, AppState>) -> Result<Option<Starfield>, String> {
    let lock = state.starfield.lock().map_err(|e| e.to_string())?;
    Ok(lock.clone())
}

/// Get the latest preload report (for progress UIs that attach late).
///
/// Frontend: `invoke("get_preload_report")`
#[tauri::command]
pub fn get_preload_report(state: State<'_, AppState>) -> Result<Option<PreloadReport>, String> {
    let lock = state.preload.lock().map_err(|e| e.to_string())?;
    Ok(lock.clone())
}
