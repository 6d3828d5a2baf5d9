//! Scene loop thread — preloads assets, then runs the engine at 60Hz
//! and emits snapshots.
//!
//! The engine is created inside this thread because it's cleaner for
//! ownership. Commands arrive via `mpsc` channel. Snapshots are emitted
//! via Tauri `AppHandle` events and stored in shared state for
//! synchronous polling.

use std::path::PathBuf;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use tauri::{AppHandle, Emitter, Manager};

use b612_assets::{preload_all, scene_manifest, PreloadReport};
use b612_core::constants::TICK_RATE;
use b612_core::state::SceneSnapshot;
use b612_sim::engine::{SceneConfig, SceneEngine};
use b612_sky::Starfield;

use crate::state::SceneLoopCommand;

/// Nominal duration of one tick at 1x speed.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Event carrying the per-tick scene snapshot.
pub const SNAPSHOT_EVENT: &str = "scene:snapshot";

/// Event carrying preload progress updates.
pub const PROGRESS_EVENT: &str = "assets:progress";

/// Spawns the scene loop in a new thread.
///
/// Returns the command sender for the IPC layer to use.
pub fn spawn_scene_loop(
    app_handle: AppHandle,
    latest_snapshot: Arc<Mutex<Option<SceneSnapshot>>>,
    starfield: Arc<Mutex<Option<Starfield>>>,
    preload: Arc<Mutex<Option<PreloadReport>>>,
) -> mpsc::Sender<SceneLoopCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<SceneLoopCommand>();

    std::thread::Builder::new()
        .name("b612-scene-loop".into())
        .spawn(move || {
            run_preload(&app_handle, &preload);
            run_scene_loop(app_handle, cmd_rx, &latest_snapshot, &starfield);
        })
        .expect("Failed to spawn scene loop thread");

    cmd_tx
}

/// Where the GLBs and textures live. Bundled builds resolve the Tauri
/// resource dir; dev builds fall back to the working directory.
fn asset_root(app_handle: &AppHandle) -> PathBuf {
    app_handle
        .path()
        .resource_dir()
        .map(|dir| dir.join("assets"))
        .unwrap_or_else(|_| PathBuf::from("assets"))
}

/// Load the full manifest before the first tick, emitting progress
/// after every entry. Failures are reported and skipped; the scene
/// starts either way and the frontend decides what to do about holes.
fn run_preload(app_handle: &AppHandle, preload: &Mutex<Option<PreloadReport>>) {
    let root = asset_root(app_handle);
    let manifest = scene_manifest();

    let report = preload_all(&root, &manifest, |partial| {
        let _ = app_handle.emit(PROGRESS_EVENT, partial);
        if let Ok(mut lock) = preload.lock() {
            *lock = Some(partial.clone());
        }
    });

    if report.failed.is_empty() {
        log::info!(
            "preloaded {} assets from {}",
            report.loaded,
            root.display()
        );
    } else {
        log::warn!(
            "preload finished with {} failures out of {}",
            report.failed.len(),
            report.total
        );
    }
    if let Ok(mut lock) = preload.lock() {
        *lock = Some(report);
    }
}

/// The scene loop. Runs until Shutdown command or channel disconnect.
fn run_scene_loop(
    app_handle: AppHandle,
    cmd_rx: mpsc::Receiver<SceneLoopCommand>,
    latest_snapshot: &Mutex<Option<SceneSnapshot>>,
    starfield: &Mutex<Option<Starfield>>,
) {
    let mut engine = SceneEngine::new(SceneConfig::default());

    // Star positions are fixed per seed; publish once for `get_starfield`.
    if let Ok(mut lock) = starfield.lock() {
        *lock = Some(engine.starfield().clone());
    }

    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(SceneLoopCommand::Viewer(cmd)) => {
                    engine.queue_command(cmd);
                }
                Ok(SceneLoopCommand::Shutdown) => return,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one tick (engine handles loading/pause semantics internally)
        let snapshot = engine.tick();

        // 3. Emit snapshot to frontend via Tauri event
        let _ = app_handle.emit(SNAPSHOT_EVENT, &snapshot);

        // 4. Store latest snapshot for synchronous polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 5. Sleep until next tick, adjusting for time_scale
        let time_scale = engine.time_scale();
        let effective_tick_duration = if time_scale > 0.001 {
            TICK_DURATION.div_f64(time_scale)
        } else {
            TICK_DURATION
        };

        next_tick_time += effective_tick_duration;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > effective_tick_duration * 2 {
            // Too far behind — reset to avoid catch-up spiral
            next_tick_time = now;
        }
    }
}
