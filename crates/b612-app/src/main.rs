// Prevents additional console window on Windows in release
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use b612_app::ipc;
use b612_app::state::AppState;

fn main() {
    env_logger::init();

    tauri::Builder::default()
        .manage(AppState::new())
        .invoke_handler(tauri::generate_handler![
            ipc::start_scene,
            ipc::send_command,
            ipc::get_snapshot,
            ipc::get_starfield,
            ipc::get_preload_report,
        ])
        .run(tauri::generate_context!())
        .expect("error while running B612");
}
