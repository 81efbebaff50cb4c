#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    community_alert::builder()
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
