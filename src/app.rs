use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};
use tauri::{AppHandle, Manager, Runtime, State};
use tauri_plugin_dialog::{DialogExt, MessageDialogButtons, MessageDialogKind, MessageDialogResult};
use crate::core::{
    alerts::{model::{Category, Severity}, store::AlertStore},
    config::{ConfigManager, Settings},
    display::{self, FilterEditorView},
    map::{self, MapMarker, MapRegion},
    state::{AlertListView, SessionState},
};

struct AppState {
    store: AlertStore,
    session: Mutex<SessionState>,
    settings: Mutex<Settings>,
    config_manager: ConfigManager,
}

impl AppState {
    fn session(&self) -> Result<MutexGuard<'_, SessionState>, String> {
        self.session.lock().map_err(|e| e.to_string())
    }

    fn settings(&self) -> Result<MutexGuard<'_, Settings>, String> {
        self.settings.lock().map_err(|e| e.to_string())
    }

    fn view(&self) -> Result<AlertListView, String> {
        Ok(self.session()?.view(&self.store))
    }
}

// ============================================
// Alert List Commands
// ============================================

#[tauri::command]
fn get_alert_list(state: State<'_, AppState>) -> Result<AlertListView, String> {
    state.view()
}

#[tauri::command]
fn set_search_term(term: String, state: State<'_, AppState>) -> Result<AlertListView, String> {
    state.session()?.set_search_term(term);
    state.view()
}

#[tauri::command]
fn get_map_markers(state: State<'_, AppState>) -> Result<Vec<MapMarker>, String> {
    let session = state.session()?;
    Ok(map::markers(session.filtered(&state.store)))
}

// ============================================
// Filter Editor Commands
// ============================================

#[tauri::command]
fn open_filter_editor(state: State<'_, AppState>) -> Result<FilterEditorView, String> {
    let mut session = state.session()?;
    let staged = session.open_filter_editor().map_err(|e| e.to_string())?;
    Ok(FilterEditorView::from(staged))
}

#[tauri::command]
fn toggle_severity(severity: Severity, state: State<'_, AppState>) -> Result<FilterEditorView, String> {
    let mut session = state.session()?;
    let staged = session.toggle_severity(severity).map_err(|e| e.to_string())?;
    Ok(FilterEditorView::from(staged))
}

#[tauri::command]
fn toggle_category(category: Category, state: State<'_, AppState>) -> Result<FilterEditorView, String> {
    let mut session = state.session()?;
    let staged = session.toggle_category(category).map_err(|e| e.to_string())?;
    Ok(FilterEditorView::from(staged))
}

#[tauri::command]
fn apply_filters(state: State<'_, AppState>) -> Result<AlertListView, String> {
    state.session()?.apply_filters().map_err(|e| e.to_string())?;
    state.view()
}

/// Response for "Clear all": the editor plus the list, which changes at once
/// when clearing commits immediately.
#[derive(serde::Serialize)]
struct ClearFiltersResponse {
    editor: FilterEditorView,
    list: AlertListView,
}

#[tauri::command]
fn clear_all_filters(state: State<'_, AppState>) -> Result<ClearFiltersResponse, String> {
    let mut session = state.session()?;
    let editor = session
        .clear_all_filters()
        .map(FilterEditorView::from)
        .map_err(|e| e.to_string())?;
    let list = session.view(&state.store);
    Ok(ClearFiltersResponse { editor, list })
}

#[tauri::command]
fn cancel_filter_editor(state: State<'_, AppState>) -> Result<(), String> {
    state.session()?.cancel_filter_editor();
    Ok(())
}

// ============================================
// Dialog Commands
// ============================================

fn show_coordinates<R: Runtime>(app: &AppHandle<R>, latitude: f64, longitude: f64) {
    app.dialog()
        .message(display::format_coordinates(latitude, longitude))
        .title("Location")
        .kind(MessageDialogKind::Info)
        .buttons(MessageDialogButtons::Ok)
        .show(|_| {});
}

#[tauri::command]
fn show_location(id: String, state: State<'_, AppState>, app: AppHandle) -> Result<MapRegion, String> {
    let alert = state.store.require(&id).map_err(|e| e.to_string())?;
    show_coordinates(&app, alert.location.latitude, alert.location.longitude);
    Ok(MapRegion::centered_on(alert))
}

const VIEW_LOCATION: &str = "View Location";

#[tauri::command]
async fn show_alert_details(id: String, state: State<'_, AppState>, app: AppHandle) -> Result<(), String> {
    let alert = state.store.require(&id).map_err(|e| e.to_string())?.clone();

    // Run blocking dialog on a separate thread to avoid freezing the UI
    tauri::async_runtime::spawn_blocking(move || {
        let choice = app.dialog()
            .message(alert.description.clone())
            .title(alert.title.clone())
            .buttons(MessageDialogButtons::OkCancelCustom(
                "OK".to_string(),
                VIEW_LOCATION.to_string(),
            ))
            .blocking_show_with_result();
        // closing the dialog is not a request for the location
        if matches!(choice, MessageDialogResult::Custom(ref label) if label == VIEW_LOCATION) {
            show_coordinates(&app, alert.location.latitude, alert.location.longitude);
        }
    }).await.map_err(|e| e.to_string())
}

#[tauri::command]
fn add_alert(app: AppHandle) {
    app.dialog()
        .message("Add new alert feature will be available soon!")
        .title("Coming Soon")
        .kind(MessageDialogKind::Info)
        .show(|_| {});
}

// ============================================
// Settings Commands
// ============================================

#[tauri::command]
fn get_settings(state: State<'_, AppState>) -> Result<Settings, String> {
    Ok(state.settings()?.clone())
}

#[tauri::command]
fn save_settings(settings: Settings, state: State<'_, AppState>) -> Result<(), String> {
    let mut current = state.settings()?;
    if current.alerts_path != settings.alerts_path {
        // Reject files that would not load on the next launch
        let store = AlertStore::open(settings.alerts_path.as_deref()).map_err(|e| e.to_string())?;
        log::info!(
            "Alert source changed to {:?} ({} alerts); takes effect on next launch",
            settings.alerts_path,
            store.len()
        );
    }
    state.config_manager.save(&settings).map_err(|e| e.to_string())?;
    state.session()?.set_clear_behavior(settings.clear_behavior);
    *current = settings;
    Ok(())
}

/// Application builder with state, plugins and commands registered.
///
/// The binary crate supplies the generated context and runs it.
pub fn builder() -> tauri::Builder<tauri::Wry> {
    tauri::Builder::default()
        .setup(|app| {
            if cfg!(debug_assertions) {
                app.handle().plugin(
                    tauri_plugin_log::Builder::default()
                        .level(log::LevelFilter::Info)
                        .build(),
                )?;
            }
            app.handle().plugin(tauri_plugin_dialog::init())?;

            // Initialize Config
            let config_dir = app.path().app_config_dir().unwrap_or(PathBuf::from("."));
            let config_manager = ConfigManager::new(config_dir);
            let settings = config_manager.load();

            let store = AlertStore::open_or_sample(settings.alerts_path.as_deref())?;
            log::info!("Browsing {} alerts", store.len());

            app.manage(AppState {
                store,
                session: Mutex::new(SessionState::new(settings.clear_behavior)),
                settings: Mutex::new(settings),
                config_manager,
            });

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            get_alert_list,
            set_search_term,
            get_map_markers,
            // Filter editor commands
            open_filter_editor,
            toggle_severity,
            toggle_category,
            apply_filters,
            clear_all_filters,
            cancel_filter_editor,
            // Dialog commands
            show_location,
            show_alert_details,
            add_alert,
            get_settings,
            save_settings
        ])
}
