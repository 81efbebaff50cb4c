use serde::Serialize;

use super::alerts::model::{Alert, Category, Severity};
use super::alerts::store::AlertStore;
use super::display::{self, AlertCard};
use super::error::{Error, Result};
use super::filter::editor::{ClearBehavior, FilterEditor};
use super::filter::engine;
use super::filter::model::FilterState;

/// Everything the alert list screen shows, derived from a session and a store.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertListView {
    pub search_term: String,
    pub filter: FilterState,
    pub alerts: Vec<AlertCard>,
    pub active_count: usize,
    pub critical_count: usize,
    pub active_filter_count: usize,
    pub heading: String,
    pub critical_badge: Option<String>,
    pub filter_button_label: String,
}

/// State of one alert-browsing session.
pub struct SessionState {
    search_term: String,
    filter: FilterState,
    editor: FilterEditor,
    clear_behavior: ClearBehavior,
}

impl SessionState {
    pub fn new(clear_behavior: ClearBehavior) -> Self {
        Self {
            search_term: String::new(),
            filter: FilterState::default(),
            editor: FilterEditor::Closed,
            clear_behavior,
        }
    }

    /// The committed filter.
    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn editor(&self) -> &FilterEditor {
        &self.editor
    }

    pub fn set_clear_behavior(&mut self, behavior: ClearBehavior) {
        self.clear_behavior = behavior;
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        log::debug!("Search term set to {:?}", self.search_term);
    }

    pub fn open_filter_editor(&mut self) -> Result<&FilterState> {
        log::debug!("Opening filter editor");
        self.editor.open(&self.filter)
    }

    pub fn toggle_severity(&mut self, severity: Severity) -> Result<&FilterState> {
        self.editor.toggle_severity(severity)
    }

    pub fn toggle_category(&mut self, category: Category) -> Result<&FilterState> {
        self.editor.toggle_category(category)
    }

    /// Commit the staged filter and close the editor.
    pub fn apply_filters(&mut self) -> Result<()> {
        self.filter = self.editor.apply()?;
        log::debug!("Applied {} filters", self.filter.active_count());
        Ok(())
    }

    /// Reset the staged filter, committing it too when the clear behavior
    /// is immediate. Returns the staged filter.
    pub fn clear_all_filters(&mut self) -> Result<&FilterState> {
        if let Some(cleared) = self.editor.clear_all(self.clear_behavior)? {
            log::debug!("Cleared committed filter");
            self.filter = cleared;
        }
        self.editor.staged().ok_or(Error::EditorClosed)
    }

    pub fn cancel_filter_editor(&mut self) {
        if self.editor.is_open() {
            log::debug!("Discarding staged filter");
        }
        self.editor.cancel();
    }

    /// Alerts passing the committed filter and search term, in store order.
    pub fn filtered<'a>(&self, store: &'a AlertStore) -> Vec<&'a Alert> {
        engine::apply(store.alerts(), &self.filter, &self.search_term)
    }

    /// The list as displayed: filtered, active only, critical first.
    pub fn visible<'a>(&self, store: &'a AlertStore) -> Vec<&'a Alert> {
        engine::sort_active(self.filtered(store))
    }

    pub fn view(&self, store: &AlertStore) -> AlertListView {
        let critical_count = engine::critical_active_count(self.filtered(store));
        let visible = self.visible(store);
        let active_count = visible.len();
        let active_filter_count = self.filter.active_count();

        AlertListView {
            search_term: self.search_term.clone(),
            filter: self.filter.clone(),
            alerts: visible.into_iter().map(AlertCard::from).collect(),
            active_count,
            critical_count,
            active_filter_count,
            heading: display::list_heading(active_count),
            critical_badge: display::critical_badge(critical_count),
            filter_button_label: display::filter_button_label(active_filter_count),
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(ClearBehavior::default())
    }
}
