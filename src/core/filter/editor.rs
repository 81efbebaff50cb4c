// Filter editor state machine.
//
// The editor works on a staged copy of the committed filter. Edits only reach
// the committed filter through `apply`, or through `clear_all` when the clear
// behavior is `Immediate`.

use serde::{Deserialize, Serialize};

use super::model::FilterState;
use crate::core::alerts::model::{Category, Severity};
use crate::core::error::{Error, Result};

/// What "Clear all" does to the committed filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClearBehavior {
    /// Commit the cleared filter at once, without waiting for apply.
    #[default]
    Immediate,
    /// Only reset the staged copy; apply commits it like any other edit.
    Staged,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum FilterEditor {
    #[default]
    Closed,
    Editing(FilterState),
}

impl FilterEditor {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Editing(_))
    }

    pub fn staged(&self) -> Option<&FilterState> {
        match self {
            Self::Editing(staged) => Some(staged),
            Self::Closed => None,
        }
    }

    fn staged_mut(&mut self) -> Result<&mut FilterState> {
        match self {
            Self::Editing(staged) => Ok(staged),
            Self::Closed => Err(Error::EditorClosed),
        }
    }

    /// Start editing a copy of `committed`.
    pub fn open(&mut self, committed: &FilterState) -> Result<&FilterState> {
        if self.is_open() {
            return Err(Error::EditorAlreadyOpen);
        }
        *self = Self::Editing(committed.clone());
        self.staged().ok_or(Error::EditorClosed)
    }

    pub fn toggle_severity(&mut self, severity: Severity) -> Result<&FilterState> {
        let staged = self.staged_mut()?;
        staged.toggle_severity(severity);
        Ok(&*staged)
    }

    pub fn toggle_category(&mut self, category: Category) -> Result<&FilterState> {
        let staged = self.staged_mut()?;
        staged.toggle_category(category);
        Ok(&*staged)
    }

    /// Close the editor and hand back the staged filter for committing.
    pub fn apply(&mut self) -> Result<FilterState> {
        match std::mem::take(self) {
            Self::Editing(staged) => Ok(staged),
            Self::Closed => Err(Error::EditorClosed),
        }
    }

    /// Reset the staged filter to defaults. Returns the filter to commit now,
    /// if `behavior` asks for an immediate commit. The editor stays open.
    pub fn clear_all(&mut self, behavior: ClearBehavior) -> Result<Option<FilterState>> {
        let staged = self.staged_mut()?;
        *staged = FilterState::default();
        Ok(match behavior {
            ClearBehavior::Immediate => Some(FilterState::default()),
            ClearBehavior::Staged => None,
        })
    }

    /// Discard the staged filter. Cancelling a closed editor does nothing.
    pub fn cancel(&mut self) {
        *self = Self::Closed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn committed_with_high() -> FilterState {
        let mut filter = FilterState::default();
        filter.toggle_severity(Severity::High);
        filter
    }

    #[test]
    fn test_open_copies_committed() {
        let committed = committed_with_high();
        let mut editor = FilterEditor::default();
        assert!(!editor.is_open());

        let staged = editor.open(&committed).unwrap();
        assert_eq!(staged, &committed);
        assert!(editor.is_open());
    }

    #[test]
    fn test_open_twice_rejected() {
        let mut editor = FilterEditor::default();
        editor.open(&FilterState::default()).unwrap();
        editor.toggle_category(Category::Weather).unwrap();

        assert!(matches!(editor.open(&FilterState::default()), Err(Error::EditorAlreadyOpen)));
        // staged edits survive the rejected open
        assert!(editor.staged().unwrap().category.contains(&Category::Weather));
    }

    #[test]
    fn test_apply_returns_staged_and_closes() {
        let mut editor = FilterEditor::default();
        editor.open(&committed_with_high()).unwrap();
        editor.toggle_severity(Severity::High).unwrap();
        editor.toggle_severity(Severity::Critical).unwrap();

        let applied = editor.apply().unwrap();
        assert_eq!(applied.severity.iter().copied().collect::<Vec<_>>(), vec![Severity::Critical]);
        assert_eq!(editor, FilterEditor::Closed);
    }

    #[test]
    fn test_closed_editor_rejects_edits() {
        let mut editor = FilterEditor::Closed;
        assert!(matches!(editor.toggle_severity(Severity::Low), Err(Error::EditorClosed)));
        assert!(matches!(editor.toggle_category(Category::Health), Err(Error::EditorClosed)));
        assert!(matches!(editor.apply(), Err(Error::EditorClosed)));
        assert!(matches!(editor.clear_all(ClearBehavior::Immediate), Err(Error::EditorClosed)));

        editor.cancel();
        assert_eq!(editor, FilterEditor::Closed);
    }

    #[test]
    fn test_clear_all_immediate_commits() {
        let mut editor = FilterEditor::default();
        editor.open(&committed_with_high()).unwrap();

        let commit = editor.clear_all(ClearBehavior::Immediate).unwrap();
        assert_eq!(commit, Some(FilterState::default()));
        assert_eq!(editor.staged(), Some(&FilterState::default()));
    }

    #[test]
    fn test_clear_all_staged_waits_for_apply() {
        let mut editor = FilterEditor::default();
        editor.open(&committed_with_high()).unwrap();

        let commit = editor.clear_all(ClearBehavior::Staged).unwrap();
        assert_eq!(commit, None);
        assert!(editor.is_open());
        assert_eq!(editor.apply().unwrap(), FilterState::default());
    }

    #[test]
    fn test_cancel_discards() {
        let mut editor = FilterEditor::default();
        editor.open(&FilterState::default()).unwrap();
        editor.toggle_category(Category::Security).unwrap();
        editor.cancel();
        assert!(editor.staged().is_none());
    }
}
