//! Global application state shared across all screens.

use super::{Dialog, ScreenId};
use crate::alarm::AlarmId;

/// State that persists across screen changes.
#[derive(Debug, Clone, Default)]
pub struct GlobalState {
    /// Screen currently shown.
    pub screen: ScreenId,

    /// Currently active dialog or overlay.
    pub dialog: Dialog,
}

impl GlobalState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if any dialog or overlay is shown.
    pub fn has_dialog(&self) -> bool {
        !matches!(self.dialog, Dialog::None)
    }

    pub fn show_alert(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.dialog = Dialog::Alert {
            title: title.into(),
            message: message.into(),
        };
    }

    pub fn show_confirm_delete(&mut self, id: AlarmId, label: impl Into<String>) {
        self.dialog = Dialog::ConfirmDelete {
            id,
            label: label.into(),
        };
    }

    pub fn close_dialog(&mut self) {
        self.dialog = Dialog::None;
    }

    /// Toggle the help overlay. Never replaces another dialog.
    pub fn toggle_help(&mut self) {
        self.dialog = match self.dialog {
            Dialog::Help => Dialog::None,
            Dialog::None => Dialog::Help,
            ref other => other.clone(),
        };
    }
}
