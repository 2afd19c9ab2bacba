//! Semantic actions that key bindings map to.

use serde::{Deserialize, Serialize};

/// All possible user actions in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    // Navigation
    MoveUp,
    MoveDown,
    /// Previous weekday, smaller value, or cursor left in text
    MoveLeft,
    /// Next weekday, larger value, or cursor right in text
    MoveRight,
    Home,
    End,

    // Selection
    /// Submit a form or open the selected item (Enter)
    Confirm,
    /// Go back or close a dialog (Esc)
    Cancel,
    /// Toggle the focused checkbox or weekday (Space)
    ToggleSelect,

    // Global
    Quit,
    Help,
    /// Next tab in the main shell, next field in a form
    NextTab,
    PrevTab,

    // Alarms
    Create,
    Edit,
    Delete,
    ToggleActive,
    ToggleSmartWake,
    Save,

    // Account
    Logout,

    // Text editing
    Backspace,
    DeleteChar,

    // Prompts
    Yes,
    No,
}

impl Action {
    /// Get a human-readable description of this action
    pub fn description(&self) -> &'static str {
        match self {
            Action::MoveUp => "Move up",
            Action::MoveDown => "Move down",
            Action::MoveLeft => "Move left / decrease",
            Action::MoveRight => "Move right / increase",
            Action::Home => "Start of field",
            Action::End => "End of field",
            Action::Confirm => "Confirm",
            Action::Cancel => "Cancel / Go back",
            Action::ToggleSelect => "Toggle",
            Action::Quit => "Quit",
            Action::Help => "Show help",
            Action::NextTab => "Next tab / field",
            Action::PrevTab => "Previous tab / field",
            Action::Create => "New alarm",
            Action::Edit => "Edit alarm",
            Action::Delete => "Delete alarm",
            Action::ToggleActive => "Turn alarm on/off",
            Action::ToggleSmartWake => "Toggle smart wake",
            Action::Save => "Save",
            Action::Logout => "Log out",
            Action::Backspace => "Backspace",
            Action::DeleteChar => "Delete character",
            Action::Yes => "Yes",
            Action::No => "No",
        }
    }

    /// Get action category for grouping in help display
    pub fn category(&self) -> &'static str {
        match self {
            Action::MoveUp
            | Action::MoveDown
            | Action::MoveLeft
            | Action::MoveRight
            | Action::Home
            | Action::End => "Navigation",

            Action::Confirm | Action::Cancel | Action::ToggleSelect => "Selection",

            Action::Quit | Action::Help | Action::NextTab | Action::PrevTab => "Global",

            Action::Create
            | Action::Edit
            | Action::Delete
            | Action::ToggleActive
            | Action::ToggleSmartWake
            | Action::Save => "Alarms",

            Action::Logout => "Account",

            Action::Backspace | Action::DeleteChar => "Text Editing",

            Action::Yes | Action::No => "Prompts",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_description() {
        assert_eq!(Action::Quit.description(), "Quit");
        assert_eq!(Action::ToggleSmartWake.description(), "Toggle smart wake");
    }

    #[test]
    fn test_action_category() {
        assert_eq!(Action::MoveUp.category(), "Navigation");
        assert_eq!(Action::ToggleActive.category(), "Alarms");
        assert_eq!(Action::Logout.category(), "Account");
    }

    #[test]
    fn test_action_serialization() {
        let json = serde_json::to_string(&Action::ToggleSmartWake).unwrap();
        assert_eq!(json, "\"toggle_smart_wake\"");
        let action: Action = serde_json::from_str("\"toggle_active\"").unwrap();
        assert_eq!(action, Action::ToggleActive);
    }
}
