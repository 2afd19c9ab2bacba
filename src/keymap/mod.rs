//! Keymap configuration module
//!
//! Customizable keyboard shortcuts with preset keymaps (standard, vim, emacs)
//! and per-user overrides from `config.toml`.

mod actions;
mod binding;
mod presets;

pub use actions::Action;
pub use binding::{format_key_display, parse_key_string, KeyBinding, ParsedKey};
pub use presets::KeymapPreset;

use crossterm::event::{KeyCode, KeyModifiers};
use serde::{Deserialize, Serialize};

/// Keymap configuration with preset and optional overrides
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keymap {
    #[serde(default)]
    pub preset: KeymapPreset,

    /// User-defined overrides (checked before preset)
    #[serde(default)]
    pub overrides: Vec<KeyBinding>,
}

impl Keymap {
    pub fn new(preset: KeymapPreset) -> Self {
        Self {
            preset,
            overrides: Vec::new(),
        }
    }

    /// Get the action for a key event, checking overrides first then preset.
    ///
    /// An overridden action loses all of its preset bindings.
    pub fn get_action(&self, code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
        self.all_bindings()
            .into_iter()
            .find(|binding| binding.matches(code, modifiers))
            .map(|binding| binding.action)
    }

    /// All effective bindings (overrides, then non-shadowed preset bindings)
    pub fn all_bindings(&self) -> Vec<KeyBinding> {
        let mut bindings = self.overrides.clone();
        bindings.extend(
            self.preset
                .bindings()
                .into_iter()
                .filter(|b| !self.overrides.iter().any(|o| o.action == b.action)),
        );
        bindings
    }

    /// Display string for the first key bound to `action` (e.g. "Ctrl+S")
    pub fn get_key_display_for_action(&self, action: Action) -> String {
        self.all_bindings()
            .into_iter()
            .find(|b| b.action == action)
            .map(|b| b.display())
            .unwrap_or_else(|| format!("{:?}", action))
    }

    /// "↑/↓" style display for up/down navigation
    pub fn navigation_display(&self) -> String {
        format!(
            "{}/{}",
            self.get_key_display_for_action(Action::MoveUp),
            self.get_key_display_for_action(Action::MoveDown)
        )
    }

    /// Footer hint segment, e.g. `"Ctrl+S: Save"`.
    pub fn hint(&self, action: Action, label: &str) -> String {
        format!("{}: {}", self.get_key_display_for_action(action), label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_keymap() {
        let keymap = Keymap::default();
        assert_eq!(keymap.preset, KeymapPreset::Standard);
        assert!(keymap.overrides.is_empty());
    }

    #[test]
    fn test_get_action_from_preset() {
        let keymap = Keymap::default();
        assert_eq!(
            keymap.get_action(KeyCode::Char('a'), KeyModifiers::NONE),
            Some(Action::ToggleActive)
        );
        assert_eq!(
            keymap.get_action(KeyCode::Char('s'), KeyModifiers::CONTROL),
            Some(Action::Save)
        );
    }

    #[test]
    fn test_override_takes_precedence() {
        let keymap = Keymap {
            preset: KeymapPreset::Standard,
            overrides: vec![KeyBinding::new("t", Action::ToggleActive)],
        };
        assert_eq!(
            keymap.get_action(KeyCode::Char('t'), KeyModifiers::NONE),
            Some(Action::ToggleActive)
        );
        // the preset "a" binding is shadowed
        assert_eq!(keymap.get_action(KeyCode::Char('a'), KeyModifiers::NONE), None);
    }

    #[test]
    fn test_key_display_follows_override() {
        let keymap = Keymap {
            preset: KeymapPreset::Vim,
            overrides: vec![KeyBinding::new("ctrl+w", Action::Save)],
        };
        assert_eq!(keymap.get_key_display_for_action(Action::Save), "Ctrl+W");
        assert_eq!(keymap.navigation_display(), "K/J");
        assert_eq!(keymap.hint(Action::Save, "Save"), "Ctrl+W: Save");
    }
}
