//! Preset keymaps: Standard, Vim, Emacs

use super::{Action, KeyBinding};
use serde::{Deserialize, Serialize};

/// Available keymap presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum KeymapPreset {
    /// Arrows, Enter, Esc
    #[default]
    Standard,
    /// hjkl navigation
    Vim,
    /// Ctrl+N/P navigation
    Emacs,
}

impl KeymapPreset {
    pub fn all() -> [KeymapPreset; 3] {
        [KeymapPreset::Standard, KeymapPreset::Vim, KeymapPreset::Emacs]
    }

    /// Get all key bindings for this preset
    pub fn bindings(&self) -> Vec<KeyBinding> {
        let mut bindings = match self {
            KeymapPreset::Standard => standard_navigation(),
            KeymapPreset::Vim => vim_navigation(),
            KeymapPreset::Emacs => emacs_navigation(),
        };
        bindings.extend(common_bindings(*self));
        bindings
    }

    pub fn name(&self) -> &'static str {
        match self {
            KeymapPreset::Standard => "Standard",
            KeymapPreset::Vim => "Vim",
            KeymapPreset::Emacs => "Emacs",
        }
    }
}

fn standard_navigation() -> Vec<KeyBinding> {
    vec![
        KeyBinding::new("up", Action::MoveUp),
        KeyBinding::new("down", Action::MoveDown),
        KeyBinding::new("left", Action::MoveLeft),
        KeyBinding::new("right", Action::MoveRight),
        KeyBinding::new("home", Action::Home),
        KeyBinding::new("end", Action::End),
        KeyBinding::new("esc", Action::Cancel),
        KeyBinding::new("c", Action::Create),
        KeyBinding::new("e", Action::Edit),
        KeyBinding::new("delete", Action::DeleteChar),
    ]
}

fn vim_navigation() -> Vec<KeyBinding> {
    vec![
        KeyBinding::new("k", Action::MoveUp),
        KeyBinding::new("up", Action::MoveUp),
        KeyBinding::new("j", Action::MoveDown),
        KeyBinding::new("down", Action::MoveDown),
        KeyBinding::new("h", Action::MoveLeft),
        KeyBinding::new("left", Action::MoveLeft),
        KeyBinding::new("l", Action::MoveRight),
        KeyBinding::new("right", Action::MoveRight),
        KeyBinding::new("0", Action::Home),
        KeyBinding::new("home", Action::Home),
        KeyBinding::new("$", Action::End),
        KeyBinding::new("end", Action::End),
        KeyBinding::new("esc", Action::Cancel),
        KeyBinding::new("o", Action::Create),
        KeyBinding::new("e", Action::Edit),
        KeyBinding::new("x", Action::DeleteChar),
        KeyBinding::new("delete", Action::DeleteChar),
    ]
}

fn emacs_navigation() -> Vec<KeyBinding> {
    vec![
        KeyBinding::new("ctrl+p", Action::MoveUp),
        KeyBinding::new("up", Action::MoveUp),
        KeyBinding::new("ctrl+n", Action::MoveDown),
        KeyBinding::new("down", Action::MoveDown),
        KeyBinding::new("ctrl+b", Action::MoveLeft),
        KeyBinding::new("left", Action::MoveLeft),
        KeyBinding::new("ctrl+f", Action::MoveRight),
        KeyBinding::new("right", Action::MoveRight),
        KeyBinding::new("ctrl+a", Action::Home),
        KeyBinding::new("home", Action::Home),
        KeyBinding::new("ctrl+e", Action::End),
        KeyBinding::new("end", Action::End),
        KeyBinding::new("ctrl+g", Action::Cancel),
        KeyBinding::new("esc", Action::Cancel),
        KeyBinding::new("ctrl+o", Action::Create),
        KeyBinding::new("e", Action::Edit),
        KeyBinding::new("ctrl+d", Action::DeleteChar),
        KeyBinding::new("delete", Action::DeleteChar),
    ]
}

/// Bindings shared by every preset.
fn common_bindings(preset: KeymapPreset) -> Vec<KeyBinding> {
    let help = match preset {
        KeymapPreset::Emacs => "ctrl+h",
        _ => "?",
    };
    vec![
        KeyBinding::new("enter", Action::Confirm),
        KeyBinding::new("space", Action::ToggleSelect),
        KeyBinding::new("q", Action::Quit),
        KeyBinding::new("ctrl+c", Action::Quit),
        KeyBinding::new(help, Action::Help),
        KeyBinding::new("tab", Action::NextTab),
        KeyBinding::new("shift+tab", Action::PrevTab),
        KeyBinding::new("d", Action::Delete),
        KeyBinding::new("a", Action::ToggleActive),
        KeyBinding::new("w", Action::ToggleSmartWake),
        KeyBinding::new("ctrl+s", Action::Save),
        KeyBinding::new("ctrl+l", Action::Logout),
        KeyBinding::new("backspace", Action::Backspace),
        KeyBinding::new("y", Action::Yes),
        KeyBinding::new("n", Action::No),
    ]
}
