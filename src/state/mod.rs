//! Application state management.
//!
//! Screen-local state (inputs, selections) lives in each screen. What is
//! shared across screens lives here: which screen is showing and which
//! dialog sits on top of it.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                     App                      │
//! ├──────────────────────────────────────────────┤
//! │  SessionGate ── decides Loading/Login/Main   │
//! │  AlarmStore  ── shared by list and editor    │
//! │  GlobalState                                 │
//! │    - screen: ScreenId                        │
//! │    - dialog: Alert | ConfirmDelete | Help    │
//! └──────────────────────────────────────────────┘
//! ```

pub mod global;

pub use global::GlobalState;

use crate::alarm::AlarmId;
use crate::components::MainTab;

/// Which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScreenId {
    /// Session not resolved yet.
    #[default]
    Loading,
    Login,
    Register,
    /// Main shell on the given tab.
    Main(MainTab),
    /// Editor for an existing alarm, or a new one when `None`.
    AlarmEditor(Option<AlarmId>),
}

impl ScreenId {
    /// Screens reachable without a logged-in user.
    pub fn is_public(&self) -> bool {
        matches!(self, ScreenId::Loading | ScreenId::Login | ScreenId::Register)
    }
}

/// Current dialog or overlay being shown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Dialog {
    #[default]
    None,
    /// Message the user acknowledges with any key.
    Alert { title: String, message: String },
    /// Yes/No prompt before deleting an alarm.
    ConfirmDelete { id: AlarmId, label: String },
    /// Keybinding overlay.
    Help,
}
