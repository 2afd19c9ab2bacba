//! Screen trait and associated types.
//!
//! Screens own their local state (inputs, selections), read shared state
//! through a context object and report what should happen next as a
//! [`ScreenAction`]. Only the `App` mutates the session and the alarm store.

use crate::alarm::{AlarmDraft, AlarmId, AlarmStore};
use crate::api::RegisterRequest;
use crate::config::Config;
use crate::screens::settings::SettingItem;
use crate::session::SessionState;
use crate::state::ScreenId;
use anyhow::Result;
use chrono::NaiveDateTime;
use crossterm::event::Event;
use ratatui::layout::Rect;
use ratatui::Frame;
use std::path::Path;

/// Read-only shared state for rendering screens.
pub struct RenderContext<'a> {
    pub config: &'a Config,
    pub session: &'a SessionState,
    pub store: &'a AlarmStore,
    /// Wall-clock time of this frame, for the next-alarm banner.
    pub now: NaiveDateTime,
}

impl<'a> RenderContext<'a> {
    pub fn new(
        config: &'a Config,
        session: &'a SessionState,
        store: &'a AlarmStore,
        now: NaiveDateTime,
    ) -> Self {
        Self {
            config,
            session,
            store,
            now,
        }
    }
}

/// Read-only shared state for handling events.
pub struct ScreenContext<'a> {
    pub config: &'a Config,
    /// Configuration file path (shown in help, used when saving).
    pub config_path: &'a Path,
    pub session: &'a SessionState,
    pub store: &'a AlarmStore,
}

impl<'a> ScreenContext<'a> {
    pub fn new(
        config: &'a Config,
        config_path: &'a Path,
        session: &'a SessionState,
        store: &'a AlarmStore,
    ) -> Self {
        Self {
            config,
            config_path,
            session,
            store,
        }
    }
}

/// Actions that a screen can return after handling an event.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ScreenAction {
    /// No action needed, stay on current screen.
    #[default]
    None,
    /// Navigate to a different screen.
    Navigate(ScreenId),
    /// Show a modal alert.
    ShowAlert { title: String, message: String },
    /// Show a transient notice.
    Notify(String),
    /// Request to quit the application.
    Quit,
    /// Open help overlay.
    ShowHelp,
    /// Log in against the remote API.
    SubmitLogin { username: String, password: String },
    /// Create an account against the remote API.
    SubmitRegister(RegisterRequest),
    /// Drop the stored user and return to the login screen.
    Logout,
    /// Commit the editor: add when `id` is `None`, otherwise edit in place.
    SaveAlarm { id: Option<AlarmId>, draft: AlarmDraft },
    ToggleActive(AlarmId),
    ToggleSmartWake(AlarmId),
    /// Ask before removing an alarm.
    ConfirmDelete(AlarmId),
    /// Change a setting to the option at `option_index`.
    UpdateSetting {
        setting: SettingItem,
        option_index: usize,
    },
}

impl ScreenAction {
    pub fn alert(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ShowAlert {
            title: title.into(),
            message: message.into(),
        }
    }
}

/// Trait for screen controllers.
///
/// # Example
///
/// ```rust,ignore
/// impl Screen for QuizSummaryScreen {
///     fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
///         frame.render_widget(Paragraph::new("Quiz Summary"), area);
///         Ok(())
///     }
///
///     fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
///         Ok(ScreenAction::None)
///     }
/// }
/// ```
pub trait Screen {
    /// Render the screen.
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()>;

    /// Handle an input event and report what should happen next.
    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction>;

    /// Check if a text input is currently focused.
    ///
    /// When true, only editing keybindings apply so users can type freely.
    fn is_input_focused(&self) -> bool {
        false
    }

    /// Called when the screen is entered (navigated to).
    fn on_enter(&mut self, _ctx: &ScreenContext) -> Result<()> {
        Ok(())
    }
}
