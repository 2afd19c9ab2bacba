//! Screen controllers for the application.
//!
//! Each screen implements the `Screen` trait, owns its local state and turns
//! key events into a [`ScreenAction`]. The `App` routes events to the screen
//! for the current [`ScreenId`](crate::state::ScreenId) and applies the
//! returned action.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────┐
//! │                       App                         │
//! │  match screen {                                   │
//! │    Loading      => loading view                   │
//! │    Login        => login.handle_event(...)        │
//! │    Register     => register.handle_event(...)     │
//! │    Main(tab)    => tab bar + tab screen           │
//! │    AlarmEditor  => editor.handle_event(...)       │
//! │  }                                                │
//! │                                                   │
//! │  Screen trait                                     │
//! │    - render(frame, area, &RenderContext)          │
//! │    - handle_event(event, &ScreenContext) -> Action│
//! │    - is_input_focused() -> bool                   │
//! └───────────────────────────────────────────────────┘
//! ```

pub mod alarm_editor;
pub mod alarm_list;
pub mod login;
pub mod quiz_summary;
pub mod register;
pub mod screen_trait;
pub mod settings;
pub mod statistics;

pub use alarm_editor::AlarmEditorScreen;
pub use alarm_list::AlarmListScreen;
pub use login::LoginScreen;
pub use quiz_summary::QuizSummaryScreen;
pub use register::RegisterScreen;
pub use screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
pub use settings::{SettingItem, SettingsScreen};
pub use statistics::StatisticsScreen;
