//! my-alarm - a study alarm clock for the terminal
//!
//! Alarms ask quiz questions on a chosen subject when they ring. This library
//! holds the alarm model, the session gate backed by a remote account API and
//! the ratatui screens that tie them together.

// Core modules
pub mod alarm;
pub mod api;
pub mod app;
pub mod cli;
pub mod components;
pub mod config;
pub mod error;
pub mod keymap;
pub mod screens;
pub mod session;
pub mod state;
pub mod styles;
pub mod tui;
pub mod utils;
pub mod widgets;

// Re-exports for convenience
pub use alarm::{Alarm, AlarmDraft, AlarmId, AlarmStore};
pub use config::Config;
pub use session::{SessionGate, SessionState, UserStore};

// Keymap re-exports (used by Config and for external API)
pub use keymap::{Action, KeyBinding, Keymap, KeymapPreset};
