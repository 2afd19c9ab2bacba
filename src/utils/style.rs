//! Field styles derived from the active theme.

use crate::styles::theme;
use ratatui::prelude::*;

/// Border style for a focused pane or field
pub fn focused_border_style() -> Style {
    theme().border_focused_style()
}

/// Border style for an unfocused pane or field
pub fn unfocused_border_style() -> Style {
    theme().border_style()
}

pub fn disabled_border_style() -> Style {
    theme().disabled_style()
}

pub fn disabled_text_style() -> Style {
    theme().disabled_style()
}

/// Text style for placeholder text
pub fn input_placeholder_style() -> Style {
    theme().muted_style()
}

/// Text style for normal input text
pub fn input_text_style() -> Style {
    theme().text_style()
}
