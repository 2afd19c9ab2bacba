//! Colors for the alarm screens.
//!
//! A single palette is shared process-wide and swapped from the settings tab.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::RwLock;

/// List selection indicator shown next to the selected item
pub const LIST_HIGHLIGHT_SYMBOL: &str = "» ";

static THEME: RwLock<Theme> = RwLock::new(Theme::dark());

/// Replace the active palette.
pub fn init_theme(theme_type: ThemeType) {
    let mut theme = THEME.write().unwrap_or_else(|e| e.into_inner());
    *theme = Theme::new(theme_type);
}

/// Snapshot of the active palette.
pub fn theme() -> Theme {
    THEME.read().unwrap_or_else(|e| e.into_inner()).clone()
}

/// `theme` value in `config.toml`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeType {
    #[default]
    Dark,
    Light,
    /// Disable all UI colors (equivalent to `NO_COLOR=1`)
    #[serde(alias = "no-color", alias = "no_color")]
    NoColor,
}

impl ThemeType {
    pub fn all() -> [ThemeType; 3] {
        [ThemeType::Dark, ThemeType::Light, ThemeType::NoColor]
    }

    pub fn name(&self) -> &'static str {
        match self {
            ThemeType::Dark => "Dark",
            ThemeType::Light => "Light",
            ThemeType::NoColor => "No color",
        }
    }
}

impl FromStr for ThemeType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "light" => ThemeType::Light,
            "nocolor" | "no-color" | "no_color" => ThemeType::NoColor,
            _ => ThemeType::Dark,
        })
    }
}

#[derive(Debug, Clone)]
pub struct Theme {
    pub theme_type: ThemeType,

    /// Titles, focused borders, selected tab
    pub primary: Color,
    /// Quiz subjects and category headings
    pub secondary: Color,

    /// Active alarms, success toasts
    pub success: Color,
    /// Smart wake marker, warnings
    pub warning: Color,
    pub error: Color,

    pub text: Color,
    pub text_muted: Color,
    pub text_emphasis: Color,

    pub border: Color,
    pub border_focused: Color,
    pub highlight_bg: Color,
    pub background: Color,
}

impl Theme {
    pub fn new(theme_type: ThemeType) -> Self {
        match theme_type {
            ThemeType::Dark => Self::dark(),
            ThemeType::Light => Self::light(),
            ThemeType::NoColor => Self::no_color(),
        }
    }

    pub const fn dark() -> Self {
        Self {
            theme_type: ThemeType::Dark,
            primary: Color::Cyan,
            secondary: Color::Magenta,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
            text: Color::White,
            text_muted: Color::DarkGray,
            text_emphasis: Color::Yellow,
            border: Color::DarkGray,
            border_focused: Color::Cyan,
            highlight_bg: Color::DarkGray,
            background: Color::Reset,
        }
    }

    pub const fn light() -> Self {
        Self {
            theme_type: ThemeType::Light,
            primary: Color::Blue,
            secondary: Color::Magenta,
            success: Color::Green,
            warning: Color::Rgb(180, 120, 0),
            error: Color::Red,
            text: Color::Black,
            text_muted: Color::DarkGray,
            text_emphasis: Color::Blue,
            border: Color::DarkGray,
            border_focused: Color::Blue,
            highlight_bg: Color::Gray,
            background: Color::Reset,
        }
    }

    /// Palette values are unused in this mode; the style helpers only set
    /// modifiers.
    pub const fn no_color() -> Self {
        Self {
            theme_type: ThemeType::NoColor,
            primary: Color::Reset,
            secondary: Color::Reset,
            success: Color::Reset,
            warning: Color::Reset,
            error: Color::Reset,
            text: Color::Reset,
            text_muted: Color::Reset,
            text_emphasis: Color::Reset,
            border: Color::Reset,
            border_focused: Color::Reset,
            highlight_bg: Color::Reset,
            background: Color::Reset,
        }
    }

    fn is_plain(&self) -> bool {
        self.theme_type == ThemeType::NoColor
    }

    fn fg_or(&self, color: Color, fallback: Style) -> Style {
        if self.is_plain() {
            fallback
        } else {
            Style::default().fg(color)
        }
    }

    pub fn title_style(&self) -> Style {
        self.fg_or(self.primary, Style::default())
            .add_modifier(Modifier::BOLD)
    }

    pub fn text_style(&self) -> Style {
        self.fg_or(self.text, Style::default())
    }

    pub fn muted_style(&self) -> Style {
        self.fg_or(self.text_muted, Style::default().add_modifier(Modifier::DIM))
    }

    pub fn emphasis_style(&self) -> Style {
        self.fg_or(self.text_emphasis, Style::default().add_modifier(Modifier::BOLD))
    }

    pub fn success_style(&self) -> Style {
        self.fg_or(self.success, Style::default().add_modifier(Modifier::BOLD))
    }

    pub fn warning_style(&self) -> Style {
        self.fg_or(self.warning, Style::default())
    }

    pub fn error_style(&self) -> Style {
        self.fg_or(self.error, Style::default().add_modifier(Modifier::BOLD))
    }

    pub fn border_focused_style(&self) -> Style {
        self.fg_or(self.border_focused, Style::default().add_modifier(Modifier::BOLD))
    }

    pub fn border_style(&self) -> Style {
        self.fg_or(self.border, Style::default())
    }

    /// Rounded when focused, plain otherwise.
    pub fn border_type(&self, focused: bool) -> BorderType {
        if focused {
            BorderType::Rounded
        } else {
            BorderType::Plain
        }
    }

    /// Selected alarm or setting row.
    pub fn highlight_style(&self) -> Style {
        if self.is_plain() {
            return Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED);
        }
        Style::default()
            .fg(self.text_emphasis)
            .bg(self.highlight_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn disabled_style(&self) -> Style {
        self.fg_or(self.text_muted, Style::default().add_modifier(Modifier::DIM))
    }

    /// Text of an alarm row: full strength when the alarm is on.
    pub fn alarm_row_style(&self, active: bool) -> Style {
        if active {
            self.text_style()
        } else {
            self.muted_style()
        }
    }

    /// The `[on]`/`[off]` switch of an alarm row.
    pub fn alarm_switch_style(&self, active: bool) -> Style {
        if active {
            self.success_style()
        } else {
            self.muted_style()
        }
    }

    /// Weekday initial, lit when the alarm repeats on that day.
    pub fn weekday_style(&self, set: bool) -> Style {
        if set {
            self.emphasis_style()
        } else {
            self.muted_style()
        }
    }

    pub fn smart_wake_style(&self, on: bool) -> Style {
        if on {
            self.warning_style()
        } else {
            self.muted_style()
        }
    }

    pub fn background_style(&self) -> Style {
        if self.is_plain() {
            return Style::default();
        }
        Style::default().bg(self.background)
    }
}
