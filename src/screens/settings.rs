//! Settings tab: profile card, appearance options and log out.
//!
//! Two panes, list on the left and the selected setting's options and
//! explanation on the right.

use crate::config::Config;
use crate::keymap::{Action, KeymapPreset};
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::session::SessionState;
use crate::styles::{init_theme, theme, ThemeType, LIST_HIGHLIGHT_SYMBOL};
use crate::utils::{focused_border_style, unfocused_border_style};
use anyhow::Result;
use crossterm::event::{Event, KeyEventKind};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{
    Block, Borders, List, ListItem, ListState, Padding, Paragraph, StatefulWidget, Wrap,
};
use ratatui::Frame;

/// Available settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingItem {
    Theme,
    KeymapPreset,
    LogOut,
}

impl SettingItem {
    pub fn all() -> [SettingItem; 3] {
        [
            SettingItem::Theme,
            SettingItem::KeymapPreset,
            SettingItem::LogOut,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            SettingItem::Theme => "Theme",
            SettingItem::KeymapPreset => "Keymap Preset",
            SettingItem::LogOut => "Log Out",
        }
    }

    pub fn from_index(index: usize) -> Option<SettingItem> {
        Self::all().get(index).copied()
    }

    /// Options as `(label, currently selected)`.
    pub fn options(&self, config: &Config) -> Vec<(&'static str, bool)> {
        match self {
            SettingItem::Theme => ThemeType::all()
                .iter()
                .map(|t| (t.name(), *t == config.theme))
                .collect(),
            SettingItem::KeymapPreset => KeymapPreset::all()
                .iter()
                .map(|p| (p.name(), *p == config.keymap.preset))
                .collect(),
            SettingItem::LogOut => Vec::new(),
        }
    }

    /// Apply option `option_index` to `config`. Returns false when nothing
    /// changed.
    pub fn apply(&self, config: &mut Config, option_index: usize) -> bool {
        match self {
            SettingItem::Theme => {
                let Some(selected) = ThemeType::all().get(option_index).copied() else {
                    return false;
                };
                if config.theme == selected {
                    return false;
                }
                config.theme = selected;
                init_theme(selected);
                true
            }
            SettingItem::KeymapPreset => {
                let Some(selected) = KeymapPreset::all().get(option_index).copied() else {
                    return false;
                };
                if config.keymap.preset == selected {
                    return false;
                }
                config.keymap.preset = selected;
                // overrides were written against the old preset
                config.keymap.overrides.clear();
                true
            }
            SettingItem::LogOut => false,
        }
    }
}

/// Focus within the settings screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SettingsFocus {
    #[default]
    List,
    Options,
}

#[derive(Debug)]
pub struct SettingsScreen {
    list_state: ListState,
    focus: SettingsFocus,
    option_index: usize,
}

impl Default for SettingsScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsScreen {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            list_state,
            focus: SettingsFocus::List,
            option_index: 0,
        }
    }

    fn selected_setting(&self) -> Option<SettingItem> {
        self.list_state.selected().and_then(SettingItem::from_index)
    }

    fn current_option_index(&self, config: &Config) -> usize {
        self.selected_setting()
            .map(|s| s.options(config))
            .and_then(|options| options.iter().position(|(_, selected)| *selected))
            .unwrap_or(0)
    }

    /// Username and group, with the fallbacks shown for a missing user.
    pub fn profile_lines(session: &SessionState) -> (String, String) {
        match session {
            SessionState::Authenticated(user) if !user.username.is_empty() => {
                (user.username.clone(), format!("Group: {}", user.group))
            }
            SessionState::Authenticated(user) => {
                ("Guest".to_string(), format!("Group: {}", user.group))
            }
            _ => ("Guest".to_string(), "Group: Unknown".to_string()),
        }
    }

    fn render_profile(&self, frame: &mut Frame, area: Rect, session: &SessionState) {
        let t = theme();
        let (name, group) = Self::profile_lines(session);
        let card = Paragraph::new(vec![
            Line::from(Span::styled(name, t.title_style())),
            Line::from(Span::styled(group, t.muted_style())),
        ])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(t.border_type(false))
                .border_style(t.border_style())
                .title(" Profile ")
                .padding(Padding::horizontal(1)),
        );
        frame.render_widget(card, area);
    }

    fn render_settings_list(&mut self, frame: &mut Frame, area: Rect, config: &Config) {
        let t = theme();
        let is_focused = self.focus == SettingsFocus::List;

        let items: Vec<ListItem> = SettingItem::all()
            .iter()
            .map(|item| {
                let line = match item {
                    SettingItem::Theme => Line::from(vec![
                        Span::styled(item.name(), t.text_style()),
                        Span::styled(format!(" ({})", config.theme.name()), t.muted_style()),
                    ]),
                    SettingItem::KeymapPreset => Line::from(vec![
                        Span::styled(item.name(), t.text_style()),
                        Span::styled(
                            format!(" ({})", config.keymap.preset.name()),
                            t.muted_style(),
                        ),
                    ]),
                    SettingItem::LogOut => Line::from(Span::styled(item.name(), t.error_style())),
                };
                ListItem::new(line)
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Settings ")
                    .border_type(t.border_type(is_focused))
                    .border_style(if is_focused {
                        focused_border_style()
                    } else {
                        unfocused_border_style()
                    })
                    .style(t.background_style()),
            )
            .highlight_style(t.highlight_style())
            .highlight_symbol(LIST_HIGHLIGHT_SYMBOL);

        StatefulWidget::render(list, area, frame.buffer_mut(), &mut self.list_state);
    }

    fn explanation(&self, ctx: &RenderContext) -> Text<'static> {
        let t = theme();
        let k = |a| ctx.config.keymap.get_key_display_for_action(a);
        let lines = match self.selected_setting() {
            Some(SettingItem::Theme) => vec![
                Line::from(Span::styled("Color Theme", t.title_style())),
                Line::from(""),
                Line::from(Span::styled(
                    "Choose how my-alarm looks. Changes apply immediately and are saved to your config.",
                    t.text_style(),
                )),
            ],
            Some(SettingItem::KeymapPreset) => vec![
                Line::from(Span::styled("Keymap Preset", t.title_style())),
                Line::from(""),
                Line::from(Span::styled(
                    "Standard: arrows, Enter, Esc. Vim: hjkl. Emacs: Ctrl+n/p/f/b.",
                    t.text_style(),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    "Switching preset clears [[keymap.overrides]] in the config file.",
                    t.muted_style(),
                )),
            ],
            Some(SettingItem::LogOut) => vec![
                Line::from(Span::styled("Log Out", t.title_style())),
                Line::from(""),
                Line::from(Span::styled(
                    format!(
                        "Forget the saved account on this machine and return to the login screen. Press {} here or {} anywhere in the main view.",
                        k(Action::Confirm),
                        k(Action::Logout)
                    ),
                    t.text_style(),
                )),
            ],
            None => Vec::new(),
        };
        Text::from(lines)
    }

    fn render_options_pane(&self, frame: &mut Frame, area: Rect, ctx: &RenderContext) {
        let t = theme();
        let is_focused = self.focus == SettingsFocus::Options;

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(6), Constraint::Min(0)])
            .split(area);

        let options = self
            .selected_setting()
            .map(|s| s.options(ctx.config))
            .unwrap_or_default();
        let option_lines: Vec<Line> = options
            .iter()
            .enumerate()
            .map(|(i, (name, selected))| {
                let marker = if *selected { "●" } else { "○" };
                let style = if is_focused && i == self.option_index {
                    t.highlight_style()
                } else if *selected {
                    Style::default().fg(t.success).add_modifier(Modifier::BOLD)
                } else {
                    t.text_style()
                };
                Line::from(Span::styled(format!("  {} {}", marker, name), style))
            })
            .collect();

        let options_block = Paragraph::new(option_lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Options ")
                .border_type(t.border_type(is_focused))
                .border_style(if is_focused {
                    focused_border_style()
                } else {
                    unfocused_border_style()
                })
                .style(t.background_style()),
        );
        frame.render_widget(options_block, chunks[0]);

        let explanation = Paragraph::new(self.explanation(ctx))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Details ")
                    .border_type(t.border_type(false))
                    .border_style(unfocused_border_style())
                    .padding(Padding::proportional(1))
                    .style(t.background_style()),
            )
            .wrap(Wrap { trim: false });
        frame.render_widget(explanation, chunks[1]);
    }
}

impl Screen for SettingsScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(0)])
            .split(area);
        self.render_profile(frame, rows[0], ctx.session);

        let panes = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(rows[1]);
        self.render_settings_list(frame, panes[0], ctx.config);
        self.render_options_pane(frame, panes[1], ctx);

        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        let Event::Key(key) = event else {
            return Ok(ScreenAction::None);
        };
        if key.kind != KeyEventKind::Press {
            return Ok(ScreenAction::None);
        }
        let Some(action) = ctx.config.keymap.get_action(key.code, key.modifiers) else {
            return Ok(ScreenAction::None);
        };

        match self.focus {
            SettingsFocus::List => match action {
                Action::MoveUp => {
                    self.list_state.select_previous();
                    self.option_index = self.current_option_index(ctx.config);
                }
                Action::MoveDown => {
                    let last = SettingItem::all().len() - 1;
                    let next = self.list_state.selected().map_or(0, |i| (i + 1).min(last));
                    self.list_state.select(Some(next));
                    self.option_index = self.current_option_index(ctx.config);
                }
                Action::Confirm | Action::MoveRight => match self.selected_setting() {
                    Some(SettingItem::LogOut) if action == Action::Confirm => {
                        return Ok(ScreenAction::Logout)
                    }
                    Some(SettingItem::LogOut) | None => {}
                    Some(_) => {
                        self.focus = SettingsFocus::Options;
                        self.option_index = self.current_option_index(ctx.config);
                    }
                },
                Action::Help => return Ok(ScreenAction::ShowHelp),
                Action::Quit => return Ok(ScreenAction::Quit),
                _ => {}
            },
            SettingsFocus::Options => {
                let count = self
                    .selected_setting()
                    .map_or(0, |s| s.options(ctx.config).len());
                match action {
                    Action::MoveUp => self.option_index = self.option_index.saturating_sub(1),
                    Action::MoveDown => {
                        self.option_index = (self.option_index + 1).min(count.saturating_sub(1))
                    }
                    Action::Confirm | Action::ToggleSelect => {
                        if let Some(setting) = self.selected_setting() {
                            return Ok(ScreenAction::UpdateSetting {
                                setting,
                                option_index: self.option_index,
                            });
                        }
                    }
                    Action::MoveLeft | Action::Cancel => self.focus = SettingsFocus::List,
                    Action::Quit => return Ok(ScreenAction::Quit),
                    _ => {}
                }
            }
        }

        Ok(ScreenAction::None)
    }

    fn on_enter(&mut self, _ctx: &ScreenContext) -> Result<()> {
        self.list_state.select(Some(0));
        self.focus = SettingsFocus::List;
        self.option_index = 0;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alarm::AlarmStore;
    use crate::api::User;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use std::path::Path;

    fn press(screen: &mut SettingsScreen, config: &Config, code: KeyCode) -> ScreenAction {
        let store = AlarmStore::new();
        let session = SessionState::Unauthenticated;
        let ctx = ScreenContext::new(config, Path::new("config.toml"), &session, &store);
        screen
            .handle_event(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)), &ctx)
            .unwrap()
    }

    #[test]
    fn test_profile_fallbacks() {
        assert_eq!(
            SettingsScreen::profile_lines(&SessionState::Unauthenticated),
            ("Guest".to_string(), "Group: Unknown".to_string())
        );
        let user = User {
            id: 1,
            username: "ada".to_string(),
            group: 12,
        };
        assert_eq!(
            SettingsScreen::profile_lines(&SessionState::Authenticated(user)),
            ("ada".to_string(), "Group: 12".to_string())
        );
    }

    #[test]
    fn test_log_out_entry() {
        let config = Config::default();
        let mut screen = SettingsScreen::new();
        press(&mut screen, &config, KeyCode::Down);
        press(&mut screen, &config, KeyCode::Down);
        press(&mut screen, &config, KeyCode::Down);
        assert_eq!(screen.selected_setting(), Some(SettingItem::LogOut));
        assert_eq!(press(&mut screen, &config, KeyCode::Enter), ScreenAction::Logout);
    }

    #[test]
    fn test_pick_keymap_preset() {
        let config = Config::default();
        let mut screen = SettingsScreen::new();
        press(&mut screen, &config, KeyCode::Down);
        press(&mut screen, &config, KeyCode::Enter);
        press(&mut screen, &config, KeyCode::Down);
        assert_eq!(
            press(&mut screen, &config, KeyCode::Enter),
            ScreenAction::UpdateSetting {
                setting: SettingItem::KeymapPreset,
                option_index: 1,
            }
        );
    }

    #[test]
    fn test_apply_preset_clears_overrides() {
        let mut config = Config::default();
        config
            .keymap
            .overrides
            .push(crate::keymap::KeyBinding::new("t", Action::ToggleActive));
        assert!(SettingItem::KeymapPreset.apply(&mut config, 1));
        assert_eq!(config.keymap.preset, KeymapPreset::Vim);
        assert!(config.keymap.overrides.is_empty());
        assert!(!SettingItem::KeymapPreset.apply(&mut config, 1));
        assert!(!SettingItem::KeymapPreset.apply(&mut config, 9));
    }
}
