//! Alarms tab: next-alarm banner plus the list of alarms.

use crate::alarm::{next_alarm, Alarm, AlarmId, AlarmStore, DAY_INITIALS};
use crate::keymap::Action;
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::state::ScreenId;
use crate::styles::{theme, LIST_HIGHLIGHT_SYMBOL};
use anyhow::Result;
use crossterm::event::{Event, KeyEventKind};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph, StatefulWidget};
use ratatui::Frame;

const QUOTE: &str = "\"Perseverance turns failure into success\"";

#[derive(Debug)]
pub struct AlarmListScreen {
    list_state: ListState,
}

impl Default for AlarmListScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl AlarmListScreen {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self { list_state }
    }

    /// Id of the highlighted alarm, if the list is not empty.
    pub fn selected_id(&self, store: &AlarmStore) -> Option<AlarmId> {
        self.list_state
            .selected()
            .and_then(|i| store.get_index(i))
            .map(|alarm| alarm.id)
    }

    /// Keep the selection inside the list after removals.
    fn clamp_selection(&mut self, len: usize) {
        let selected = match (len, self.list_state.selected()) {
            (0, _) => None,
            (len, Some(i)) => Some(i.min(len - 1)),
            (_, None) => Some(0),
        };
        self.list_state.select(selected);
    }

    fn move_selection(&mut self, len: usize, down: bool) {
        if len == 0 {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        let next = if down {
            (current + 1).min(len - 1)
        } else {
            current.saturating_sub(1)
        };
        self.list_state.select(Some(next));
    }

    fn alarm_item(alarm: &Alarm) -> ListItem<'static> {
        let t = theme();
        let row = t.alarm_row_style(alarm.is_active);

        let mut spans = vec![
            Span::styled(format!("{}  ", alarm.time), row.add_modifier(Modifier::BOLD)),
            Span::styled(
                if alarm.is_active { "[on]  " } else { "[off] " },
                t.alarm_switch_style(alarm.is_active),
            ),
        ];

        for (day, initial) in DAY_INITIALS.iter().enumerate() {
            spans.push(Span::styled(
                format!("{} ", initial),
                t.weekday_style(alarm.working_day.is_set(day)),
            ));
        }

        let subject = if alarm.test_subject.is_empty() {
            "(no subject)".to_string()
        } else {
            alarm.test_subject.clone()
        };
        spans.push(Span::styled(format!(" {:<20}", subject), row));
        spans.push(Span::styled(
            alarm.wake_mode_label(),
            t.smart_wake_style(alarm.smart_wake_up),
        ));

        ListItem::new(Line::from(spans))
    }

    fn render_banner(&self, frame: &mut Frame, area: Rect, ctx: &RenderContext) {
        let t = theme();
        let next = match next_alarm(ctx.store, ctx.now) {
            Some(next) => Span::styled(next.describe(ctx.now), t.emphasis_style()),
            None => Span::styled("no active alarm", t.muted_style()),
        };
        let lines = vec![
            Line::from(Span::styled(QUOTE, t.text_style())),
            Line::from(vec![Span::styled("Next alarm: ", t.title_style()), next]),
        ];
        let banner = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(t.border_type(false))
                .border_style(t.border_style())
                .title(" Your exams are coming! ")
                .padding(Padding::horizontal(1)),
        );
        frame.render_widget(banner, area);
    }
}

impl Screen for AlarmListScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let t = theme();
        self.clamp_selection(ctx.store.len());

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(3)])
            .split(area);

        self.render_banner(frame, chunks[0], ctx);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(t.border_type(true))
            .border_style(t.border_focused_style())
            .title(format!(" Alarms ({}) ", ctx.store.len()))
            .style(t.background_style());

        if ctx.store.is_empty() {
            let hint = format!(
                "No alarms yet. Press {} to create one.",
                ctx.config.keymap.get_key_display_for_action(Action::Create)
            );
            frame.render_widget(Paragraph::new(hint).style(t.muted_style()).block(block), chunks[1]);
            return Ok(());
        }

        let items: Vec<ListItem> = ctx.store.iter().map(Self::alarm_item).collect();
        let list = List::new(items)
            .block(block)
            .highlight_style(t.highlight_style())
            .highlight_symbol(LIST_HIGHLIGHT_SYMBOL);
        StatefulWidget::render(list, chunks[1], frame.buffer_mut(), &mut self.list_state);

        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        let Event::Key(key) = event else {
            return Ok(ScreenAction::None);
        };
        if key.kind != KeyEventKind::Press {
            return Ok(ScreenAction::None);
        }

        let len = ctx.store.len();
        self.clamp_selection(len);
        let selected = self.selected_id(ctx.store);

        let Some(action) = ctx.config.keymap.get_action(key.code, key.modifiers) else {
            return Ok(ScreenAction::None);
        };

        let result = match (action, selected) {
            (Action::MoveUp, _) => {
                self.move_selection(len, false);
                ScreenAction::None
            }
            (Action::MoveDown, _) => {
                self.move_selection(len, true);
                ScreenAction::None
            }
            (Action::Create, _) => ScreenAction::Navigate(ScreenId::AlarmEditor(None)),
            (Action::Edit | Action::Confirm, Some(id)) => {
                ScreenAction::Navigate(ScreenId::AlarmEditor(Some(id)))
            }
            (Action::ToggleActive | Action::ToggleSelect, Some(id)) => ScreenAction::ToggleActive(id),
            (Action::ToggleSmartWake, Some(id)) => ScreenAction::ToggleSmartWake(id),
            (Action::Delete, Some(id)) => ScreenAction::ConfirmDelete(id),
            (Action::Help, _) => ScreenAction::ShowHelp,
            (Action::Quit, _) => ScreenAction::Quit,
            _ => ScreenAction::None,
        };
        Ok(result)
    }
}
