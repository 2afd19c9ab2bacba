//! Awakening Stats tab.
//!
//! There is no sleep tracking behind this view; it summarises the configured
//! week instead: the first alarm of each day and how many alarms use smart
//! wake.

use crate::alarm::{AlarmStore, AlarmTime, DAY_NAMES};
use crate::keymap::Action;
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::styles::theme;
use anyhow::Result;
use crossterm::event::{Event, KeyEventKind};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph, Row, Table};
use ratatui::Frame;

/// Counts shown above the weekly table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WakeSummary {
    pub total: usize,
    pub active: usize,
    pub smart_wake: usize,
    /// Active alarms with no weekday flagged.
    pub one_shot: usize,
}

impl WakeSummary {
    pub fn from_store(store: &AlarmStore) -> Self {
        store.iter().fold(Self::default(), |mut acc, alarm| {
            acc.total += 1;
            if alarm.is_active {
                acc.active += 1;
                if alarm.smart_wake_up {
                    acc.smart_wake += 1;
                }
                if alarm.working_day.is_empty() {
                    acc.one_shot += 1;
                }
            }
            acc
        })
    }
}

/// Earliest active repeating alarm per weekday, Sunday..Saturday.
pub fn first_alarm_per_day(store: &AlarmStore) -> [Option<AlarmTime>; 7] {
    let mut days = [None; 7];
    for alarm in store.iter().filter(|a| a.is_active) {
        for (day, slot) in days.iter_mut().enumerate() {
            if alarm.working_day.is_set(day) {
                *slot = Some(slot.map_or(alarm.time, |t: AlarmTime| t.min(alarm.time)));
            }
        }
    }
    days
}

#[derive(Debug, Default)]
pub struct StatisticsScreen;

impl StatisticsScreen {
    pub fn new() -> Self {
        Self
    }
}

impl Screen for StatisticsScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let t = theme();
        let summary = WakeSummary::from_store(ctx.store);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(5), Constraint::Min(9)])
            .split(area);

        let stat = |label: &'static str, value: usize| {
            Line::from(vec![
                Span::styled(format!("{:<18}", label), t.muted_style()),
                Span::styled(value.to_string(), t.emphasis_style()),
            ])
        };
        let totals = Paragraph::new(vec![
            stat("Active alarms", summary.active),
            stat("Smart wake-up", summary.smart_wake),
            stat("One-shot alarms", summary.one_shot),
        ])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(t.border_type(false))
                .border_style(t.border_style())
                .title(format!(" Statistics ({} alarms) ", summary.total))
                .padding(Padding::horizontal(1)),
        );
        frame.render_widget(totals, chunks[0]);

        let rows = first_alarm_per_day(ctx.store)
            .into_iter()
            .zip(DAY_NAMES)
            .map(|(time, day)| {
                let (text, style) = match time {
                    Some(time) => (time.to_string(), t.text_style()),
                    None => ("no alarm".to_string(), t.muted_style()),
                };
                Row::new(vec![Span::styled(day, t.text_style()), Span::styled(text, style)])
            });
        let table = Table::new(rows, [Constraint::Length(12), Constraint::Min(8)])
            .header(Row::new(vec!["Day", "First alarm"]).style(t.title_style()))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(t.border_type(true))
                    .border_style(t.border_focused_style())
                    .title(" Wake-up times this week ")
                    .padding(Padding::horizontal(1)),
            );
        frame.render_widget(table, chunks[1]);

        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        let Event::Key(key) = event else {
            return Ok(ScreenAction::None);
        };
        if key.kind != KeyEventKind::Press {
            return Ok(ScreenAction::None);
        }
        Ok(match ctx.config.keymap.get_action(key.code, key.modifiers) {
            Some(Action::Help) => ScreenAction::ShowHelp,
            Some(Action::Quit) => ScreenAction::Quit,
            _ => ScreenAction::None,
        })
    }
}
