//! Quiz Summary tab: how many wake-up questions each subject will ask per
//! week, from the active alarms.

use crate::alarm::AlarmStore;
use crate::keymap::Action;
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::styles::theme;
use anyhow::Result;
use crossterm::event::{Event, KeyEventKind};
use ratatui::layout::{Constraint, Rect};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Padding, Paragraph, Row, Table};
use ratatui::Frame;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectSummary {
    pub subject: String,
    pub alarms: usize,
    pub questions_per_week: u32,
}

/// Per-subject totals over active alarms, sorted by subject.
///
/// A repeating alarm asks its questions once per flagged day; a one-shot
/// alarm asks them once.
pub fn subject_summaries(store: &AlarmStore) -> Vec<SubjectSummary> {
    let mut by_subject: BTreeMap<&str, (usize, u32)> = BTreeMap::new();
    for alarm in store.iter().filter(|a| a.is_active) {
        let rings = match alarm.working_day.flags().iter().filter(|f| **f).count() {
            0 => 1,
            n => n as u32,
        };
        let entry = by_subject.entry(alarm.test_subject.as_str()).or_default();
        entry.0 += 1;
        entry.1 += rings * u32::from(alarm.question_count.value());
    }
    by_subject
        .into_iter()
        .map(|(subject, (alarms, questions_per_week))| SubjectSummary {
            subject: subject.to_string(),
            alarms,
            questions_per_week,
        })
        .collect()
}

#[derive(Debug, Default)]
pub struct QuizSummaryScreen;

impl QuizSummaryScreen {
    pub fn new() -> Self {
        Self
    }
}

impl Screen for QuizSummaryScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let t = theme();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(t.border_type(true))
            .border_style(t.border_focused_style())
            .title(" Quiz Summary ")
            .padding(Padding::horizontal(1));

        let summaries = subject_summaries(ctx.store);
        if summaries.is_empty() {
            let empty = Paragraph::new("Turn on an alarm to get quizzed when you wake up.")
                .style(t.muted_style())
                .block(block);
            frame.render_widget(empty, area);
            return Ok(());
        }

        let rows = summaries.iter().map(|s| {
            Row::new(vec![
                Span::styled(s.subject.clone(), t.text_style()),
                Span::styled(s.alarms.to_string(), t.text_style()),
                Span::styled(s.questions_per_week.to_string(), t.emphasis_style()),
            ])
        });
        let table = Table::new(
            rows,
            [Constraint::Min(20), Constraint::Length(8), Constraint::Length(18)],
        )
        .header(Row::new(vec!["Subject", "Alarms", "Questions / week"]).style(t.title_style()))
        .block(block);
        frame.render_widget(table, area);

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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alarm::{AlarmDraft, QuestionCount};

    #[test]
    fn test_sample_subjects() {
        let store = AlarmStore::with_samples();
        let summaries = subject_summaries(&store);
        assert_eq!(
            summaries,
            vec![
                SubjectSummary {
                    subject: "Graph Theory".to_string(),
                    alarms: 1,
                    questions_per_week: 25,
                },
                SubjectSummary {
                    subject: "Probability".to_string(),
                    alarms: 1,
                    questions_per_week: 35,
                },
            ]
        );
    }

    #[test]
    fn test_one_shot_counts_once_and_inactive_is_ignored() {
        let mut store = AlarmStore::new();
        store.add(AlarmDraft {
            test_subject: "Algebra".to_string(),
            question_count: QuestionCount::Seven,
            is_active: true,
            ..AlarmDraft::default()
        });
        store.add(AlarmDraft {
            test_subject: "Algebra".to_string(),
            is_active: false,
            ..AlarmDraft::default()
        });
        let summaries = subject_summaries(&store);
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].alarms, 1);
        assert_eq!(summaries[0].questions_per_week, 7);
    }
}
