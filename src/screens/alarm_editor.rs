//! Alarm editor: time digits, weekdays, quiz subject and size, smart wake
//! and volume. Opened empty for "add" or pre-filled from an existing alarm.

use crate::alarm::{
    AlarmDraft, AlarmId, AlarmStore, QuestionCount, TimeInput, TimeInputOutcome, WeekdaySelector,
    DAY_NAMES,
};
use crate::components::{Footer, Header, MainTab};
use crate::error::ValidationError;
use crate::keymap::Action;
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::state::ScreenId;
use crate::styles::theme;
use crate::utils::{create_standard_layout, focused_border_style, unfocused_border_style, TextInput};
use crate::widgets::{TextInputWidget, TextInputWidgetExt};
use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Gauge, Padding, Paragraph};
use ratatui::Frame;
use tracing::debug;

const VOLUME_STEP: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorField {
    #[default]
    Time,
    Days,
    Subject,
    Questions,
    SmartWake,
    Volume,
    Save,
}

impl EditorField {
    const ORDER: [EditorField; 7] = [
        EditorField::Time,
        EditorField::Days,
        EditorField::Subject,
        EditorField::Questions,
        EditorField::SmartWake,
        EditorField::Volume,
        EditorField::Save,
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    fn prev(self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

#[derive(Debug)]
pub struct AlarmEditorScreen {
    /// Alarm being edited; `None` while creating.
    editing: Option<AlarmId>,
    /// Fields the editor does not change, carried through to the draft.
    base: AlarmDraft,
    time: TimeInput,
    days: WeekdaySelector,
    day_cursor: usize,
    subject: TextInput,
    question_count: QuestionCount,
    smart_wake_up: bool,
    volume: u8,
    focus: EditorField,
    /// Inline hint under the time field after a refused digit.
    hint: Option<String>,
}

impl Default for AlarmEditorScreen {
    fn default() -> Self {
        Self::from_draft(None, AlarmDraft::default())
    }
}

impl AlarmEditorScreen {
    /// Editor for a new alarm.
    pub fn new() -> Self {
        Self::default()
    }

    /// Editor for `id`, pre-filled from the store. Falls back to a new alarm
    /// when the id is gone.
    pub fn open(id: Option<AlarmId>, store: &AlarmStore) -> Self {
        match id.and_then(|id| store.get(id)) {
            Some(alarm) => Self::from_draft(Some(alarm.id), AlarmDraft::from(alarm)),
            None => {
                if let Some(id) = id {
                    debug!("Alarm {} no longer exists, opening an empty editor", id.0);
                }
                Self::new()
            }
        }
    }

    fn from_draft(editing: Option<AlarmId>, draft: AlarmDraft) -> Self {
        Self {
            editing,
            time: TimeInput::from_time(draft.time),
            days: WeekdaySelector::from_working_days(draft.working_day),
            day_cursor: 0,
            subject: TextInput::with_text(draft.test_subject.clone()),
            question_count: draft.question_count,
            smart_wake_up: draft.smart_wake_up,
            volume: draft.volume,
            focus: EditorField::Time,
            hint: None,
            base: draft,
        }
    }

    pub fn editing(&self) -> Option<AlarmId> {
        self.editing
    }

    pub fn focus(&self) -> EditorField {
        self.focus
    }

    /// Current field values as a draft. The subject must not be blank.
    pub fn draft(&self) -> Result<AlarmDraft, ValidationError> {
        let subject = self.subject.text_trimmed();
        if subject.is_empty() {
            return Err(ValidationError::new("subject", "enter a quiz subject"));
        }
        Ok(AlarmDraft {
            time: self.time.to_time(),
            working_day: self.days.to_working_days(),
            test_subject: subject.to_string(),
            question_count: self.question_count,
            smart_wake_up: self.smart_wake_up,
            volume: self.volume,
            ..self.base.clone()
        })
    }

    fn save(&self) -> ScreenAction {
        match self.draft() {
            Ok(draft) => ScreenAction::SaveAlarm {
                id: self.editing,
                draft,
            },
            Err(e) => ScreenAction::alert("Cannot save alarm", e.to_string()),
        }
    }

    fn set_focus(&mut self, field: EditorField) {
        self.focus = field;
        self.hint = None;
        if field == EditorField::Time && self.time.is_dismissed() {
            self.time.focus(0);
        }
    }

    fn handle_time_key(&mut self, key: &KeyEvent, action: Option<Action>) -> Option<ScreenAction> {
        let outcome = match (TextInput::focused_action(key, action), key.code) {
            (None, KeyCode::Char(c)) => self.time.type_char(c),
            (None, KeyCode::Backspace) | (Some(Action::Backspace), _) => self.time.clear_focused(),
            (Some(Action::MoveLeft), _) => {
                self.time.focus_prev();
                return Some(ScreenAction::None);
            }
            (Some(Action::MoveRight), _) => {
                self.time.focus_next();
                return Some(ScreenAction::None);
            }
            _ => return None,
        };

        match outcome {
            TimeInputOutcome::Rejected => {
                self.hint = Some("Hours go up to 23 and minutes up to 59".to_string());
            }
            TimeInputOutcome::Dismissed => self.set_focus(EditorField::Days),
            TimeInputOutcome::Advanced | TimeInputOutcome::Cleared => self.hint = None,
        }
        Some(ScreenAction::None)
    }

    fn handle_subject_key(&mut self, key: &KeyEvent, action: Option<Action>) -> Option<ScreenAction> {
        match TextInput::focused_action(key, action) {
            None => {
                self.subject.handle_unmapped_key(key);
                Some(ScreenAction::None)
            }
            Some(action) if self.subject.handle_action(action) => Some(ScreenAction::None),
            Some(_) => None,
        }
    }

    /// Left/right/toggle on the non-text fields.
    fn adjust(&mut self, action: Action) {
        match (self.focus, action) {
            (EditorField::Days, Action::MoveLeft) => self.day_cursor = self.day_cursor.saturating_sub(1),
            (EditorField::Days, Action::MoveRight) => {
                self.day_cursor = (self.day_cursor + 1).min(DAY_NAMES.len() - 1)
            }
            (EditorField::Days, Action::ToggleSelect | Action::Confirm) => {
                self.days.toggle(self.day_cursor);
            }
            (EditorField::Questions, Action::MoveLeft) => {
                self.question_count = self.question_count.prev()
            }
            (EditorField::Questions, Action::MoveRight | Action::ToggleSelect) => {
                self.question_count = self.question_count.next()
            }
            (
                EditorField::SmartWake,
                Action::MoveLeft | Action::MoveRight | Action::ToggleSelect | Action::Confirm,
            ) => self.smart_wake_up = !self.smart_wake_up,
            (EditorField::Volume, Action::MoveLeft) => {
                self.volume = self.volume.saturating_sub(VOLUME_STEP)
            }
            (EditorField::Volume, Action::MoveRight) => {
                self.volume = (self.volume + VOLUME_STEP).min(100)
            }
            _ => {}
        }
    }

    fn handle_key(&mut self, key: KeyEvent, ctx: &ScreenContext) -> ScreenAction {
        let action = ctx.config.keymap.get_action(key.code, key.modifiers);

        let handled = match self.focus {
            EditorField::Time => self.handle_time_key(&key, action),
            EditorField::Subject => self.handle_subject_key(&key, action),
            _ => None,
        };
        if let Some(result) = handled {
            return result;
        }

        let action = if self.is_input_focused() {
            TextInput::focused_action(&key, action)
        } else {
            action
        };
        let Some(action) = action else {
            return ScreenAction::None;
        };

        match action {
            Action::NextTab => self.set_focus(self.focus.next()),
            Action::PrevTab => self.set_focus(self.focus.prev()),
            Action::MoveDown => self.set_focus(self.focus.next()),
            Action::MoveUp => self.set_focus(self.focus.prev()),
            Action::Save => return self.save(),
            Action::Confirm if self.focus == EditorField::Save => return self.save(),
            Action::Confirm if matches!(self.focus, EditorField::Time | EditorField::Subject) => {
                self.set_focus(self.focus.next())
            }
            Action::Cancel => return ScreenAction::Navigate(ScreenId::Main(MainTab::Alarms)),
            Action::Help => return ScreenAction::ShowHelp,
            other => self.adjust(other),
        }
        ScreenAction::None
    }

    fn field_block(&self, field: EditorField, title: &str) -> Block<'static> {
        let t = theme();
        let focused = self.focus == field;
        Block::default()
            .borders(Borders::ALL)
            .border_type(t.border_type(focused))
            .border_style(if focused {
                focused_border_style()
            } else {
                unfocused_border_style()
            })
            .title(format!(" {} ", title))
            .padding(Padding::horizontal(1))
    }

    fn render_time(&self, frame: &mut Frame, area: Rect) {
        let t = theme();
        let digits = self.time.digits();
        let editing = self.focus == EditorField::Time;
        let mut spans = Vec::new();
        for (slot, digit) in digits.iter().enumerate() {
            if slot == 2 {
                spans.push(Span::styled(" : ", t.muted_style()));
            }
            let style = if editing && self.time.focused_slot() == Some(slot) {
                t.highlight_style()
            } else {
                t.emphasis_style()
            };
            spans.push(Span::styled(format!("[{}]", digit), style));
        }
        spans.push(Span::styled(format!("   {}", self.time.formatted()), t.text_style()));
        if let Some(hint) = &self.hint {
            spans.push(Span::styled(format!("   {}", hint), t.error_style()));
        }
        frame.render_widget(
            Paragraph::new(Line::from(spans)).block(self.field_block(EditorField::Time, "Time")),
            area,
        );
    }

    fn render_days(&self, frame: &mut Frame, area: Rect) {
        let t = theme();
        let editing = self.focus == EditorField::Days;
        let spans: Vec<Span> = self
            .days
            .iter_canonical()
            .map(|(day, initial, selected)| {
                let mut style = if selected {
                    t.success_style()
                } else {
                    t.muted_style()
                };
                if editing && day == self.day_cursor {
                    style = t.highlight_style();
                }
                Span::styled(format!(" {} ", initial), style)
            })
            .collect();
        let title = if editing {
            format!("Repeat on ({})", DAY_NAMES[self.day_cursor])
        } else {
            "Repeat on".to_string()
        };
        frame.render_widget(
            Paragraph::new(Line::from(spans)).block(self.field_block(EditorField::Days, &title)),
            area,
        );
    }

    fn render_choice(&self, frame: &mut Frame, area: Rect) {
        let t = theme();
        let spans: Vec<Span> = QuestionCount::ALL
            .iter()
            .map(|count| {
                let style = if *count == self.question_count {
                    t.highlight_style()
                } else {
                    t.muted_style()
                };
                Span::styled(format!(" {} ", count.value()), style)
            })
            .collect();
        frame.render_widget(
            Paragraph::new(Line::from(spans))
                .block(self.field_block(EditorField::Questions, "Questions to solve")),
            area,
        );
    }

    fn render_smart_wake(&self, frame: &mut Frame, area: Rect) {
        let t = theme();
        let line = if self.smart_wake_up {
            Line::from(vec![
                Span::styled("[x] ", t.success_style()),
                Span::styled("Ring during a light sleep phase", t.text_style()),
            ])
        } else {
            Line::from(vec![
                Span::styled("[ ] ", t.muted_style()),
                Span::styled("Ring at the exact time", t.text_style()),
            ])
        };
        frame.render_widget(
            Paragraph::new(line).block(self.field_block(EditorField::SmartWake, "Smart wake-up")),
            area,
        );
    }

    fn render_volume(&self, frame: &mut Frame, area: Rect) {
        let t = theme();
        let title = format!("Sound: {}", self.base.sound);
        let gauge = Gauge::default()
            .block(self.field_block(EditorField::Volume, &title))
            .gauge_style(Style::default().fg(t.primary))
            .percent(u16::from(self.volume))
            .label(format!("Volume {}%", self.volume));
        frame.render_widget(gauge, area);
    }

    fn render_save(&self, frame: &mut Frame, area: Rect) {
        let t = theme();
        let style = if self.focus == EditorField::Save {
            t.highlight_style()
        } else {
            t.emphasis_style()
        };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled("  Save  ", style)))
                .alignment(ratatui::layout::Alignment::Center),
            area,
        );
    }
}

impl Screen for AlarmEditorScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let (header_chunk, content_chunk, footer_chunk) = create_standard_layout(area, 5, 2);

        let (title, description) = match self.editing {
            Some(_) => ("my-alarm - Edit Alarm", "Change the alarm and save it."),
            None => ("my-alarm - New Alarm", "Set a time, the days and the quiz to solve."),
        };
        Header::render(frame, header_chunk, title, description)?;

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(content_chunk);

        self.render_time(frame, rows[0]);
        self.render_days(frame, rows[1]);
        frame.render_text_input_widget(
            TextInputWidget::new(&self.subject)
                .title("Quiz subject")
                .placeholder("e.g. Probability")
                .focused(self.focus == EditorField::Subject),
            rows[2],
        );
        self.render_choice(frame, rows[3]);
        self.render_smart_wake(frame, rows[4]);
        self.render_volume(frame, rows[5]);
        self.render_save(frame, rows[6]);

        let keymap = &ctx.config.keymap;
        let footer_text = format!(
            "{} | {} | {} | {}",
            keymap.hint(Action::NextTab, "Next Field"),
            keymap.hint(Action::ToggleSelect, "Toggle"),
            keymap.hint(Action::Save, "Save"),
            keymap.hint(Action::Cancel, "Back"),
        );
        Footer::render(frame, footer_chunk, &footer_text)?;

        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => Ok(self.handle_key(key, ctx)),
            _ => Ok(ScreenAction::None),
        }
    }

    fn is_input_focused(&self) -> bool {
        matches!(self.focus, EditorField::Time | EditorField::Subject)
    }
}
