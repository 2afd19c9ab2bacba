//! Registration form. The group field must hold a number; everything else is
//! sent as typed.

use crate::api::RegisterRequest;
use crate::components::{Footer, Header};
use crate::error::ValidationError;
use crate::keymap::Action;
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::state::ScreenId;
use crate::styles::theme;
use crate::utils::{center_fixed, create_standard_layout, TextInput};
use crate::widgets::{TextInputWidget, TextInputWidgetExt};
use anyhow::Result;
use crossterm::event::{Event, KeyEvent, KeyEventKind};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegisterField {
    #[default]
    Username,
    Email,
    Password,
    Group,
    LoginLink,
}

impl RegisterField {
    const ORDER: [RegisterField; 5] = [
        RegisterField::Username,
        RegisterField::Email,
        RegisterField::Password,
        RegisterField::Group,
        RegisterField::LoginLink,
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

#[derive(Debug, Default)]
pub struct RegisterScreen {
    username: TextInput,
    email: TextInput,
    password: TextInput,
    group: TextInput,
    focus: RegisterField,
}

impl RegisterScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focus(&self) -> RegisterField {
        self.focus
    }

    /// Build the request body, rejecting empty fields and a non-numeric group.
    pub fn validate(&self) -> Result<RegisterRequest, ValidationError> {
        let username = self.username.text_trimmed();
        if username.is_empty() {
            return Err(ValidationError::new("username", "enter a username"));
        }
        let email = self.email.text_trimmed();
        if email.is_empty() {
            return Err(ValidationError::new("email", "enter an email address"));
        }
        if self.password.is_empty() {
            return Err(ValidationError::new("password", "enter a password"));
        }
        let group = self
            .group
            .text_trimmed()
            .parse::<i64>()
            .map_err(|_| ValidationError::new("group", "the group must be a number"))?;

        Ok(RegisterRequest {
            username: username.to_string(),
            email: email.to_string(),
            password: self.password.text().to_string(),
            group,
        })
    }

    fn submit(&self) -> ScreenAction {
        match self.validate() {
            Ok(request) => ScreenAction::SubmitRegister(request),
            Err(e) => ScreenAction::alert("Registration failed", e.to_string()),
        }
    }

    /// Forget everything typed, e.g. after a successful registration.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focus {
            RegisterField::Username => Some(&mut self.username),
            RegisterField::Email => Some(&mut self.email),
            RegisterField::Password => Some(&mut self.password),
            RegisterField::Group => Some(&mut self.group),
            RegisterField::LoginLink => None,
        }
    }

    fn handle_key(&mut self, key: KeyEvent, ctx: &ScreenContext) -> ScreenAction {
        let action = ctx.config.keymap.get_action(key.code, key.modifiers);

        if self.is_input_focused() {
            match TextInput::focused_action(&key, action) {
                Some(Action::NextTab) => self.focus = self.focus.next(),
                Some(Action::PrevTab) => self.focus = self.focus.prev(),
                Some(Action::Confirm) => {
                    if self.focus == RegisterField::Group {
                        return self.submit();
                    }
                    self.focus = self.focus.next();
                }
                Some(Action::Save) => return self.submit(),
                Some(Action::Cancel) => return ScreenAction::Navigate(ScreenId::Login),
                Some(other) => {
                    if let Some(input) = self.focused_input() {
                        input.handle_action(other);
                    }
                }
                None => {
                    if let Some(input) = self.focused_input() {
                        input.handle_unmapped_key(&key);
                    }
                }
            }
            return ScreenAction::None;
        }

        match action {
            Some(Action::NextTab) | Some(Action::MoveDown) => self.focus = self.focus.next(),
            Some(Action::PrevTab) | Some(Action::MoveUp) => self.focus = self.focus.prev(),
            Some(Action::Confirm) | Some(Action::Cancel) => {
                return ScreenAction::Navigate(ScreenId::Login)
            }
            Some(Action::Help) => return ScreenAction::ShowHelp,
            Some(Action::Quit) => return ScreenAction::Quit,
            _ => {}
        }
        ScreenAction::None
    }
}

impl Screen for RegisterScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let t = theme();
        let (header_chunk, content_chunk, footer_chunk) = create_standard_layout(area, 5, 2);

        Header::render(
            frame,
            header_chunk,
            "my-alarm - Register",
            "Create an account with your study group number.",
        )?;

        let form = center_fixed(content_chunk, 50, 14);
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(form);

        let fields = [
            (&self.username, "Username", "Pick a username", RegisterField::Username),
            (&self.email, "Email", "you@example.com", RegisterField::Email),
            (&self.password, "Password", "Choose a password", RegisterField::Password),
            (&self.group, "Group", "Group number", RegisterField::Group),
        ];
        for (row, (input, title, placeholder, field)) in rows.iter().zip(fields) {
            frame.render_text_input_widget(
                TextInputWidget::new(input)
                    .title(title)
                    .placeholder(placeholder)
                    .masked(field == RegisterField::Password)
                    .focused(self.focus == field),
                *row,
            );
        }

        let link_style = if self.focus == RegisterField::LoginLink {
            t.highlight_style()
        } else {
            t.emphasis_style()
        };
        let link = Line::from(vec![
            Span::styled("Already registered? ", t.muted_style()),
            Span::styled("Log in", link_style),
        ]);
        frame.render_widget(Paragraph::new(link).alignment(Alignment::Center), rows[5]);

        let keymap = &ctx.config.keymap;
        let footer_text = format!(
            "{} | {} | {}",
            keymap.hint(Action::NextTab, "Next Field"),
            keymap.hint(Action::Save, "Register"),
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
        self.focus != RegisterField::LoginLink
    }

    fn on_enter(&mut self, _ctx: &ScreenContext) -> Result<()> {
        self.password.clear();
        self.focus = RegisterField::Username;
        Ok(())
    }
}
