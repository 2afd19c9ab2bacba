//! Login screen: username, masked password and a link to registration.

use crate::components::{Footer, Header};
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
pub enum LoginField {
    #[default]
    Username,
    Password,
    RegisterLink,
}

impl LoginField {
    fn next(self) -> Self {
        match self {
            LoginField::Username => LoginField::Password,
            LoginField::Password => LoginField::RegisterLink,
            LoginField::RegisterLink => LoginField::Username,
        }
    }

    fn prev(self) -> Self {
        match self {
            LoginField::Username => LoginField::RegisterLink,
            LoginField::Password => LoginField::Username,
            LoginField::RegisterLink => LoginField::Password,
        }
    }
}

#[derive(Debug, Default)]
pub struct LoginScreen {
    username: TextInput,
    password: TextInput,
    focus: LoginField,
}

impl LoginScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focus(&self) -> LoginField {
        self.focus
    }

    fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focus {
            LoginField::Username => Some(&mut self.username),
            LoginField::Password => Some(&mut self.password),
            LoginField::RegisterLink => None,
        }
    }

    fn submit(&self) -> ScreenAction {
        if self.username.text_trimmed().is_empty() || self.password.is_empty() {
            return ScreenAction::alert("Login failed", "Enter your username and password.");
        }
        ScreenAction::SubmitLogin {
            username: self.username.text_trimmed().to_string(),
            password: self.password.text().to_string(),
        }
    }

    fn handle_key(&mut self, key: KeyEvent, ctx: &ScreenContext) -> ScreenAction {
        let action = ctx.config.keymap.get_action(key.code, key.modifiers);

        if self.is_input_focused() {
            match TextInput::focused_action(&key, action) {
                Some(Action::NextTab) => self.focus = self.focus.next(),
                Some(Action::PrevTab) => self.focus = self.focus.prev(),
                Some(Action::Confirm) => {
                    if self.focus == LoginField::Username {
                        self.focus = LoginField::Password;
                    } else {
                        return self.submit();
                    }
                }
                Some(Action::Save) => return self.submit(),
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
            Some(Action::Confirm) => return ScreenAction::Navigate(ScreenId::Register),
            Some(Action::Help) => return ScreenAction::ShowHelp,
            Some(Action::Quit) | Some(Action::Cancel) => return ScreenAction::Quit,
            _ => {}
        }
        ScreenAction::None
    }
}

impl Screen for LoginScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let t = theme();
        let (header_chunk, content_chunk, footer_chunk) = create_standard_layout(area, 5, 2);

        Header::render(
            frame,
            header_chunk,
            "my-alarm - Login",
            "Wake up with a quiz. Log in to manage your study alarms.",
        )?;

        let form = center_fixed(content_chunk, 50, 10);
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(form);

        frame.render_text_input_widget(
            TextInputWidget::new(&self.username)
                .title("Username")
                .placeholder("Your username")
                .focused(self.focus == LoginField::Username),
            rows[0],
        );
        frame.render_text_input_widget(
            TextInputWidget::new(&self.password)
                .title("Password")
                .placeholder("Your password")
                .masked(true)
                .focused(self.focus == LoginField::Password),
            rows[1],
        );

        let link_style = if self.focus == LoginField::RegisterLink {
            t.highlight_style()
        } else {
            t.emphasis_style()
        };
        let link = Line::from(vec![
            Span::styled("Don't have an account? ", t.muted_style()),
            Span::styled("Register", link_style),
        ]);
        frame.render_widget(Paragraph::new(link).alignment(Alignment::Center), rows[3]);

        let keymap = &ctx.config.keymap;
        let footer_text = format!(
            "{} | {} | {}",
            keymap.hint(Action::NextTab, "Next Field"),
            keymap.hint(Action::Confirm, "Log In"),
            keymap.hint(Action::Quit, "Quit"),
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
        self.focus != LoginField::RegisterLink
    }

    fn on_enter(&mut self, _ctx: &ScreenContext) -> Result<()> {
        self.password.clear();
        self.focus = if self.username.is_empty() {
            LoginField::Username
        } else {
            LoginField::Password
        };
        Ok(())
    }
}
