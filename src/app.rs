//! Application shell: owns shared state, routes input to screens and applies
//! the actions they return.

use crate::alarm::{AlarmId, AlarmPatch, AlarmStore};
use crate::api::{AuthClient, RegisterRequest};
use crate::components::{Footer, Header, HelpOverlay, MainTab, TabBar};
use crate::config::Config;
use crate::error::AuthError;
use crate::keymap::Action;
use crate::screens::{
    AlarmEditorScreen, AlarmListScreen, LoginScreen, QuizSummaryScreen, RegisterScreen,
    RenderContext, Screen, ScreenAction, ScreenContext, SettingItem, SettingsScreen,
    StatisticsScreen,
};
use crate::session::{SessionGate, SessionState, UserStore};
use crate::state::{Dialog, GlobalState, ScreenId};
use crate::styles::{init_theme, theme};
use crate::tui::Tui;
use crate::utils::{center_fixed, create_standard_layout};
use crate::widgets::{Dialog as DialogWidget, DialogVariant, ToastManager};
use anyhow::{Context, Result};
use chrono::{Local, NaiveDateTime};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;
use std::path::PathBuf;
use std::time::Duration;
use tokio::runtime::Runtime;
use tracing::{debug, error, info, warn};

const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Main application state
pub struct App {
    config: Config,
    config_path: PathBuf,
    runtime: Runtime,
    client: AuthClient,
    user_store: UserStore,
    session: SessionGate,
    alarms: AlarmStore,
    state: GlobalState,
    toasts: ToastManager,
    should_quit: bool,
    // Screens
    login: LoginScreen,
    register: RegisterScreen,
    alarm_list: AlarmListScreen,
    editor: AlarmEditorScreen,
    statistics: StatisticsScreen,
    quiz_summary: QuizSummaryScreen,
    settings: SettingsScreen,
}

impl App {
    pub fn new(config: Config, config_path: PathBuf, user_store: UserStore) -> Result<Self> {
        init_theme(config.theme);
        let runtime = Runtime::new().context("Failed to create tokio runtime")?;
        let client = AuthClient::new(config.api_base_url.clone());
        let alarms = initial_alarms(&config);
        info!("Using account API at {}", client.base_url());

        Ok(Self {
            config,
            config_path,
            runtime,
            client,
            user_store,
            session: SessionGate::new(),
            alarms,
            state: GlobalState::new(),
            toasts: ToastManager::new(),
            should_quit: false,
            login: LoginScreen::new(),
            register: RegisterScreen::new(),
            alarm_list: AlarmListScreen::new(),
            editor: AlarmEditorScreen::new(),
            statistics: StatisticsScreen::new(),
            quiz_summary: QuizSummaryScreen::new(),
            settings: SettingsScreen::new(),
        })
    }

    pub fn run(&mut self) -> Result<()> {
        let mut tui = Tui::new()?;
        tui.enter()?;

        // One frame of the loading view while the stored user is read.
        self.draw(&mut tui)?;
        self.resolve_session()?;

        loop {
            self.draw(&mut tui)?;
            if self.should_quit {
                break;
            }

            if let Some(event) = tui.poll_event(POLL_INTERVAL)? {
                self.handle_event(event)?;
            }
            self.toasts.tick();
        }

        tui.exit()?;
        info!("Exiting");
        Ok(())
    }

    /// Leave `Loading` for the login screen or the main shell.
    fn resolve_session(&mut self) -> Result<()> {
        let state = self
            .runtime
            .block_on(self.session.resolve(&self.user_store))
            .clone();
        let target = match state {
            SessionState::Authenticated(_) => ScreenId::Main(MainTab::Alarms),
            _ => ScreenId::Login,
        };
        self.navigate(target)
    }

    fn draw(&mut self, tui: &mut Tui) -> Result<()> {
        let now = Local::now().naive_local();
        tui.terminal_mut().draw(|frame| {
            if let Err(e) = self.render(frame, now) {
                error!("Render failed: {:#}", e);
            }
        })?;
        Ok(())
    }

    fn render(&mut self, frame: &mut Frame, now: NaiveDateTime) -> Result<()> {
        let area = frame.area();
        frame.render_widget(Block::default().style(theme().background_style()), area);

        let ctx = RenderContext::new(&self.config, self.session.state(), &self.alarms, now);
        match self.state.screen {
            ScreenId::Loading => render_loading(frame, area),
            ScreenId::Login => self.login.render(frame, area, &ctx)?,
            ScreenId::Register => self.register.render(frame, area, &ctx)?,
            ScreenId::AlarmEditor(_) => self.editor.render(frame, area, &ctx)?,
            ScreenId::Main(tab) => {
                let (header, body, footer) = create_standard_layout(area, 3, 2);
                let greeting = match self.session.user() {
                    Some(user) => format!("Good morning, {}", user.username),
                    None => "Good morning".to_string(),
                };
                Header::render_with_clock(frame, header, "my-alarm", &greeting, now.time())?;

                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Length(2), Constraint::Min(0)])
                    .split(body);
                TabBar::render(frame, chunks[0], tab);

                match tab {
                    MainTab::Alarms => self.alarm_list.render(frame, chunks[1], &ctx)?,
                    MainTab::AwakeningStats => self.statistics.render(frame, chunks[1], &ctx)?,
                    MainTab::QuizSummary => self.quiz_summary.render(frame, chunks[1], &ctx)?,
                    MainTab::Settings => self.settings.render(frame, chunks[1], &ctx)?,
                }
                Footer::render(frame, footer, &self.main_footer(tab))?;
            }
        }

        match &self.state.dialog {
            Dialog::None => {}
            Dialog::Alert { title, message } => {
                let dialog = DialogWidget::new(title, message).footer("Enter: OK");
                frame.render_widget(dialog, area);
            }
            Dialog::ConfirmDelete { label, .. } => {
                let message = format!("Delete the {} alarm?", label);
                let dialog = DialogWidget::new("Delete alarm", &message)
                    .variant(DialogVariant::Warning)
                    .footer("Y: Yes | N: No");
                frame.render_widget(dialog, area);
            }
            Dialog::Help => {
                let config_path = self.config_path.display().to_string();
                HelpOverlay::render(frame, area, &self.config.keymap, &config_path)?;
            }
        }

        self.toasts.render(frame, area);
        Ok(())
    }

    fn main_footer(&self, tab: MainTab) -> String {
        let k = &self.config.keymap;
        let mut hints = match tab {
            MainTab::Alarms => vec![
                format!("{}: Select", k.navigation_display()),
                k.hint(Action::Create, "New"),
                k.hint(Action::Edit, "Edit"),
                k.hint(Action::ToggleActive, "On/Off"),
                k.hint(Action::ToggleSmartWake, "Smart Wake"),
                k.hint(Action::Delete, "Delete"),
            ],
            MainTab::Settings => vec![
                format!("{}: Select", k.navigation_display()),
                k.hint(Action::Confirm, "Apply"),
            ],
            MainTab::AwakeningStats | MainTab::QuizSummary => Vec::new(),
        };
        hints.push(k.hint(Action::NextTab, "Next Tab"));
        hints.push(k.hint(Action::Help, "Help"));
        hints.push(k.hint(Action::Quit, "Quit"));
        hints.join(" | ")
    }

    /// Handle one terminal event.
    pub fn handle_event(&mut self, event: Event) -> Result<()> {
        let Event::Key(key) = event else {
            return Ok(());
        };
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return Ok(());
        }

        let action = self.config.keymap.get_action(key.code, key.modifiers);

        if self.state.has_dialog() {
            return self.handle_dialog_key(action);
        }

        if self.state.screen == ScreenId::Loading {
            return Ok(());
        }

        if let ScreenId::Main(tab) = self.state.screen {
            match action {
                Some(Action::NextTab) => return self.navigate(ScreenId::Main(tab.next())),
                Some(Action::PrevTab) => return self.navigate(ScreenId::Main(tab.prev())),
                Some(Action::Logout) => return self.apply_action(ScreenAction::Logout),
                _ => {}
            }
        }

        if action == Some(Action::Help) && !self.current_input_focused() {
            self.state.toggle_help();
            return Ok(());
        }

        let result = self.dispatch(key)?;
        self.apply_action(result)
    }

    fn handle_dialog_key(&mut self, action: Option<Action>) -> Result<()> {
        match &self.state.dialog {
            Dialog::ConfirmDelete { id, .. } => {
                let id = *id;
                match action {
                    Some(Action::Yes | Action::Confirm) => {
                        self.state.close_dialog();
                        self.delete_alarm(id);
                    }
                    Some(Action::No | Action::Cancel) => self.state.close_dialog(),
                    _ => {}
                }
            }
            // Alerts and help close on any key.
            _ => self.state.close_dialog(),
        }
        Ok(())
    }

    fn current_input_focused(&self) -> bool {
        match self.state.screen {
            ScreenId::Login => self.login.is_input_focused(),
            ScreenId::Register => self.register.is_input_focused(),
            ScreenId::AlarmEditor(_) => self.editor.is_input_focused(),
            ScreenId::Main(MainTab::Settings) => self.settings.is_input_focused(),
            _ => false,
        }
    }

    fn dispatch(&mut self, key: KeyEvent) -> Result<ScreenAction> {
        let ctx = ScreenContext::new(
            &self.config,
            &self.config_path,
            self.session.state(),
            &self.alarms,
        );
        let event = Event::Key(key);
        match self.state.screen {
            ScreenId::Loading => Ok(ScreenAction::None),
            ScreenId::Login => self.login.handle_event(event, &ctx),
            ScreenId::Register => self.register.handle_event(event, &ctx),
            ScreenId::AlarmEditor(_) => self.editor.handle_event(event, &ctx),
            ScreenId::Main(MainTab::Alarms) => self.alarm_list.handle_event(event, &ctx),
            ScreenId::Main(MainTab::AwakeningStats) => self.statistics.handle_event(event, &ctx),
            ScreenId::Main(MainTab::QuizSummary) => self.quiz_summary.handle_event(event, &ctx),
            ScreenId::Main(MainTab::Settings) => self.settings.handle_event(event, &ctx),
        }
    }

    fn apply_action(&mut self, action: ScreenAction) -> Result<()> {
        match action {
            ScreenAction::None => {}
            ScreenAction::Navigate(target) => self.navigate(target)?,
            ScreenAction::ShowAlert { title, message } => self.state.show_alert(title, message),
            ScreenAction::Notify(message) => self.toasts.info(message),
            ScreenAction::Quit => self.should_quit = true,
            ScreenAction::ShowHelp => self.state.toggle_help(),
            ScreenAction::SubmitLogin { username, password } => {
                self.submit_login(&username, &password)?
            }
            ScreenAction::SubmitRegister(request) => self.submit_register(request)?,
            ScreenAction::Logout => self.logout()?,
            ScreenAction::SaveAlarm { id, draft } => {
                match id {
                    Some(id) if self.alarms.edit(id, AlarmPatch::from(draft.clone())) => {
                        info!("Updated alarm {}", id);
                    }
                    Some(id) => {
                        warn!("Alarm {} vanished while editing, saving as new", id);
                        self.alarms.add(draft);
                    }
                    None => {
                        let id = self.alarms.add(draft);
                        info!("Added alarm {}", id);
                    }
                }
                self.toasts.success("Alarm saved");
                self.navigate(ScreenId::Main(MainTab::Alarms))?;
            }
            ScreenAction::ToggleActive(id) => {
                if !self.alarms.toggle_active(id) {
                    warn!("Toggle active: no alarm {}", id);
                }
            }
            ScreenAction::ToggleSmartWake(id) => {
                if !self.alarms.toggle_smart_wake_up(id) {
                    warn!("Toggle smart wake: no alarm {}", id);
                }
            }
            ScreenAction::ConfirmDelete(id) => match self.alarms.get(id) {
                Some(alarm) => {
                    let label = format!("{} {}", alarm.time, alarm.test_subject);
                    self.state.show_confirm_delete(id, label);
                }
                None => warn!("Delete requested for unknown alarm {}", id),
            },
            ScreenAction::UpdateSetting {
                setting,
                option_index,
            } => self.update_setting(setting, option_index),
        }
        Ok(())
    }

    /// Switch screens, keeping private screens behind the session gate.
    fn navigate(&mut self, target: ScreenId) -> Result<()> {
        let target = match (target.is_public(), self.session.is_authenticated()) {
            (false, false) => {
                warn!("Not logged in, redirecting {:?} to login", target);
                ScreenId::Login
            }
            (true, true) if target != ScreenId::Loading => ScreenId::Main(MainTab::Alarms),
            _ => target,
        };
        debug!("Navigate to {:?}", target);

        if let ScreenId::AlarmEditor(id) = target {
            self.editor = AlarmEditorScreen::open(id, &self.alarms);
        }
        self.state.screen = target;

        let ctx = ScreenContext::new(
            &self.config,
            &self.config_path,
            self.session.state(),
            &self.alarms,
        );
        match target {
            ScreenId::Login => self.login.on_enter(&ctx),
            ScreenId::Register => self.register.on_enter(&ctx),
            ScreenId::AlarmEditor(_) => self.editor.on_enter(&ctx),
            ScreenId::Main(MainTab::Alarms) => self.alarm_list.on_enter(&ctx),
            ScreenId::Main(MainTab::Settings) => self.settings.on_enter(&ctx),
            _ => Ok(()),
        }
    }

    fn submit_login(&mut self, username: &str, password: &str) -> Result<()> {
        info!("Logging in as {}", username);
        let result = self.runtime.block_on(self.session.login(
            &self.client,
            &self.user_store,
            username,
            password,
        ));
        match result {
            Ok(user) => {
                self.toasts.success(format!("Welcome back, {}", user.username));
                self.navigate(ScreenId::Main(MainTab::Alarms))
            }
            Err(e) => {
                warn!("Login failed: {}", e);
                self.state
                    .show_alert("Login failed", e.alert_message("Login failed"));
                Ok(())
            }
        }
    }

    fn submit_register(&mut self, request: RegisterRequest) -> Result<()> {
        info!("Registering {}", request.username);
        match self.runtime.block_on(self.client.register(&request)) {
            Ok(()) => {
                self.register.reset();
                self.navigate(ScreenId::Login)?;
                self.state.show_alert(
                    "Registration completed",
                    format!("You can now log in as {}.", request.username),
                );
            }
            Err(e) => {
                warn!("Registration failed: {}", e);
                let message = AuthError::from(e).alert_message("Registration failed");
                self.state.show_alert("Registration failed", message);
            }
        }
        Ok(())
    }

    fn logout(&mut self) -> Result<()> {
        match self.runtime.block_on(self.session.logout(&self.user_store)) {
            Ok(()) => {
                // alarms belong to the signed-in session
                self.alarms = initial_alarms(&self.config);
                self.alarm_list = AlarmListScreen::new();
                self.editor = AlarmEditorScreen::new();
                self.toasts.info("Logged out");
                self.navigate(ScreenId::Login)
            }
            Err(e) => {
                error!("Logout failed: {}", e);
                self.state.show_alert("Failed to logout", e.to_string());
                Ok(())
            }
        }
    }

    fn delete_alarm(&mut self, id: AlarmId) {
        match self.alarms.remove(id) {
            Some(alarm) => {
                info!("Removed alarm {} ({})", id, alarm.test_subject);
                self.toasts.info("Alarm deleted");
            }
            None => warn!("Alarm {} was already removed", id),
        }
    }

    fn update_setting(&mut self, setting: SettingItem, option_index: usize) {
        if !setting.apply(&mut self.config, option_index) {
            return;
        }
        // Only the settings-screen fields are written; a --api-url override
        // stays out of the file.
        let mut on_disk = match Config::load_or_create(&self.config_path) {
            Ok(config) => config,
            Err(e) => {
                warn!("Could not reload config before saving: {:#}", e);
                self.config.clone()
            }
        };
        on_disk.theme = self.config.theme;
        on_disk.keymap = self.config.keymap.clone();
        match on_disk.save(&self.config_path) {
            Ok(()) => self.toasts.success(format!("{} updated", setting.name())),
            Err(e) => {
                warn!("Failed to save config: {:#}", e);
                self.toasts.error("Could not save settings");
            }
        }
    }
}

fn render_loading(frame: &mut Frame, area: Rect) {
    let loading = Paragraph::new("Loading...")
        .style(theme().muted_style())
        .alignment(Alignment::Center);
    frame.render_widget(loading, center_fixed(area, 20, 1));
}

fn initial_alarms(config: &Config) -> AlarmStore {
    if config.seed_sample_alarms {
        AlarmStore::with_samples()
    } else {
        AlarmStore::new()
    }
}
