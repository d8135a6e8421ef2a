use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crossterm::{
    event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{enable_raw_mode, EnterAlternateScreen},
};
use futures::StreamExt;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame, Terminal,
};
use tokio::sync::mpsc;

use crate::config::{save_playback_speed, Config, KeyCombo, KeyContext};
use crate::search::{Nav, SessionError, ViewModel};
use crate::session::autoplay::{clamp_speed, step_delay, SPEED_STEP};
use crate::session::SearchSession;
use crate::ui::action::Action;
use crate::ui::components::{
    theme::{status_color, ACCENT_ERROR, HEADER_BG, TEXT_BRIGHT, TEXT_SECONDARY},
    ArrayChart, Footer, HelpDialog, HelpDialogState, KeyHint, ProgressBar, PromptDialog,
    PromptKind, PromptState, StatsPanel, StepLog,
};
use crate::ui::events::{AppEvent, InputMode};
use crate::ui::terminal_guard::TerminalGuard;

/// Redraw and auto-play polling interval
const TICK_INTERVAL: Duration = Duration::from_millis(50);

/// One line of feedback shown in the header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

impl StatusMessage {
    fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

/// Main application state
pub struct App {
    config: Config,
    /// Where speed changes are persisted; `None` disables saving
    config_path: Option<PathBuf>,
    session: SearchSession,
    input_mode: InputMode,
    prompt: Option<PromptState>,
    help: HelpDialogState,
    target: i64,
    array_size: usize,
    guarantee_target: bool,
    speed: f64,
    status: Option<StatusMessage>,
    should_quit: bool,
    event_tx: mpsc::UnboundedSender<AppEvent>,
    event_rx: mpsc::UnboundedReceiver<AppEvent>,
}

impl App {
    pub fn new(config: Config) -> Self {
        let session = SearchSession::new(config.limits());
        Self::with_session(config, session)
    }

    /// Build around an existing session (e.g. one with a seeded generator).
    pub fn with_session(config: Config, mut session: SearchSession) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        session.set_step_delay(config.step_delay());

        Self {
            target: config.default_target,
            array_size: config.array.size,
            guarantee_target: config.array.guarantee_target,
            speed: config.playback.speed,
            config,
            config_path: None,
            session,
            input_mode: InputMode::Normal,
            prompt: None,
            help: HelpDialogState::new(),
            status: None,
            should_quit: false,
            event_tx,
            event_rx,
        }
    }

    /// Persist speed changes to `path`.
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    pub fn session(&self) -> &SearchSession {
        &self.session
    }

    pub fn input_mode(&self) -> InputMode {
        self.input_mode
    }

    pub fn prompt(&self) -> Option<&PromptState> {
        self.prompt.as_ref()
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    pub fn target(&self) -> i64 {
        self.target
    }

    pub fn array_size(&self) -> usize {
        self.array_size
    }

    pub fn guarantee_target(&self) -> bool {
        self.guarantee_target
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Run the application main loop
    pub async fn run(&mut self) -> anyhow::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let mut guard = TerminalGuard::new();

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        let input_task = tokio::spawn(forward_input(self.event_tx.clone()));
        let result = self.event_loop(&mut terminal).await;
        input_task.abort();

        guard.cleanup()?;
        terminal.show_cursor()?;
        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        let mut ticker = tokio::time::interval(TICK_INTERVAL);

        loop {
            terminal.draw(|f| self.draw(f))?;

            tokio::select! {
                _ = ticker.tick() => {
                    self.handle_app_event(AppEvent::Tick);
                }
                Some(event) = self.event_rx.recv() => {
                    self.handle_app_event(event);
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    pub fn handle_app_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Input(Event::Key(key)) => self.handle_key_event(key),
            AppEvent::Input(_) => {}
            AppEvent::Tick => self.on_tick(Instant::now()),
            AppEvent::InputClosed(reason) => {
                tracing::warn!(%reason, "Terminal input closed");
                self.should_quit = true;
            }
        }
    }

    /// Advance auto-play when a step is due.
    pub fn on_tick(&mut self, now: Instant) {
        if self.session.tick(now).is_some() && !self.session.is_playing() {
            self.set_status(StatusMessage::info("Auto-play finished"));
        }
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }

        let combo = KeyCombo::from_key_event(&key);
        let context = KeyContext::from_input_mode(self.input_mode);
        if let Some(action) = self.config.keybindings.get_action(&combo, context) {
            self.dispatch(action);
            return;
        }

        if let (Some(prompt), KeyCode::Char(c)) = (&mut self.prompt, key.code) {
            if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
                prompt.insert_char(c);
            }
        }
    }

    pub fn dispatch(&mut self, action: Action) {
        tracing::debug!(?action, mode = ?self.input_mode, "Dispatching action");
        match action {
            Action::Quit => self.should_quit = true,
            Action::ToggleHelp => self.toggle_help(),
            Action::GenerateArray => self.generate_array(),
            Action::StartSearch => self.start_search(),
            Action::ToggleGuarantee => {
                self.guarantee_target = !self.guarantee_target;
                let state = if self.guarantee_target { "on" } else { "off" };
                self.set_status(StatusMessage::info(format!("Guarantee target: {state}")));
            }
            Action::EditTarget => self.open_prompt(PromptKind::Target),
            Action::EditSize => self.open_prompt(PromptKind::Size),
            Action::NextStep => {
                let nav = self.session.next();
                self.report_nav(nav);
            }
            Action::PrevStep => {
                let nav = self.session.previous();
                self.report_nav(nav);
            }
            Action::ResetSearch => {
                let nav = self.session.reset();
                self.report_nav(nav);
            }
            Action::RunToEnd => {
                let nav = self.session.run_to_end();
                self.report_nav(nav);
            }
            Action::ToggleAutoPlay => match self.session.toggle_autoplay(Instant::now()) {
                Ok(true) => self.set_status(StatusMessage::info("Auto-play started")),
                Ok(false) => self.set_status(StatusMessage::info("Auto-play paused")),
                Err(e) => self.set_error(&e),
            },
            Action::SpeedUp => self.change_speed(SPEED_STEP),
            Action::SpeedDown => self.change_speed(-SPEED_STEP),
            Action::Confirm => self.confirm_prompt(),
            Action::Cancel => self.close_prompt(),
            Action::Backspace => {
                if let Some(prompt) = &mut self.prompt {
                    prompt.backspace();
                }
            }
        }
    }

    fn set_status(&mut self, status: StatusMessage) {
        self.status = Some(status);
    }

    fn set_error(&mut self, error: &SessionError) {
        self.set_status(StatusMessage::error(error.to_string()));
    }

    fn report_nav(&mut self, nav: Nav) {
        match nav {
            Nav::Unbound => self.set_error(&SessionError::EmptyTrace),
            Nav::Moved | Nav::AtStart | Nav::AtEnd => self.status = None,
        }
    }

    fn toggle_help(&mut self) {
        if self.input_mode == InputMode::ShowingHelp {
            self.input_mode = InputMode::Normal;
        } else {
            self.help.populate(&self.config.keybindings);
            self.input_mode = InputMode::ShowingHelp;
        }
    }

    fn generate_array(&mut self) {
        match self
            .session
            .generate_array(self.array_size, self.guarantee_target, self.target)
        {
            Ok(array) => {
                let message = format!("Generated sorted array of size {}", array.len());
                self.set_status(StatusMessage::info(message));
            }
            Err(e) => self.set_error(&e),
        }
    }

    fn start_search(&mut self) {
        match self.session.start_search(self.target) {
            Ok(trace) => {
                let message = format!(
                    "Searching for {} ({} steps)",
                    trace.target(),
                    trace.len()
                );
                self.set_status(StatusMessage::info(message));
            }
            Err(e) => self.set_error(&e),
        }
    }

    fn change_speed(&mut self, delta: f64) {
        let speed = clamp_speed(self.speed + delta);
        if speed == self.speed {
            return;
        }
        self.speed = speed;
        self.session
            .set_step_delay(step_delay(self.config.playback.base_delay, speed));
        self.set_status(StatusMessage::info(format!("Speed: {speed:.1}x")));

        if let Some(path) = &self.config_path {
            if let Err(e) = save_playback_speed(path, speed) {
                tracing::warn!(error = %e, path = %path.display(), "Failed to save playback speed");
            }
        }
    }

    fn open_prompt(&mut self, kind: PromptKind) {
        let limits = self.session.limits();
        let (initial, hint) = match kind {
            PromptKind::Target => (
                self.target.to_string(),
                format!("Value from {} to {}", limits.min_value, limits.max_value),
            ),
            PromptKind::Size => (
                self.array_size.to_string(),
                format!("Size from {} to {}", limits.min_size, limits.max_size),
            ),
        };
        self.prompt = Some(PromptState::new(kind, &initial, hint));
        self.input_mode = match kind {
            PromptKind::Target => InputMode::EditingTarget,
            PromptKind::Size => InputMode::EditingSize,
        };
    }

    fn close_prompt(&mut self) {
        self.prompt = None;
        self.input_mode = InputMode::Normal;
    }

    fn confirm_prompt(&mut self) {
        let Some(prompt) = &mut self.prompt else {
            return;
        };
        let limits = *self.session.limits();

        match prompt.kind() {
            PromptKind::Target => {
                match prompt
                    .parse::<i64>()
                    .and_then(|v| limits.check_target(v).map_err(|e| e.to_string()))
                {
                    Ok(target) => {
                        self.target = target;
                        self.close_prompt();
                        self.set_status(StatusMessage::info(format!("Target set to {target}")));
                    }
                    Err(e) => prompt.set_error(e),
                }
            }
            PromptKind::Size => {
                match prompt
                    .parse::<usize>()
                    .and_then(|v| limits.check_size(v).map_err(|e| e.to_string()))
                {
                    Ok(size) => {
                        self.array_size = size;
                        self.close_prompt();
                        self.generate_array();
                    }
                    Err(e) => prompt.set_error(e),
                }
            }
        }
    }

    /// Draw the full screen
    pub fn draw(&mut self, f: &mut Frame) {
        let view = self.session.view();
        let area = f.area();

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(8),
                Constraint::Length(8),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(area);

        self.draw_header(f, rows[0], &view);

        let middle = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(20), Constraint::Length(32)])
            .split(rows[1]);

        f.render_widget(ArrayChart::new(&view), middle[0]);
        f.render_widget(
            StatsPanel::new(&view)
                .target(self.session.target())
                .playback(self.speed, self.session.is_playing()),
            middle[1],
        );
        f.render_widget(StepLog::new(&view), rows[2]);
        f.render_widget(ProgressBar::new(view.progress), rows[3]);
        Footer::new(&self.config.keybindings, self.input_mode).render(rows[4], f.buffer_mut());

        match self.input_mode {
            InputMode::ShowingHelp => f.render_widget(HelpDialog::new(&self.help), area),
            InputMode::EditingTarget | InputMode::EditingSize => {
                if let Some(prompt) = &self.prompt {
                    let hints = KeyHint::resolve(
                        &self.config.keybindings,
                        KeyContext::Prompt,
                        &[Action::Confirm, Action::Cancel],
                    );
                    f.render_widget(PromptDialog::new(prompt).hints(hints), area);
                }
            }
            InputMode::Normal => {}
        }
    }

    fn draw_header(&self, f: &mut Frame, area: Rect, view: &ViewModel) {
        let mut spans = vec![Span::styled(
            format!(" {} ", view.title()),
            Style::default()
                .fg(status_color(view.status))
                .add_modifier(Modifier::BOLD),
        )];

        spans.push(Span::styled(
            format!(
                "target {} │ size {} │ guarantee {} ",
                self.target,
                self.array_size,
                if self.guarantee_target { "on" } else { "off" }
            ),
            Style::default().fg(TEXT_SECONDARY),
        ));

        if let Some(status) = &self.status {
            let color = if status.is_error {
                ACCENT_ERROR
            } else {
                TEXT_BRIGHT
            };
            spans.push(Span::styled(
                format!("│ {}", status.text),
                Style::default().fg(color),
            ));
        }

        f.render_widget(
            Paragraph::new(Line::from(spans)).style(Style::default().bg(HEADER_BG)),
            area,
        );
    }
}

/// Forward terminal input to the app channel until the stream ends.
async fn forward_input(tx: mpsc::UnboundedSender<AppEvent>) {
    let mut events = EventStream::new();
    while let Some(event) = events.next().await {
        let event = match event {
            Ok(event) => AppEvent::Input(event),
            Err(e) => AppEvent::InputClosed(e.to_string()),
        };
        let closed = matches!(event, AppEvent::InputClosed(_));
        if tx.send(event).is_err() || closed {
            return;
        }
    }
    let _ = tx.send(AppEvent::InputClosed("input stream ended".to_string()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::SortedArray;
    use crate::session::ArrayGenerator;

    fn app() -> App {
        let config = Config::default();
        let session = SearchSession::with_generator(config.limits(), ArrayGenerator::seeded(7));
        App::with_session(config, session)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_start_without_array_reports_error() {
        let mut app = app();
        press(&mut app, KeyCode::Char('s'));
        let status = app.status().unwrap();
        assert!(status.is_error);
        assert_eq!(status.text, "Please generate an array first");
    }

    #[test]
    fn test_next_without_search_reports_empty_trace() {
        let mut app = app();
        press(&mut app, KeyCode::Char('g'));
        press(&mut app, KeyCode::Char('l'));
        assert_eq!(app.status().unwrap().text, "No search initialized");
    }

    #[test]
    fn test_generate_then_search_finds_guaranteed_target() {
        let mut app = app();
        press(&mut app, KeyCode::Char('g'));
        assert_eq!(
            app.status().unwrap().text,
            "Generated sorted array of size 20"
        );
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('e'));
        let trace = app.session().navigator().trace().unwrap();
        assert!(trace.is_found());
    }

    #[test]
    fn test_target_prompt_validates_range() {
        let mut app = app();
        press(&mut app, KeyCode::Char('t'));
        assert_eq!(app.input_mode(), InputMode::EditingTarget);

        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Backspace);
        for c in "150".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.input_mode(), InputMode::EditingTarget);
        assert!(app.prompt().unwrap().error().is_some());

        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.input_mode(), InputMode::Normal);
        assert_eq!(app.target(), 1);
    }

    #[test]
    fn test_size_prompt_regenerates_array() {
        let mut app = app();
        press(&mut app, KeyCode::Char('n'));
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.array_size(), 12);
        assert_eq!(app.session().array().map(SortedArray::len), Some(12));
    }

    #[test]
    fn test_escape_cancels_prompt() {
        let mut app = app();
        press(&mut app, KeyCode::Char('t'));
        press(&mut app, KeyCode::Char('9'));
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.input_mode(), InputMode::Normal);
        assert_eq!(app.target(), 50);
    }

    #[test]
    fn test_speed_is_clamped() {
        let mut app = app();
        for _ in 0..5 {
            press(&mut app, KeyCode::Char('+'));
        }
        assert_eq!(app.speed(), 2.0);
        for _ in 0..5 {
            press(&mut app, KeyCode::Char('-'));
        }
        assert_eq!(app.speed(), 0.5);
    }

    #[test]
    fn test_autoplay_ticks_to_end() {
        let mut app = app();
        press(&mut app, KeyCode::Char('g'));
        press(&mut app, KeyCode::Enter);
        app.session.set_step_delay(Duration::ZERO);
        press(&mut app, KeyCode::Char(' '));
        assert!(app.session().is_playing());

        let now = Instant::now();
        for _ in 0..20 {
            app.on_tick(now);
        }
        assert!(!app.session().is_playing());
        assert!(app.session().navigator().is_at_end());
        assert_eq!(app.status().unwrap().text, "Auto-play finished");
    }

    #[test]
    fn test_help_toggle_and_quit() {
        let mut app = app();
        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.input_mode(), InputMode::ShowingHelp);
        press(&mut app, KeyCode::Char('q'));
        assert_eq!(app.input_mode(), InputMode::Normal);
        assert!(!app.should_quit());
        app.handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit());
    }
}
