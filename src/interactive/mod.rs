use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, poll},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::collections::HashMap;
use std::io::{self, Stdout};
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, info};

use crate::api::{ApiClient, HttpTransport, Transport};

pub mod application;
pub mod constants;
pub mod domain;
pub mod ui;


use self::application::{debounce::Debouncer, registry_service::RegistryService};
use self::constants::{
    DOUBLE_CTRL_C_TIMEOUT_SECS, EVENT_POLL_INTERVAL_MS, MESSAGE_CLEAR_DELAY_MS, SEARCH_DEBOUNCE_MS,
};
use self::domain::feedback::EXIT_PROMPT;
use self::domain::models::{ApiJob, Focus, JobOutcome, MessageKind, MessageTarget, Mode};
use self::ui::{
    app_state::AppState, commands::Command, components::Component, events::Message,
    renderer::Renderer,
};

/// The interactive registry client. Owns the controller state, the view and
/// the channel that API worker threads report back on.
pub struct InteractiveRegistry<T: Transport + 'static = HttpTransport> {
    state: AppState,
    renderer: Renderer,
    service: Arc<RegistryService<T>>,
    response_tx: Sender<JobOutcome>,
    response_rx: Receiver<JobOutcome>,
    search_timer: Debouncer,
    message_timers: HashMap<MessageTarget, Debouncer>,
    last_ctrl_c_press: Option<Instant>,
    should_quit: bool,
}

impl<T: Transport + 'static> InteractiveRegistry<T> {
    pub fn new(client: ApiClient<T>) -> Self {
        Self::with_timings(client, SEARCH_DEBOUNCE_MS, MESSAGE_CLEAR_DELAY_MS)
    }

    pub fn with_timings(
        client: ApiClient<T>,
        search_debounce_ms: u64,
        message_clear_delay_ms: u64,
    ) -> Self {
        let (response_tx, response_rx) = mpsc::channel();
        Self {
            state: AppState::with_timings(search_debounce_ms, message_clear_delay_ms),
            renderer: Renderer::new(),
            service: Arc::new(RegistryService::new(client)),
            response_tx,
            response_rx,
            search_timer: Debouncer::new(),
            message_timers: HashMap::new(),
            last_ctrl_c_press: None,
            should_quit: false,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        let mut terminal = self.setup_terminal()?;

        info!(api_base = %self.service.client().config().base_url, "starting interactive mode");
        self.handle_message(Message::Initialize);

        let result = self.run_app(&mut terminal);

        self.cleanup_terminal(&mut terminal)?;
        result
    }

    fn setup_terminal(&self) -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    fn cleanup_terminal(&self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    fn run_app(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|f| {
                self.renderer.render(f, &self.state);
            })?;

            self.drain_responses();
            self.fire_due_timers(Instant::now());

            if poll(Duration::from_millis(EVENT_POLL_INTERVAL_MS))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_input(key);
                    }
                }
            }
        }
        info!("leaving interactive mode");
        Ok(())
    }

    /// Applies every worker response that has arrived.
    fn drain_responses(&mut self) {
        while let Ok(outcome) = self.response_rx.try_recv() {
            self.handle_message(outcome_message(outcome));
        }
    }

    fn fire_due_timers(&mut self, now: Instant) {
        if self.search_timer.fire_if_due(now) {
            self.handle_message(Message::SearchRequested);
        }
        for target in MessageTarget::ALL {
            let due = self
                .message_timers
                .get_mut(&target)
                .is_some_and(|timer| timer.fire_if_due(now));
            if due {
                self.handle_message(Message::DismissMessage(target));
            }
        }
    }

    fn handle_input(&mut self, key: KeyEvent) {
        // Components read their lists and inputs from the last synced state.
        self.renderer.sync_state(&self.state);

        // Global Ctrl+C handling for exit
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            if let Some(last_press) = self.last_ctrl_c_press {
                if last_press.elapsed() < Duration::from_secs(DOUBLE_CTRL_C_TIMEOUT_SECS) {
                    self.handle_message(Message::Quit);
                    return;
                }
            }
            self.last_ctrl_c_press = Some(Instant::now());
            let command = self.state.notify(
                MessageKind::Info,
                EXIT_PROMPT.to_string(),
                MessageTarget::Global,
            );
            self.execute_command(command);
            return;
        }

        let message = match self.state.mode {
            Mode::Help => self.renderer.get_help_dialog_mut().handle_key(key),
            Mode::Confirm(_) => self.renderer.get_confirm_dialog_mut().handle_key(key),
            Mode::Browse => self.handle_browse_input(key),
        };

        if let Some(msg) = message {
            self.handle_message(msg);
        }
    }

    fn handle_browse_input(&mut self, key: KeyEvent) -> Option<Message> {
        let focus = self.state.focus;

        // Global keys
        match key.code {
            KeyCode::Tab => return Some(Message::FocusNext),
            KeyCode::BackTab => return Some(Message::FocusPrev),
            KeyCode::F(1) => return Some(Message::ShowHelp),
            KeyCode::Char('?') if !focus.is_text_input() => return Some(Message::ShowHelp),
            KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Some(Message::DismissAllMessages);
            }
            _ => {}
        }

        match focus {
            Focus::ProgramName => self.renderer.get_program_form_mut().handle_key(key),
            Focus::ClientName | Focus::ClientEmail => match key.code {
                KeyCode::Enter => Some(Message::SubmitClient(
                    self.renderer.get_program_list().checked_ids(),
                )),
                _ => self.renderer.get_client_form_mut().handle_key(key),
            },
            Focus::Programs | Focus::Search | Focus::Clients if key.code == KeyCode::Esc => {
                self.renderer.get_global_banner_mut().handle_key(key)
            }
            Focus::Programs => self.renderer.get_program_list_mut().handle_key(key),
            Focus::Search => self.renderer.get_search_bar_mut().handle_key(key),
            Focus::Clients => self.renderer.get_client_table_mut().handle_key(key),
        }
    }

    fn handle_message(&mut self, message: Message) {
        // A dismissed slot has nothing left to auto-clear.
        match &message {
            Message::DismissMessage(target) => {
                if let Some(timer) = self.message_timers.get_mut(target) {
                    timer.cancel();
                }
            }
            Message::DismissAllMessages => {
                self.message_timers.values_mut().for_each(Debouncer::cancel);
            }
            _ => {}
        }
        let command = self.state.update(message);
        self.execute_command(command);
    }

    fn execute_command(&mut self, command: Command) {
        for command in command.flatten() {
            match command {
                Command::None => {}
                Command::LoadAll => self.spawn_job(ApiJob::LoadAll),
                Command::CreateProgram(name) => self.spawn_job(ApiJob::CreateProgram { name }),
                Command::CreateClient(client) => self.spawn_job(ApiJob::CreateClient(client)),
                Command::DeleteProgram(id) => self.spawn_job(ApiJob::DeleteProgram { id }),
                Command::DeleteClient(id) => self.spawn_job(ApiJob::DeleteClient { id }),
                Command::ScheduleSearch(delay) => {
                    self.search_timer
                        .schedule(Instant::now(), Duration::from_millis(delay));
                }
                Command::ExecuteSearch { id, query } => {
                    self.spawn_job(ApiJob::Search { id, query });
                }
                Command::ClearProgramSelection => {
                    self.renderer.get_program_list_mut().clear_checked();
                }
                Command::ScheduleClearMessage(target, delay) => {
                    self.message_timers
                        .entry(target)
                        .or_default()
                        .schedule(Instant::now(), Duration::from_millis(delay));
                }
                Command::Quit => self.should_quit = true,
                Command::Batch(nested) => self.execute_command(Command::Batch(nested)),
            }
        }
    }

    /// Runs `job` on its own thread; the outcome comes back over the channel.
    fn spawn_job(&self, job: ApiJob) {
        debug!(?job, "spawning api job");
        let service = Arc::clone(&self.service);
        let tx = self.response_tx.clone();
        thread::spawn(move || {
            let outcome = service.execute(job);
            let _ = tx.send(outcome);
        });
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> &AppState {
        &self.state
    }

    #[cfg(test)]
    pub(crate) fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    #[cfg(test)]
    pub(crate) fn transport(&self) -> &T {
        self.service.client().transport()
    }

    #[cfg(test)]
    pub(crate) fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Blocks until `count` worker responses have been applied.
    #[cfg(test)]
    pub(crate) fn wait_for_responses(&mut self, count: usize) {
        for _ in 0..count {
            let outcome = self
                .response_rx
                .recv_timeout(Duration::from_secs(5))
                .expect("worker response");
            self.handle_message(outcome_message(outcome));
        }
    }
}

fn outcome_message(outcome: JobOutcome) -> Message {
    match outcome {
        JobOutcome::Loaded(result) => Message::LoadAllCompleted(result),
        JobOutcome::ProgramCreated(result) => Message::ProgramCreated(result),
        JobOutcome::ProgramDeleted(result) => Message::ProgramDeleted(result),
        JobOutcome::ClientCreated(result) => Message::ClientCreated(result),
        JobOutcome::ClientDeleted(result) => Message::ClientDeleted(result),
        JobOutcome::Searched { id, result } => Message::SearchCompleted { id, result },
    }
}
