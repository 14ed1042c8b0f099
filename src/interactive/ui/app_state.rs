use crate::api::{Client, NewClient, Program};
use crate::interactive::constants::{MESSAGE_CLEAR_DELAY_MS, SEARCH_DEBOUNCE_MS};
use crate::interactive::domain::feedback;
use crate::interactive::domain::models::{
    MessageKind, MessageTarget, PendingDelete, StatusMessage, StatusMessages,
};
use crate::interactive::ui::commands::Command;
use crate::interactive::ui::events::Message;
use tracing::{debug, info, warn};

// Re-export Mode and Focus
pub use crate::interactive::domain::models::{Focus, Mode};

/// The controller state. Server responses are the only source of truth for
/// `programs` and `clients`; both are replaced wholesale, never patched.
pub struct AppState {
    pub mode: Mode,
    pub focus: Focus,
    pub programs: Vec<Program>,
    pub clients: Vec<Client>,
    pub program_form: ProgramFormState,
    pub client_form: ClientFormState,
    pub search: SearchState,
    pub ui: UiState,
}

#[derive(Debug, Default)]
pub struct ProgramFormState {
    pub name: String,
    pub busy: bool,
}

#[derive(Debug, Default)]
pub struct ClientFormState {
    pub name: String,
    pub email: String,
    pub busy: bool,
}

pub struct SearchState {
    pub query: String,
    /// Sequence number of the latest issued search.
    pub current_search_id: u64,
    pub issued_query: Option<String>,
    /// Query whose results the client table shows, `None` for the full list.
    pub shown_query: Option<String>,
    /// Searches sent and not yet answered, stale ones included.
    pub in_flight: usize,
    pub debounce_ms: u64,
}

pub struct UiState {
    /// In-flight load-all and search operations.
    pub pending_loads: usize,
    pub messages: StatusMessages,
    pub selected_program: usize,
    pub selected_client: usize,
    pub message_clear_delay_ms: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_timings(SEARCH_DEBOUNCE_MS, MESSAGE_CLEAR_DELAY_MS)
    }

    pub fn with_timings(search_debounce_ms: u64, message_clear_delay_ms: u64) -> Self {
        Self {
            mode: Mode::Browse,
            focus: Focus::ProgramName,
            programs: Vec::new(),
            clients: Vec::new(),
            program_form: ProgramFormState::default(),
            client_form: ClientFormState::default(),
            search: SearchState {
                query: String::new(),
                current_search_id: 0,
                issued_query: None,
                shown_query: None,
                in_flight: 0,
                debounce_ms: search_debounce_ms,
            },
            ui: UiState {
                pending_loads: 0,
                messages: StatusMessages::default(),
                selected_program: 0,
                selected_client: 0,
                message_clear_delay_ms,
            },
        }
    }

    pub fn is_loading(&self) -> bool {
        self.ui.pending_loads > 0
    }

    pub fn is_searching(&self) -> bool {
        self.search.in_flight > 0
    }

    pub fn selected_program(&self) -> Option<&Program> {
        self.programs.get(self.ui.selected_program)
    }

    pub fn selected_client(&self) -> Option<&Client> {
        self.clients.get(self.ui.selected_client)
    }

    pub fn update(&mut self, msg: Message) -> Command {
        match msg {
            Message::Initialize => {
                info!("loading programs and clients");
                self.begin_load()
            }
            Message::LoadAllCompleted(result) => {
                self.end_load();
                match result {
                    Ok((programs, clients)) => {
                        debug!(programs = programs.len(), clients = clients.len(), "loaded");
                        self.set_programs(programs);
                        self.set_clients(clients);
                        self.search.shown_query = None;
                        Command::None
                    }
                    Err(e) => {
                        warn!(error = %e, "load failed");
                        self.notify(MessageKind::Error, e.to_string(), MessageTarget::Global)
                    }
                }
            }

            Message::ProgramNameChanged(name) => {
                self.program_form.name = name;
                Command::None
            }
            Message::SubmitProgram => {
                if self.program_form.busy {
                    return Command::None;
                }
                self.program_form.busy = true;
                Command::CreateProgram(self.program_form.name.clone())
            }
            Message::ProgramCreated(result) => {
                self.program_form.busy = false;
                match result {
                    Ok(program) => {
                        info!(id = program.id, name = %program.name, "program created");
                        self.program_form.name.clear();
                        let reload = self.begin_load();
                        let notice = self.notify(
                            MessageKind::Success,
                            feedback::program_created(&program.name),
                            MessageTarget::ProgramForm,
                        );
                        Command::Batch(vec![reload, notice])
                    }
                    Err(e) => self.notify(
                        MessageKind::Error,
                        feedback::program_error(&e),
                        MessageTarget::ProgramForm,
                    ),
                }
            }

            Message::ClientNameChanged(name) => {
                self.client_form.name = name;
                Command::None
            }
            Message::ClientEmailChanged(email) => {
                self.client_form.email = email;
                Command::None
            }
            Message::SubmitClient(program_ids) => {
                if self.client_form.busy {
                    return Command::None;
                }
                self.client_form.busy = true;
                Command::CreateClient(NewClient {
                    name: self.client_form.name.clone(),
                    email: self.client_form.email.clone(),
                    programs: program_ids,
                })
            }
            Message::ClientCreated(result) => {
                self.client_form.busy = false;
                match result {
                    Ok(client) => {
                        info!(id = client.id, "client registered");
                        self.client_form.name.clear();
                        self.client_form.email.clear();
                        let reload = self.begin_load();
                        let notice = self.notify(
                            MessageKind::Success,
                            feedback::CLIENT_REGISTERED.to_string(),
                            MessageTarget::ClientForm,
                        );
                        Command::Batch(vec![reload, Command::ClearProgramSelection, notice])
                    }
                    Err(e) => self.notify(
                        MessageKind::Error,
                        feedback::client_error(&e),
                        MessageTarget::ClientForm,
                    ),
                }
            }

            Message::RequestDeleteProgram(program) => {
                if self.mode == Mode::Browse {
                    self.mode = Mode::Confirm(PendingDelete::Program {
                        id: program.id,
                        name: program.name,
                    });
                }
                Command::None
            }
            Message::RequestDeleteClient(client) => {
                if self.mode == Mode::Browse {
                    self.mode = Mode::Confirm(PendingDelete::Client {
                        id: client.id,
                        name: client.name,
                    });
                }
                Command::None
            }
            Message::ConfirmAccepted => match std::mem::replace(&mut self.mode, Mode::Browse) {
                Mode::Confirm(PendingDelete::Program { id, .. }) => Command::DeleteProgram(id),
                Mode::Confirm(PendingDelete::Client { id, .. }) => Command::DeleteClient(id),
                other => {
                    self.mode = other;
                    Command::None
                }
            },
            Message::ConfirmDeclined => {
                if matches!(self.mode, Mode::Confirm(_)) {
                    self.mode = Mode::Browse;
                }
                Command::None
            }
            Message::ProgramDeleted(result) => match result {
                Ok(()) => {
                    let reload = self.begin_load();
                    let notice = self.notify(
                        MessageKind::Success,
                        feedback::PROGRAM_DELETED.to_string(),
                        MessageTarget::Global,
                    );
                    Command::Batch(vec![reload, notice])
                }
                // The cause is logged by the service, the user gets a flat message.
                Err(_) => self.notify(
                    MessageKind::Error,
                    feedback::PROGRAM_DELETE_FAILED.to_string(),
                    MessageTarget::Global,
                ),
            },
            Message::ClientDeleted(result) => match result {
                Ok(()) => {
                    let reload = self.begin_load();
                    let notice = self.notify(
                        MessageKind::Success,
                        feedback::CLIENT_DELETED.to_string(),
                        MessageTarget::Global,
                    );
                    Command::Batch(vec![reload, notice])
                }
                Err(_) => self.notify(
                    MessageKind::Error,
                    feedback::CLIENT_DELETE_FAILED.to_string(),
                    MessageTarget::Global,
                ),
            },

            Message::QueryChanged(q) => {
                self.search.query = q;
                Command::ScheduleSearch(self.search.debounce_ms)
            }
            Message::SearchRequested => {
                self.search.current_search_id += 1;
                self.search.issued_query = Some(self.search.query.clone());
                self.search.in_flight += 1;
                self.ui.pending_loads += 1;
                Command::ExecuteSearch {
                    id: self.search.current_search_id,
                    query: self.search.query.clone(),
                }
            }
            Message::SearchCompleted { id, result } => {
                self.end_load();
                self.search.in_flight = self.search.in_flight.saturating_sub(1);
                if id != self.search.current_search_id {
                    debug!(
                        id,
                        latest = self.search.current_search_id,
                        "discarding stale search response"
                    );
                    return Command::None;
                }
                match result {
                    Ok(clients) => {
                        self.set_clients(clients);
                        self.search.shown_query = self.search.issued_query.clone();
                        Command::None
                    }
                    Err(e) => self.notify(MessageKind::Error, e.to_string(), MessageTarget::Global),
                }
            }

            Message::FocusNext => {
                self.focus = self.focus.next();
                Command::None
            }
            Message::FocusPrev => {
                self.focus = self.focus.prev();
                Command::None
            }
            Message::SetFocus(focus) => {
                self.focus = focus;
                Command::None
            }
            Message::SelectProgram(index) => {
                if index < self.programs.len() {
                    self.ui.selected_program = index;
                }
                Command::None
            }
            Message::SelectClient(index) => {
                if index < self.clients.len() {
                    self.ui.selected_client = index;
                }
                Command::None
            }

            Message::Notify(kind, text, target) => self.notify(kind, text, target),
            Message::DismissMessage(target) => {
                self.ui.messages.clear(target);
                Command::None
            }
            Message::DismissAllMessages => {
                self.ui.messages.clear_all();
                Command::None
            }

            Message::ShowHelp => {
                if self.mode == Mode::Browse {
                    self.mode = Mode::Help;
                }
                Command::None
            }
            Message::CloseHelp => {
                if self.mode == Mode::Help {
                    self.mode = Mode::Browse;
                }
                Command::None
            }
            Message::Quit => Command::Quit,
        }
    }

    /// Shows `text` in the `target` slot, replacing what was there.
    pub fn notify(&mut self, kind: MessageKind, text: String, target: MessageTarget) -> Command {
        self.ui.messages.set(StatusMessage { kind, text, target });
        if self.ui.message_clear_delay_ms == 0 {
            Command::None
        } else {
            Command::ScheduleClearMessage(target, self.ui.message_clear_delay_ms)
        }
    }

    fn begin_load(&mut self) -> Command {
        self.ui.pending_loads += 1;
        Command::LoadAll
    }

    fn end_load(&mut self) {
        self.ui.pending_loads = self.ui.pending_loads.saturating_sub(1);
    }

    fn set_programs(&mut self, programs: Vec<Program>) {
        self.programs = programs;
        self.ui.selected_program = clamp_index(self.ui.selected_program, self.programs.len());
    }

    fn set_clients(&mut self, clients: Vec<Client>) {
        self.clients = clients;
        self.ui.selected_client = clamp_index(self.ui.selected_client, self.clients.len());
    }
}

fn clamp_index(index: usize, len: usize) -> usize {
    index.min(len.saturating_sub(1))
}
