use crate::api::{ApiError, Client, Program};
use crate::interactive::domain::models::{Focus, MessageKind, MessageTarget};

#[derive(Clone, Debug)]
pub enum Message {
    // Lifecycle
    Initialize,
    LoadAllCompleted(Result<(Vec<Program>, Vec<Client>), ApiError>),

    // Program form
    ProgramNameChanged(String),
    SubmitProgram,
    ProgramCreated(Result<Program, ApiError>),

    // Client form
    ClientNameChanged(String),
    ClientEmailChanged(String),
    SubmitClient(Vec<i64>), // program ids checked at submit time
    ClientCreated(Result<Client, ApiError>),

    // Destructive actions
    RequestDeleteProgram(Program),
    RequestDeleteClient(Client),
    ConfirmAccepted,
    ConfirmDeclined,
    ProgramDeleted(Result<(), ApiError>),
    ClientDeleted(Result<(), ApiError>),

    // Search events
    QueryChanged(String),
    SearchRequested,
    SearchCompleted {
        id: u64,
        result: Result<Vec<Client>, ApiError>,
    },

    // Navigation
    FocusNext,
    FocusPrev,
    SetFocus(Focus),
    SelectProgram(usize),
    SelectClient(usize),

    // Status messages
    Notify(MessageKind, String, MessageTarget),
    DismissMessage(MessageTarget),
    DismissAllMessages,

    // Mode changes
    ShowHelp,
    CloseHelp,
    Quit,
}
