use crate::api::NewClient;
use crate::interactive::domain::models::MessageTarget;

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    None,
    LoadAll,
    CreateProgram(String),
    CreateClient(NewClient),
    DeleteProgram(i64),
    DeleteClient(i64),
    ScheduleSearch(u64), // delay in milliseconds
    ExecuteSearch { id: u64, query: String },
    ClearProgramSelection,
    ScheduleClearMessage(MessageTarget, u64), // delay in milliseconds
    Quit,
    Batch(Vec<Command>),
}

impl Command {
    /// Flattens nested batches and drops `None`.
    pub fn flatten(self) -> Vec<Command> {
        match self {
            Command::None => Vec::new(),
            Command::Batch(commands) => commands.into_iter().flat_map(Command::flatten).collect(),
            other => vec![other],
        }
    }
}
