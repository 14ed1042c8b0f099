use crate::api::{ApiError, Client, NewClient, Program};

#[derive(Clone, Debug, PartialEq)]
pub enum Mode {
    Browse,
    Confirm(PendingDelete),
    Help,
}

/// The panel or input that receives key events.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Focus {
    ProgramName,
    ClientName,
    ClientEmail,
    Programs,
    Search,
    Clients,
}

impl Focus {
    const ORDER: [Focus; 6] = [
        Focus::ProgramName,
        Focus::ClientName,
        Focus::ClientEmail,
        Focus::Programs,
        Focus::Search,
        Focus::Clients,
    ];

    pub fn next(self) -> Self {
        let index = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(index + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        let index = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(index + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    pub fn is_text_input(self) -> bool {
        matches!(
            self,
            Focus::ProgramName | Focus::ClientName | Focus::ClientEmail | Focus::Search
        )
    }
}

/// A destructive action waiting for confirmation.
#[derive(Clone, Debug, PartialEq)]
pub enum PendingDelete {
    Program { id: i64, name: String },
    Client { id: i64, name: String },
}

impl PendingDelete {
    pub fn prompt(&self) -> String {
        match self {
            PendingDelete::Program { name, .. } => {
                format!("Are you sure you want to delete the program \"{name}\"?")
            }
            PendingDelete::Client { name, .. } => {
                format!("Are you sure you want to delete the client \"{name}\"?")
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
    Info,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MessageTarget {
    Global,
    ProgramForm,
    ClientForm,
}

impl MessageTarget {
    pub const ALL: [MessageTarget; 3] = [
        MessageTarget::Global,
        MessageTarget::ProgramForm,
        MessageTarget::ClientForm,
    ];
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: MessageKind,
    pub text: String,
    pub target: MessageTarget,
}

/// One slot per target; a new message overwrites the previous one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatusMessages {
    global: Option<StatusMessage>,
    program_form: Option<StatusMessage>,
    client_form: Option<StatusMessage>,
}

impl StatusMessages {
    fn slot_mut(&mut self, target: MessageTarget) -> &mut Option<StatusMessage> {
        match target {
            MessageTarget::Global => &mut self.global,
            MessageTarget::ProgramForm => &mut self.program_form,
            MessageTarget::ClientForm => &mut self.client_form,
        }
    }

    pub fn get(&self, target: MessageTarget) -> Option<&StatusMessage> {
        match target {
            MessageTarget::Global => self.global.as_ref(),
            MessageTarget::ProgramForm => self.program_form.as_ref(),
            MessageTarget::ClientForm => self.client_form.as_ref(),
        }
    }

    pub fn set(&mut self, message: StatusMessage) {
        let target = message.target;
        *self.slot_mut(target) = Some(message);
    }

    pub fn clear(&mut self, target: MessageTarget) {
        *self.slot_mut(target) = None;
    }

    pub fn clear_all(&mut self) {
        for target in MessageTarget::ALL {
            self.clear(target);
        }
    }
}

// Requests and responses exchanged with the API worker threads
#[derive(Clone, Debug, PartialEq)]
pub enum ApiJob {
    LoadAll,
    CreateProgram { name: String },
    DeleteProgram { id: i64 },
    CreateClient(NewClient),
    DeleteClient { id: i64 },
    Search { id: u64, query: String },
}

#[derive(Clone, Debug)]
pub enum JobOutcome {
    Loaded(Result<(Vec<Program>, Vec<Client>), ApiError>),
    ProgramCreated(Result<Program, ApiError>),
    ProgramDeleted(Result<(), ApiError>),
    ClientCreated(Result<Client, ApiError>),
    ClientDeleted(Result<(), ApiError>),
    Searched {
        id: u64,
        result: Result<Vec<Client>, ApiError>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(kind: MessageKind, text: &str, target: MessageTarget) -> StatusMessage {
        StatusMessage {
            kind,
            text: text.to_string(),
            target,
        }
    }

    #[test]
    fn test_set_fills_the_target_slot_only() {
        let mut messages = StatusMessages::default();
        messages.set(message(MessageKind::Error, "boom", MessageTarget::ClientForm));

        assert_eq!(
            messages.get(MessageTarget::ClientForm).map(|m| m.text.as_str()),
            Some("boom")
        );
        assert!(messages.get(MessageTarget::Global).is_none());
        assert!(messages.get(MessageTarget::ProgramForm).is_none());
    }

    #[test]
    fn test_set_overwrites_previous_message() {
        let mut messages = StatusMessages::default();
        messages.set(message(MessageKind::Error, "first", MessageTarget::Global));
        messages.set(message(MessageKind::Success, "second", MessageTarget::Global));

        let current = messages.get(MessageTarget::Global).unwrap();
        assert_eq!(current.text, "second");
        assert_eq!(current.kind, MessageKind::Success);

        messages.clear_all();
        assert!(messages.get(MessageTarget::Global).is_none());
    }
}
