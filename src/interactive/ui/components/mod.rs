pub mod client_form;
pub mod client_table;
pub mod confirm_dialog;
pub mod help_dialog;
pub mod loading_overlay;
pub mod program_form;
pub mod program_list;
pub mod search_bar;
pub mod status_banner;
pub mod styles;
pub mod text_input;

#[cfg(test)]
mod client_table_test;
#[cfg(test)]
mod text_input_test;

use crate::interactive::domain::feedback::EXIT_PROMPT;
use crate::interactive::domain::models::StatusMessage;
use crate::interactive::ui::events::Message;
use crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect};

pub trait Component {
    fn render(&mut self, f: &mut Frame, area: Rect);
    fn handle_key(&mut self, key: KeyEvent) -> Option<Message>;
}

/// Check if a message is the exit prompt
pub fn is_exit_prompt(message: Option<&StatusMessage>) -> bool {
    message.is_some_and(|msg| msg.text == EXIT_PROMPT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interactive::domain::models::{MessageKind, MessageTarget};

    fn status(text: &str) -> StatusMessage {
        StatusMessage {
            kind: MessageKind::Info,
            text: text.to_string(),
            target: MessageTarget::Global,
        }
    }

    #[test]
    fn test_is_exit_prompt() {
        assert!(is_exit_prompt(Some(&status("Press Ctrl+C again to exit"))));
        assert!(!is_exit_prompt(Some(&status("Some other message"))));
        assert!(!is_exit_prompt(None));
        assert!(!is_exit_prompt(Some(&status(""))));
    }
}
