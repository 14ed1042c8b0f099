use crate::interactive::domain::models::StatusMessage;
use crate::interactive::ui::components::{Component, styles::Styles};
use crate::interactive::ui::events::Message;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

/// A dismissible one-line status message.
#[derive(Default)]
pub struct StatusBanner {
    message: Option<StatusMessage>,
}

impl StatusBanner {
    pub fn new() -> Self {
        Self { message: None }
    }

    pub fn set_message(&mut self, message: Option<StatusMessage>) {
        self.message = message;
    }

    pub fn line(&self) -> Line<'_> {
        match &self.message {
            Some(message) => Line::from(vec![
                Span::styled(message.text.as_str(), Styles::message(message.kind)),
                Span::styled("  (Esc to dismiss)", Styles::dimmed()),
            ]),
            None => Line::from(""),
        }
    }
}

impl Component for StatusBanner {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        f.render_widget(Paragraph::new(self.line()), area);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        match (key.code, &self.message) {
            (KeyCode::Esc, Some(message)) => Some(Message::DismissMessage(message.target)),
            _ => None,
        }
    }
}
