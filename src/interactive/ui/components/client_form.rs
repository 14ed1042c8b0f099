use crate::interactive::domain::models::{Focus, MessageTarget, StatusMessage};
use crate::interactive::ui::components::{
    Component, status_banner::StatusBanner, styles::Styles, text_input::TextInput,
};
use crate::interactive::ui::events::Message;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub const SUBMIT_LABEL: &str = "[ Register Client ]";
pub const BUSY_LABEL: &str = "[ Saving... ]";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ClientField {
    #[default]
    Name,
    Email,
}

/// Name and email inputs. Program enrollment is taken from the checked
/// entries of the program list when the form is submitted.
#[derive(Default)]
pub struct ClientForm {
    name: TextInput,
    email: TextInput,
    active: Option<ClientField>,
    busy: bool,
    checked_count: usize,
    banner: StatusBanner,
}

impl ClientForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_values(&mut self, name: &str, email: &str) {
        self.name.sync_text(name);
        self.email.sync_text(email);
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.active = match focus {
            Focus::ClientName => Some(ClientField::Name),
            Focus::ClientEmail => Some(ClientField::Email),
            _ => None,
        };
    }

    pub fn set_busy(&mut self, busy: bool) {
        self.busy = busy;
    }

    pub fn set_checked_count(&mut self, count: usize) {
        self.checked_count = count;
    }

    pub fn set_message(&mut self, message: Option<StatusMessage>) {
        self.banner.set_message(message);
    }

    fn field_line<'a>(&self, label: &'a str, input: &'a TextInput, field: ClientField) -> Line<'a> {
        let mut spans = vec![Span::styled(label, Styles::action_key())];
        spans.extend(input.render_cursor_spans(self.active == Some(field) && !self.busy));
        Line::from(spans)
    }
}

impl Component for ClientForm {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(Span::styled(" Register Client ", Styles::title()))
            .borders(Borders::ALL)
            .border_style(Styles::border(self.active.is_some()));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Name
                Constraint::Length(1), // Email
                Constraint::Length(1), // Programs
                Constraint::Length(1), // Submit
                Constraint::Min(0),    // Status
            ])
            .split(inner);

        f.render_widget(
            Paragraph::new(self.field_line("Name:  ", &self.name, ClientField::Name)),
            chunks[0],
        );
        f.render_widget(
            Paragraph::new(self.field_line("Email: ", &self.email, ClientField::Email)),
            chunks[1],
        );

        let programs = Line::from(vec![
            Span::styled("Programs: ", Styles::action_key()),
            Span::styled(
                format!("{} selected (Space in program list)", self.checked_count),
                Styles::dimmed(),
            ),
        ]);
        f.render_widget(Paragraph::new(programs), chunks[2]);

        let label = if self.busy { BUSY_LABEL } else { SUBMIT_LABEL };
        let submit = Line::from(vec![
            Span::styled(label, Styles::button(self.busy)),
            Span::styled("  Enter to submit", Styles::dimmed()),
        ]);
        f.render_widget(Paragraph::new(submit), chunks[3]);

        self.banner.render(f, chunks[4]);
    }

    /// Text editing only; submission needs the program selection and is
    /// handled by the caller.
    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        if key.code == KeyCode::Esc {
            return Some(Message::DismissMessage(MessageTarget::ClientForm));
        }
        if self.busy {
            return None;
        }
        match self.active? {
            ClientField::Name => self
                .name
                .handle_key(key)
                .then(|| Message::ClientNameChanged(self.name.text().to_string())),
            ClientField::Email => self
                .email
                .handle_key(key)
                .then(|| Message::ClientEmailChanged(self.email.text().to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    #[test]
    fn test_active_field_receives_text() {
        let mut form = ClientForm::new();
        form.set_focus(Focus::ClientEmail);

        let msg = form.handle_key(key(KeyCode::Char('a')));
        assert!(matches!(msg, Some(Message::ClientEmailChanged(e)) if e == "a"));

        form.set_focus(Focus::ClientName);
        let msg = form.handle_key(key(KeyCode::Char('A')));
        assert!(matches!(msg, Some(Message::ClientNameChanged(n)) if n == "A"));
    }

    #[test]
    fn test_unfocused_form_ignores_keys() {
        let mut form = ClientForm::new();
        form.set_focus(Focus::Programs);
        assert!(form.handle_key(key(KeyCode::Char('a'))).is_none());
    }

    #[test]
    fn test_escape_dismisses_form_message() {
        let mut form = ClientForm::new();
        assert!(matches!(
            form.handle_key(key(KeyCode::Esc)),
            Some(Message::DismissMessage(MessageTarget::ClientForm))
        ));
    }
}
