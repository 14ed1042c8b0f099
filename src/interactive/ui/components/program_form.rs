use crate::interactive::domain::models::{MessageTarget, StatusMessage};
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

pub const SUBMIT_LABEL: &str = "[ Add Program ]";
pub const BUSY_LABEL: &str = "[ Saving... ]";

#[derive(Default)]
pub struct ProgramForm {
    name: TextInput,
    busy: bool,
    focused: bool,
    banner: StatusBanner,
}

impl ProgramForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_name(&mut self, name: &str) {
        self.name.sync_text(name);
    }

    pub fn set_busy(&mut self, busy: bool) {
        self.busy = busy;
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub fn set_message(&mut self, message: Option<StatusMessage>) {
        self.banner.set_message(message);
    }

    pub fn name(&self) -> &str {
        self.name.text()
    }
}

impl Component for ProgramForm {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(Span::styled(" New Program ", Styles::title()))
            .borders(Borders::ALL)
            .border_style(Styles::border(self.focused));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Name
                Constraint::Length(1), // Submit
                Constraint::Min(0),    // Status
            ])
            .split(inner);

        let mut name_line = vec![Span::styled("Name: ", Styles::action_key())];
        name_line.extend(self.name.render_cursor_spans(self.focused && !self.busy));
        f.render_widget(Paragraph::new(Line::from(name_line)), chunks[0]);

        let label = if self.busy { BUSY_LABEL } else { SUBMIT_LABEL };
        let submit = Line::from(vec![
            Span::styled(label, Styles::button(self.busy)),
            Span::styled("  Enter to submit", Styles::dimmed()),
        ]);
        f.render_widget(Paragraph::new(submit), chunks[1]);

        self.banner.render(f, chunks[2]);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Enter => Some(Message::SubmitProgram),
            KeyCode::Esc => Some(Message::DismissMessage(MessageTarget::ProgramForm)),
            _ if self.busy => None,
            _ => {
                if self.name.handle_key(key) {
                    Some(Message::ProgramNameChanged(self.name.text().to_string()))
                } else {
                    None
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use ratatui::{Terminal, backend::TestBackend};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    #[test]
    fn test_typing_emits_name_changes() {
        let mut form = ProgramForm::new();
        let msg = form.handle_key(key(KeyCode::Char('T')));
        assert!(matches!(msg, Some(Message::ProgramNameChanged(n)) if n == "T"));
        let msg = form.handle_key(key(KeyCode::Char('B')));
        assert!(matches!(msg, Some(Message::ProgramNameChanged(n)) if n == "TB"));
    }

    #[test]
    fn test_enter_submits() {
        let mut form = ProgramForm::new();
        assert!(matches!(
            form.handle_key(key(KeyCode::Enter)),
            Some(Message::SubmitProgram)
        ));
    }

    #[test]
    fn test_busy_form_ignores_typing() {
        let mut form = ProgramForm::new();
        form.set_busy(true);
        assert!(form.handle_key(key(KeyCode::Char('x'))).is_none());
        assert_eq!(form.name(), "");
    }

    #[test]
    fn test_busy_label_rendered() {
        let mut form = ProgramForm::new();
        let backend = TestBackend::new(40, 6);
        let mut terminal = Terminal::new(backend).unwrap();

        form.set_busy(true);
        terminal.draw(|f| form.render(f, f.area())).unwrap();
        let content = buffer_text(terminal.backend().buffer());
        assert!(content.contains("Saving..."));

        form.set_busy(false);
        terminal.draw(|f| form.render(f, f.area())).unwrap();
        let content = buffer_text(terminal.backend().buffer());
        assert!(content.contains("Add Program"));
        assert!(!content.contains("Saving..."));
    }

    fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }
}
