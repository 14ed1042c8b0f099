use crate::interactive::constants::DIALOG_MAX_WIDTH;
use crate::interactive::domain::models::PendingDelete;
use crate::interactive::ui::components::{
    Component,
    styles::{ColorScheme, Styles, centered_rect},
};
use crate::interactive::ui::events::Message;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

/// Yes/no gate in front of every delete.
#[derive(Default)]
pub struct ConfirmDialog {
    pending: Option<PendingDelete>,
}

impl ConfirmDialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_pending(&mut self, pending: Option<PendingDelete>) {
        self.pending = pending;
    }
}

impl Component for ConfirmDialog {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let Some(pending) = &self.pending else {
            return;
        };

        let text = vec![
            Line::from(""),
            Line::from(pending.prompt()),
            Line::from(""),
            Line::from(vec![
                Span::styled("[y/Enter]", Styles::action_key()),
                Span::raw(" Delete    "),
                Span::styled("[n/Esc]", Styles::action_key()),
                Span::raw(" Cancel"),
            ]),
        ];

        let dialog_area = centered_rect(DIALOG_MAX_WIDTH, 8, area);
        f.render_widget(Clear, dialog_area);

        let dialog = Paragraph::new(text)
            .block(
                Block::default()
                    .title(Span::styled(" Confirm ", Styles::title()))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(ColorScheme::ERROR)),
            )
            .style(Styles::normal())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });

        f.render_widget(dialog, dialog_area);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                Some(Message::ConfirmAccepted)
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                Some(Message::ConfirmDeclined)
            }
            _ => None,
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
    fn test_accept_and_decline_keys() {
        let mut dialog = ConfirmDialog::new();
        for code in [KeyCode::Char('y'), KeyCode::Char('Y'), KeyCode::Enter] {
            assert!(matches!(
                dialog.handle_key(key(code)),
                Some(Message::ConfirmAccepted)
            ));
        }
        for code in [KeyCode::Char('n'), KeyCode::Char('N'), KeyCode::Esc] {
            assert!(matches!(
                dialog.handle_key(key(code)),
                Some(Message::ConfirmDeclined)
            ));
        }
        assert!(dialog.handle_key(key(KeyCode::Char('x'))).is_none());
    }

    #[test]
    fn test_render_shows_prompt() {
        let mut dialog = ConfirmDialog::new();
        dialog.set_pending(Some(PendingDelete::Program {
            id: 1,
            name: "TB".to_string(),
        }));

        let backend = TestBackend::new(80, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| dialog.render(f, f.area())).unwrap();

        let content: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(content.contains("delete the program \"TB\"?"));
        assert!(content.contains("Cancel"));
    }
}
