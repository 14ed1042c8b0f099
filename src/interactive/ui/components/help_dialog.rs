use crate::interactive::constants::DIALOG_MAX_WIDTH;
use crate::interactive::ui::components::{
    Component,
    styles::{Styles, centered_rect},
};
use crate::interactive::ui::events::Message;
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

#[derive(Default)]
pub struct HelpDialog;

impl HelpDialog {
    pub fn new() -> Self {
        Self
    }

    fn get_help_text() -> Vec<Line<'static>> {
        vec![
            Line::from(vec![Span::styled(
                "Health Registry - Interactive Mode",
                Styles::title(),
            )]),
            Line::from(""),
            Line::from(vec![Span::styled("Everywhere:", Styles::action_key())]),
            Line::from("  Tab / S-Tab - Move between panels"),
            Line::from("  Esc         - Dismiss the focused panel's message"),
            Line::from("  Ctrl+L      - Dismiss all messages"),
            Line::from("  F1 or ?     - Show this help (? outside text inputs)"),
            Line::from("  Ctrl+C x2   - Quit"),
            Line::from(""),
            Line::from(vec![Span::styled("Forms:", Styles::action_key())]),
            Line::from("  Enter       - Submit (ignored while saving)"),
            Line::from("  Ctrl+A/E    - Start/end of line"),
            Line::from("  Ctrl+W/U/K  - Delete word/before/after cursor"),
            Line::from(""),
            Line::from(vec![Span::styled("Program list:", Styles::action_key())]),
            Line::from("  ↑/↓ j/k     - Move"),
            Line::from("  Space       - Check for the next client registration"),
            Line::from("  d / Del     - Delete program"),
            Line::from(""),
            Line::from(vec![Span::styled("Search / Clients:", Styles::action_key())]),
            Line::from("  type        - Search after a short pause"),
            Line::from("  ↑/↓ j/k     - Move"),
            Line::from("  d / Del     - Delete client"),
            Line::from(""),
            Line::from("Press any key to close this help..."),
        ]
    }
}

impl Component for HelpDialog {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let help_text = Self::get_help_text();

        let height = help_text.len() as u16 + 2;
        let dialog_area = centered_rect(DIALOG_MAX_WIDTH, height, area);

        // Clear the area behind the dialog
        f.render_widget(Clear, dialog_area);

        let help = Paragraph::new(help_text)
            .block(
                Block::default()
                    .title(" Help ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .style(Styles::normal())
            .alignment(Alignment::Left);

        f.render_widget(help, dialog_area);
    }

    fn handle_key(&mut self, _key: KeyEvent) -> Option<Message> {
        // Any key closes the help dialog
        Some(Message::CloseHelp)
    }
}
