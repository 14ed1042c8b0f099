use crate::interactive::ui::components::{Component, styles::Styles, text_input::TextInput};
use crate::interactive::ui::events::Message;
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

#[derive(Default)]
pub struct SearchBar {
    input: TextInput,
    is_searching: bool,
    focused: bool,
}

impl SearchBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_query(&mut self, query: &str) {
        self.input.sync_text(query);
    }

    pub fn set_searching(&mut self, is_searching: bool) {
        self.is_searching = is_searching;
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub fn query(&self) -> &str {
        self.input.text()
    }

    pub fn is_searching(&self) -> bool {
        self.is_searching
    }
}

impl Component for SearchBar {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let mut title = vec![Span::styled(" Search clients ", Styles::title())];
        if self.is_searching {
            title.push(Span::styled("[searching...] ", Styles::dimmed()));
        }

        let input = Paragraph::new(Line::from(self.input.render_cursor_spans(self.focused)))
            .block(
                Block::default()
                    .title(Line::from(title))
                    .borders(Borders::ALL)
                    .border_style(Styles::border(self.focused)),
            )
            .style(Styles::normal());

        f.render_widget(input, area);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        if self.input.handle_key(key) {
            Some(Message::QueryChanged(self.input.text().to_string()))
        } else {
            None
        }
    }
}
