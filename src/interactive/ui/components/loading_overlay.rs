use crate::interactive::ui::components::{
    Component,
    styles::{Styles, centered_rect},
};
use crate::interactive::ui::events::Message;
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    widgets::{Block, Borders, Clear, Paragraph},
};

const SPINNER_FRAMES: [&str; 4] = ["|", "/", "-", "\\"];

/// Small centered box shown while any load or search is in flight.
#[derive(Default)]
pub struct LoadingOverlay {
    tick: usize,
}

impl LoadingOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> String {
        format!("{} Loading...", SPINNER_FRAMES[self.tick % SPINNER_FRAMES.len()])
    }
}

impl Component for LoadingOverlay {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let overlay_area = centered_rect(20, 3, area);
        f.render_widget(Clear, overlay_area);
        f.render_widget(
            Paragraph::new(self.text())
                .style(Styles::title())
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL)),
            overlay_area,
        );
        self.tick = self.tick.wrapping_add(1);
    }

    // Input passes through while loading.
    fn handle_key(&mut self, _key: KeyEvent) -> Option<Message> {
        None
    }
}
