use std::collections::BTreeSet;

use crate::api::Program;
use crate::interactive::constants::EMPTY_PROGRAMS_TEXT;
use crate::interactive::ui::components::{Component, styles::Styles};
use crate::interactive::ui::events::Message;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::Span,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

/// Checkable list of programs. The checked set is view state: it feeds the
/// client form at submit time and survives reloads for ids that still exist.
#[derive(Default)]
pub struct ProgramList {
    programs: Vec<Program>,
    checked: BTreeSet<i64>,
    selected_index: usize,
    focused: bool,
    list_state: ListState,
}

impl ProgramList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_programs(&mut self, programs: Vec<Program>) {
        if programs == self.programs {
            return;
        }
        self.checked
            .retain(|id| programs.iter().any(|program| program.id == *id));
        self.programs = programs;
    }

    pub fn set_selected_index(&mut self, index: usize) {
        self.selected_index = index;
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub fn selected_program(&self) -> Option<&Program> {
        self.programs.get(self.selected_index)
    }

    pub fn is_checked(&self, id: i64) -> bool {
        self.checked.contains(&id)
    }

    /// Checked program ids in display order.
    pub fn checked_ids(&self) -> Vec<i64> {
        self.programs
            .iter()
            .map(|program| program.id)
            .filter(|id| self.checked.contains(id))
            .collect()
    }

    pub fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_program().map(|program| program.id) {
            if !self.checked.remove(&id) {
                self.checked.insert(id);
            }
        }
    }

    pub fn clear_checked(&mut self) {
        self.checked.clear();
    }

    pub fn item_text(&self, program: &Program) -> String {
        let mark = if self.is_checked(program.id) { "[x]" } else { "[ ]" };
        format!("{mark} {}", program.name)
    }
}

impl Component for ProgramList {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(Span::styled(" Programs ", Styles::title()))
            .title_bottom(Span::styled(" Space: check  d: delete ", Styles::dimmed()))
            .borders(Borders::ALL)
            .border_style(Styles::border(self.focused));

        if self.programs.is_empty() {
            let empty = Paragraph::new(EMPTY_PROGRAMS_TEXT)
                .style(Styles::dimmed())
                .alignment(Alignment::Center)
                .block(block);
            f.render_widget(empty, area);
            return;
        }

        let items: Vec<ListItem> = self
            .programs
            .iter()
            .map(|program| ListItem::new(self.item_text(program)))
            .collect();

        let mut list = List::new(items).block(block).style(Styles::normal());
        if self.focused {
            list = list.highlight_style(Styles::selected()).highlight_symbol("> ");
        }

        self.list_state.select(Some(self.selected_index));
        f.render_stateful_widget(list, area, &mut self.list_state);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                let index = self.selected_index.checked_sub(1)?;
                self.selected_index = index;
                Some(Message::SelectProgram(index))
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let index = self.selected_index + 1;
                if index >= self.programs.len() {
                    return None;
                }
                self.selected_index = index;
                Some(Message::SelectProgram(index))
            }
            KeyCode::Char(' ') => {
                self.toggle_selected();
                None
            }
            KeyCode::Char('d') | KeyCode::Delete => self
                .selected_program()
                .cloned()
                .map(Message::RequestDeleteProgram),
            _ => None,
        }
    }
}
