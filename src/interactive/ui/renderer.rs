use crate::interactive::constants::{
    CLIENT_FORM_HEIGHT, INPUT_HEIGHT, LEFT_COLUMN_PERCENT, PROGRAM_FORM_HEIGHT,
};
use crate::interactive::domain::models::MessageTarget;
use crate::interactive::ui::app_state::{AppState, Focus, Mode};
use crate::interactive::ui::components::{
    Component, client_form::ClientForm, client_table::ClientTable,
    confirm_dialog::ConfirmDialog, help_dialog::HelpDialog, is_exit_prompt,
    loading_overlay::LoadingOverlay, program_form::ProgramForm, program_list::ProgramList,
    search_bar::SearchBar, status_banner::StatusBanner, styles::Styles,
};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};

pub struct Renderer {
    program_form: ProgramForm,
    client_form: ClientForm,
    program_list: ProgramList,
    search_bar: SearchBar,
    client_table: ClientTable,
    global_banner: StatusBanner,
    loading_overlay: LoadingOverlay,
    confirm_dialog: ConfirmDialog,
    help_dialog: HelpDialog,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            program_form: ProgramForm::new(),
            client_form: ClientForm::new(),
            program_list: ProgramList::new(),
            search_bar: SearchBar::new(),
            client_table: ClientTable::new(),
            global_banner: StatusBanner::new(),
            loading_overlay: LoadingOverlay::new(),
            confirm_dialog: ConfirmDialog::new(),
            help_dialog: HelpDialog::new(),
        }
    }

    pub fn render(&mut self, f: &mut Frame, state: &AppState) {
        self.sync(state);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),    // Panels
                Constraint::Length(1), // Footer
            ])
            .split(f.area());

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(LEFT_COLUMN_PERCENT),
                Constraint::Percentage(100 - LEFT_COLUMN_PERCENT),
            ])
            .split(rows[0]);

        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(PROGRAM_FORM_HEIGHT),
                Constraint::Length(CLIENT_FORM_HEIGHT),
                Constraint::Min(0),
            ])
            .split(columns[0]);

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(INPUT_HEIGHT), Constraint::Min(0)])
            .split(columns[1]);

        self.program_form.render(f, left[0]);
        self.client_form.render(f, left[1]);
        self.program_list.render(f, left[2]);
        self.search_bar.render(f, right[0]);
        self.client_table.render(f, right[1]);
        self.render_footer(f, rows[1], state);

        if state.is_loading() {
            self.loading_overlay.render(f, f.area());
        }
        match &state.mode {
            Mode::Confirm(_) => self.confirm_dialog.render(f, f.area()),
            Mode::Help => self.help_dialog.render(f, f.area()),
            Mode::Browse => {}
        }
    }

    /// Pushes the controller state into the components.
    fn sync(&mut self, state: &AppState) {
        let messages = &state.ui.messages;

        self.program_form.set_name(&state.program_form.name);
        self.program_form.set_busy(state.program_form.busy);
        self.program_form.set_focused(state.focus == Focus::ProgramName);
        self.program_form
            .set_message(messages.get(MessageTarget::ProgramForm).cloned());

        self.program_list.set_programs(state.programs.clone());
        self.program_list.set_selected_index(state.ui.selected_program);
        self.program_list.set_focused(state.focus == Focus::Programs);

        self.client_form
            .set_values(&state.client_form.name, &state.client_form.email);
        self.client_form.set_busy(state.client_form.busy);
        self.client_form.set_focus(state.focus);
        self.client_form
            .set_checked_count(self.program_list.checked_ids().len());
        self.client_form
            .set_message(messages.get(MessageTarget::ClientForm).cloned());

        self.search_bar.set_query(&state.search.query);
        self.search_bar.set_searching(state.is_searching());
        self.search_bar.set_focused(state.focus == Focus::Search);

        self.client_table.set_clients(state.clients.clone());
        self.client_table.set_selected_index(state.ui.selected_client);
        self.client_table.set_query(state.search.shown_query.clone());
        self.client_table.set_focused(state.focus == Focus::Clients);

        self.global_banner
            .set_message(messages.get(MessageTarget::Global).cloned());

        let pending = match &state.mode {
            Mode::Confirm(pending) => Some(pending.clone()),
            _ => None,
        };
        self.confirm_dialog.set_pending(pending);
    }

    fn render_footer(&mut self, f: &mut Frame, area: Rect, state: &AppState) {
        let global = state.ui.messages.get(MessageTarget::Global);
        if is_exit_prompt(global) {
            let text = global.map(|m| m.text.as_str()).unwrap_or_default();
            f.render_widget(
                Paragraph::new(Span::styled(text, Styles::action_key())),
                area,
            );
        } else if global.is_some() {
            self.global_banner.render(f, area);
        } else {
            let hints = Line::from(vec![
                Span::styled("Tab", Styles::action_key()),
                Span::styled(" next panel  ", Styles::dimmed()),
                Span::styled("Enter", Styles::action_key()),
                Span::styled(" submit  ", Styles::dimmed()),
                Span::styled("F1", Styles::action_key()),
                Span::styled(" help  ", Styles::dimmed()),
                Span::styled("Ctrl+C", Styles::action_key()),
                Span::styled(" quit", Styles::dimmed()),
            ]);
            f.render_widget(Paragraph::new(hints), area);
        }
    }

    pub fn get_program_form_mut(&mut self) -> &mut ProgramForm {
        &mut self.program_form
    }

    pub fn get_client_form_mut(&mut self) -> &mut ClientForm {
        &mut self.client_form
    }

    pub fn get_program_list(&self) -> &ProgramList {
        &self.program_list
    }

    pub fn get_program_list_mut(&mut self) -> &mut ProgramList {
        &mut self.program_list
    }

    pub fn get_search_bar_mut(&mut self) -> &mut SearchBar {
        &mut self.search_bar
    }

    pub fn get_client_table_mut(&mut self) -> &mut ClientTable {
        &mut self.client_table
    }

    pub fn get_global_banner_mut(&mut self) -> &mut StatusBanner {
        &mut self.global_banner
    }

    pub fn get_confirm_dialog_mut(&mut self) -> &mut ConfirmDialog {
        &mut self.confirm_dialog
    }

    pub fn get_help_dialog_mut(&mut self) -> &mut HelpDialog {
        &mut self.help_dialog
    }

    /// Brings the components in line with `state` without drawing.
    pub fn sync_state(&mut self, state: &AppState) {
        self.sync(state);
    }
}
