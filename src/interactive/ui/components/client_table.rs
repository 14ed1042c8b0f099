use crate::api::Client;
use crate::interactive::constants::{CLIENT_TABLE_COLUMNS, EMPTY_CLIENTS_TEXT, NO_PROGRAMS_TEXT};
use crate::interactive::ui::components::{Component, styles::Styles};
use crate::interactive::ui::events::Message;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
};

pub const HEADERS: [&str; CLIENT_TABLE_COLUMNS] = ["Name", "Email", "Programs", "Actions"];
pub const DELETE_ACTION: &str = "[d] Delete";

/// One logical row of the client table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClientRow {
    /// A single cell spanning `colspan` columns.
    Placeholder { text: String, colspan: usize },
    Client {
        name: String,
        email: String,
        programs: String,
        action: String,
    },
}

pub fn format_programs(client: &Client) -> String {
    if client.programs.is_empty() {
        return NO_PROGRAMS_TEXT.to_string();
    }
    client
        .programs
        .iter()
        .map(|program| program.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn client_rows(clients: &[Client]) -> Vec<ClientRow> {
    if clients.is_empty() {
        return vec![ClientRow::Placeholder {
            text: EMPTY_CLIENTS_TEXT.to_string(),
            colspan: CLIENT_TABLE_COLUMNS,
        }];
    }
    clients
        .iter()
        .map(|client| ClientRow::Client {
            name: client.name.clone(),
            email: client.email.clone(),
            programs: format_programs(client),
            action: DELETE_ACTION.to_string(),
        })
        .collect()
}

#[derive(Default)]
pub struct ClientTable {
    clients: Vec<Client>,
    selected_index: usize,
    query: Option<String>,
    focused: bool,
    table_state: TableState,
}

impl ClientTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_clients(&mut self, clients: Vec<Client>) {
        self.clients = clients;
    }

    pub fn set_selected_index(&mut self, index: usize) {
        self.selected_index = index;
    }

    /// The search the rows came from, `None` when showing every client.
    pub fn set_query(&mut self, query: Option<String>) {
        self.query = query;
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub fn selected_client(&self) -> Option<&Client> {
        self.clients.get(self.selected_index)
    }

    fn title(&self) -> Line<'static> {
        let mut spans = vec![Span::styled(" Clients ", Styles::title())];
        match self.query.as_deref() {
            Some(query) if !query.is_empty() => {
                spans.push(Span::styled(format!("matching \"{query}\" "), Styles::dimmed()));
            }
            _ => {}
        }
        spans.push(Span::styled(format!("({}) ", self.clients.len()), Styles::dimmed()));
        Line::from(spans)
    }
}

impl Component for ClientTable {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(self.title())
            .borders(Borders::ALL)
            .border_style(Styles::border(self.focused));

        let widths = [
            Constraint::Percentage(22),
            Constraint::Percentage(30),
            Constraint::Percentage(33),
            Constraint::Percentage(15),
        ];
        let header = Row::new(HEADERS.iter().map(|h| Cell::from(*h))).style(Styles::title());

        let mut placeholder = None;
        let rows: Vec<Row> = client_rows(&self.clients)
            .into_iter()
            .filter_map(|row| match row {
                ClientRow::Placeholder { text, .. } => {
                    placeholder = Some(text);
                    None
                }
                ClientRow::Client {
                    name,
                    email,
                    programs,
                    action,
                } => Some(Row::new(vec![
                    Cell::from(name),
                    Cell::from(email),
                    Cell::from(programs),
                    Cell::from(Span::styled(action, Styles::action_key())),
                ])),
            })
            .collect();

        let inner = block.inner(area);
        let mut table = Table::new(rows, widths)
            .header(header)
            .block(block)
            .style(Styles::normal());
        if self.focused {
            table = table.row_highlight_style(Styles::selected());
        }

        self.table_state
            .select((!self.clients.is_empty()).then_some(self.selected_index));
        f.render_stateful_widget(table, area, &mut self.table_state);

        // Table rows have no column spans, so the placeholder is drawn across
        // the full width under the header.
        if let Some(text) = placeholder {
            if inner.height > 1 {
                let row_area = Rect::new(inner.x, inner.y + 1, inner.width, 1);
                f.render_widget(
                    Paragraph::new(text)
                        .style(Styles::dimmed())
                        .alignment(Alignment::Center),
                    row_area,
                );
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                let index = self.selected_index.checked_sub(1)?;
                self.selected_index = index;
                Some(Message::SelectClient(index))
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let index = self.selected_index + 1;
                if index >= self.clients.len() {
                    return None;
                }
                self.selected_index = index;
                Some(Message::SelectClient(index))
            }
            KeyCode::Char('d') | KeyCode::Delete => self
                .selected_client()
                .cloned()
                .map(Message::RequestDeleteClient),
            _ => None,
        }
    }
}
