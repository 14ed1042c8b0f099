#[cfg(test)]
mod tests {
    use super::super::Component;
    use super::super::client_table::*;
    use crate::api::{Client, Program};
    use crate::interactive::ui::events::Message;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn program(id: i64, name: &str) -> Program {
        Program {
            id,
            name: name.to_string(),
        }
    }

    fn clients() -> Vec<Client> {
        vec![
            Client {
                id: 7,
                name: "Ann".to_string(),
                email: "ann@x.org".to_string(),
                programs: vec![program(1, "TB"), program(2, "Malaria")],
            },
            Client {
                id: 8,
                name: "Bob".to_string(),
                email: "bob@x.org".to_string(),
                programs: vec![],
            },
        ]
    }

    fn render_to_string(table: &mut ClientTable, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| table.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_empty_collection_yields_spanning_placeholder() {
        let rows = client_rows(&[]);
        assert_eq!(
            rows,
            vec![ClientRow::Placeholder {
                text: "No clients have been registered yet".to_string(),
                colspan: 4,
            }]
        );
    }

    #[test]
    fn test_one_row_per_client() {
        let rows = client_rows(&clients());
        assert_eq!(rows.len(), 2);
        match &rows[0] {
            ClientRow::Client {
                name,
                email,
                programs,
                ..
            } => {
                assert_eq!(name, "Ann");
                assert_eq!(email, "ann@x.org");
                assert_eq!(programs, "TB, Malaria");
            }
            other => panic!("unexpected row: {other:?}"),
        }
    }

    #[test]
    fn test_client_without_programs_shows_none() {
        let data = clients();
        assert_eq!(format_programs(&data[1]), "None");
        assert_eq!(format_programs(&data[0]), "TB, Malaria");
    }

    #[test]
    fn test_render_placeholder() {
        let mut table = ClientTable::new();
        let content = render_to_string(&mut table, 80, 6);
        assert!(content.contains("Name"));
        assert!(content.contains("Actions"));
        assert!(content.contains("No clients have been registered yet"));
    }

    #[test]
    fn test_render_rows_and_query_title() {
        let mut table = ClientTable::new();
        table.set_clients(clients());
        table.set_query(Some("an".to_string()));
        let content = render_to_string(&mut table, 100, 8);
        assert!(content.contains("matching \"an\""));
        assert!(content.contains("ann@x.org"));
        assert!(content.contains("TB, Malaria"));
        assert!(content.contains("None"));
        assert!(!content.contains("No clients have been registered yet"));
    }

    #[test]
    fn test_navigation_and_delete() {
        let mut table = ClientTable::new();
        table.set_clients(clients());

        assert!(table.handle_key(key(KeyCode::Up)).is_none());
        assert!(matches!(
            table.handle_key(key(KeyCode::Down)),
            Some(Message::SelectClient(1))
        ));
        assert!(table.handle_key(key(KeyCode::Down)).is_none());

        match table.handle_key(key(KeyCode::Char('d'))) {
            Some(Message::RequestDeleteClient(client)) => assert_eq!(client.id, 8),
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[test]
    fn test_delete_with_no_clients() {
        let mut table = ClientTable::new();
        assert!(table.handle_key(key(KeyCode::Delete)).is_none());
    }
}
