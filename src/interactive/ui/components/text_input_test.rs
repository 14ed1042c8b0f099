#[cfg(test)]
mod tests {
    use super::super::text_input::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn typed(text: &str) -> TextInput {
        let mut input = TextInput::new();
        for c in text.chars() {
            input.handle_key(key(KeyCode::Char(c)));
        }
        input
    }

    #[test]
    fn test_typing_appends() {
        let input = typed("ann");
        assert_eq!(input.text(), "ann");
        assert_eq!(input.cursor_position(), 3);
    }

    #[test]
    fn test_insert_in_middle() {
        let mut input = typed("an");
        input.handle_key(key(KeyCode::Left));
        assert!(input.handle_key(key(KeyCode::Char('n'))));
        assert_eq!(input.text(), "ann");
        assert_eq!(input.cursor_position(), 2);
    }

    #[test]
    fn test_backspace_and_delete() {
        let mut input = typed("anna");
        assert!(input.handle_key(key(KeyCode::Backspace)));
        assert_eq!(input.text(), "ann");

        input.handle_key(key(KeyCode::Home));
        assert!(input.handle_key(key(KeyCode::Delete)));
        assert_eq!(input.text(), "nn");

        input.set_text(String::new());
        assert!(!input.handle_key(key(KeyCode::Backspace)));
    }

    #[test]
    fn test_multibyte_editing() {
        let mut input = typed("Zoë");
        input.handle_key(key(KeyCode::Left));
        assert!(input.handle_key(key(KeyCode::Backspace)));
        assert_eq!(input.text(), "Zë");
        input.handle_key(key(KeyCode::End));
        assert!(input.handle_key(key(KeyCode::Backspace)));
        assert_eq!(input.text(), "Z");
    }

    #[test]
    fn test_control_word_delete() {
        let mut input = typed("ann smith");
        assert!(input.handle_key(ctrl('w')));
        assert_eq!(input.text(), "ann ");
        assert!(input.handle_key(ctrl('u')));
        assert_eq!(input.text(), "");
        assert!(!input.handle_key(ctrl('u')));
    }

    #[test]
    fn test_control_kill_to_end() {
        let mut input = typed("ann smith");
        input.handle_key(ctrl('a'));
        input.handle_key(KeyEvent::new(KeyCode::Char('f'), KeyModifiers::ALT));
        assert_eq!(input.cursor_position(), 4);
        assert!(input.handle_key(ctrl('k')));
        assert_eq!(input.text(), "ann ");
    }

    #[test]
    fn test_sync_text_keeps_cursor_when_unchanged() {
        let mut input = typed("ann");
        input.handle_key(key(KeyCode::Home));
        input.sync_text("ann");
        assert_eq!(input.cursor_position(), 0);

        input.sync_text("");
        assert_eq!(input.text(), "");
        assert_eq!(input.cursor_position(), 0);
    }

    #[test]
    fn test_cursor_spans() {
        let mut input = typed("abc");
        assert_eq!(input.render_cursor_spans(true).len(), 2);

        input.set_cursor_position(1);
        let spans = input.render_cursor_spans(true);
        let texts: Vec<&str> = spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(texts, vec!["a", "b", "c"]);

        assert_eq!(input.render_cursor_spans(false).len(), 1);
    }
}
