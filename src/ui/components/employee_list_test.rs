#[cfg(test)]
mod tests {
    use super::super::Component;
    use super::super::employee_list::{EmployeeList, summary_text};
    use crate::ui::events::Message;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: crossterm::event::KeyEventKind::Press,
            state: crossterm::event::KeyEventState::empty(),
        }
    }

    #[test]
    fn summary_is_singular_for_one_record() {
        assert_eq!(summary_text(1, ""), "Found 1 employee");
        assert!(summary_text(1, "jane").contains("1 employee"));
    }

    #[test]
    fn summary_is_plural_and_echoes_the_term() {
        assert_eq!(summary_text(3, "joh"), "Found 3 employees matching \"joh\"");
        assert_eq!(summary_text(0, ""), "Found 0 employees");
    }

    #[test]
    fn navigation_keys_map_to_selection_messages() {
        let mut list = EmployeeList::new();
        assert!(matches!(list.handle_key(key(KeyCode::Up)), Some(Message::SelectUp)));
        assert!(matches!(list.handle_key(key(KeyCode::Down)), Some(Message::SelectDown)));
        assert!(matches!(list.handle_key(key(KeyCode::PageUp)), Some(Message::SelectPageUp)));
        assert!(matches!(
            list.handle_key(key(KeyCode::PageDown)),
            Some(Message::SelectPageDown)
        ));
        assert!(matches!(list.handle_key(key(KeyCode::Home)), Some(Message::SelectFirst)));
        assert!(matches!(list.handle_key(key(KeyCode::End)), Some(Message::SelectLast)));
        assert!(matches!(list.handle_key(key(KeyCode::Enter)), Some(Message::EnterDetail)));
        assert!(list.handle_key(key(KeyCode::Char('x'))).is_none());
    }
}
