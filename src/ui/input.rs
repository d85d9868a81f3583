use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    Quit,
    Submit,
    Insert(char),
    Backspace,
    ClearLine,
    HistoryBack,
    HistoryForward,
    ScrollUp,
    ScrollDown,
    Refresh,
}

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key(key: KeyEvent) -> Option<InputAction> {
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => Some(InputAction::Quit),
            (KeyCode::Char('u'), KeyModifiers::CONTROL) => Some(InputAction::ClearLine),
            (KeyCode::Char('r'), KeyModifiers::CONTROL) => Some(InputAction::Refresh),
            (KeyCode::Left, KeyModifiers::ALT) => Some(InputAction::HistoryBack),
            (KeyCode::Right, KeyModifiers::ALT) => Some(InputAction::HistoryForward),
            (KeyCode::Esc, _) => Some(InputAction::ClearLine),
            (KeyCode::Enter, _) => Some(InputAction::Submit),
            (KeyCode::Backspace, _) => Some(InputAction::Backspace),
            (KeyCode::PageUp, _) | (KeyCode::Up, _) => Some(InputAction::ScrollUp),
            (KeyCode::PageDown, _) | (KeyCode::Down, _) => Some(InputAction::ScrollDown),
            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
                Some(InputAction::Insert(c))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn typing_keys_insert() {
        assert_eq!(
            InputHandler::handle_key(key(KeyCode::Char('T'), KeyModifiers::SHIFT)),
            Some(InputAction::Insert('T'))
        );
        assert_eq!(
            InputHandler::handle_key(key(KeyCode::Char(' '), KeyModifiers::NONE)),
            Some(InputAction::Insert(' '))
        );
    }

    #[test]
    fn alt_arrows_move_through_history() {
        assert_eq!(
            InputHandler::handle_key(key(KeyCode::Left, KeyModifiers::ALT)),
            Some(InputAction::HistoryBack)
        );
        assert_eq!(
            InputHandler::handle_key(key(KeyCode::Right, KeyModifiers::ALT)),
            Some(InputAction::HistoryForward)
        );
        assert_eq!(InputHandler::handle_key(key(KeyCode::Left, KeyModifiers::NONE)), None);
    }

    #[test]
    fn control_chords() {
        assert_eq!(
            InputHandler::handle_key(key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(InputAction::Quit)
        );
        assert_eq!(
            InputHandler::handle_key(key(KeyCode::Char('x'), KeyModifiers::CONTROL)),
            None
        );
    }
}
