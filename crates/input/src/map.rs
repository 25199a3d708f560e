//! Key mapping from terminal events to game actions.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        // Movement
        KeyCode::Left
        | KeyCode::Char('h')
        | KeyCode::Char('H')
        | KeyCode::Char('a')
        | KeyCode::Char('A') => Some(GameAction::MoveLeft),
        KeyCode::Right
        | KeyCode::Char('l')
        | KeyCode::Char('L')
        | KeyCode::Char('d')
        | KeyCode::Char('D') => Some(GameAction::MoveRight),
        KeyCode::Down
        | KeyCode::Char('j')
        | KeyCode::Char('J')
        | KeyCode::Char('s')
        | KeyCode::Char('S') => Some(GameAction::SoftDrop),

        // Rotation
        KeyCode::Up
        | KeyCode::Char(' ')
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W') => Some(GameAction::Rotate),

        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Restart),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn action(code: KeyCode) -> Option<GameAction> {
        handle_key_event(KeyEvent::from(code))
    }

    #[test]
    fn test_movement_keys() {
        assert_eq!(action(KeyCode::Left), Some(GameAction::MoveLeft));
        assert_eq!(action(KeyCode::Right), Some(GameAction::MoveRight));
        assert_eq!(action(KeyCode::Down), Some(GameAction::SoftDrop));

        assert_eq!(action(KeyCode::Char('A')), Some(GameAction::MoveLeft));
        assert_eq!(action(KeyCode::Char('h')), Some(GameAction::MoveLeft));
        assert_eq!(action(KeyCode::Char('D')), Some(GameAction::MoveRight));
        assert_eq!(action(KeyCode::Char('l')), Some(GameAction::MoveRight));
        assert_eq!(action(KeyCode::Char('s')), Some(GameAction::SoftDrop));
        assert_eq!(action(KeyCode::Char('J')), Some(GameAction::SoftDrop));
    }

    #[test]
    fn test_rotation_keys() {
        for code in [
            KeyCode::Up,
            KeyCode::Char(' '),
            KeyCode::Char('w'),
            KeyCode::Char('K'),
        ] {
            assert_eq!(action(code), Some(GameAction::Rotate), "{code:?}");
        }
    }

    #[test]
    fn test_restart_and_unmapped_keys() {
        assert_eq!(action(KeyCode::Char('r')), Some(GameAction::Restart));
        assert_eq!(action(KeyCode::Char('x')), None);
        assert_eq!(action(KeyCode::Enter), None);
        // Quit is not a game action.
        assert_eq!(action(KeyCode::Char('q')), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Char('Q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
