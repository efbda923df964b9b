//! Key mapping from terminal events to normalized keys and host actions.

use crate::types::{Key, MetaAction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a terminal key event to a gameplay key.
pub fn key_from_event(key: KeyEvent) -> Option<Key> {
    key_from_code(key.code)
}

/// Map a key code to a gameplay key (arrows, WASD, vim keys, space).
///
/// Character keys go through [`Key::from_name`].
pub fn key_from_code(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        KeyCode::Enter => Some(Key::Attack),
        KeyCode::Char(c) => {
            let mut buf = [0u8; 4];
            Key::from_name(c.encode_utf8(&mut buf))
        }
        _ => None,
    }
}

/// Map a terminal key event to a host action (pause, restart, quit).
pub fn meta_action(key: KeyEvent) -> Option<MetaAction> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(MetaAction::Quit);
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(MetaAction::Quit),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(MetaAction::Pause),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(MetaAction::Restart),
        _ => None,
    }
}
