//! Key mapping from terminal events to game actions.
//!
//! | Keys | Action |
//! |------|--------|
//! | ←, `h`, `a` | move left |
//! | →, `l`, `d` | move right |
//! | ↓, `j`, `s` | soft drop |
//! | ↑, `k`, `w` | rotate |
//! | `r` | restart (only honored after game over) |
//!
//! Letters are case-insensitive. Quitting is not a game action; see [`should_quit`].

use crate::types::GameAction;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map a key to a game action, ignoring its press/repeat/release kind.
///
/// Chords with Ctrl or Alt held never map to an action.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }

    match key.code {
        KeyCode::Left => Some(GameAction::MoveLeft),
        KeyCode::Right => Some(GameAction::MoveRight),
        KeyCode::Down => Some(GameAction::SoftDrop),
        KeyCode::Up => Some(GameAction::Rotate),
        KeyCode::Char(c) => action_for_char(c),
        _ => None,
    }
}

fn action_for_char(c: char) -> Option<GameAction> {
    match c.to_ascii_lowercase() {
        'h' | 'a' => Some(GameAction::MoveLeft),
        'l' | 'd' => Some(GameAction::MoveRight),
        'j' | 's' => Some(GameAction::SoftDrop),
        'k' | 'w' => Some(GameAction::Rotate),
        'r' => Some(GameAction::Restart),
        _ => None,
    }
}

/// Map a raw terminal event to an action. Only key presses count, so holding
/// a key (auto-repeat) never moves the piece more than once.
pub fn action_for_event(event: &Event) -> Option<GameAction> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key_event(*key),
        _ => None,
    }
}

/// `q`, `Esc` or Ctrl-C.
pub fn should_quit(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => true,
        KeyCode::Char(c) if c.eq_ignore_ascii_case(&'q') => true,
        KeyCode::Char(c) if c.eq_ignore_ascii_case(&'c') => {
            key.modifiers.contains(KeyModifiers::CONTROL)
        }
        _ => false,
    }
}
