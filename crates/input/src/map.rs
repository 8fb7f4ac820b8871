//! Key mapping from terminal events to game actions.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        // Pin counts; ten has no single key, use `x` for it.
        KeyCode::Char(c @ '0'..='9') => c
            .to_digit(10)
            .and_then(|n| u8::try_from(n).ok())
            .map(GameAction::Bowl),

        KeyCode::Char('x') | KeyCode::Char('X') => Some(GameAction::Strike),
        KeyCode::Char('/') => Some(GameAction::Spare),
        KeyCode::Char('-') => Some(GameAction::Gutter),

        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Restart),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
