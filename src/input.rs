//! Keyboard input over crossterm events.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::entities::Key;
use crate::error::GameError;
use crate::session::InputSource;

/// WASD and the arrow keys move, space fires.
pub fn key_from_code(code: KeyCode) -> Key {
    match code {
        KeyCode::Char('w') | KeyCode::Up => Key::Up,
        KeyCode::Char('s') | KeyCode::Down => Key::Down,
        KeyCode::Char('a') | KeyCode::Left => Key::Left,
        KeyCode::Char('d') | KeyCode::Right => Key::Right,
        KeyCode::Char(' ') => Key::Fire,
        _ => Key::Other,
    }
}

/// Ctrl-C in raw mode arrives as a key press rather than a signal.
pub fn is_interrupt(code: KeyCode, modifiers: KeyModifiers) -> bool {
    code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL)
}

/// Reads at most one key press per frame from the terminal without blocking.
pub struct TermInput;

impl InputSource for TermInput {
    fn poll_key(&mut self) -> Result<Option<Key>, GameError> {
        // Skip over resize/mouse events and key releases until a press turns
        // up or the queue is empty.
        while event::poll(Duration::ZERO)? {
            if let Event::Key(KeyEvent {
                code,
                kind,
                modifiers,
                ..
            }) = event::read()?
            {
                if kind == KeyEventKind::Release {
                    continue;
                }
                if is_interrupt(code, modifiers) {
                    return Err(GameError::Interrupted);
                }
                return Ok(Some(key_from_code(code)));
            }
        }
        Ok(None)
    }
}
