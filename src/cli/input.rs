//! Keystroke input handling using crossterm
//!
//! Features:
//! - Non-blocking keystroke capture (poll with timeout)
//! - Letter/Enter/Backspace mapping onto game keys
//! - `?` instructions toggle, Esc / Ctrl+C exit

use crate::game::GameKey;
use crossterm::event::{self, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io::Result as IoResult;
use std::time::Duration;

/// What the event loop should do with a keystroke
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Game(GameKey),
    ToggleHelp,
    PlayAgain,
    Exit,
}

/// Handles user input from terminal
pub struct InputHandler {
    /// Timeout for poll operations
    poll_timeout: Duration,
}

impl InputHandler {
    /// Create new input handler with default timeout (50ms for responsive input)
    pub fn new() -> Self {
        InputHandler {
            poll_timeout: Duration::from_millis(50),
        }
    }

    /// Enable raw mode for terminal input
    pub fn enable_raw_mode() -> IoResult<()> {
        crossterm::terminal::enable_raw_mode()
    }

    /// Disable raw mode and restore terminal
    pub fn disable_raw_mode() -> IoResult<()> {
        crossterm::terminal::disable_raw_mode()
    }

    /// Poll for keystroke with timeout (non-blocking)
    /// Returns Some(KeyEvent) on a key press, None on timeout or other events
    pub fn read_key(&self) -> IoResult<Option<KeyEvent>> {
        if event::poll(self.poll_timeout)? {
            match event::read()? {
                event::Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    Ok(Some(key_event))
                }
                _ => Ok(None),
            }
        } else {
            Ok(None)
        }
    }

    /// Check if key event is an exit signal (Ctrl+C or Escape)
    pub fn is_exit(key: &KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => true,
            KeyCode::Esc => true,
            _ => false,
        }
    }

    /// Map a key event onto an action; `game_over` switches Enter/`r` to play again
    pub fn action(key: &KeyEvent, game_over: bool) -> Option<Action> {
        if Self::is_exit(key) {
            return Some(Action::Exit);
        }
        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return None;
        }

        match key.code {
            KeyCode::Char('?') => Some(Action::ToggleHelp),
            KeyCode::Enter if game_over => Some(Action::PlayAgain),
            KeyCode::Char('r') | KeyCode::Char('R') if game_over => Some(Action::PlayAgain),
            KeyCode::Enter => Some(Action::Game(GameKey::Enter)),
            KeyCode::Backspace => Some(Action::Game(GameKey::Backspace)),
            KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                Some(Action::Game(GameKey::Letter(c.to_ascii_uppercase())))
            }
            _ => None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_letters_uppercased() {
        assert_eq!(
            InputHandler::action(&key(KeyCode::Char('q')), false),
            Some(Action::Game(GameKey::Letter('Q')))
        );
        assert_eq!(
            InputHandler::action(&KeyEvent::new(KeyCode::Char('Q'), KeyModifiers::SHIFT), false),
            Some(Action::Game(GameKey::Letter('Q')))
        );
    }

    #[test]
    fn test_non_letters_dropped() {
        assert_eq!(InputHandler::action(&key(KeyCode::Char('7')), false), None);
        assert_eq!(InputHandler::action(&key(KeyCode::Char('ж')), false), None);
        assert_eq!(InputHandler::action(&key(KeyCode::Tab), false), None);
    }

    #[test]
    fn test_exit_keys() {
        assert_eq!(InputHandler::action(&key(KeyCode::Esc), false), Some(Action::Exit));
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(InputHandler::action(&ctrl_c, true), Some(Action::Exit));
    }

    #[test]
    fn test_enter_depends_on_game_over() {
        assert_eq!(
            InputHandler::action(&key(KeyCode::Enter), false),
            Some(Action::Game(GameKey::Enter))
        );
        assert_eq!(
            InputHandler::action(&key(KeyCode::Enter), true),
            Some(Action::PlayAgain)
        );
        assert_eq!(
            InputHandler::action(&key(KeyCode::Char('r')), true),
            Some(Action::PlayAgain)
        );
        assert_eq!(
            InputHandler::action(&key(KeyCode::Char('r')), false),
            Some(Action::Game(GameKey::Letter('R')))
        );
    }

    #[test]
    fn test_help_toggle() {
        assert_eq!(
            InputHandler::action(&key(KeyCode::Char('?')), false),
            Some(Action::ToggleHelp)
        );
    }
}
