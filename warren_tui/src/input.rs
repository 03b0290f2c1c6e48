//! Raw key events to the core command set.

use crossterm::event::KeyCode;
use warren::session::Command;

/// Map one key press. Unbound keys are ignored.
pub fn map_key(code: KeyCode) -> Option<Command> {
    match code {
        KeyCode::Up | KeyCode::Char('w') => Some(Command::MoveNorth),
        KeyCode::Right | KeyCode::Char('d') => Some(Command::MoveEast),
        KeyCode::Down | KeyCode::Char('s') => Some(Command::MoveSouth),
        KeyCode::Left | KeyCode::Char('a') => Some(Command::MoveWest),
        KeyCode::Char('r') => Some(Command::Regenerate),
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}
