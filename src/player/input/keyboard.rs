//! Keyboard input handling for the native player.
//!
//! Keys either press a toolbar button, seek, toggle the help overlay or quit.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::toolbar::ToolbarAction;
use super::{InputResult, PlayerInput};
use crate::player::command::ControlCommand;

/// Step used by the arrow keys, as a fraction of the log.
pub const SEEK_STEP: f64 = 0.05;

/// Handle a keyboard event.
pub fn handle_key_event(key: KeyEvent, input: &mut PlayerInput) -> InputResult {
    if key.kind == KeyEventKind::Release {
        return InputResult::Continue;
    }

    // If help is showing, any key closes it
    if input.show_help {
        input.show_help = false;
        return InputResult::Continue;
    }

    match key.code {
        // === Quit ===
        KeyCode::Char('q') | KeyCode::Esc => InputResult::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => InputResult::Quit,

        KeyCode::Char('?') => {
            input.show_help = true;
            InputResult::Continue
        }

        // === Toolbar buttons ===
        KeyCode::Char(' ') => input.press(ToolbarAction::PlayPause),
        KeyCode::Char('s') | KeyCode::Tab => input.press(ToolbarAction::Skip),
        KeyCode::Char('f') => input.press(ToolbarAction::FastForward),
        KeyCode::Char('x') | KeyCode::Char('+') | KeyCode::Char('=') => {
            input.press(ToolbarAction::Speed)
        }

        // === Seeking ===
        KeyCode::Left => input.seek_by(-SEEK_STEP),
        KeyCode::Right => input.seek_by(SEEK_STEP),
        KeyCode::Home => InputResult::Command(ControlCommand::SetFilePosition(0.0)),
        KeyCode::End => InputResult::Command(ControlCommand::SetFilePosition(1.0)),

        _ => InputResult::Continue,
    }
}
